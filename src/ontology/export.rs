//! JSON and JSONL exports of the ontology
//!
//! - JSON: `{id: {name, definition, synonyms}}` for every term, in store order
//! - JSONL: one `{"prompt": name, "completion": id}` per term, root skipped

use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Serialize, Serializer};
use tracing::info;

use crate::error::Result;
use crate::types::Term;
use crate::utils::atomic::atomic_write_with;

use super::Ontology;

#[derive(Serialize)]
struct JsonEntry<'a> {
    name: &'a str,
    definition: &'a str,
    synonyms: Vec<&'a str>,
}

struct TermMap<'a>(&'a [Term]);

impl Serialize for TermMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|term| {
            let entry = JsonEntry {
                name: &term.name,
                definition: &term.definition,
                synonyms: term.synonym_descriptions().collect(),
            };
            (&term.id, entry)
        }))
    }
}

#[derive(Serialize)]
struct JsonlRecord<'a> {
    prompt: &'a str,
    completion: &'a str,
}

/// Write the JSON dictionary export, returning the number of terms written
pub fn write_json<W: Write>(ontology: &Ontology, writer: W) -> io::Result<usize> {
    serde_json::to_writer_pretty(writer, &TermMap(ontology.terms_slice()))?;
    Ok(ontology.len())
}

/// Write the JSONL prompt/completion export, returning the number of lines
///
/// The first term in store order is the ontology root and is left out.
pub fn write_jsonl<W: Write>(ontology: &Ontology, mut writer: W) -> io::Result<usize> {
    let mut written = 0;

    for term in ontology.terms().skip(1) {
        if written > 0 {
            writer.write_all(b"\n")?;
        }
        let record = JsonlRecord {
            prompt: &term.name,
            completion: &term.id,
        };
        serde_json::to_writer(&mut writer, &record)?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}

/// Atomically export the JSON dictionary to `path`
pub fn export_json<P: AsRef<Path>>(ontology: &Ontology, path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut written = 0;

    atomic_write_with(path, |file| {
        let mut writer = BufWriter::new(file);
        written = write_json(ontology, &mut writer)?;
        writer.flush()
    })?;

    info!(path = %path.display(), terms = written, "Exported ontology JSON");
    Ok(written)
}

/// Atomically export the JSONL records to `path`
pub fn export_jsonl<P: AsRef<Path>>(ontology: &Ontology, path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut written = 0;

    atomic_write_with(path, |file| {
        written = write_jsonl(ontology, BufWriter::new(file))?;
        Ok(())
    })?;

    info!(path = %path.display(), records = written, "Exported ontology JSONL");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const OBO: &str = r#"[Term]
id: HP:0000001
name: All

[Term]
id: HP:0008915
name: Obesity
def: "Excess body fat." []
synonym: "truncal obesity" EXACT []
is_a: HP:0000001

[Term]
id: HP:0000002
name: Abnormality of "body" height
is_a: HP:0000001
"#;

    fn ontology() -> Ontology {
        Ontology::from_obo_str(OBO).unwrap()
    }

    #[test]
    fn test_json_export_shape_and_order() {
        let mut buf = Vec::new();
        let count = write_json(&ontology(), &mut buf).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(buf).unwrap();
        let first = text.find("HP:0000001").unwrap();
        let second = text.find("HP:0008915").unwrap();
        let third = text.find("HP:0000002").unwrap();
        assert!(first < second && second < third);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["HP:0008915"]["name"], "Obesity");
        assert_eq!(value["HP:0008915"]["definition"], "Excess body fat.");
        assert_eq!(
            value["HP:0008915"]["synonyms"],
            serde_json::json!(["truncal obesity"])
        );
        assert_eq!(value["HP:0000001"]["synonyms"], serde_json::json!([]));
    }

    #[test]
    fn test_jsonl_skips_root_and_escapes() {
        let mut buf = Vec::new();
        let count = write_jsonl(&ontology(), &mut buf).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(buf).unwrap();
        assert!(!text.ends_with('\n'));

        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["prompt"], "Obesity");
        assert_eq!(lines[0]["completion"], "HP:0008915");
        assert_eq!(lines[1]["prompt"], "Abnormality of \"body\" height");
    }

    #[test]
    fn test_export_to_files() {
        let temp_dir = TempDir::new().unwrap();
        let json_path = temp_dir.path().join("hp.json");
        let jsonl_path = temp_dir.path().join("hp.jsonl");
        let ontology = ontology();

        assert_eq!(export_json(&ontology, &json_path).unwrap(), 3);
        assert_eq!(export_jsonl(&ontology, &jsonl_path).unwrap(), 2);

        let json = fs::read_to_string(&json_path).unwrap();
        assert!(json.starts_with("{\n  \"HP:0000001\""));
        assert_eq!(fs::read_to_string(&jsonl_path).unwrap().lines().count(), 2);
    }
}
