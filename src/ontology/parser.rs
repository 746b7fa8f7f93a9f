//! OBO flat-file parser
//!
//! Handles the subset of OBO 1.2/1.4 needed to build the term hierarchy:
//! the header frame, `[Term]` stanzas and their core tags. Other stanza
//! types (`[Typedef]`, `[Instance]`) are skipped wholesale.

use crate::error::{OntologyError, Result};
use crate::types::{OntologyHeader, Synonym, SynonymScope, Term};

/// Header and terms in file order, before identifiers are resolved
#[derive(Debug, Default)]
pub(crate) struct ParsedOntology {
    pub header: OntologyHeader,
    pub terms: Vec<Term>,
}

enum Frame {
    Header,
    Term { start_line: usize, term: Term },
    Skipped,
}

/// Parse OBO content into header metadata and terms
pub(crate) fn parse_obo(content: &str) -> Result<ParsedOntology> {
    let mut parsed = ParsedOntology::default();
    let mut frame = Frame::Header;

    for (idx, raw_line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('!') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            finish_frame(frame, &mut parsed)?;
            frame = match &line[1..line.len() - 1] {
                "Term" => Frame::Term {
                    start_line: line_no,
                    term: Term::default(),
                },
                _ => Frame::Skipped,
            };
            continue;
        }

        let (tag, value) = line
            .split_once(':')
            .ok_or_else(|| OntologyError::parse(line_no, "expected 'tag: value'"))?;
        let tag = tag.trim();
        let value = value.trim_start();

        match &mut frame {
            Frame::Header => apply_header_tag(&mut parsed.header, tag, value),
            Frame::Term { term, .. } => apply_term_tag(term, tag, value, line_no)?,
            Frame::Skipped => {}
        }
    }

    finish_frame(frame, &mut parsed)?;
    Ok(parsed)
}

fn finish_frame(frame: Frame, parsed: &mut ParsedOntology) -> Result<()> {
    if let Frame::Term { start_line, term } = frame {
        if term.id.is_empty() {
            return Err(OntologyError::parse(start_line, "[Term] stanza without id"));
        }
        parsed.terms.push(term);
    }
    Ok(())
}

fn apply_header_tag(header: &mut OntologyHeader, tag: &str, value: &str) {
    let value = Some(unquoted_value(value));
    match tag {
        "format-version" => header.format_version = value,
        "data-version" => header.data_version = value,
        "ontology" => header.ontology = value,
        "default-namespace" => header.default_namespace = value,
        _ => {}
    }
}

fn apply_term_tag(term: &mut Term, tag: &str, value: &str, line_no: usize) -> Result<()> {
    match tag {
        "id" => {
            let id = first_token(&unquoted_value(value));
            if id.is_empty() {
                return Err(OntologyError::parse(line_no, "empty term id"));
            }
            term.id = id;
        }
        "name" => term.name = unquoted_value(value),
        "def" => {
            let (text, _) = quoted_value(value, line_no)?;
            term.definition = text;
        }
        "synonym" => {
            let (text, rest) = quoted_value(value, line_no)?;
            let scope = rest
                .split_whitespace()
                .next()
                .and_then(SynonymScope::from_keyword)
                .unwrap_or_default();
            term.synonyms.push(Synonym::with_scope(text, scope));
        }
        "is_a" => push_reference(&mut term.parents, value),
        "is_obsolete" => {
            term.obsolete = match unquoted_value(value).as_str() {
                "true" => true,
                "false" => false,
                other => {
                    return Err(OntologyError::parse(
                        line_no,
                        format!("invalid is_obsolete value '{}'", other),
                    ))
                }
            };
        }
        "alt_id" => push_reference(&mut term.alt_ids, value),
        "xref" => push_reference(&mut term.xrefs, value),
        "replaced_by" => push_reference(&mut term.replaced_by, value),
        "consider" => push_reference(&mut term.consider, value),
        "comment" => term.comment = Some(unquoted_value(value)),
        _ => {}
    }
    Ok(())
}

fn push_reference(target: &mut Vec<String>, value: &str) {
    let reference = first_token(&unquoted_value(value));
    if !reference.is_empty() {
        target.push(reference);
    }
}

fn first_token(value: &str) -> String {
    value.split_whitespace().next().unwrap_or_default().to_string()
}

/// Strip a trailing `! comment` and `{qualifiers}` block, then unescape
fn unquoted_value(value: &str) -> String {
    let mut end = value.len();
    let mut escaped = false;
    for (pos, c) in value.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '!' {
            end = pos;
            break;
        }
    }

    let mut body = value[..end].trim_end();
    if body.ends_with('}') {
        if let Some(open) = body.rfind('{') {
            body = body[..open].trim_end();
        }
    }

    unescape(body)
}

/// Read a leading quoted string, returning its text and the remainder
fn quoted_value(value: &str, line_no: usize) -> Result<(String, &str)> {
    let body = value
        .strip_prefix('"')
        .ok_or_else(|| OntologyError::parse(line_no, "expected quoted string"))?;

    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => {
                if let Some((_, next)) = chars.next() {
                    text.push(escaped_char(next));
                }
            }
            '"' => return Ok((text, body[pos + 1..].trim_start())),
            _ => text.push(c),
        }
    }

    Err(OntologyError::parse(line_no, "unterminated quoted string"))
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(escaped_char(next));
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn escaped_char(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'W' => ' ',
        other => other,
    }
}
