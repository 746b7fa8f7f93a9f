//! Atomic file writes for export files
//!
//! Content goes to a sibling `.tmp` file first, is synced to disk, then
//! renamed over the destination, so readers only ever see the previous
//! export or the complete new one.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

/// Path of the temp file used while writing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically write content using a writer function
///
/// # Example
///
/// ```ignore
/// atomic_write_with("hp.jsonl", |file| {
///     writeln!(file, "line1")?;
///     Ok(())
/// })?;
/// ```
pub fn atomic_write_with<P, F>(path: P, write_fn: F) -> io::Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&temp_path)?;
    if let Err(e) = write_fn(&mut file) {
        drop(file);
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
