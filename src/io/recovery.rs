use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Return the path to the recovery log file.
pub fn recovery_log_path(store_dir: &Path) -> PathBuf {
    store_dir.join(".recovery.log")
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Capture a task payload that failed to save normally, so the tasks are
/// not silently lost. Errors here are swallowed and printed to stderr.
pub fn log_failed_write(store_dir: &Path, body: &str, err: &io::Error) {
    if let Err(e) = log_failed_write_inner(store_dir, body, err) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_failed_write_inner(store_dir: &Path, body: &str, err: &io::Error) -> io::Result<()> {
    let path = recovery_log_path(store_dir);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let mut entry = String::new();
    entry.push_str(&format!(
        "## {} — write: task save failed\n\n",
        chrono::Utc::now()
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    ));
    entry.push_str(&format!("Error: {}\n\n", err));
    entry.push_str("```text\n");
    entry.push_str(body);
    if !body.ends_with('\n') {
        entry.push('\n');
    }
    entry.push_str("```\n\n---\n");

    file.write_all(entry.as_bytes())
}
