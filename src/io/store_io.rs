use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::io::recovery;
use crate::model::list::TaskList;

/// Error type for store I/O operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Default store directory: `<platform data dir>/keep`.
pub fn default_store_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("keep")
}

/// Path of the persisted task file inside the store directory.
pub fn tasks_path(store_dir: &Path) -> PathBuf {
    store_dir.join("tasks")
}

/// Load the task list from `<store_dir>/tasks`.
///
/// A missing file is the normal first-run state and yields an empty list,
/// so the placeholder gets injected. Every non-empty line becomes one task,
/// in file order.
pub fn load_list(store_dir: &Path) -> Result<TaskList, StoreError> {
    let path = tasks_path(store_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(StoreError::Read { path, source: e }),
    };
    let tasks: Vec<String> = text
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(TaskList::from_tasks(tasks))
}

/// Save the task list to `<store_dir>/tasks`, one task per line, fully
/// overwriting prior content. The placeholder row is stripped first; it is
/// never persisted. On write failure the payload is captured to the
/// recovery log; the in-memory list is not rolled back and there is no
/// retry.
pub fn save_list(store_dir: &Path, list: &mut TaskList) -> Result<(), StoreError> {
    list.remove_placeholder();

    let mut content = String::new();
    for task in &list.entries {
        content.push_str(task);
        content.push('\n');
    }

    let path = tasks_path(store_dir);
    fs::create_dir_all(store_dir).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    if let Err(e) = recovery::atomic_write(&path, content.as_bytes()) {
        recovery::log_failed_write(store_dir, &content, &e);
        return Err(StoreError::Write { path, source: e });
    }
    Ok(())
}
