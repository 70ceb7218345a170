use crate::model::list::TaskList;

/// Error type for task mutations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task is empty")]
    EmptyTask,
}

/// Flatten user input to a single line: newlines become spaces, carriage
/// returns are dropped. The persisted format is one task per line, so a
/// task must never contain a line terminator.
fn normalize(text: &str) -> String {
    text.replace('\n', " ").replace('\r', "")
}

/// Append a task to the list. Input that is empty after normalization
/// (whitespace-only counts as empty) is rejected and the list is left
/// untouched.
pub fn add_task(list: &mut TaskList, text: &str) -> Result<(), TaskError> {
    let task = normalize(text);
    if task.trim().is_empty() {
        return Err(TaskError::EmptyTask);
    }
    list.entries.push(task);
    // Transitioning out of the empty state drops the placeholder row.
    list.remove_placeholder();
    Ok(())
}

/// Remove the first task equal to `text`. Returns false (and changes
/// nothing) when no task matches. The placeholder row is not a task and is
/// never removable here; if the list empties, the placeholder comes back.
pub fn remove_task(list: &mut TaskList, text: &str) -> bool {
    if list.has_placeholder {
        return false;
    }
    match list.entries.iter().position(|t| t == text) {
        Some(idx) => {
            list.entries.remove(idx);
            list.add_placeholder();
            true
        }
        None => false,
    }
}

/// Drop every task and show the placeholder again.
pub fn clear_all(list: &mut TaskList) {
    list.entries.clear();
    list.has_placeholder = false;
    list.add_placeholder();
}
