use serde::Serialize;

use crate::model::list::TaskList;

/// JSON shape for `kp list --json`
#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<String>,
}

pub fn list_to_json(list: &TaskList) -> TaskListJson {
    TaskListJson {
        tasks: list.tasks().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_excluded_from_json() {
        let list = TaskList::from_tasks(Vec::new());
        let json = serde_json::to_string(&list_to_json(&list)).unwrap();
        assert_eq!(json, r#"{"tasks":[]}"#);
    }

    #[test]
    fn tasks_serialize_in_order() {
        let list = TaskList::from_tasks(vec!["a".into(), "b".into()]);
        let json = serde_json::to_string(&list_to_json(&list)).unwrap();
        assert_eq!(json, r#"{"tasks":["a","b"]}"#);
    }
}
