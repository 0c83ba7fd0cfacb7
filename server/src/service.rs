//! Request-level orchestration over [`TaskStore`].
//!
//! Business rules live here: titles are trimmed and bounded, and the store's
//! boolean/optional results are turned into [`TaskError::NotFound`].

use std::sync::Arc;

use taskdesk_shared::Task;

use crate::error::{TaskError, TaskResult};
use crate::store::TaskStore;

/// Upper bound on a trimmed title, counted in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Debug, Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    pub fn create_task(&self, raw_title: &str) -> TaskResult<Task> {
        let title = raw_title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(TaskError::TitleTooLong);
        }
        Ok(self.store.create(title))
    }

    pub fn get_task(&self, id: u64) -> TaskResult<Task> {
        self.store.get_by_id(id).ok_or(TaskError::NotFound)
    }

    /// All tasks, or only those whose `done` flag matches `filter`.
    pub fn list_tasks(&self, filter: Option<bool>) -> Vec<Task> {
        match filter {
            Some(done) => self.store.get_by_status(done),
            None => self.store.get_all(),
        }
    }

    pub fn update_task_status(&self, id: u64, done: bool) -> TaskResult<()> {
        if self.store.update(id, done) {
            Ok(())
        } else {
            Err(TaskError::NotFound)
        }
    }

    pub fn delete_task(&self, id: u64) -> TaskResult<()> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(TaskError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TaskService {
        TaskService::new(Arc::new(TaskStore::new()))
    }

    #[test]
    fn whitespace_only_title_is_empty() {
        assert_eq!(service().create_task("  ").unwrap_err(), TaskError::EmptyTitle);
        assert_eq!(service().create_task("\t\n").unwrap_err(), TaskError::EmptyTitle);
    }

    #[test]
    fn title_is_trimmed_before_storing() {
        let svc = service();
        let task = svc.create_task(" Buy milk ").unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(svc.get_task(task.id).unwrap().title, "Buy milk");
    }

    #[test]
    fn title_length_limit_applies_after_trimming() {
        let svc = service();
        let too_long = "a".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(svc.create_task(&too_long).unwrap_err(), TaskError::TitleTooLong);

        let padded = format!("   {}   ", "a".repeat(MAX_TITLE_LENGTH));
        assert_eq!(svc.create_task(&padded).unwrap().title.len(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn title_limit_counts_characters_not_bytes() {
        let title = "ü".repeat(MAX_TITLE_LENGTH);
        assert!(service().create_task(&title).is_ok());
    }

    #[test]
    fn missing_ids_map_to_not_found() {
        let svc = service();
        assert_eq!(svc.get_task(1).unwrap_err(), TaskError::NotFound);
        assert_eq!(svc.update_task_status(1, true).unwrap_err(), TaskError::NotFound);
        assert_eq!(svc.delete_task(1).unwrap_err(), TaskError::NotFound);
    }

    #[test]
    fn list_filter_selects_by_status() {
        let svc = service();
        let a = svc.create_task("a").unwrap();
        svc.create_task("b").unwrap();
        svc.update_task_status(a.id, true).unwrap();

        assert_eq!(svc.list_tasks(None).len(), 2);
        let done = svc.list_tasks(Some(true));
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, a.id);
        assert_eq!(svc.list_tasks(Some(false)).len(), 1);
    }

    #[test]
    fn services_share_the_injected_store() {
        let store = Arc::new(TaskStore::new());
        let first = TaskService::new(Arc::clone(&store));
        let second = TaskService::new(store);

        let task = first.create_task("shared").unwrap();
        second.delete_task(task.id).unwrap();
        assert_eq!(first.get_task(task.id).unwrap_err(), TaskError::NotFound);
    }
}
