// File: ./src/store.rs
//! Ordered, index-addressable task collection owned by the session.

use crate::error::TallyError;
use crate::model::Task;

#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task. Always succeeds; insertion order is preserved.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn get(&self, index: usize) -> Result<&Task, TallyError> {
        self.tasks.get(index).ok_or(TallyError::Range {
            size: self.tasks.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Task, TallyError> {
        let size = self.tasks.len();
        self.tasks.get_mut(index).ok_or(TallyError::Range { size })
    }

    /// Removes and returns the task at `index`; later tasks shift down by
    /// one position.
    pub fn remove(&mut self, index: usize) -> Result<Task, TallyError> {
        if index >= self.tasks.len() {
            return Err(TallyError::Range {
                size: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    /// Case-insensitive substring search over descriptions, in original
    /// order. A blank keyword yields an empty result set, never an error.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.tasks
            .iter()
            .filter(|t| t.description().to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for d in descriptions {
            store.add(Task::todo(d));
        }
        store
    }

    #[test]
    fn add_preserves_insertion_order() {
        let store = store_with(&["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().description(), "a");
        assert_eq!(store.get(2).unwrap().description(), "c");
    }

    #[test]
    fn remove_shifts_later_tasks_down() {
        let mut store = store_with(&["a", "b", "c"]);
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.description(), "b");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().description(), "c");
    }

    #[test]
    fn out_of_range_access_is_a_range_error() {
        let mut store = store_with(&["a"]);
        assert!(matches!(store.get(1), Err(TallyError::Range { size: 1 })));
        assert!(matches!(store.remove(5), Err(TallyError::Range { size: 1 })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn find_is_case_insensitive_and_ordered() {
        let store = store_with(&["Read Book", "walk dog", "buy bookmarks"]);
        let hits = store.find("BOOK");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].description(), "Read Book");
        assert_eq!(hits[1].description(), "buy bookmarks");
    }

    #[test]
    fn blank_keyword_finds_nothing() {
        let store = store_with(&["a", "b"]);
        assert!(store.find("").is_empty());
        assert!(store.find("   ").is_empty());
    }
}
