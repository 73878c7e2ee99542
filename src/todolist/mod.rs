use serde::Serialize;

use crate::error::{Result, ZenError};
use crate::task::Task;

/// Ordered, 0-based task collection. Indices outside `[0, len)` are rejected.
#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    items: Vec<Task>,
}

impl TaskList {
    pub fn from_tasks(items: Vec<Task>) -> Self {
        Self { items }
    }

    pub fn add(&mut self, task: Task) -> &Task {
        self.items.push(task);
        &self.items[self.items.len() - 1]
    }

    pub fn delete(&mut self, idx: usize) -> Result<Task> {
        self.check(idx)?;
        Ok(self.items.remove(idx))
    }

    pub fn mark(&mut self, idx: usize) -> Result<&Task> {
        let task = self.get_mut(idx)?;
        task.mark_done();
        Ok(&*task)
    }

    pub fn unmark(&mut self, idx: usize) -> Result<&Task> {
        let task = self.get_mut(idx)?;
        task.mark_pending();
        Ok(&*task)
    }

    pub fn get(&self, idx: usize) -> Result<&Task> {
        self.check(idx)?;
        Ok(&self.items[idx])
    }

    /// Case-insensitive substring match on descriptions, in list order.
    pub fn find_containing(&self, keyword: &str) -> Vec<Task> {
        let keyword = keyword.to_lowercase();
        self.items
            .iter()
            .filter(|t| t.description().to_lowercase().contains(&keyword))
            .cloned()
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.items.iter()
    }

    pub fn to_vec(&self) -> Vec<Task> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|t| t.is_done()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.len() - self.done_count()
    }

    fn get_mut(&mut self, idx: usize) -> Result<&mut Task> {
        self.check(idx)?;
        Ok(&mut self.items[idx])
    }

    fn check(&self, idx: usize) -> Result<()> {
        if idx < self.items.len() {
            Ok(())
        } else {
            Err(ZenError::OutOfRange {
                index: idx,
                size: self.items.len(),
            })
        }
    }
}
