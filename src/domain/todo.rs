//! Session-lifetime to-do list

use serde::{Deserialize, Serialize};

/// Ordered list of tasks. Duplicates are allowed and insertion order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    tasks: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task and return the confirmation text
    pub fn add(&mut self, task: impl Into<String>) -> String {
        let task = task.into();
        let message = format!("Added {} to your to-do list.", task);
        self.tasks.push(task);
        message
    }

    /// Render the list for speaking
    pub fn show(&self) -> String {
        if self.tasks.is_empty() {
            "Your to-do list is empty.".to_string()
        } else {
            format!("Your to-do list contains: {}", self.tasks.join(", "))
        }
    }

    /// Drop every task and return the confirmation text
    pub fn clear(&mut self) -> String {
        self.tasks = Vec::new();
        "Your to-do list has been cleared.".to_string()
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
