use crate::utils::error::{CollectionsError, Result};
use std::collections::VecDeque;

/// First-in-first-out queue whose reads fail on an empty queue instead of
/// returning a sentinel.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    pub fn peek(&self) -> Result<&T> {
        self.items.front().ok_or(CollectionsError::EmptyContainer { container: "Queue" })
    }

    pub fn dequeue(&mut self) -> Result<T> {
        self.items
            .pop_front()
            .ok_or(CollectionsError::EmptyContainer { container: "Queue" })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
