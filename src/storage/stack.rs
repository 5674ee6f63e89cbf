use crate::models::FoodItem;

use super::{Storage, StorageMode};

/// Array-backed LIFO storage.
///
/// `len` plays the role of the top pointer: the top item lives at `len - 1`
/// and `len == 0` is the empty state.
#[derive(Debug)]
pub struct StackStorage {
    slots: Box<[Option<FoodItem>]>,
    len: usize,
}

impl StackStorage {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            len: 0,
        }
    }

    fn top_index(&self) -> Option<usize> {
        self.len.checked_sub(1)
    }
}

impl Storage for StackStorage {
    fn add(&mut self, item: FoodItem) -> bool {
        if self.is_full() || !item.is_valid() {
            return false;
        }
        self.slots[self.len] = Some(item);
        self.len += 1;
        true
    }

    fn remove(&mut self) -> Option<FoodItem> {
        let top = self.top_index()?;
        let removed = self.slots[top].take();
        self.len = top;
        removed
    }

    fn peek(&self) -> Option<&FoodItem> {
        self.top_index().and_then(|top| self.slots[top].as_ref())
    }

    fn search(&self, name: &str) -> Option<usize> {
        let top = self.top_index()?;
        (0..=top)
            .rev()
            .find(|&i| self.slots[i].as_ref().is_some_and(|item| item.matches_name(name)))
            .map(|i| top - i)
    }

    fn entries(&self) -> Vec<(usize, &FoodItem)> {
        (0..self.len)
            .rev()
            .filter_map(|i| self.slots[i].as_ref().map(|item| (i, item)))
            .collect()
    }

    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Stack
    }
}
