use crate::models::FoodItem;

use super::{Storage, StorageMode};

/// Array-backed circular FIFO storage.
///
/// `front` is the slot of the next item out, `rear` the slot of the last item
/// in (`None` before anything has been placed). All indexing wraps modulo the
/// capacity.
#[derive(Debug)]
pub struct QueueStorage {
    slots: Box<[Option<FoodItem>]>,
    front: usize,
    rear: Option<usize>,
    count: usize,
}

impl QueueStorage {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            rear: None,
            count: 0,
        }
    }

    /// Physical slot of the item `offset` positions behind the front.
    fn slot_at(&self, offset: usize) -> usize {
        (self.front + offset) % self.slots.len()
    }
}

impl Storage for QueueStorage {
    fn add(&mut self, item: FoodItem) -> bool {
        if self.is_full() || !item.is_valid() {
            return false;
        }
        let rear = self.rear.map_or(0, |r| (r + 1) % self.slots.len());
        self.slots[rear] = Some(item);
        self.rear = Some(rear);
        self.count += 1;
        true
    }

    fn remove(&mut self) -> Option<FoodItem> {
        if self.is_empty() {
            return None;
        }
        let removed = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;

        // Normalize cursors once drained; ordering never depends on this.
        if self.count == 0 {
            self.front = 0;
            self.rear = None;
        }
        removed
    }

    fn peek(&self) -> Option<&FoodItem> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    fn search(&self, name: &str) -> Option<usize> {
        (0..self.count).find(|&offset| {
            self.slots[self.slot_at(offset)]
                .as_ref()
                .is_some_and(|item| item.matches_name(name))
        })
    }

    fn entries(&self) -> Vec<(usize, &FoodItem)> {
        (0..self.count)
            .filter_map(|offset| {
                let index = self.slot_at(offset);
                self.slots[index].as_ref().map(|item| (index, item))
            })
            .collect()
    }

    fn size(&self) -> usize {
        self.count
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn mode(&self) -> StorageMode {
        StorageMode::Queue
    }
}
