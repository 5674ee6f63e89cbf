//! Bounded-capacity food containers.
//!
//! Both variants share the [`Storage`] contract. Failures are never errors:
//! a full container refuses `add` with `false`, an empty one answers `None`,
//! and a search miss is `None`. A failed operation leaves the container untouched.

mod factory;
mod queue;
mod stack;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

pub use factory::{create_storage, create_storage_for_mode};
pub use queue::QueueStorage;
pub use stack::StackStorage;

/// Which exit the bin uses for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// Front door only: last in, first out.
    Stack,
    /// Add at the front door, remove at the opposite door: first in, first out.
    Queue,
}

impl StorageMode {
    pub fn from_opposite_door(use_opposite_door: bool) -> Self {
        if use_opposite_door {
            StorageMode::Queue
        } else {
            StorageMode::Stack
        }
    }

    pub fn uses_opposite_door(self) -> bool {
        self == StorageMode::Queue
    }

    /// Short removal-order label.
    pub fn label(self) -> &'static str {
        match self {
            StorageMode::Stack => "LIFO",
            StorageMode::Queue => "FIFO",
        }
    }

    /// Where the next item comes out.
    pub fn removal_point(self) -> &'static str {
        match self {
            StorageMode::Stack => "top",
            StorageMode::Queue => "front",
        }
    }

    /// The end furthest from the removal point.
    pub fn far_end(self) -> &'static str {
        match self {
            StorageMode::Stack => "bottom",
            StorageMode::Queue => "rear",
        }
    }

    pub fn door_description(self) -> &'static str {
        match self {
            StorageMode::Stack => "Use only front door (LIFO - Stack)",
            StorageMode::Queue => {
                "Use front door to add and opposite door to remove (FIFO - Queue)"
            }
        }
    }
}

/// Operations shared by every storage variant.
pub trait Storage {
    /// Insert an item. Returns `false` without side effects when full or when
    /// the item is not valid.
    fn add(&mut self, item: FoodItem) -> bool;

    /// Take out the next item per the variant's removal rule.
    fn remove(&mut self) -> Option<FoodItem>;

    /// The item `remove` would return next.
    fn peek(&self) -> Option<&FoodItem>;

    /// Distance from the removal point to the first item whose name matches
    /// case-insensitively. `Some(0)` means next to be removed.
    fn search(&self, name: &str) -> Option<usize>;

    /// Stored items in removal order, each paired with its physical slot index.
    fn entries(&self) -> Vec<(usize, &FoodItem)>;

    fn size(&self) -> usize;

    fn capacity(&self) -> usize;

    fn mode(&self) -> StorageMode;

    fn is_full(&self) -> bool {
        self.size() == self.capacity()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Name of the item `peek` would return.
    fn top_name(&self) -> Option<&str> {
        self.peek().map(FoodItem::name)
    }

    /// Human-readable listing in removal order.
    fn display(&self) -> String {
        let entries = self.entries();
        if entries.is_empty() {
            return "Storage is empty.".to_string();
        }

        let mode = self.mode();
        let mut out = format!(
            "Storage ({}) {} -> {}:",
            mode.label(),
            mode.removal_point(),
            mode.far_end()
        );
        for (index, item) in entries {
            out.push_str(&format!("\n  [{}] {}", index, item));
        }
        out
    }
}
