use crate::models::FoodItem;
use crate::storage::{Storage, StorageMode};

pub fn format_added(item: &FoodItem) -> String {
    format!("Added: {}", item)
}

pub fn format_full(capacity: usize) -> String {
    format!("Cannot add: storage is full (capacity = {})", capacity)
}

pub fn format_removed(item: Option<&FoodItem>) -> String {
    match item {
        Some(item) => format!("Removed: {}", item),
        None => "Storage is empty. Nothing to remove.".to_string(),
    }
}

pub fn format_peek(item: Option<&FoodItem>) -> String {
    match item {
        Some(item) => format!("Top/Front item: {}", item),
        None => "Storage is empty.".to_string(),
    }
}

/// Describe a search distance relative to the removal point.
pub fn format_search_result(mode: StorageMode, distance: Option<usize>) -> String {
    let Some(distance) = distance else {
        return "Item not found.".to_string();
    };

    let point = mode.removal_point();
    let location = if distance == 0 {
        point.to_string()
    } else {
        format!("{} from {}", distance, point)
    };
    format!("Found: distance = {} ({})", distance, location)
}

/// Size, capacity, next-out name and fill flags.
pub fn format_info(storage: &dyn Storage) -> String {
    format!(
        "Size: {} / {}\nTop/Front name: {}\nIs full? {} | Is empty? {}",
        storage.size(),
        storage.capacity(),
        storage.top_name().unwrap_or("(none)"),
        storage.is_full(),
        storage.is_empty()
    )
}
