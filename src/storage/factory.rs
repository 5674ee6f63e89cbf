use super::{QueueStorage, StackStorage, Storage, StorageMode};

/// Pick a storage variant from the door setup.
///
/// Using the opposite door for removal makes the bin a queue; otherwise it is a stack.
pub fn create_storage(use_opposite_door: bool, capacity: usize) -> Box<dyn Storage> {
    create_storage_for_mode(StorageMode::from_opposite_door(use_opposite_door), capacity)
}

pub fn create_storage_for_mode(mode: StorageMode, capacity: usize) -> Box<dyn Storage> {
    match mode {
        StorageMode::Queue => Box::new(QueueStorage::new(capacity)),
        StorageMode::Stack => Box::new(StackStorage::new(capacity)),
    }
}
