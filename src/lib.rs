pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod storage;

pub use error::{Result, StorageAppError};
pub use models::FoodItem;
pub use storage::{create_storage, QueueStorage, StackStorage, Storage, StorageMode};
