pub mod config_service;
pub mod json_file_store;
pub mod memory_store;
pub mod paths;

pub use crate::config_service::{ConfigService, HostConfig};
pub use crate::json_file_store::JsonFileStore;
pub use crate::memory_store::InMemoryStore;
pub use crate::paths::ChatsharePaths;
