pub mod config_service;
pub mod file_storage;
pub mod logging;
pub mod paths;

pub use config_service::ConfigService;
pub use file_storage::{FileKeyValueStorage, MemoryStorage};
pub use logging::init_logging;
pub use paths::HearthPaths;
