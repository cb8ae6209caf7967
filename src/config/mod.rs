pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{Config, ConfigFile, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
