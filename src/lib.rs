pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod resources;

// Re-export commonly used types
pub use config::{Config, ConfigLoader};
pub use error::{BandwidthError, Result};
pub use http::Client;
