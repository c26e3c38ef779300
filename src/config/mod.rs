mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, SourceConfig, ViewConfig, DEFAULT_SOURCE_URL};
