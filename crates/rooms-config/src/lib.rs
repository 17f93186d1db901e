pub mod base_paths;
pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod mode;
pub mod settings;
pub mod validation;

// Re-export main types
pub use base_paths::*;
pub use build::*;
pub use config::*;
pub use error::*;
pub use mode::*;
pub use settings::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
