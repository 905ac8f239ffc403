// Public modules
pub mod config;
pub mod error;
pub mod headers;

// Public modules for CLI access
pub mod defaults;

// Re-export common types for convenience
pub use config::RewriteConfig;
pub use error::{Error, ErrorCode, Result};
