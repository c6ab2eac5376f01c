//! Configuration model for git-check-diff.
//!
//! This module defines the Config struct that represents
//! `.git-check-diff.yaml` at the repository root. Unknown fields are
//! ignored, every field has a default, and values are validated on load.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::CONFIG_FILE_NAME;
