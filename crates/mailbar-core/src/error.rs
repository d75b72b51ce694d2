//! Error types for `mailbar-core`.
//!
//! The panel engine itself is total over its preconditions: navigation and
//! removal report failure through `bool`/`Option` return values and leave
//! state untouched. [`CoreError`] is reserved for the fallible edges of the
//! crate, currently configuration loading.

use std::path::PathBuf;

/// Unified error type for fallible core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `mailbar-core`.
pub type CoreResult<T> = Result<T, CoreError>;
