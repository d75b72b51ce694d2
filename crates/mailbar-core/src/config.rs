//! Panel configuration loaded from a TOML file.
//!
//! All fields have defaults so the panel works without a config file.
//! Call [`PanelConfig::load`] to read from a TOML path.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::panel::sort::SortSpec;

/// User-facing panel policy.
///
/// Mirrors the knobs the engine consults on every pass: the new-mail-only
/// visibility filter, wrap behaviour of the unread scans, the sort
/// specification, and an allow-list of folders that stay visible even when
/// the filter would hide them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Show only folders with new, unread, or flagged mail.
    #[serde(default)]
    pub new_mail_only: bool,
    /// Wrap around when scanning for the next/previous folder with new mail.
    #[serde(default)]
    pub next_new_wrap: bool,
    /// Sort key and direction.
    #[serde(default)]
    pub sort: SortSpec,
    /// Paths or descriptions that are always shown, bypassing the
    /// new-mail-only filter.
    #[serde(default)]
    pub always_show: Vec<String>,
}

impl PanelConfig {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}
