use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;

use crate::template::DEFAULT_LINK_FORMAT;

/// Persisted settings.
///
/// The stored blob is a JSON object; missing fields fall back to their
/// defaults on load, so a blob persisted by an older version merges
/// cleanly over the current default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Template used to render heading links
    pub link_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            link_format: DEFAULT_LINK_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON blob.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize to a JSON blob.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Abstract interface for settings persistence.
///
/// The core treats the stored value as an opaque blob; parsing and
/// default-merging happen on this side of the boundary.
pub trait SettingsStore: Send + Sync {
    /// Read the stored blob, `None` if nothing has been persisted yet.
    fn load(&self) -> io::Result<Option<String>>;

    /// Persist the blob, replacing any previous value.
    fn save(&self, blob: &str) -> io::Result<()>;
}

/// Standard implementation of SettingsStore backed by a JSON file.
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> io::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, blob: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, blob)
    }
}
