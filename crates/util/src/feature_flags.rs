//! Persisted feature-flag storage for the Portal console.
//!
//! The backend seeds a handful of string-valued flags into client-side
//! storage on startup; the navigation policy reads them back through the
//! [`FlagSource`] view. This module provides that view, the mutating
//! [`FlagStore`] trait, and a JSON-backed implementation mirroring the
//! ergonomics of the preferences file (env override, tilde expansion,
//! config directory fallback).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::{config_dir, home_dir};
use indexmap::IndexMap;
use portal_types::StatusPayload;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable controlling the flag file location.
pub const FLAGS_PATH_ENV: &str = "PORTAL_FLAGS_PATH";

/// Default filename for the persisted flag store.
pub const FLAGS_FILE_NAME: &str = "flags.json";

/// Flag holding the external chat URL. The Chat entry is shown when any
/// non-empty value is present, regardless of its content.
pub const CHAT_LINK_KEY: &str = "chat_link";

/// Flag gating the usage dashboard entry. Enabled iff exactly `"true"`.
pub const ENABLE_DATA_EXPORT_KEY: &str = "enable_data_export";

/// Flag gating the drawing entry. Enabled iff exactly `"true"`.
pub const ENABLE_DRAWING_KEY: &str = "enable_drawing";

/// Flag gating the async task entry. Enabled iff exactly `"true"`.
pub const ENABLE_TASK_KEY: &str = "enable_task";

/// Branding name seeded from the backend status payload.
pub const SYSTEM_NAME_KEY: &str = "system_name";

/// Logo URL seeded from the backend status payload.
pub const LOGO_KEY: &str = "logo";

/// Errors surfaced by flag store operations.
#[derive(Debug, Error)]
pub enum FlagStoreError {
    /// I/O failure while reading or writing the flag file.
    #[error("flag store I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("flag store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Read-only view of the flag storage, as consumed by the navigation policy.
///
/// The two derived predicates intentionally differ: `enable_*` style flags
/// require the exact string `"true"`, while link-style flags count as set
/// whenever any non-empty value was stored.
pub trait FlagSource: Send + Sync {
    /// Raw stored value for a flag, if any.
    fn flag(&self, name: &str) -> Option<String>;

    /// Strict gate: `true` iff the stored value is exactly `"true"`.
    fn is_enabled(&self, name: &str) -> bool {
        self.flag(name).as_deref() == Some("true")
    }

    /// Presence gate: `true` iff any non-empty value is stored.
    fn is_set(&self, name: &str) -> bool {
        self.flag(name).is_some_and(|value| !value.is_empty())
    }
}

/// Mutating access to the flag storage.
pub trait FlagStore: FlagSource {
    /// Store or replace the value for a flag.
    fn set_flag(&self, name: &str, value: &str) -> Result<(), FlagStoreError>;

    /// Remove a flag entirely; removing an absent flag is a no-op.
    fn remove_flag(&self, name: &str) -> Result<(), FlagStoreError>;
}

#[derive(Default, Serialize, Deserialize)]
struct FlagFile {
    #[serde(default)]
    flags: IndexMap<String, String>,
}

/// JSON-backed flag store persisted on disk.
pub struct JsonFlagStore {
    path: PathBuf,
    entries: Mutex<FlagFile>,
}

impl JsonFlagStore {
    /// Create a new store at the provided path (or the default path when omitted).
    pub fn new<P: Into<Option<PathBuf>>>(path: P) -> Result<Self, FlagStoreError> {
        let resolved_path = match path.into() {
            Some(path) => expand_tilde_path(path),
            None => default_flags_path(),
        };

        let file = load_flag_file(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            entries: Mutex::new(file),
        })
    }

    /// Initialize a store at the default location.
    pub fn with_defaults() -> Result<Self, FlagStoreError> {
        Self::new(None::<PathBuf>)
    }

    /// Access the underlying flag file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save_locked(&self, file: &FlagFile) -> Result<(), FlagStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl FlagSource for JsonFlagStore {
    fn flag(&self, name: &str) -> Option<String> {
        let entries = self.entries.lock().expect("flag store lock poisoned");
        entries.flags.get(name).cloned()
    }
}

impl FlagStore for JsonFlagStore {
    fn set_flag(&self, name: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut entries = self.entries.lock().expect("flag store lock poisoned");
        entries.flags.insert(name.to_string(), value.to_string());
        self.save_locked(&entries)
    }

    fn remove_flag(&self, name: &str) -> Result<(), FlagStoreError> {
        let mut entries = self.entries.lock().expect("flag store lock poisoned");
        if entries.flags.shift_remove(name).is_some() {
            return self.save_locked(&entries);
        }
        Ok(())
    }
}

/// In-memory flag store primarily used for unit testing.
#[derive(Default)]
pub struct InMemoryFlagStore {
    entries: Mutex<FlagFile>,
}

impl InMemoryFlagStore {
    /// Create an empty in-memory flag store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagSource for InMemoryFlagStore {
    fn flag(&self, name: &str) -> Option<String> {
        let entries = self.entries.lock().expect("flag store lock poisoned");
        entries.flags.get(name).cloned()
    }
}

impl FlagStore for InMemoryFlagStore {
    fn set_flag(&self, name: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut entries = self.entries.lock().expect("flag store lock poisoned");
        entries.flags.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_flag(&self, name: &str) -> Result<(), FlagStoreError> {
        let mut entries = self.entries.lock().expect("flag store lock poisoned");
        entries.flags.shift_remove(name);
        Ok(())
    }
}

/// Write the backend status payload into the flag store.
///
/// Boolean toggles are always written (as `"true"`/`"false"`), so a
/// deployment that turns a feature off also clears the stale gate. The chat
/// link and branding values are written when present and removed when the
/// backend stopped sending them.
pub fn seed_from_status(store: &dyn FlagStore, status: &StatusPayload) -> Result<(), FlagStoreError> {
    set_or_remove(store, SYSTEM_NAME_KEY, status.system_name.as_deref())?;
    set_or_remove(store, LOGO_KEY, status.logo.as_deref())?;
    set_or_remove(store, CHAT_LINK_KEY, status.chat_link.as_deref())?;
    store.set_flag(ENABLE_DATA_EXPORT_KEY, bool_value(status.enable_data_export))?;
    store.set_flag(ENABLE_DRAWING_KEY, bool_value(status.enable_drawing))?;
    store.set_flag(ENABLE_TASK_KEY, bool_value(status.enable_task))?;
    Ok(())
}

fn bool_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

fn set_or_remove(store: &dyn FlagStore, key: &str, value: Option<&str>) -> Result<(), FlagStoreError> {
    match value {
        Some(value) if !value.is_empty() => store.set_flag(key, value),
        _ => store.remove_flag(key),
    }
}

fn expand_tilde_path(path: PathBuf) -> PathBuf {
    if let Some(first) = path.components().next()
        && first.as_os_str() != "~"
    {
        return path;
    }

    let input = path.to_string_lossy();
    let trimmed = input.trim();

    if trimmed == "~" {
        return home_dir().unwrap_or_else(|| PathBuf::from("~"));
    }

    if let Some(rest) = trimmed.strip_prefix("~/") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }

    if let Some(rest) = trimmed.strip_prefix("~\\") {
        return home_dir().unwrap_or_else(|| PathBuf::from("~")).join(rest);
    }

    PathBuf::from(trimmed)
}

fn default_flags_path() -> PathBuf {
    if let Ok(path) = env::var(FLAGS_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde_path(PathBuf::from(path));
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portal")
        .join(FLAGS_FILE_NAME)
}

fn load_flag_file(path: &Path) -> Result<FlagFile, FlagStoreError> {
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<FlagFile>(&content) {
            Ok(file) => Ok(file),
            Err(error) => {
                warn!("Failed to parse flag file at {}: {}", path.display(), error);
                Ok(FlagFile::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(FlagFile::default()),
        Err(error) => Err(FlagStoreError::Io(error)),
    }
}
