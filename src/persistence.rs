//! Theme preference persistence.
//!
//! The user's last explicit theme choice is stored as a single string under
//! one stable key for the whole process lifetime. Reads and writes are
//! best-effort: a host without a storage medium reads as "nothing stored"
//! and writes become no-ops, never errors.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::theme::Theme;
use crate::traits::PreferenceStorage;

/// Storage key for the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "APP_THEME_PREFERENCE";

/// Default directory for the native file-backed store.
static DEFAULT_STORE_DIR: Lazy<Option<PathBuf>> =
    Lazy::new(|| dirs::config_dir().map(|dir| dir.join("filmdrop")));

/// Coordinates reading and writing the theme preference.
pub struct ThemePersistence;

impl ThemePersistence {
    /// Reads the persisted theme, if a valid one is stored.
    ///
    /// Returns `None` when there is no storage medium, nothing was ever
    /// written, or the stored value is not a switchable theme. Never fails.
    pub fn read(storage: Option<&dyn PreferenceStorage>) -> Option<Theme> {
        let stored = storage?.get_string(THEME_STORAGE_KEY)?;
        match Theme::from_name(&stored) {
            Some(theme) if theme.is_switchable() => Some(theme),
            _ => {
                if !stored.is_empty() {
                    tracing::debug!(stored = %stored, "ignoring unusable persisted theme");
                }
                None
            }
        }
    }

    /// Persists `theme` as the user's explicit choice.
    ///
    /// A missing storage medium makes this a no-op rather than an error.
    pub fn write(storage: Option<&mut dyn PreferenceStorage>, theme: Theme) {
        if let Some(storage) = storage {
            storage.set_string(THEME_STORAGE_KEY, theme.as_str().to_string());
        }
    }
}

/// File-backed preference storage for native hosts.
///
/// Each key is stored as one file holding the raw string value, keeping the
/// single key-value contract of the browser medium. All failures are soft:
/// unreadable values read as `None`, and a failed write is logged and
/// dropped, leaving the in-memory theme state as the source of truth.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the host's configuration directory.
    ///
    /// Returns `None` when the host has no configuration directory.
    pub fn default_location() -> Option<Self> {
        DEFAULT_STORE_DIR.as_ref().map(Self::at)
    }

    /// Creates a store rooted at `dir`.
    pub fn at(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn try_set(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating preference directory {}", self.dir.display()))?;
        fs::write(self.key_path(key), value)
            .with_context(|| format!("writing preference '{}'", key))?;
        Ok(())
    }
}

impl PreferenceStorage for FileStore {
    fn get_string(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn set_string(&mut self, key: &str, value: String) {
        if let Err(error) = self.try_set(key, &value) {
            tracing::warn!(error = %error, "failed to persist preference");
        }
    }
}
