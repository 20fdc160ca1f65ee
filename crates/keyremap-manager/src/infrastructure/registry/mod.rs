//! Persistence boundary for the `Scancode Map` blob.
//!
//! On Windows the blob lives in the registry:
//!
//! ```text
//! HKEY_LOCAL_MACHINE\SYSTEM\CurrentControlSet\Control\Keyboard Layout
//!     Scancode Map    REG_BINARY
//! ```
//!
//! Writing under `HKEY_LOCAL_MACHINE` requires administrator rights, and the
//! keyboard driver only reads the value at boot.
//!
//! # Testability
//!
//! The `ScancodeMapStore` trait lets the application layer load and save
//! blobs without touching the registry.  [`memory::MemoryStore`] backs unit
//! tests and [`file::FileStore`] lets the tool run on any platform against a
//! raw blob file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod file;
pub mod memory;

#[cfg(target_os = "windows")]
pub mod windows;

/// Default registry key holding the keyboard remap value (relative to HKLM).
pub const DEFAULT_KEY_PATH: &str = r"SYSTEM\CurrentControlSet\Control\Keyboard Layout";

/// Default registry value name read by the keyboard class driver.
pub const DEFAULT_VALUE_NAME: &str = "Scancode Map";

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The caller lacks the rights to modify the location.
    #[error("permission denied accessing {location} (administrator rights are required)")]
    PermissionDenied { location: String },

    /// Any other I/O or registry API failure.
    #[error("I/O error accessing {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// The registry value exists but is not `REG_BINARY`.
    #[error("{location} has type {found}, expected REG_BINARY")]
    WrongValueType { location: String, found: String },

    /// No store is available on this platform with the given options.
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

impl StoreError {
    /// Classifies an I/O error, promoting access-denied to [`StoreError::PermissionDenied`].
    pub(crate) fn from_io(location: String, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { location }
        } else {
            Self::Io { location, source }
        }
    }
}

/// Where the blob lives in the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryLocation {
    /// Key path relative to `HKEY_LOCAL_MACHINE`.
    #[serde(default = "default_key_path")]
    pub key_path: String,
    /// Value name under `key_path`.
    #[serde(default = "default_value_name")]
    pub value_name: String,
}

fn default_key_path() -> String {
    DEFAULT_KEY_PATH.to_string()
}
fn default_value_name() -> String {
    DEFAULT_VALUE_NAME.to_string()
}

impl Default for RegistryLocation {
    fn default() -> Self {
        Self {
            key_path: default_key_path(),
            value_name: default_value_name(),
        }
    }
}

impl std::fmt::Display for RegistryLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, r"HKLM\{}\{}", self.key_path, self.value_name)
    }
}

/// Trait abstracting where the `Scancode Map` blob is persisted.
///
/// The production implementation uses the Windows registry; tests use
/// [`memory::MemoryStore`].
pub trait ScancodeMapStore: Send {
    /// Reads the stored blob.  `Ok(None)` means the value does not exist.
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError>;
    /// Replaces the stored blob, creating the value if needed.
    fn write(&self, blob: &[u8]) -> Result<(), StoreError>;
    /// Deletes the value.  Returns `false` if it did not exist.
    fn delete(&self) -> Result<bool, StoreError>;
    /// Human-readable location for logs and messages.
    fn location(&self) -> String;
}

impl<S: ScancodeMapStore + ?Sized> ScancodeMapStore for Box<S> {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).read()
    }

    fn write(&self, blob: &[u8]) -> Result<(), StoreError> {
        (**self).write(blob)
    }

    fn delete(&self) -> Result<bool, StoreError> {
        (**self).delete()
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Chooses the store for this run.
///
/// An explicit `blob_file` always wins.  Otherwise Windows uses the registry
/// at `location`, and other platforms have no default store.
///
/// # Errors
///
/// Returns [`StoreError::UnsupportedPlatform`] off Windows when no blob file
/// was given.
pub fn open_store(
    blob_file: Option<PathBuf>,
    location: &RegistryLocation,
) -> Result<Box<dyn ScancodeMapStore>, StoreError> {
    if let Some(path) = blob_file {
        return Ok(Box::new(file::FileStore::new(path)));
    }

    #[cfg(target_os = "windows")]
    {
        Ok(Box::new(windows::WindowsRegistryStore::new(location.clone())))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(StoreError::UnsupportedPlatform(format!(
            "{location} only exists on Windows; pass --blob-file to edit a blob file instead"
        )))
    }
}
