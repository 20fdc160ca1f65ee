//! Windows registry store for the `Scancode Map` value.
//!
//! Reads open the key with `KEY_READ` so listing works without elevation.
//! Writes and deletes need `KEY_ALL_ACCESS` on an HKLM key, which Windows
//! only grants to an elevated (administrator) process.

#![cfg(target_os = "windows")]

use tracing::{info, warn};
use winreg::enums::{RegType, HKEY_LOCAL_MACHINE, KEY_ALL_ACCESS, KEY_READ};
use winreg::{RegKey, RegValue};

use super::{RegistryLocation, ScancodeMapStore, StoreError};

/// Registry-backed [`ScancodeMapStore`].
pub struct WindowsRegistryStore {
    location: RegistryLocation,
}

impl WindowsRegistryStore {
    pub fn new(location: RegistryLocation) -> Self {
        Self { location }
    }

    fn hklm() -> RegKey {
        RegKey::predef(HKEY_LOCAL_MACHINE)
    }

    fn error(&self, source: std::io::Error) -> StoreError {
        StoreError::from_io(self.location(), source)
    }
}

impl ScancodeMapStore for WindowsRegistryStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let key = match Self::hklm().open_subkey_with_flags(&self.location.key_path, KEY_READ) {
            Ok(key) => key,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.error(e)),
        };

        match key.get_raw_value(&self.location.value_name) {
            Ok(value) => match value.vtype {
                RegType::REG_BINARY => Ok(Some(value.bytes)),
                other => {
                    warn!(location = %self.location, "registry value has unexpected type {other:?}");
                    Err(StoreError::WrongValueType {
                        location: self.location(),
                        found: format!("{other:?}"),
                    })
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.error(e)),
        }
    }

    fn write(&self, blob: &[u8]) -> Result<(), StoreError> {
        let (key, _) = Self::hklm()
            .create_subkey_with_flags(&self.location.key_path, KEY_ALL_ACCESS)
            .map_err(|e| self.error(e))?;
        let value = RegValue {
            bytes: blob.to_vec(),
            vtype: RegType::REG_BINARY,
        };
        key.set_raw_value(&self.location.value_name, &value)
            .map_err(|e| self.error(e))?;
        info!(location = %self.location, bytes = blob.len(), "wrote registry value");
        Ok(())
    }

    fn delete(&self) -> Result<bool, StoreError> {
        let key = match Self::hklm().open_subkey_with_flags(&self.location.key_path, KEY_ALL_ACCESS) {
            Ok(key) => key,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(self.error(e)),
        };

        match key.delete_value(&self.location.value_name) {
            Ok(()) => {
                info!(location = %self.location, "deleted registry value");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.error(e)),
        }
    }

    fn location(&self) -> String {
        self.location.to_string()
    }
}
