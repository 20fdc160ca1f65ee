//! EditRemapsUseCase: one editing session over the stored `Scancode Map`.
//!
//! # Session lifecycle (for beginners)
//!
//! ```text
//! open ──► add / disable / remove / clear ──► save ──► reboot
//!   │                                           │
//!   └──────────────► reset ─────────────────────┘
//! ```
//!
//! - `open` reads the stored blob and decodes it.  A missing or undersized
//!   value is simply "no remaps".  A truncated blob is reported as corrupt
//!   and the session starts empty, so saving replaces the bad data.
//! - Edits only change the in-memory [`RemapConfiguration`].
//! - `save` encodes and writes; `reset` deletes the value altogether.
//!   Either way the change takes effect at the next boot.

use keyremap_core::{RemapConfiguration, RemapError, RemapRule};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::infrastructure::registry::{ScancodeMapStore, StoreError};

/// Errors raised by a remap session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Remap(#[from] RemapError),
}

/// What `open` found in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// The value existed (even if empty or undecodable).
    pub value_present: bool,
    /// The value was truncated and has been ignored.
    pub corrupt: bool,
    /// Rules decoded from the value.
    pub rules_loaded: usize,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub bytes_written: usize,
    pub reboot_required: bool,
}

/// Result of a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The value was deleted.
    Removed,
    /// There was no value to delete.
    NothingToReset,
}

impl ResetOutcome {
    pub fn reboot_required(self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// An editing session bound to one store.
pub struct RemapSession<S: ScancodeMapStore> {
    store: S,
    config: RemapConfiguration,
    dirty: bool,
}

impl<S: ScancodeMapStore> RemapSession<S> {
    /// Opens a session, loading whatever is currently stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the store cannot be read.  Decoding
    /// problems never fail the open; see [`LoadReport::corrupt`].
    pub fn open(store: S) -> Result<(Self, LoadReport), SessionError> {
        let stored = store.read()?;
        let value_present = stored.is_some();

        let (config, corrupt) = match stored {
            None => (RemapConfiguration::new(), false),
            Some(blob) => match RemapConfiguration::from_blob(&blob) {
                Ok(config) => (config, false),
                Err(e) => {
                    warn!(location = %store.location(), "ignoring corrupt scancode map: {e}");
                    (RemapConfiguration::new(), true)
                }
            },
        };

        let report = LoadReport {
            value_present,
            corrupt,
            rules_loaded: config.len(),
        };
        debug!(location = %store.location(), ?report, "opened remap session");

        Ok((
            Self {
                store,
                config,
                dirty: false,
            },
            report,
        ))
    }

    pub fn configuration(&self) -> &RemapConfiguration {
        &self.config
    }

    pub fn rules(&self) -> &[RemapRule] {
        self.config.rules()
    }

    /// `true` if there are edits that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    /// Remaps `source` to `target`, replacing any existing rule for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Remap`] when `source` is `0`.
    pub fn add(&mut self, source: u16, target: u16) -> Result<Option<RemapRule>, SessionError> {
        let replaced = self.config.add(RemapRule::new(source, target)?)?;
        self.dirty = true;
        Ok(replaced)
    }

    /// Turns `source` off.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Remap`] when `source` is `0`.
    pub fn disable(&mut self, source: u16) -> Result<Option<RemapRule>, SessionError> {
        self.add(source, 0)
    }

    /// Removes the rule for `source`.
    pub fn remove(&mut self, source: u16) -> Option<RemapRule> {
        let removed = self.config.remove(source);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Drops every rule from the session (the store is untouched until `save`).
    pub fn clear(&mut self) {
        if !self.config.is_empty() {
            self.dirty = true;
        }
        self.config.clear();
    }

    /// Returns the blob [`save`](Self::save) would write.
    pub fn preview(&self) -> Vec<u8> {
        self.config.to_blob()
    }

    /// Encodes the configuration and writes it to the store.
    ///
    /// An empty configuration still writes the 16-byte empty map.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the write fails; the session stays
    /// dirty in that case.
    pub fn save(&mut self) -> Result<SaveOutcome, SessionError> {
        let blob = self.preview();
        self.store.write(&blob)?;
        self.dirty = false;
        info!(
            location = %self.store.location(),
            rules = self.config.len(),
            "saved scancode map"
        );
        Ok(SaveOutcome {
            bytes_written: blob.len(),
            reboot_required: true,
        })
    }

    /// Clears the configuration and deletes the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Store`] if the delete fails; the in-memory
    /// configuration is left as it was in that case.
    pub fn reset(&mut self) -> Result<ResetOutcome, SessionError> {
        let outcome = reset_store(&self.store)?;
        self.config.clear();
        self.dirty = false;
        Ok(outcome)
    }
}

/// Deletes the stored value without reading it first.
///
/// This is the recovery path for a value that cannot be opened, e.g. a
/// `Scancode Map` of the wrong registry type.
///
/// # Errors
///
/// Returns [`SessionError::Store`] if the delete fails.
pub fn reset_store<S: ScancodeMapStore + ?Sized>(store: &S) -> Result<ResetOutcome, SessionError> {
    if store.delete()? {
        info!(location = %store.location(), "removed scancode map");
        Ok(ResetOutcome::Removed)
    } else {
        info!(location = %store.location(), "no scancode map to remove");
        Ok(ResetOutcome::NothingToReset)
    }
}
