//! Remap rules and the ordered configuration a session edits.
//!
//! # Why an explicit configuration value? (for beginners)
//!
//! A remap editor needs somewhere to keep "the rules the user has picked so
//! far".  Rather than a process-wide global, [`RemapConfiguration`] is a
//! plain value: whoever runs the editing session owns it, mutates it, and
//! hands it to the codec when saving.  Two sessions never share state by
//! accident, and tests can build one in a single line.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::scancode_map::{self, DecodeError};

/// Errors raised when a rule violates the remap invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemapError {
    /// Scancode `0x0000` cannot be the key being remapped.
    #[error("source scancode must not be 0x0000")]
    NullSource,
}

/// One `source → target` remap entry.
///
/// `target_scancode == 0` disables the source key entirely.
///
/// The fields are public so that decoded blobs are reproduced verbatim,
/// including entries a stricter editor would reject.  Use [`RemapRule::new`]
/// to build a validated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemapRule {
    /// The physical key being remapped.
    pub source_scancode: u16,
    /// The scancode reported instead.
    pub target_scancode: u16,
}

impl RemapRule {
    /// Builds a rule, rejecting a null source.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::NullSource`] when `source == 0`.
    pub fn new(source: u16, target: u16) -> Result<Self, RemapError> {
        if source == 0 {
            return Err(RemapError::NullSource);
        }
        Ok(Self {
            source_scancode: source,
            target_scancode: target,
        })
    }

    /// Builds a rule that turns `source` off.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::NullSource`] when `source == 0`.
    pub fn disable(source: u16) -> Result<Self, RemapError> {
        Self::new(source, 0)
    }

    /// Returns `true` if this rule disables its source key.
    pub fn is_disable(&self) -> bool {
        self.target_scancode == 0
    }
}

/// The ordered set of rules owned by one editing session.
///
/// At most one rule per source scancode is kept by [`add`](Self::add); the
/// keyboard driver applies a single mapping per source anyway.  Order is
/// insertion order and survives an encode/decode round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapConfiguration {
    rules: Vec<RemapRule>,
}

impl RemapConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing rule list as-is (no deduplication or validation).
    pub fn from_rules(rules: Vec<RemapRule>) -> Self {
        Self { rules }
    }

    /// Decodes a `Scancode Map` blob into a configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`DecodeError::Truncated`] from the codec.
    pub fn from_blob(blob: &[u8]) -> Result<Self, DecodeError> {
        scancode_map::decode(blob).map(Self::from_rules)
    }

    /// Encodes the configuration into a `Scancode Map` blob.
    pub fn to_blob(&self) -> Vec<u8> {
        scancode_map::encode(&self.rules)
    }

    pub fn rules(&self) -> &[RemapRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rule remapping `source`, if any.
    pub fn get(&self, source: u16) -> Option<&RemapRule> {
        self.rules.iter().find(|r| r.source_scancode == source)
    }

    /// Adds `rule`, replacing any existing rule for the same source in place.
    ///
    /// Returns the replaced rule, if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`RemapError::NullSource`] when the rule's source is `0`.
    pub fn add(&mut self, rule: RemapRule) -> Result<Option<RemapRule>, RemapError> {
        if rule.source_scancode == 0 {
            return Err(RemapError::NullSource);
        }
        match self
            .rules
            .iter_mut()
            .find(|r| r.source_scancode == rule.source_scancode)
        {
            Some(existing) => Ok(Some(std::mem::replace(existing, rule))),
            None => {
                self.rules.push(rule);
                Ok(None)
            }
        }
    }

    /// Removes the rule for `source`, returning it.
    pub fn remove(&mut self, source: u16) -> Option<RemapRule> {
        let idx = self.rules.iter().position(|r| r.source_scancode == source)?;
        Some(self.rules.remove(idx))
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }
}
