//! Storage infrastructure: configuration file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The `config` sub-module handles:
//!
//! - Reading the TOML configuration file from the platform-appropriate directory.
//! - Writing it back when the user changes settings.
//! - Providing sensible defaults when the file does not exist yet (first run).
//!
//! The remap rules themselves are *not* stored here: the registry value is
//! their only persistent home.

pub mod config;
