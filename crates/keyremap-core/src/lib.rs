//! # keyremap-core
//!
//! Shared library for KeyRemap containing the Windows "Scancode Map" codec,
//! the remap rule model, and the scancode label table.
//!
//! This crate is used by the manager application and its tests.
//! It has zero dependencies on OS APIs, the registry, or UI frameworks.
//!
//! # Architecture overview (for beginners)
//!
//! Windows can remap keys system-wide without any running software: at boot
//! the keyboard class driver reads a binary registry value called
//! `Scancode Map` and rewrites every scancode listed in it.  KeyRemap edits
//! that value.
//!
//! This crate (`keyremap-core`) is the OS-independent foundation.  It defines:
//!
//! - **`codec`** – How rules become bytes.  A rule list is encoded into the
//!   exact binary layout the driver expects (8-byte header, entry count,
//!   entries, null terminator) and decoded back.
//!
//! - **`domain`** – The remap rule and the editable, ordered configuration
//!   that owns a list of rules during an editing session.
//!
//! - **`keymap`** – A static table translating scancodes to human-readable
//!   key names (`0x1E` ↔ `"A"`) so the user never has to type raw numbers.

pub mod codec;
pub mod domain;
pub mod keymap;

pub use codec::scancode_map::{decode, encode, DecodeError};
pub use domain::remap::{RemapConfiguration, RemapError, RemapRule};
