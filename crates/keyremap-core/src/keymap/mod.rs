//! Human-readable names for keyboard scancodes.
//!
//! The codec works on raw `u16` scancodes and never consults this table.
//! It exists so editors can show `"Caps Lock -> Left Ctrl"` instead of
//! `0x003A -> 0x001D`, and so users can type key names on the command line.

pub mod scancodes;

pub use scancodes::{
    all_keys, describe_rule, display_label, label_to_scancode, parse_key, scancode_to_label,
    KeyParseError,
};
