//! Set 1 scancode ↔ key label table as used by the `Scancode Map` value.
//!
//! Reference: Microsoft "Keyboard Scan Code Specification" (Set 1 make codes).
//!
//! # What is a scancode? (for beginners)
//!
//! A scancode identifies a *physical* key position, independent of the
//! keyboard layout.  The key labelled "A" on a US keyboard sends `0x1E`;
//! on a French AZERTY keyboard the same physical key is labelled "Q" but
//! still sends `0x1E`.  The labels in this table follow the US layout.
//!
//! Keys added after the original PC/XT keyboard (right-hand modifiers,
//! the arrow cluster, Windows keys) send a two-byte sequence starting with
//! `0xE0`.  The `Scancode Map` format stores these as a single `u16` with
//! `0xE0` in the high byte, e.g. Right Ctrl is `0xE01D`.  Because of this
//! prefix, every label in the table has a distinct code and the table can be
//! read in both directions.

use std::borrow::Cow;

use thiserror::Error;

use crate::domain::remap::RemapRule;

/// Errors returned by [`parse_key`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    /// The input is neither a known label nor a hex literal.
    #[error("unknown key '{0}' (use a key name from `keyremap keys` or a hex scancode like 0x1E)")]
    UnknownLabel(String),

    /// The input starts with `0x` but is not a valid 16-bit hex number.
    #[error("invalid hex scancode '{0}'")]
    InvalidHex(String),
}

/// Returns the label for `code`, or `None` if the code is not in the table.
pub fn scancode_to_label(code: u16) -> Option<&'static str> {
    SCANCODE_TABLE
        .iter()
        .find(|&&(c, _)| c == code)
        .map(|&(_, label)| label)
}

/// Returns the scancode for `label`, ignoring ASCII case.
pub fn label_to_scancode(label: &str) -> Option<u16> {
    let label = label.trim();
    SCANCODE_TABLE
        .iter()
        .find(|&&(_, l)| l.eq_ignore_ascii_case(label))
        .map(|&(code, _)| code)
}

/// Parses a key given either as a label (`"Caps Lock"`) or as a hex
/// scancode (`"0x3A"`, `"0xE01D"`).
///
/// Hex input is accepted even when the code is not in the table; the
/// keyboard driver passes unknown codes through.
///
/// # Errors
///
/// Returns [`KeyParseError`] when the input matches neither form.
pub fn parse_key(input: &str) -> Result<u16, KeyParseError> {
    let trimmed = input.trim();
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        // from_str_radix alone would also take a leading '+'.
        if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(KeyParseError::InvalidHex(input.to_string()));
        }
        return u16::from_str_radix(hex, 16).map_err(|_| KeyParseError::InvalidHex(input.to_string()));
    }
    label_to_scancode(trimmed).ok_or_else(|| KeyParseError::UnknownLabel(input.to_string()))
}

/// Returns the label for `code`, or `Unknown (0xNNNN)` when it has none.
pub fn display_label(code: u16) -> Cow<'static, str> {
    match scancode_to_label(code) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(format!("Unknown (0x{code:04X})")),
    }
}

/// Renders a rule the way the editor lists it: `"A -> B"`.
///
/// Disable rules render as `"A -> (disabled)"`.
pub fn describe_rule(rule: &RemapRule) -> String {
    let source = display_label(rule.source_scancode);
    if rule.is_disable() {
        format!("{source} -> (disabled)")
    } else {
        format!("{source} -> {}", display_label(rule.target_scancode))
    }
}

/// Iterates over every `(label, scancode)` pair in table order.
pub fn all_keys() -> impl Iterator<Item = (&'static str, u16)> {
    SCANCODE_TABLE.iter().map(|&(code, label)| (label, code))
}

/// Scancode → label table, grouped the way keys appear in the editor.
const SCANCODE_TABLE: &[(u16, &str)] = &[
    // ── Letters ───────────────────────────────────────────────────────────────
    (0x001E, "A"),
    (0x0030, "B"),
    (0x002E, "C"),
    (0x0020, "D"),
    (0x0012, "E"),
    (0x0021, "F"),
    (0x0022, "G"),
    (0x0023, "H"),
    (0x0017, "I"),
    (0x0024, "J"),
    (0x0025, "K"),
    (0x0026, "L"),
    (0x0032, "M"),
    (0x0031, "N"),
    (0x0018, "O"),
    (0x0019, "P"),
    (0x0010, "Q"),
    (0x0013, "R"),
    (0x001F, "S"),
    (0x0014, "T"),
    (0x0016, "U"),
    (0x002F, "V"),
    (0x0011, "W"),
    (0x002D, "X"),
    (0x0015, "Y"),
    (0x002C, "Z"),
    // ── Digit row ─────────────────────────────────────────────────────────────
    (0x000B, "0"),
    (0x0002, "1"),
    (0x0003, "2"),
    (0x0004, "3"),
    (0x0005, "4"),
    (0x0006, "5"),
    (0x0007, "6"),
    (0x0008, "7"),
    (0x0009, "8"),
    (0x000A, "9"),
    // ── Punctuation ───────────────────────────────────────────────────────────
    (0x0029, "`"),
    (0x000C, "-"),
    (0x000D, "="),
    (0x001A, "["),
    (0x001B, "]"),
    (0x002B, "\\"),
    (0x0027, ";"),
    (0x0028, "'"),
    (0x0033, ","),
    (0x0034, "."),
    (0x0035, "/"),
    // ── Escape and function keys ──────────────────────────────────────────────
    (0x0001, "Esc"),
    (0x003B, "F1"),
    (0x003C, "F2"),
    (0x003D, "F3"),
    (0x003E, "F4"),
    (0x003F, "F5"),
    (0x0040, "F6"),
    (0x0041, "F7"),
    (0x0042, "F8"),
    (0x0043, "F9"),
    (0x0044, "F10"),
    (0x0057, "F11"),
    (0x0058, "F12"),
    // ── Control keys and modifiers ────────────────────────────────────────────
    (0x000F, "Tab"),
    (0x003A, "Caps Lock"),
    (0x002A, "Left Shift"),
    (0x0036, "Right Shift"),
    (0x001D, "Left Ctrl"),
    (0xE01D, "Right Ctrl"),
    (0x0038, "Left Alt"),
    (0xE038, "Right Alt"),
    (0x0039, "Space"),
    (0x001C, "Enter"),
    (0x000E, "Backspace"),
    // ── Arrow keys ────────────────────────────────────────────────────────────
    (0xE048, "Up"),
    (0xE050, "Down"),
    (0xE04B, "Left"),
    (0xE04D, "Right"),
    // ── Numpad ────────────────────────────────────────────────────────────────
    (0x0052, "Numpad 0"),
    (0x004F, "Numpad 1"),
    (0x0050, "Numpad 2"),
    (0x0051, "Numpad 3"),
    (0x004B, "Numpad 4"),
    (0x004C, "Numpad 5"),
    (0x004D, "Numpad 6"),
    (0x0047, "Numpad 7"),
    (0x0048, "Numpad 8"),
    (0x0049, "Numpad 9"),
    (0x004E, "Numpad +"),
    (0x004A, "Numpad -"),
    (0x0037, "Numpad *"),
    (0xE035, "Numpad /"),
    (0x0053, "Numpad ."),
    (0xE01C, "Numpad Enter"),
    // ── Editing and navigation cluster ────────────────────────────────────────
    (0xE052, "Insert"),
    (0xE053, "Delete"),
    (0xE047, "Home"),
    (0xE04F, "End"),
    (0xE049, "Page Up"),
    (0xE051, "Page Down"),
    (0xE037, "Print Screen"),
    (0x0046, "Scroll Lock"),
    (0x0045, "Num Lock"),
    (0xE11D, "Pause"), // E1-prefixed in hardware; driver matches the first two bytes
    // ── Windows and Application keys ──────────────────────────────────────────
    (0xE05B, "Left Win"),
    (0xE05C, "Right Win"),
    (0xE05D, "Application"),
];
