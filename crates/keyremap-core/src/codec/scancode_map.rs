//! Binary codec for the Windows keyboard `Scancode Map` registry value.
//!
//! Layout:
//! ```text
//! [header:8 = 0][count:4][entry:4 × (count - 1)][terminator:4 = 0]
//! entry = [target:2][source:2]
//! ```
//! All multi-byte integers are little-endian.  `count` includes the
//! terminator entry, so an empty map has `count = 1`.

use thiserror::Error;
use tracing::debug;

use crate::domain::remap::RemapRule;

/// Size of the reserved header (version + flags, always zero).
pub const HEADER_SIZE: usize = 8;

/// Size of the little-endian entry count that follows the header.
pub const COUNT_SIZE: usize = 4;

/// Size of one mapping entry and of the null terminator.
pub const ENTRY_SIZE: usize = 4;

/// Shortest blob that carries a count field.  Anything shorter decodes to
/// an empty rule list.
pub const MIN_BLOB_LEN: usize = HEADER_SIZE + COUNT_SIZE;

/// Errors that can occur while decoding a `Scancode Map` blob.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The count field claims more entries than the blob contains.
    #[error("truncated scancode map: {declared_rules} rules declared, need {needed} bytes, got {available}")]
    Truncated {
        declared_rules: usize,
        needed: usize,
        available: usize,
    },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes `rules` into a `Scancode Map` blob, preserving their order.
///
/// Never fails: every `u16` pair is representable, and an empty slice
/// produces the 16-byte no-op map.
///
/// # Examples
///
/// ```rust
/// use keyremap_core::{decode, encode, RemapRule};
///
/// let rules = vec![RemapRule { source_scancode: 0x3A, target_scancode: 0x1D }];
/// let blob = encode(&rules);
/// assert_eq!(blob.len(), 20);
/// assert_eq!(decode(&blob).unwrap(), rules);
/// ```
pub fn encode(rules: &[RemapRule]) -> Vec<u8> {
    let count = (rules.len() + 1) as u32;
    let mut buf = Vec::with_capacity(encoded_len(rules.len()));

    buf.extend_from_slice(&[0u8; HEADER_SIZE]);
    buf.extend_from_slice(&count.to_le_bytes());
    for rule in rules {
        // Target precedes source in every entry.
        buf.extend_from_slice(&rule.target_scancode.to_le_bytes());
        buf.extend_from_slice(&rule.source_scancode.to_le_bytes());
    }
    buf.extend_from_slice(&[0u8; ENTRY_SIZE]);

    debug!(rules = rules.len(), bytes = buf.len(), "encoded scancode map");
    buf
}

/// Decodes a `Scancode Map` blob into rules, in blob order.
///
/// Blobs shorter than [`MIN_BLOB_LEN`] (including an empty slice) mean "no
/// mapping configured" and decode to an empty list.  The trailing terminator
/// entry is not checked.
///
/// # Errors
///
/// Returns [`DecodeError::Truncated`] when the count field declares more
/// entries than the blob holds.
///
/// # Examples
///
/// ```rust
/// use keyremap_core::decode;
///
/// assert!(decode(&[]).unwrap().is_empty());
/// ```
pub fn decode(blob: &[u8]) -> Result<Vec<RemapRule>, DecodeError> {
    if blob.len() < MIN_BLOB_LEN {
        debug!(bytes = blob.len(), "scancode map shorter than header, treating as empty");
        return Ok(Vec::new());
    }

    let raw_count = read_u32_le(blob, HEADER_SIZE);
    let declared_rules = raw_count.saturating_sub(1) as usize;

    let needed = declared_rules
        .checked_mul(ENTRY_SIZE)
        .and_then(|body| body.checked_add(MIN_BLOB_LEN))
        .unwrap_or(usize::MAX);
    if needed > blob.len() {
        return Err(DecodeError::Truncated {
            declared_rules,
            needed,
            available: blob.len(),
        });
    }

    let rules: Vec<RemapRule> = blob[MIN_BLOB_LEN..needed]
        .chunks_exact(ENTRY_SIZE)
        .map(|entry| RemapRule {
            target_scancode: u16::from_le_bytes([entry[0], entry[1]]),
            source_scancode: u16::from_le_bytes([entry[2], entry[3]]),
        })
        .collect();

    debug!(rules = rules.len(), bytes = blob.len(), "decoded scancode map");
    Ok(rules)
}

/// Returns the exact blob length [`encode`] produces for `rule_count` rules.
pub fn encoded_len(rule_count: usize) -> usize {
    MIN_BLOB_LEN + rule_count * ENTRY_SIZE + ENTRY_SIZE
}

// ── Utility helpers ───────────────────────────────────────────────────────────

fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rule(source: u16, target: u16) -> RemapRule {
        RemapRule {
            source_scancode: source,
            target_scancode: target,
        }
    }

    // ── encode ────────────────────────────────────────────────────────────────

    #[test]
    fn test_encode_empty_produces_sixteen_byte_noop_map() {
        let blob = encode(&[]);
        assert_eq!(
            blob,
            vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_encode_single_rule_puts_target_before_source() {
        // A (0x1E) reports as B (0x30)
        let blob = encode(&[rule(0x001E, 0x0030)]);
        assert_eq!(
            blob,
            vec![
                0, 0, 0, 0, 0, 0, 0, 0, //
                2, 0, 0, 0, //
                0x30, 0x00, 0x1E, 0x00, //
                0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn test_encode_matches_windows_generated_caps_to_ctrl_blob() {
        // The well-known "Caps Lock becomes Left Ctrl" map exported by regedit:
        // 00,00,00,00,00,00,00,00,02,00,00,00,1d,00,3a,00,00,00,00,00
        let blob = encode(&[rule(0x3A, 0x1D)]);
        assert_eq!(
            blob,
            vec![
                0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x1D,
                0x00, 0x3A, 0x00, 0x00, 0x00, 0x00, 0x00,
            ]
        );
    }

    #[test]
    fn test_encode_extended_scancode_is_little_endian() {
        // Right Ctrl (E0 1D) disabled
        let blob = encode(&[rule(0xE01D, 0x0000)]);
        assert_eq!(&blob[12..16], &[0x00, 0x00, 0x1D, 0xE0]);
    }

    #[test]
    fn test_encode_count_field_is_rule_count_plus_one() {
        for k in [0usize, 1, 2, 7, 100] {
            let rules: Vec<RemapRule> = (0..k).map(|i| rule(i as u16 + 1, 0)).collect();
            let blob = encode(&rules);
            let count = u32::from_le_bytes(blob[8..12].try_into().unwrap());
            assert_eq!(count as usize, k + 1, "count for {k} rules");
            assert_eq!(blob.len(), encoded_len(k));
        }
    }

    #[test]
    fn test_encode_terminator_is_zero_even_for_max_scancodes() {
        let blob = encode(&[rule(0xFFFF, 0xFFFF)]);
        assert_eq!(&blob[blob.len() - 4..], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_preserves_input_order() {
        let blob = encode(&[rule(0x10, 0x11), rule(0x02, 0x03)]);
        assert_eq!(&blob[12..16], &[0x11, 0x00, 0x10, 0x00]);
        assert_eq!(&blob[16..20], &[0x03, 0x00, 0x02, 0x00]);
    }

    // ── decode ────────────────────────────────────────────────────────────────

    #[test]
    fn test_decode_empty_map_returns_no_rules() {
        let blob = encode(&[]);
        assert_eq!(decode(&blob), Ok(vec![]));
    }

    #[test]
    fn test_decode_undersized_blobs_return_no_rules() {
        for len in 0..MIN_BLOB_LEN {
            let blob = vec![0xFFu8; len];
            assert_eq!(decode(&blob), Ok(vec![]), "length {len}");
        }
    }

    #[test]
    fn test_decode_zero_count_does_not_underflow() {
        let blob = vec![0u8; MIN_BLOB_LEN];
        assert_eq!(decode(&blob), Ok(vec![]));
    }

    #[test]
    fn test_decode_count_one_without_terminator_is_accepted() {
        // Header + count only; the terminator is never read.
        let mut blob = vec![0u8; 8];
        blob.extend_from_slice(&1u32.to_le_bytes());
        assert_eq!(decode(&blob), Ok(vec![]));
    }

    #[test]
    fn test_decode_truncated_blob_returns_truncated_error() {
        // count = 3 (two rules) but only one entry present
        let mut blob = vec![0u8; 8];
        blob.extend_from_slice(&3u32.to_le_bytes());
        blob.extend_from_slice(&[0x30, 0x00, 0x1E, 0x00]);
        assert_eq!(
            decode(&blob),
            Err(DecodeError::Truncated {
                declared_rules: 2,
                needed: 20,
                available: 16,
            })
        );
    }

    #[test]
    fn test_decode_huge_count_returns_truncated_instead_of_allocating() {
        let mut blob = vec![0u8; 8];
        blob.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(matches!(decode(&blob), Err(DecodeError::Truncated { .. })));
    }

    #[test]
    fn test_decode_ignores_nonzero_terminator() {
        let mut blob = encode(&[rule(0x1E, 0x30)]);
        let len = blob.len();
        blob[len - 4..].copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(decode(&blob), Ok(vec![rule(0x1E, 0x30)]));
    }

    #[test]
    fn test_decode_ignores_nonzero_header() {
        let mut blob = encode(&[rule(0x1E, 0x30)]);
        blob[0] = 0x01;
        assert_eq!(decode(&blob), Ok(vec![rule(0x1E, 0x30)]));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes_past_terminator() {
        let mut blob = encode(&[rule(0x1E, 0x30)]);
        blob.extend_from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(decode(&blob), Ok(vec![rule(0x1E, 0x30)]));
    }

    #[test]
    fn test_truncated_error_message_mentions_byte_counts() {
        let err = DecodeError::Truncated {
            declared_rules: 2,
            needed: 20,
            available: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("16"));
    }

    // ── Properties ────────────────────────────────────────────────────────────

    fn arb_rules() -> impl Strategy<Value = Vec<RemapRule>> {
        proptest::collection::vec((any::<u16>(), any::<u16>()), 0..64)
            .prop_map(|pairs| pairs.into_iter().map(|(s, t)| rule(s, t)).collect())
    }

    proptest! {
        /// `decode(encode(rules)) == rules` for any scancodes, in order.
        #[test]
        fn prop_decode_inverts_encode(rules in arb_rules()) {
            prop_assert_eq!(decode(&encode(&rules)), Ok(rules));
        }

        /// Re-encoding a decoded blob reproduces it byte for byte.
        #[test]
        fn prop_encode_inverts_decode(rules in arb_rules()) {
            let blob = encode(&rules);
            let decoded = decode(&blob).unwrap();
            prop_assert_eq!(encode(&decoded), blob);
        }

        /// Arbitrary bytes never panic: they decode or report truncation.
        #[test]
        fn prop_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            match decode(&bytes) {
                Ok(rules) => prop_assert!(MIN_BLOB_LEN + rules.len() * ENTRY_SIZE <= bytes.len().max(MIN_BLOB_LEN)),
                Err(DecodeError::Truncated { needed, available, .. }) => prop_assert!(needed > available),
            }
        }
    }
}
