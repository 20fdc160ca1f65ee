//! Binary codecs for registry values written by KeyRemap.

pub mod scancode_map;

pub use scancode_map::{decode, encode, DecodeError};
