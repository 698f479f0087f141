// Fri Jan 16 2026 - Alex

use crate::structure::overlap::WORD_BYTES;
use crate::utils::hex_string_spaced;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Little,
    Big,
}

impl ByteOrder {
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Byte index holding bits `8*significance..8*significance+8` of a word.
    pub fn position(self, significance: usize) -> usize {
        match self {
            Self::Little => significance,
            Self::Big => WORD_BYTES - 1 - significance,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little-endian"),
            Self::Big => write!(f, "big-endian"),
        }
    }
}

/// Eight bytes of one 64-bit value, index 0 first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ByteSequence {
    bytes: [u8; WORD_BYTES],
}

impl ByteSequence {
    pub fn new(bytes: [u8; WORD_BYTES]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8; WORD_BYTES] {
        &self.bytes
    }

    /// The bytes read back as a word in host order.
    pub fn native_word(&self) -> u64 {
        u64::from_ne_bytes(self.bytes)
    }

    /// First index at which the two sequences differ.
    pub fn first_mismatch(&self, other: &ByteSequence) -> Option<usize> {
        self.bytes
            .iter()
            .zip(other.bytes.iter())
            .position(|(a, b)| a != b)
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] (0x{:x})", hex_string_spaced(&self.bytes), self.native_word())
    }
}

impl From<[u8; WORD_BYTES]> for ByteSequence {
    fn from(bytes: [u8; WORD_BYTES]) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        assert_eq!(ByteOrder::Little.position(0), 0);
        assert_eq!(ByteOrder::Big.position(0), 7);
        assert_eq!(ByteOrder::Big.position(7), 0);
    }

    #[test]
    fn test_first_mismatch() {
        let a = ByteSequence::new([1, 2, 3, 4, 5, 6, 7, 8]);
        let b = ByteSequence::new([1, 2, 3, 0, 5, 6, 7, 8]);
        assert_eq!(a.first_mismatch(&a), None);
        assert_eq!(a.first_mismatch(&b), Some(3));
    }

    #[test]
    fn test_display_lists_bytes() {
        let seq = ByteSequence::new([0x89, 0x67, 0x45, 0x23, 0x01, 0xba, 0xdc, 0xfe]);
        assert!(seq.to_string().starts_with("[89 67 45 23 01 ba dc fe]"));
    }
}
