// Fri Jan 16 2026 - Alex

use crate::structure::{Aggregate, Offset, Size, StructureError};
use std::fmt;
use std::mem;

pub const WORD_BYTES: usize = 8;

// Reinterpretation below is only sound while both views cover the same bytes.
const _: () = assert!(mem::size_of::<[u8; WORD_BYTES]>() == mem::size_of::<u64>());

/// Overlapping storage: a byte array and a word sharing the same eight bytes.
#[repr(C)]
#[derive(Clone, Copy)]
pub union OverlapStorage {
    pub bytes: [u8; WORD_BYTES],
    pub word: u64,
}

/// Single-field wrapper around [`OverlapStorage`].
#[repr(C)]
#[derive(Clone, Copy)]
pub struct OverlapAggregate {
    pub storage: OverlapStorage,
}

impl OverlapAggregate {
    pub fn from_word(word: u64) -> Self {
        Self {
            storage: OverlapStorage { word },
        }
    }

    pub fn from_bytes(bytes: [u8; WORD_BYTES]) -> Self {
        Self {
            storage: OverlapStorage { bytes },
        }
    }

    pub fn set_word(&mut self, word: u64) {
        self.storage.word = word;
    }

    pub fn set_bytes(&mut self, bytes: [u8; WORD_BYTES]) {
        self.storage.bytes = bytes;
    }

    pub fn word(&self) -> u64 {
        // SAFETY: both alternatives are plain integers of identical size, so
        // every bit pattern written through one is a valid value of the other.
        unsafe { self.storage.word }
    }

    pub fn bytes(&self) -> [u8; WORD_BYTES] {
        // SAFETY: see `word`.
        unsafe { self.storage.bytes }
    }
}

impl Default for OverlapAggregate {
    fn default() -> Self {
        Self::from_word(0)
    }
}

impl PartialEq for OverlapAggregate {
    fn eq(&self, other: &Self) -> bool {
        self.bytes() == other.bytes()
    }
}

impl Eq for OverlapAggregate {}

impl fmt::Debug for OverlapAggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlapAggregate")
            .field("bytes", &self.bytes())
            .field("word", &format_args!("0x{:016x}", self.word()))
            .finish()
    }
}

impl Aggregate for OverlapAggregate {
    const NAME: &'static str = "B";

    fn size_of() -> Size {
        Size::new(mem::size_of::<OverlapAggregate>())
    }

    fn offset_of(member: &str) -> Result<Offset, StructureError> {
        let base = mem::offset_of!(OverlapAggregate, storage);
        match member {
            "bytes" => Ok(Offset::new(base + mem::offset_of!(OverlapStorage, bytes))),
            "word" => Ok(Offset::new(base + mem::offset_of!(OverlapStorage, word))),
            _ => Err(StructureError::FieldNotFound(format!("{}::{}", Self::NAME, member))),
        }
    }
}

/// In-memory bytes of `value`, read back through the byte-array alternative.
pub fn reinterpret_word(value: u64) -> [u8; WORD_BYTES] {
    OverlapAggregate::from_word(value).bytes()
}
