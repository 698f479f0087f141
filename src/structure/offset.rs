// Tue Jan 13 2026 - Alex

use crate::structure::Size;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Offset {
    value: usize,
}

impl Offset {
    pub fn new(value: usize) -> Self {
        Self { value }
    }

    pub fn zero() -> Self {
        Self { value: 0 }
    }

    pub fn as_usize(&self) -> usize {
        self.value
    }

    /// Offset of whatever immediately follows `size` bytes placed here.
    pub fn advance(self, size: Size) -> Self {
        Self::new(self.value + size.as_usize())
    }

    pub fn is_aligned(&self, alignment: usize) -> bool {
        alignment == 0 || self.value % alignment == 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<usize> for Offset {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl PartialEq<Size> for Offset {
    fn eq(&self, other: &Size) -> bool {
        self.value == other.as_usize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let offset = Offset::zero().advance(Size::new(8)).advance(Size::new(4));
        assert_eq!(offset.as_usize(), 12);
        assert!(offset.is_aligned(4));
        assert!(!offset.is_aligned(8));
    }
}
