// Tue Jan 13 2026 - Alex

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signedness {
    Signed,
    Unsigned,
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed => write!(f, "signed"),
            Self::Unsigned => write!(f, "unsigned"),
        }
    }
}

/// Fixed-width integer primitives a packed layout can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl PrimitiveType {
    pub fn size(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    /// Natural alignment on conventional 64-bit ABIs.
    pub fn alignment(self) -> usize {
        self.size()
    }

    pub fn bits(self) -> u32 {
        self.size() as u32 * 8
    }

    pub fn signedness(self) -> Signedness {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Signedness::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 => Signedness::Unsigned,
        }
    }

    pub fn is_signed(self) -> bool {
        self.signedness() == Signedness::Signed
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_signed() { 'i' } else { 'u' };
        write!(f, "{}{}", prefix, self.bits())
    }
}
