// Tue Jan 13 2026 - Alex

use crate::structure::{Offset, PrimitiveType, Size};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    offset: Offset,
    ty: PrimitiveType,
}

impl Field {
    pub fn new(name: &str, offset: Offset, ty: PrimitiveType) -> Self {
        Self {
            name: name.to_string(),
            offset,
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn primitive(&self) -> PrimitiveType {
        self.ty
    }

    pub fn size(&self) -> Size {
        Size::new(self.ty.size())
    }

    pub fn end_offset(&self) -> Offset {
        self.offset.advance(self.size())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}: {}", self.name, self.offset, self.ty)
    }
}
