// Fri Jan 16 2026 - Alex

use crate::structure::{Offset, PackedLayout, PrimitiveType, Size, StructureError};
use std::mem;

/// Structural queries answered by the compiler for a concrete aggregate type.
///
/// Nothing here reads an instance: sizes come from `size_of` and offsets
/// from `offset_of!`.
pub trait Aggregate {
    const NAME: &'static str;

    fn size_of() -> Size;

    fn offset_of(member: &str) -> Result<Offset, StructureError>;
}

/// A four-field aggregate stored with `#[repr(C, packed)]`.
pub trait PackedAggregate: Aggregate {
    const FIELDS: [(&'static str, PrimitiveType); 4];

    /// Layout the fields should have when packing holds.
    fn descriptor() -> Result<PackedLayout, StructureError> {
        PackedLayout::from_fields(Self::NAME, &Self::FIELDS)
    }

    /// Sizes of the member types, in declaration order.
    fn member_type_sizes() -> [Size; 4];

    /// Sizes of this instance's members, in declaration order.
    fn member_sizes(&self) -> [Size; 4];

    fn instance_size(&self) -> Size;
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedAggregateUnsigned {
    pub a: u64,
    pub b: u32,
    pub c: u16,
    pub d: u8,
}

#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackedAggregateSigned {
    pub a: i64,
    pub b: i32,
    pub c: i16,
    pub d: i8,
}

macro_rules! impl_packed_aggregate {
    ($ty:ident, $name:literal, [$(($field:ident, $prim:ident, $rust:ty)),+ $(,)?]) => {
        impl Aggregate for $ty {
            const NAME: &'static str = $name;

            fn size_of() -> Size {
                Size::new(mem::size_of::<$ty>())
            }

            fn offset_of(member: &str) -> Result<Offset, StructureError> {
                match member {
                    $(stringify!($field) => Ok(Offset::new(mem::offset_of!($ty, $field))),)+
                    _ => Err(StructureError::FieldNotFound(format!("{}::{}", $name, member))),
                }
            }
        }

        impl PackedAggregate for $ty {
            const FIELDS: [(&'static str, PrimitiveType); 4] = [
                $((stringify!($field), PrimitiveType::$prim),)+
            ];

            fn member_type_sizes() -> [Size; 4] {
                [$(Size::of::<$rust>(),)+]
            }

            fn member_sizes(&self) -> [Size; 4] {
                // Braces copy each field out; packed fields cannot be borrowed.
                [$(Size::of_val(&{ self.$field }),)+]
            }

            fn instance_size(&self) -> Size {
                Size::of_val(self)
            }
        }
    };
}

impl_packed_aggregate!(PackedAggregateUnsigned, "Au", [
    (a, U64, u64),
    (b, U32, u32),
    (c, U16, u16),
    (d, U8, u8),
]);

impl_packed_aggregate!(PackedAggregateSigned, "Ai", [
    (a, I64, i64),
    (b, I32, i32),
    (c, I16, i16),
    (d, I8, i8),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_sizes() {
        assert_eq!(PackedAggregateUnsigned::size_of().as_usize(), 15);
        assert_eq!(PackedAggregateSigned::size_of().as_usize(), 15);
        assert_eq!(PackedAggregateUnsigned::default().instance_size().as_usize(), 15);
    }

    #[test]
    fn test_compiler_offsets_match_descriptor() {
        let layout = PackedAggregateSigned::descriptor().unwrap();
        for (name, _) in PackedAggregateSigned::FIELDS {
            assert_eq!(
                PackedAggregateSigned::offset_of(name).unwrap(),
                layout.offset_of(name).unwrap()
            );
        }
        assert_eq!(PackedAggregateUnsigned::offset_of("d").unwrap().as_usize(), 14);
    }

    #[test]
    fn test_member_sizes() {
        let value = PackedAggregateUnsigned { a: 1, b: 2, c: 3, d: 4 };
        let sizes: Vec<usize> = value.member_sizes().iter().map(Size::as_usize).collect();
        assert_eq!(sizes, vec![8, 4, 2, 1]);
        assert_eq!(value.member_sizes(), PackedAggregateUnsigned::member_type_sizes());
    }

    #[test]
    fn test_unknown_member() {
        assert!(PackedAggregateSigned::offset_of("z").is_err());
    }
}
