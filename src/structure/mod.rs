// Tue Jan 15 2026 - Alex

pub mod bytes;
pub mod error;
pub mod field;
pub mod layout;
pub mod offset;
pub mod overlap;
pub mod packed;
pub mod size;
pub mod type_info;

pub use bytes::{ByteOrder, ByteSequence};
pub use error::StructureError;
pub use field::Field;
pub use layout::{PackedLayout, PackedLayoutBuilder};
pub use offset::Offset;
pub use overlap::{reinterpret_word, OverlapAggregate, OverlapStorage};
pub use packed::{Aggregate, PackedAggregate, PackedAggregateSigned, PackedAggregateUnsigned};
pub use size::Size;
pub use type_info::{PrimitiveType, Signedness};
