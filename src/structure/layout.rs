// Tue Jan 13 2026 - Alex

use crate::structure::{Field, Offset, PrimitiveType, Size, StructureError};
use indexmap::IndexMap;

/// Byte-oriented layout descriptor with zero inter-field padding.
///
/// Offsets are pure arithmetic over the declared field order and widths:
/// every field starts where the previous one ends, so the total size is
/// always the sum of the field sizes.
#[derive(Debug, Clone)]
pub struct PackedLayout {
    name: String,
    fields: IndexMap<String, Field>,
    size: Size,
}

impl PackedLayout {
    pub fn builder(name: &str) -> PackedLayoutBuilder {
        PackedLayoutBuilder::new(name)
    }

    pub fn from_fields(name: &str, fields: &[(&str, PrimitiveType)]) -> Result<Self, StructureError> {
        fields
            .iter()
            .fold(Self::builder(name), |builder, &(field, ty)| builder.field(field, ty))
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn offset_of(&self, name: &str) -> Result<Offset, StructureError> {
        self.get_field(name)
            .map(Field::offset)
            .ok_or_else(|| StructureError::FieldNotFound(format!("{}::{}", self.name, name)))
    }

    /// Sum of the sizes of every field declared before `name`.
    pub fn preceding_size(&self, name: &str) -> Result<Size, StructureError> {
        let index = self
            .fields
            .get_index_of(name)
            .ok_or_else(|| StructureError::FieldNotFound(format!("{}::{}", self.name, name)))?;
        Ok(self.fields.values().take(index).map(Field::size).sum())
    }

    /// Size the same fields would occupy under natural C alignment.
    pub fn natural_size(&self) -> Size {
        let max_align = self
            .fields
            .values()
            .map(|f| f.primitive().alignment())
            .max()
            .unwrap_or(1);

        let mut current = 0usize;
        for field in self.fields.values() {
            let align = field.primitive().alignment();
            current = (current + align - 1) & !(align - 1);
            current += field.size().as_usize();
        }
        current = (current + max_align - 1) & !(max_align - 1);
        Size::new(current)
    }

    pub fn padding_saved(&self) -> usize {
        self.natural_size().as_usize() - self.size.as_usize()
    }
}

pub struct PackedLayoutBuilder {
    name: String,
    fields: Vec<(String, PrimitiveType)>,
}

impl PackedLayoutBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, ty: PrimitiveType) -> Self {
        self.fields.push((name.to_string(), ty));
        self
    }

    pub fn build(self) -> Result<PackedLayout, StructureError> {
        if self.fields.is_empty() {
            return Err(StructureError::EmptyLayout(self.name));
        }

        let mut fields = IndexMap::with_capacity(self.fields.len());
        let mut offset = Offset::zero();
        for (name, ty) in self.fields {
            if fields.contains_key(&name) {
                return Err(StructureError::DuplicateField(format!("{}::{}", self.name, name)));
            }
            let field = Field::new(&name, offset, ty);
            offset = field.end_offset();
            fields.insert(name, field);
        }

        Ok(PackedLayout {
            name: self.name,
            fields,
            size: Size::new(offset.as_usize()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unsigned_layout() -> PackedLayout {
        PackedLayout::from_fields(
            "Au",
            &[
                ("a", PrimitiveType::U64),
                ("b", PrimitiveType::U32),
                ("c", PrimitiveType::U16),
                ("d", PrimitiveType::U8),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_offsets_are_cumulative() {
        let layout = unsigned_layout();
        assert_eq!(layout.offset_of("a").unwrap().as_usize(), 0);
        assert_eq!(layout.offset_of("b").unwrap().as_usize(), 8);
        assert_eq!(layout.offset_of("c").unwrap().as_usize(), 12);
        assert_eq!(layout.offset_of("d").unwrap().as_usize(), 14);
        assert_eq!(layout.size().as_usize(), 15);
    }

    #[test]
    fn test_preceding_size_matches_offset() {
        let layout = unsigned_layout();
        for field in layout.fields() {
            assert_eq!(field.offset(), layout.preceding_size(field.name()).unwrap());
        }
    }

    #[test]
    fn test_natural_size_has_tail_padding() {
        let layout = unsigned_layout();
        assert_eq!(layout.natural_size().as_usize(), 16);
        assert_eq!(layout.padding_saved(), 1);
    }

    #[test]
    fn test_unknown_field() {
        let layout = unsigned_layout();
        assert_eq!(
            layout.offset_of("e"),
            Err(StructureError::FieldNotFound("Au::e".to_string()))
        );
    }

    #[test]
    fn test_builder_rejects_duplicates_and_empty() {
        let dup = PackedLayout::builder("Dup")
            .field("a", PrimitiveType::U8)
            .field("a", PrimitiveType::U16)
            .build();
        assert!(matches!(dup, Err(StructureError::DuplicateField(_))));

        let empty = PackedLayout::builder("Empty").build();
        assert!(matches!(empty, Err(StructureError::EmptyLayout(_))));
    }
}
