// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    #[error("Field not found: {0}")]
    FieldNotFound(String),
    #[error("Duplicate field: {0}")]
    DuplicateField(String),
    #[error("Layout has no fields: {0}")]
    EmptyLayout(String),
}
