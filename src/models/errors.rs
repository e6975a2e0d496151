use thiserror::Error;

use crate::schema::Field;
use crate::types::MoneyError;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Field [{field}] is required to build {purpose} but is not set")]
    MissingField {
        field: Field,
        purpose: &'static str
    },
    #[error(transparent)]
    Money(#[from] MoneyError)
}

impl RecordError {
    pub fn missing_field(field: Field, purpose: &'static str) -> Self {
        Self::MissingField { field, purpose }
    }
}
