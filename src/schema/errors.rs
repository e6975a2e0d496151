use chrono::format::ParseError;
use thiserror::Error;

use crate::account::AccountIdentifierError;
use crate::schema::Field;
use crate::types::ColumnIndex;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Required field [{field}] in column [{column}] is blank")]
    MissingRequiredField {
        field: Field,
        column: ColumnIndex
    },
    #[error("Field [{field}] in column [{column}] is not {expected}: [{raw}]")]
    DateFormat {
        field: Field,
        column: ColumnIndex,
        raw: String,
        expected: String,
        #[source]
        source: ParseError
    },
    #[error("Field [{field}] in column [{column}] is not a valid account identifier: [{raw}] ({source})")]
    InvalidAccountIdentifier {
        field: Field,
        column: ColumnIndex,
        raw: String,
        #[source]
        source: AccountIdentifierError
    },
    #[error("Malformed row: {reason}")]
    MalformedRow {
        reason: String
    }
}

impl DecodeError {
    pub fn missing_required_field(field: Field) -> Self {
        Self::MissingRequiredField { field, column: field.column() }
    }

    pub fn date_format(field: Field, raw: &str, expected: String, source: ParseError) -> Self {
        Self::DateFormat {
            field,
            column: field.column(),
            raw: raw.to_string(),
            expected,
            source
        }
    }

    pub fn invalid_account_identifier(field: Field, raw: &str, source: AccountIdentifierError) -> Self {
        Self::InvalidAccountIdentifier {
            field,
            column: field.column(),
            raw: raw.to_string(),
            source
        }
    }

    pub fn malformed_row(reason: impl Into<String>) -> Self {
        Self::MalformedRow { reason: reason.into() }
    }

    /// The field the failure is about, if it concerns a single cell.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::MissingRequiredField { field, .. }
            | Self::DateFormat { field, .. }
            | Self::InvalidAccountIdentifier { field, .. } => Some(*field),
            Self::MalformedRow { .. } => None
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SchemaError {
    #[error("Field [{field}] is always required")]
    AlwaysRequired {
        field: Field
    }
}
