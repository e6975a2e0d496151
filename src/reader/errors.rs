use thiserror::Error;

use crate::schema::DecodeError;
use crate::types::RowNumber;

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("Could not open export: {0}")]
    Io(#[from] std::io::Error)
}

/// A row that could not be decoded, with the physical line it starts on.
#[derive(Debug, Error)]
#[error("Row [{row}]: {source}")]
pub struct RowError {
    pub row: RowNumber,
    #[source]
    pub source: DecodeError
}
