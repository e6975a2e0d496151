mod camt_reader;
mod errors;
mod quote_tracker;

pub use camt_reader::{CamtReader, DecodedRow};
pub use errors::{ReaderError, RowError};
