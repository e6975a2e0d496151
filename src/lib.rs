//! Decoding of CAMT CSV bank statement exports into typed transaction records.
//!
//! A row of raw cells goes through a [`TransactionSchema`], which maps columns
//! onto fields and converts dates and account identifiers. The resulting
//! [`TransactionRecord`] keeps amount and currency as exported and derives a
//! [`MoneyAmount`] on request. [`CamtReader`] applies the export's CSV dialect
//! to a byte source and yields one result per row.

pub mod account;
pub mod converters;
pub mod models;
pub mod reader;
pub mod schema;
pub mod types;

pub use account::AccountIdentifier;
pub use models::{Booking, RecordError, TransactionRecord};
pub use reader::{CamtReader, DecodedRow, ReaderError, RowError};
pub use schema::{DecodeError, Field, TransactionSchema};
pub use types::{Currency, MoneyAmount, MoneyError};
