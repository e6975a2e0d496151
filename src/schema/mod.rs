mod column;
mod errors;
mod transaction_schema;

pub use column::{Column, Field, FieldKind};
pub use errors::{DecodeError, SchemaError};
pub use transaction_schema::TransactionSchema;
