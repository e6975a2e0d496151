mod currency;
mod errors;
mod money;

pub use currency::Currency;
pub use errors::MoneyError;
pub use money::{normalize_minor_units, MoneyAmount};

/// 1-based column number as used by the export.
pub type ColumnIndex = usize;
/// 1-based physical row number within an export file.
pub type RowNumber = u64;
