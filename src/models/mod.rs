mod booking;
mod errors;
#[cfg(test)]
mod tests;
mod transaction;

pub use booking::Booking;
pub use errors::RecordError;
pub(crate) use transaction::RecordDraft;
pub use transaction::TransactionRecord;
