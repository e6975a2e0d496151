use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoneyError {
    #[error("Money error: amount [{raw}] has no parsable digits: {source}")]
    InvalidAmount {
        raw: String,
        #[source]
        source: ParseIntError
    },
    #[error("Money error: [{0}] is not an ISO 4217 currency code")]
    UnknownCurrencyCode(String)
}
