use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AccountIdentifierError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier is not an IBAN")]
    NotAnIban,
    #[error("identifier contains characters other than A-Z and 0-9")]
    InvalidCharacters,
    #[error("country code [{0}] is not supported")]
    UnknownCountry(String),
    #[error("IBANs of country [{country}] must be {expected} characters long, got {actual}")]
    InvalidLength {
        country: String,
        expected: usize,
        actual: usize
    },
    #[error("IBANs of country [{country}] must have a numeric BBAN")]
    NonNumericBban {
        country: String
    },
    #[error("checksum does not match")]
    InvalidChecksum
}
