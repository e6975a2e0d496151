use std::fmt::Debug;

use crate::account::errors::AccountIdentifierError;
use crate::account::iban::{looks_like_iban, Iban};
use crate::account::AccountIdentifier;

/// Decides whether a normalized identifier is acceptable and which kind of
/// [`AccountIdentifier`] it becomes.
pub trait AccountIdentifierValidator: Debug + Send + Sync {
    fn validate(&self, normalized: &str) -> Result<AccountIdentifier, AccountIdentifierError>;
}

/// Accepts IBANs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct IbanValidator;

impl AccountIdentifierValidator for IbanValidator {
    fn validate(&self, normalized: &str) -> Result<AccountIdentifier, AccountIdentifierError> {
        Iban::parse(normalized).map(AccountIdentifier::Iban)
    }
}

/// Accepts IBANs, and keeps anything that does not even look like one as an
/// opaque identifier. Something shaped like an IBAN must still be a valid one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientValidator;

impl AccountIdentifierValidator for LenientValidator {
    fn validate(&self, normalized: &str) -> Result<AccountIdentifier, AccountIdentifierError> {
        if normalized.is_empty() {
            return Err(AccountIdentifierError::Empty);
        }

        if looks_like_iban(normalized) {
            return Iban::parse(normalized).map(AccountIdentifier::Iban);
        }

        Ok(AccountIdentifier::Unknown(normalized.to_string()))
    }
}
