mod errors;
mod iban;
mod validator;

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Serialize, Serializer};

pub use errors::AccountIdentifierError;
pub use iban::Iban;
pub use validator::{AccountIdentifierValidator, IbanValidator, LenientValidator};

/// A validated reference to a bank account.
///
/// Once constructed the value is in its canonical form: whitespace removed and,
/// for IBANs, upper case.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum AccountIdentifier {
    Iban(Iban),
    /// An identifier that is not an IBAN, e.g. a domestic account number.
    /// Only produced by [`LenientValidator`].
    Unknown(String)
}

impl AccountIdentifier {
    pub fn as_str(&self) -> &str {
        match self {
            AccountIdentifier::Iban(iban) => iban.as_str(),
            AccountIdentifier::Unknown(identifier) => identifier
        }
    }

    pub fn as_iban(&self) -> Option<&Iban> {
        match self {
            AccountIdentifier::Iban(iban) => Some(iban),
            AccountIdentifier::Unknown(_) => None
        }
    }
}

/// Removes all whitespace (the export may pad or group identifiers) and
/// upper-cases the rest.
pub fn normalize_identifier(text: &str) -> String {
    text.chars()
        .filter(|character| !character.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

impl Display for AccountIdentifier {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl Serialize for AccountIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
