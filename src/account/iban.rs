use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::account::errors::AccountIdentifierError;
use crate::account::normalize_identifier;

/// Registered IBAN length per country, sorted by country code.
static IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AD", 24), ("AE", 23), ("AL", 28), ("AT", 20), ("AZ", 28), ("BA", 20), ("BE", 16),
    ("BG", 22), ("BH", 22), ("BR", 29), ("BY", 28), ("CH", 21), ("CR", 22), ("CY", 28),
    ("CZ", 24), ("DE", 22), ("DK", 18), ("DO", 28), ("EE", 20), ("EG", 29), ("ES", 24),
    ("FI", 18), ("FO", 18), ("FR", 27), ("GB", 22), ("GE", 22), ("GI", 23), ("GL", 18),
    ("GR", 27), ("GT", 28), ("HR", 21), ("HU", 28), ("IE", 22), ("IL", 23), ("IQ", 23),
    ("IS", 26), ("IT", 27), ("JO", 30), ("KW", 30), ("KZ", 20), ("LB", 28), ("LC", 32),
    ("LI", 21), ("LT", 20), ("LU", 20), ("LV", 21), ("MC", 27), ("MD", 24), ("ME", 22),
    ("MK", 19), ("MR", 27), ("MT", 31), ("MU", 30), ("NL", 18), ("NO", 15), ("PK", 24),
    ("PL", 28), ("PS", 29), ("PT", 25), ("QA", 29), ("RO", 24), ("RS", 22), ("SA", 24),
    ("SC", 31), ("SE", 24), ("SI", 19), ("SK", 24), ("SM", 27), ("ST", 25), ("SV", 28),
    ("TL", 23), ("TN", 24), ("TR", 26), ("UA", 29), ("VA", 22), ("VG", 24), ("XK", 20),
];

/// Countries whose BBAN is numeric and split into a branch identifier of the
/// given length followed by the account number.
static DOMESTIC_LAYOUTS: &[(&str, usize)] = &[
    ("AT", 5),
    ("DE", 8),
];

/// An International Bank Account Number that passed structural and checksum
/// validation. Stored in its electronic format (no spaces, upper case).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Iban(String);

impl Iban {
    /// Validates an already normalized identifier.
    pub fn parse(normalized: &str) -> Result<Self, AccountIdentifierError> {
        if normalized.is_empty() {
            return Err(AccountIdentifierError::Empty);
        }

        if !looks_like_iban(normalized) {
            return Err(AccountIdentifierError::NotAnIban);
        }

        if !normalized.bytes().all(|byte| byte.is_ascii_uppercase() || byte.is_ascii_digit()) {
            return Err(AccountIdentifierError::InvalidCharacters);
        }

        let country = &normalized[..2];
        let expected = IBAN_LENGTHS.binary_search_by(|(code, _)| code.cmp(&country))
            .map(|index| IBAN_LENGTHS[index].1)
            .map_err(|_| AccountIdentifierError::UnknownCountry(country.to_string()))?;

        if normalized.len() != expected {
            return Err(AccountIdentifierError::InvalidLength {
                country: country.to_string(),
                expected,
                actual: normalized.len()
            });
        }

        if domestic_layout(country).is_some() && !normalized[4..].bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(AccountIdentifierError::NonNumericBban { country: country.to_string() });
        }

        if mod97(normalized) != 1 {
            return Err(AccountIdentifierError::InvalidChecksum);
        }

        Ok(Iban(normalized.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Bank/branch part of the BBAN, for countries with a known domestic layout.
    pub fn branch_id(&self) -> Option<&str> {
        let branch_length = domestic_layout(self.country_code())?;
        Some(&self.bban()[..branch_length])
    }

    /// Account number part of the BBAN, for countries with a known domestic layout.
    pub fn account_number(&self) -> Option<&str> {
        let branch_length = domestic_layout(self.country_code())?;
        Some(&self.bban()[branch_length..])
    }
}

impl Display for Iban {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for Iban {
    type Err = AccountIdentifierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Iban::parse(&normalize_identifier(value))
    }
}

/// Two letters followed by two digits.
pub(crate) fn looks_like_iban(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() > 4
        && bytes[0].is_ascii_alphabetic()
        && bytes[1].is_ascii_alphabetic()
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit()
}

fn domestic_layout(country: &str) -> Option<usize> {
    DOMESTIC_LAYOUTS.iter()
        .find(|(code, _)| *code == country)
        .map(|(_, branch_length)| *branch_length)
}

/// ISO 7064 MOD 97-10 over the rearranged IBAN.
fn mod97(iban: &str) -> u32 {
    let rearranged = iban[4..].bytes().chain(iban[..4].bytes());

    rearranged.fold(0u32, |remainder, byte| {
        if byte.is_ascii_digit() {
            (remainder * 10 + u32::from(byte - b'0')) % 97
        } else {
            (remainder * 100 + u32::from(byte - b'A') + 10) % 97
        }
    })
}
