use std::fmt;
use std::fmt::{Display, Formatter};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::currency::Currency;
use crate::types::errors::MoneyError;

/// An exact amount of money expressed in the minor unit of its currency.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct MoneyAmount {
    minor_units: i64,
    currency: Currency
}

impl MoneyAmount {
    pub fn new(minor_units: i64, currency: Currency) -> Self {
        Self { minor_units, currency }
    }

    /// Builds an amount from the raw export strings.
    ///
    /// The amount goes through [`normalize_minor_units`], the code must be an
    /// active ISO 4217 alphabetic code.
    pub fn parse(raw_amount: &str, currency_code: &str) -> Result<Self, MoneyError> {
        let minor_units = normalize_minor_units(raw_amount)?;
        let currency = currency_code.parse::<Currency>()?;

        Ok(Self::new(minor_units, currency))
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The amount in major units, e.g. `-1234` cents become `-12.34`.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.minor_units, u32::from(self.currency.exponent()))
    }
}

impl Display for MoneyAmount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.to_decimal(), self.currency)
    }
}

/// Turns a locale formatted amount such as `"1.234,56"` or `"-5,00"` into minor
/// units by dropping every character that is neither an ASCII digit nor `-`.
///
/// The position of the decimal separator is never inspected. This relies on the
/// export always writing exactly two fractional digits; an amount written with
/// any other number of fractional digits is silently misread.
pub fn normalize_minor_units(raw: &str) -> Result<i64, MoneyError> {
    let digits: String = raw.chars()
        .filter(|character| character.is_ascii_digit() || *character == '-')
        .collect();

    digits.parse::<i64>().map_err(|source| MoneyError::InvalidAmount {
        raw: raw.to_string(),
        source
    })
}
