use std::sync::Arc;

use crate::account::{normalize_identifier, AccountIdentifier, AccountIdentifierError, AccountIdentifierValidator, IbanValidator};
use crate::converters::Converter;

/// Normalizes whitespace and case, then hands the identifier to a validator.
#[derive(Debug, Clone)]
pub struct AccountConverter {
    validator: Arc<dyn AccountIdentifierValidator>
}

impl AccountConverter {
    pub fn new(validator: impl AccountIdentifierValidator + 'static) -> Self {
        Self {
            validator: Arc::new(validator)
        }
    }
}

impl Default for AccountConverter {
    fn default() -> Self {
        AccountConverter::new(IbanValidator)
    }
}

impl Converter for AccountConverter {
    type Value = AccountIdentifier;
    type Error = AccountIdentifierError;

    fn from_cell(&self, text: &str) -> Result<AccountIdentifier, AccountIdentifierError> {
        self.validator.validate(&normalize_identifier(text))
    }

    fn to_cell(&self, value: &AccountIdentifier) -> String {
        value.as_str().to_string()
    }

    fn describe(&self) -> String {
        format!("an account identifier accepted by {:?}", self.validator)
    }
}
