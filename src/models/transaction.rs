use chrono::NaiveDate;

use crate::account::AccountIdentifier;
use crate::models::errors::RecordError;
use crate::schema::{DecodeError, Field};
use crate::types::MoneyAmount;

/// One decoded row of a CAMT CSV export.
///
/// Text fields hold the cell content verbatim. The amount and currency are kept
/// as the raw strings of the export; [`TransactionRecord::money_amount`] derives
/// the typed value from them on every call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionRecord {
    owner_iban: AccountIdentifier,
    posted_at: NaiveDate,
    valued_at: Option<NaiveDate>,
    comment: Option<String>,
    purpose: Option<String>,
    creditor: Option<String>,
    mandate_reference: Option<String>,
    end_to_end_customer_reference: Option<String>,
    partner_name: Option<String>,
    partner_account_id: Option<AccountIdentifier>,
    amount: Option<String>,
    currency_code: Option<String>
}

impl TransactionRecord {
    /// Account the export was taken from.
    pub fn owner_iban(&self) -> &AccountIdentifier {
        &self.owner_iban
    }

    /// Booking date.
    pub fn posted_at(&self) -> NaiveDate {
        self.posted_at
    }

    /// Value date.
    pub fn valued_at(&self) -> Option<NaiveDate> {
        self.valued_at
    }

    /// Transaction type label, e.g. `Kartenzahlung` or `Gutschrift`.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    pub fn creditor(&self) -> Option<&str> {
        self.creditor.as_deref()
    }

    pub fn mandate_reference(&self) -> Option<&str> {
        self.mandate_reference.as_deref()
    }

    pub fn end_to_end_customer_reference(&self) -> Option<&str> {
        self.end_to_end_customer_reference.as_deref()
    }

    pub fn partner_name(&self) -> Option<&str> {
        self.partner_name.as_deref()
    }

    pub fn partner_account_id(&self) -> Option<&AccountIdentifier> {
        self.partner_account_id.as_ref()
    }

    /// The amount exactly as exported, e.g. `"-1.234,56"`.
    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    /// Text of a text field, `None` for unset fields and for dates/identifiers.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Comment => self.comment(),
            Field::Purpose => self.purpose(),
            Field::Creditor => self.creditor(),
            Field::MandateReference => self.mandate_reference(),
            Field::EndToEndCustomerReference => self.end_to_end_customer_reference(),
            Field::PartnerName => self.partner_name(),
            Field::Amount => self.amount(),
            Field::CurrencyCode => self.currency_code(),
            Field::OwnerIban | Field::PostedAt | Field::ValuedAt | Field::PartnerAccountId => None
        }
    }

    /// Derives the typed amount from the raw amount and currency code.
    ///
    /// Both columns are optional in the export, so this fails with
    /// [`RecordError::MissingField`] when either is unset. The amount is read
    /// as minor units by dropping all separators, see
    /// [`normalize_minor_units`](crate::types::normalize_minor_units).
    pub fn money_amount(&self) -> Result<MoneyAmount, RecordError> {
        let amount = self.amount.as_deref()
            .ok_or_else(|| RecordError::missing_field(Field::Amount, "a money amount"))?;
        let currency_code = self.currency_code.as_deref()
            .ok_or_else(|| RecordError::missing_field(Field::CurrencyCode, "a money amount"))?;

        Ok(MoneyAmount::parse(amount, currency_code)?)
    }
}

/// Collects decoded cells until every column of a row has been visited.
#[derive(Debug, Default)]
pub(crate) struct RecordDraft {
    owner_iban: Option<AccountIdentifier>,
    posted_at: Option<NaiveDate>,
    valued_at: Option<NaiveDate>,
    comment: Option<String>,
    purpose: Option<String>,
    creditor: Option<String>,
    mandate_reference: Option<String>,
    end_to_end_customer_reference: Option<String>,
    partner_name: Option<String>,
    partner_account_id: Option<AccountIdentifier>,
    amount: Option<String>,
    currency_code: Option<String>
}

impl RecordDraft {
    pub(crate) fn set_text(&mut self, field: Field, text: String) {
        let slot = match field {
            Field::Comment => &mut self.comment,
            Field::Purpose => &mut self.purpose,
            Field::Creditor => &mut self.creditor,
            Field::MandateReference => &mut self.mandate_reference,
            Field::EndToEndCustomerReference => &mut self.end_to_end_customer_reference,
            Field::PartnerName => &mut self.partner_name,
            Field::Amount => &mut self.amount,
            Field::CurrencyCode => &mut self.currency_code,
            Field::OwnerIban | Field::PostedAt | Field::ValuedAt | Field::PartnerAccountId => return
        };

        *slot = Some(text);
    }

    pub(crate) fn set_date(&mut self, field: Field, date: NaiveDate) {
        match field {
            Field::PostedAt => self.posted_at = Some(date),
            Field::ValuedAt => self.valued_at = Some(date),
            _ => {}
        }
    }

    pub(crate) fn set_account(&mut self, field: Field, identifier: AccountIdentifier) {
        match field {
            Field::OwnerIban => self.owner_iban = Some(identifier),
            Field::PartnerAccountId => self.partner_account_id = Some(identifier),
            _ => {}
        }
    }

    pub(crate) fn finish(self) -> Result<TransactionRecord, DecodeError> {
        let owner_iban = self.owner_iban
            .ok_or_else(|| DecodeError::missing_required_field(Field::OwnerIban))?;
        let posted_at = self.posted_at
            .ok_or_else(|| DecodeError::missing_required_field(Field::PostedAt))?;

        Ok(TransactionRecord {
            owner_iban,
            posted_at,
            valued_at: self.valued_at,
            comment: self.comment,
            purpose: self.purpose,
            creditor: self.creditor,
            mandate_reference: self.mandate_reference,
            end_to_end_customer_reference: self.end_to_end_customer_reference,
            partner_name: self.partner_name,
            partner_account_id: self.partner_account_id,
            amount: self.amount,
            currency_code: self.currency_code
        })
    }
}
