use chrono::NaiveDate;
use serde::Serialize;

use crate::account::AccountIdentifier;
use crate::models::errors::RecordError;
use crate::models::TransactionRecord;
use crate::schema::Field;
use crate::types::MoneyAmount;

/// A decoded transaction in the shape downstream accounting works with: both
/// dates known and the amount resolved to a [`MoneyAmount`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Booking {
    pub posted_at: NaiveDate,
    pub valued_at: NaiveDate,
    pub owner: AccountIdentifier,
    pub partner: Option<AccountIdentifier>,
    pub partner_name: Option<String>,
    pub amount: MoneyAmount,
    pub purpose: Option<String>,
    pub creditor: Option<String>,
    pub mandate_reference: Option<String>
}

impl TryFrom<&TransactionRecord> for Booking {
    type Error = RecordError;

    fn try_from(record: &TransactionRecord) -> Result<Self, Self::Error> {
        let valued_at = record.valued_at()
            .ok_or_else(|| RecordError::missing_field(Field::ValuedAt, "a booking"))?;

        Ok(Booking {
            posted_at: record.posted_at(),
            valued_at,
            owner: record.owner_iban().clone(),
            partner: record.partner_account_id().cloned(),
            partner_name: record.partner_name().map(str::to_string),
            amount: record.money_amount()?,
            purpose: record.purpose().map(str::to_string),
            creditor: record.creditor().map(str::to_string),
            mandate_reference: record.mandate_reference().map(str::to_string)
        })
    }
}
