use std::fmt;
use std::fmt::{Display, Formatter};

use crate::types::ColumnIndex;

/// How the text of a cell is turned into a value.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Date,
    Account
}

/// The fields of a CAMT CSV row that are mapped onto a record.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Field {
    OwnerIban,
    PostedAt,
    ValuedAt,
    Comment,
    Purpose,
    Creditor,
    MandateReference,
    EndToEndCustomerReference,
    PartnerName,
    PartnerAccountId,
    Amount,
    CurrencyCode
}

impl Field {
    /// Every mapped field, in column order.
    pub const ALL: [Field; 12] = [
        Field::OwnerIban,
        Field::PostedAt,
        Field::ValuedAt,
        Field::Comment,
        Field::Purpose,
        Field::Creditor,
        Field::MandateReference,
        Field::EndToEndCustomerReference,
        Field::PartnerName,
        Field::PartnerAccountId,
        Field::Amount,
        Field::CurrencyCode
    ];

    /// 1-based column of the field in the export. Columns 9 to 11, 14 and
    /// everything after 16 carry nothing this crate maps.
    pub fn column(self) -> ColumnIndex {
        match self {
            Field::OwnerIban => 1,
            Field::PostedAt => 2,
            Field::ValuedAt => 3,
            Field::Comment => 4,
            Field::Purpose => 5,
            Field::Creditor => 6,
            Field::MandateReference => 7,
            Field::EndToEndCustomerReference => 8,
            Field::PartnerName => 12,
            Field::PartnerAccountId => 13,
            Field::Amount => 15,
            Field::CurrencyCode => 16
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::OwnerIban | Field::PartnerAccountId => FieldKind::Account,
            Field::PostedAt | Field::ValuedAt => FieldKind::Date,
            _ => FieldKind::Text
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::OwnerIban => "ownerIBAN",
            Field::PostedAt => "postedAt",
            Field::ValuedAt => "valuedAt",
            Field::Comment => "comment",
            Field::Purpose => "purpose",
            Field::Creditor => "creditor",
            Field::MandateReference => "mandateReference",
            Field::EndToEndCustomerReference => "endToEndCustomerReference",
            Field::PartnerName => "partnerName",
            Field::PartnerAccountId => "partnerAccountID",
            Field::Amount => "amount",
            Field::CurrencyCode => "currencyCode"
        }
    }

    /// Fields every schema has to require because a record cannot exist without them.
    pub fn is_always_required(self) -> bool {
        matches!(self, Field::OwnerIban | Field::PostedAt)
    }
}

impl Display for Field {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One entry of a schema's column table.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Column {
    pub field: Field,
    pub required: bool
}

impl Column {
    pub fn index(&self) -> ColumnIndex {
        self.field.column()
    }

    pub fn kind(&self) -> FieldKind {
        self.field.kind()
    }
}
