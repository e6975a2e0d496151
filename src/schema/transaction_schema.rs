use crate::account::LenientValidator;
use crate::converters::{AccountConverter, Converter, DateConverter};
use crate::models::{RecordDraft, TransactionRecord};
use crate::schema::{Column, DecodeError, Field, FieldKind, SchemaError};

/// Number of cells written by [`TransactionSchema::encode`]: up to the last mapped column.
const ENCODED_WIDTH: usize = 16;

/// Column layout of the CAMT CSV export together with the converters used for
/// typed cells.
///
/// There is a single layout; what differs between exports is which fields must
/// be present. [`TransactionSchema::general`] and [`TransactionSchema::strict`]
/// are the two presets, and single flags can be changed with
/// [`TransactionSchema::require`] and [`TransactionSchema::make_optional`].
///
/// The owner account must be an IBAN. The partner column may also hold a
/// domestic account number, so it is read with [`LenientValidator`] unless
/// configured otherwise.
#[derive(Debug, Clone)]
pub struct TransactionSchema {
    columns: Vec<Column>,
    dates: DateConverter,
    owner_accounts: AccountConverter,
    partner_accounts: AccountConverter
}

impl TransactionSchema {
    /// Requires the owner account, the booking date and the transaction type label.
    pub fn general() -> Self {
        Self::with_required(&[Field::OwnerIban, Field::PostedAt, Field::Comment])
    }

    /// Additionally requires the value date and the purpose.
    pub fn strict() -> Self {
        Self::general()
            .require(Field::ValuedAt)
            .require(Field::Purpose)
    }

    /// A schema requiring exactly the given fields plus the ones that are
    /// always required.
    pub fn with_required(fields: &[Field]) -> Self {
        let columns = Field::ALL.iter()
            .map(|field| Column {
                field: *field,
                required: field.is_always_required() || fields.contains(field)
            })
            .collect();

        Self {
            columns,
            dates: DateConverter::default(),
            owner_accounts: AccountConverter::default(),
            partner_accounts: AccountConverter::new(LenientValidator)
        }
    }

    pub fn require(mut self, field: Field) -> Self {
        self.set_required(field, true);
        self
    }

    pub fn make_optional(mut self, field: Field) -> Result<Self, SchemaError> {
        if field.is_always_required() {
            return Err(SchemaError::AlwaysRequired { field });
        }

        self.set_required(field, false);
        Ok(self)
    }

    pub fn with_date_converter(mut self, dates: DateConverter) -> Self {
        self.dates = dates;
        self
    }

    /// Uses the converter for both the owner and the partner column.
    pub fn with_account_converter(mut self, accounts: AccountConverter) -> Self {
        self.partner_accounts = accounts.clone();
        self.owner_accounts = accounts;
        self
    }

    pub fn with_partner_account_converter(mut self, accounts: AccountConverter) -> Self {
        self.partner_accounts = accounts;
        self
    }

    /// The column table, in column order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.columns.iter().any(|column| column.field == field && column.required)
    }

    /// Decodes one row. `cells[0]` is column 1 of the export.
    ///
    /// Cells of columns that are not in the table are ignored, as are missing
    /// trailing cells of optional columns. A cell is blank when it is empty
    /// after trimming; blank optional cells leave the field unset.
    ///
    /// # Errors
    /// Returns `DecodeError` if:
    /// - The row has no cells or only blank ones.
    /// - A required cell is blank or missing.
    /// - A date or account identifier cell cannot be converted.
    pub fn decode<S: AsRef<str>>(&self, cells: &[S]) -> Result<TransactionRecord, DecodeError> {
        if cells.iter().all(|cell| is_blank(cell.as_ref())) {
            return Err(DecodeError::malformed_row(format!("row of {} blank cells", cells.len())));
        }

        let mut draft = RecordDraft::default();

        for column in &self.columns {
            let cell: Option<&str> = cells.get(column.index() - 1)
                .map(|cell| cell.as_ref())
                .filter(|text| !is_blank(text));

            let Some(text) = cell else {
                if column.required {
                    return Err(DecodeError::missing_required_field(column.field));
                }
                continue;
            };

            match column.kind() {
                FieldKind::Text => draft.set_text(column.field, text.to_string()),
                FieldKind::Date => {
                    let date = self.dates.from_cell(text).map_err(|source| {
                        DecodeError::date_format(column.field, text, self.dates.describe(), source)
                    })?;
                    draft.set_date(column.field, date);
                },
                FieldKind::Account => {
                    let identifier = self.account_converter(column.field).from_cell(text).map_err(|source| {
                        DecodeError::invalid_account_identifier(column.field, text, source)
                    })?;
                    draft.set_account(column.field, identifier);
                }
            }
        }

        draft.finish()
    }

    /// Writes the mapped fields of a record back into export cells. Columns
    /// without a mapped field are left empty, dates use the converter's output format.
    pub fn encode(&self, record: &TransactionRecord) -> Vec<String> {
        let mut cells = vec![String::new(); ENCODED_WIDTH];

        for column in &self.columns {
            let text = match column.field {
                Field::OwnerIban => Some(self.owner_accounts.to_cell(record.owner_iban())),
                Field::PostedAt => Some(self.dates.to_cell(&record.posted_at())),
                Field::ValuedAt => record.valued_at().map(|date| self.dates.to_cell(&date)),
                Field::PartnerAccountId => record.partner_account_id().map(|identifier| self.partner_accounts.to_cell(identifier)),
                field => record.text(field).map(str::to_string)
            };

            if let Some(text) = text {
                cells[column.index() - 1] = text;
            }
        }

        cells
    }

    fn account_converter(&self, field: Field) -> &AccountConverter {
        match field {
            Field::PartnerAccountId => &self.partner_accounts,
            _ => &self.owner_accounts
        }
    }

    fn set_required(&mut self, field: Field, required: bool) {
        for column in self.columns.iter_mut().filter(|column| column.field == field) {
            column.required = required;
        }
    }
}

impl Default for TransactionSchema {
    fn default() -> Self {
        TransactionSchema::general()
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
