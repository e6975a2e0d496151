use super::{Booking, RecordError, TransactionRecord};

use anyhow::Result;
use chrono::NaiveDate;

use crate::schema::{Field, TransactionSchema};
use crate::types::MoneyError;

fn decode_record(amount: &str, currency_code: &str, valued_at: &str) -> Result<TransactionRecord> {
    let cells = [
        "DE02120300000000202051",
        "30.12.20",
        valued_at,
        "Gutschrift",
        "Rechnung 4711",
        "DE98ZZZ09999999999",
        "MREF-0815",
        "E2E-4711",
        "",
        "",
        "",
        "Erika Mustermann",
        "DE89370400440532013000",
        "COBADEFFXXX",
        amount,
        currency_code,
    ];

    Ok(TransactionSchema::general().decode(&cells)?)
}

#[test]
fn test_money_amount_is_derived_from_raw_cells() -> Result<()> {
    let record = decode_record("1.234,56", "EUR", "30.12.20")?;
    let money = record.money_amount()?;

    assert_eq!(money.minor_units(), 123456);
    assert_eq!(money.to_string(), "1234.56 EUR");

    Ok(())
}

#[test]
fn test_money_amount_is_idempotent() -> Result<()> {
    let record = decode_record("-5,00", "EUR", "30.12.20")?;

    assert_eq!(record.money_amount()?, record.money_amount()?);

    Ok(())
}

#[test]
fn test_money_amount_requires_amount_and_currency() -> Result<()> {
    let without_amount = decode_record("", "EUR", "30.12.20")?;
    let without_currency = decode_record("-5,00", " ", "30.12.20")?;

    assert!(matches!(without_amount.money_amount(), Err(RecordError::MissingField { field: Field::Amount, .. })));
    assert!(matches!(without_currency.money_amount(), Err(RecordError::MissingField { field: Field::CurrencyCode, .. })));

    Ok(())
}

#[test]
fn test_money_amount_rejects_unknown_currency_code() -> Result<()> {
    let record = decode_record("-5,00", "XYZ", "30.12.20")?;

    assert!(matches!(record.money_amount(), Err(RecordError::Money(MoneyError::UnknownCurrencyCode(code))) if code == "XYZ"));

    Ok(())
}

#[test]
fn test_money_amount_rejects_amount_without_digits() -> Result<()> {
    let record = decode_record("n/a", "EUR", "30.12.20")?;

    assert!(matches!(record.money_amount(), Err(RecordError::Money(MoneyError::InvalidAmount { raw, .. })) if raw == "n/a"));

    Ok(())
}

#[test]
fn test_text_lookup_by_field() -> Result<()> {
    let record = decode_record("-5,00", "EUR", "30.12.20")?;

    assert_eq!(record.text(Field::Creditor), Some("DE98ZZZ09999999999"));
    assert_eq!(record.text(Field::EndToEndCustomerReference), Some("E2E-4711"));
    assert_eq!(record.text(Field::PostedAt), None);

    Ok(())
}

#[test]
fn test_booking_from_complete_record() -> Result<()> {
    let record = decode_record("-5,00", "EUR", "31.12.20")?;
    let booking = Booking::try_from(&record)?;

    assert_eq!(Some(booking.posted_at), NaiveDate::from_ymd_opt(2020, 12, 30));
    assert_eq!(Some(booking.valued_at), NaiveDate::from_ymd_opt(2020, 12, 31));
    assert_eq!(booking.owner.as_str(), "DE02120300000000202051");
    assert_eq!(booking.partner.as_ref().map(|partner| partner.as_str()), Some("DE89370400440532013000"));
    assert_eq!(booking.partner_name.as_deref(), Some("Erika Mustermann"));
    assert_eq!(booking.amount.minor_units(), -500);
    assert_eq!(booking.purpose.as_deref(), Some("Rechnung 4711"));
    assert_eq!(booking.creditor.as_deref(), Some("DE98ZZZ09999999999"));
    assert_eq!(booking.mandate_reference.as_deref(), Some("MREF-0815"));

    Ok(())
}

#[test]
fn test_booking_requires_value_date_and_amount() -> Result<()> {
    let without_value_date = decode_record("-5,00", "EUR", "")?;
    let without_amount = decode_record("", "EUR", "31.12.20")?;

    assert!(matches!(Booking::try_from(&without_value_date), Err(RecordError::MissingField { field: Field::ValuedAt, .. })));
    assert!(matches!(Booking::try_from(&without_amount), Err(RecordError::MissingField { field: Field::Amount, .. })));

    Ok(())
}

#[test]
fn test_booking_serializes_dates_and_identifiers_as_text() -> Result<()> {
    let record = decode_record("-5,00", "EUR", "31.12.20")?;
    let value = serde_json::to_value(Booking::try_from(&record)?)?;

    assert_eq!(value["posted_at"], "2020-12-30");
    assert_eq!(value["valued_at"], "2020-12-31");
    assert_eq!(value["owner"], "DE02120300000000202051");
    assert_eq!(value["partner"], "DE89370400440532013000");
    assert_eq!(value["amount"]["minor_units"], -500);
    assert_eq!(value["amount"]["currency"], "EUR");
    assert_eq!(value["mandate_reference"], "MREF-0815");

    Ok(())
}
