use super::{AccountConverter, Converter, DateConverter};
use crate::account::{AccountIdentifier, AccountIdentifierError, LenientValidator};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| anyhow!("Invalid test date"))
}

#[test]
fn test_default_date_converter_reads_short_and_long_years() -> Result<()> {
    let converter = DateConverter::default();

    assert_eq!(converter.from_cell("01.03.21")?, date(2021, 3, 1)?);
    assert_eq!(converter.from_cell("01.03.2021")?, date(2021, 3, 1)?);
    assert_eq!(converter.from_cell(" 31.12.19 ")?, date(2019, 12, 31)?);

    Ok(())
}

#[test]
fn test_two_digit_years_stay_in_this_century() -> Result<()> {
    let converter = DateConverter::default();

    assert_eq!(converter.from_cell("01.03.70")?, date(2070, 3, 1)?);
    assert_eq!(converter.from_cell("31.12.99")?, date(2099, 12, 31)?);
    assert_eq!(converter.from_cell("01.01.00")?, date(2000, 1, 1)?);
    assert_eq!(converter.from_cell("01.03.1970")?, date(1970, 3, 1)?);
    assert_eq!(converter.to_cell(&date(2070, 3, 1)?), "01.03.70");

    Ok(())
}

#[test]
fn test_default_date_converter_writes_export_format() -> Result<()> {
    let converter = DateConverter::default();

    assert_eq!(converter.to_cell(&date(2021, 3, 1)?), "01.03.21");
    assert_eq!(converter.format(), "%d.%m.%y");

    Ok(())
}

#[test]
fn test_date_converter_rejects_foreign_layouts() {
    let converter = DateConverter::default();

    assert!(converter.from_cell("2021-03-01").is_err());
    assert!(converter.from_cell("32.01.21").is_err());
    assert!(converter.from_cell("29.02.21").is_err());
    assert!(converter.from_cell("Kartenzahlung").is_err());
}

#[test]
fn test_date_converter_with_single_custom_format() -> Result<()> {
    let converter = DateConverter::with_format("%Y-%m-%d");

    assert_eq!(converter.from_cell("2021-03-01")?, date(2021, 3, 1)?);
    assert!(converter.from_cell("01.03.21").is_err());
    assert_eq!(converter.to_cell(&date(2021, 3, 1)?), "2021-03-01");
    assert_eq!(converter.describe(), "a date formatted as %Y-%m-%d");

    Ok(())
}

#[test]
fn test_account_converter_normalizes_before_validating() -> Result<()> {
    let converter = AccountConverter::default();
    let identifier = converter.from_cell("de89 3704 0044 0532 0130 00")?;

    assert_eq!(identifier.as_str(), "DE89370400440532013000");
    assert_eq!(converter.to_cell(&identifier), "DE89370400440532013000");

    Ok(())
}

#[test]
fn test_account_converter_rejects_invalid_iban() {
    let converter = AccountConverter::default();

    assert_eq!(converter.from_cell("DE89370400440532013001"), Err(AccountIdentifierError::InvalidChecksum));
    assert_eq!(converter.from_cell("Max Mustermann"), Err(AccountIdentifierError::NotAnIban));
}

#[test]
fn test_account_converter_with_lenient_validator() -> Result<()> {
    let converter = AccountConverter::new(LenientValidator);

    assert_eq!(converter.from_cell(" 0532 013000 ")?, AccountIdentifier::Unknown("0532013000".to_string()));

    Ok(())
}
