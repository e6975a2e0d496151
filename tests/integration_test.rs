use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};

fn run_decoder(args: &[&str]) -> Result<std::process::Output> {
    let binary_path = env!("CARGO_BIN_EXE_camt-csv-decoder");
    let sample_path = Path::new("samples").join("camt_sample.csv");

    Ok(Command::new(binary_path)
        .arg(sample_path)
        .args(args)
        .output()?)
}

fn parse_output(stdout: &[u8]) -> Result<Vec<csv::StringRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(stdout);

    let header = reader.headers()?.clone();
    assert_eq!(
        header.iter().collect::<Vec<_>>(),
        vec!["posted_at", "valued_at", "owner", "partner", "partner_name", "amount", "currency", "purpose", "creditor", "mandate_reference"]
    );

    Ok(reader.records().collect::<Result<_, _>>()?)
}

#[test]
fn test_cli_writes_decodable_bookings() -> Result<()> {
    let output = run_decoder(&[])?;

    assert!(output.status.success());

    let records = parse_output(&output.stdout)?;
    let by_date: HashMap<String, csv::StringRecord> = records.into_iter()
        .map(|record| (record[0].to_string(), record))
        .collect();

    // Missing comment, missing value date and unknown currency are rejected.
    assert_eq!(by_date.len(), 3);

    let card_payment = by_date.get("2021-03-01").ok_or_else(|| anyhow!("card payment missing from output"))?;

    assert_eq!(&card_payment[2], "DE02120300000000202051");
    assert_eq!(&card_payment[3], "DE89370400440532013000");
    assert_eq!(&card_payment[4], "Max Mustermann");
    assert_eq!(&card_payment[5], "-12.34");
    assert_eq!(&card_payment[6], "EUR");

    let credit = by_date.get("2021-03-02").ok_or_else(|| anyhow!("credit missing from output"))?;

    assert_eq!(&credit[5], "1234.56");
    assert_eq!(&credit[7], "Rechnung \"4711\"; danke");

    let direct_debit = by_date.get("2021-03-04").ok_or_else(|| anyhow!("direct debit missing from output"))?;

    assert_eq!(&direct_debit[7], "Miete\nMaerz");
    assert_eq!(&direct_debit[8], "DE98ZZZ09999999999");
    assert_eq!(&direct_debit[9], "MREF-1");

    Ok(())
}

#[test]
fn test_cli_strict_schema_rejects_rows_without_value_date() -> Result<()> {
    let output = run_decoder(&["strict", "warn"])?;

    assert!(output.status.success());

    let records = parse_output(&output.stdout)?;

    assert_eq!(records.len(), 3);

    let log = String::from_utf8(output.stderr)?;

    assert!(log.contains("comment"));
    assert!(log.contains("valuedAt"));
    assert!(log.contains("XXY"));

    Ok(())
}

#[test]
fn test_cli_requires_input_argument() -> Result<()> {
    let output = Command::new(env!("CARGO_BIN_EXE_camt-csv-decoder")).output()?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.starts_with("Usage:"));

    Ok(())
}
