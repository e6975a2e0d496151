use std::io::{stderr, stdout};
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use camt_csv_decoder::{AccountIdentifier, Booking, CamtReader, Currency, TransactionSchema};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

const OUTPUT_HEADER: [&str; 10] = [
    "posted_at",
    "valued_at",
    "owner",
    "partner",
    "partner_name",
    "amount",
    "currency",
    "purpose",
    "creditor",
    "mandate_reference"
];

/// One output line, the flattened form of a [`Booking`].
#[derive(Serialize)]
struct BookingRow<'a> {
    posted_at: NaiveDate,
    valued_at: NaiveDate,
    owner: &'a AccountIdentifier,
    partner: Option<&'a AccountIdentifier>,
    partner_name: Option<&'a str>,
    amount: Decimal,
    currency: Currency,
    purpose: Option<&'a str>,
    creditor: Option<&'a str>,
    mandate_reference: Option<&'a str>
}

impl<'a> From<&'a Booking> for BookingRow<'a> {
    fn from(booking: &'a Booking) -> Self {
        Self {
            posted_at: booking.posted_at,
            valued_at: booking.valued_at,
            owner: &booking.owner,
            partner: booking.partner.as_ref(),
            partner_name: booking.partner_name.as_deref(),
            amount: booking.amount.to_decimal(),
            currency: booking.amount.currency(),
            purpose: booking.purpose.as_deref(),
            creditor: booking.creditor.as_deref(),
            mandate_reference: booking.mandate_reference.as_deref()
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: camt-csv-decoder [input].csv [schema:optional] [log_level:optional] > [output].csv");
        eprintln!("Available schemas: general, strict (default: general)");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let schema = args.get(2)
        .map(|s| parse_schema(s)).unwrap_or_else(TransactionSchema::general);
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let (written, rejected) = write_bookings_to_stdout(CamtReader::from_path(path, schema)?)?;
    let duration = timer.elapsed();

    info!("Wrote {written} bookings, rejected {rejected} rows in: {duration:?}");

    Ok(())
}

fn parse_schema(name: &str) -> TransactionSchema {
    match name.to_lowercase().as_str() {
        "general" => TransactionSchema::general(),
        "strict" => TransactionSchema::strict(),
        _ => {
            eprintln!("Invalid schema '{}', defaulting to 'general'", name);
            TransactionSchema::general()
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the bookings, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_bookings_to_stdout<R: std::io::Read>(reader: CamtReader<R>) -> Result<(usize, usize)> {
    let mut output = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(stdout().lock());

    output.write_record(OUTPUT_HEADER)?;

    let mut written = 0;
    let mut rejected = 0;

    for result in reader {
        let decoded = match result {
            Ok(decoded) => decoded,
            Err(error) => {
                warn!("{error}");
                rejected += 1;
                continue;
            }
        };

        match Booking::try_from(&decoded.record) {
            Ok(booking) => {
                output.serialize(BookingRow::from(&booking))?;
                written += 1;
            },
            Err(error) => {
                warn!("Row [{}]: {error}", decoded.row);
                rejected += 1;
            }
        }
    }

    output.flush()?;

    Ok((written, rejected))
}
