use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder, Terminator, Trim};
use tracing::{debug, trace};

use crate::models::TransactionRecord;
use crate::reader::errors::{ReaderError, RowError};
use crate::reader::quote_tracker::QuoteTracker;
use crate::schema::{DecodeError, TransactionSchema};
use crate::types::RowNumber;

/// A successfully decoded row and the physical line it starts on.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DecodedRow {
    pub row: RowNumber,
    pub record: TransactionRecord
}

/// Reads a CAMT CSV export row by row.
///
/// The dialect is fixed: `;` separates cells, `"` quotes cells that contain
/// separators or line breaks, a doubled quote inside a quoted cell is a literal
/// quote. Rows end at `\n`; a `\r` before it is dropped, anywhere else it is
/// cell content. The first row is a header and never decoded. Cells that are
/// not valid UTF-8 are read as Latin-1, the encoding the bank uses for its exports.
///
/// Every row yields its own result, a failed row does not stop the iteration.
/// A quote still open at the end of input fails the row it was opened in.
pub struct CamtReader<R: Read> {
    reader: Reader<QuoteTracker<R>>,
    schema: TransactionSchema,
    record: ByteRecord,
    header_skipped: bool,
    finished: bool
}

impl<R: Read> CamtReader<R> {
    pub fn new(source: R, schema: TransactionSchema) -> Self {
        let reader = ReaderBuilder::new()
            .delimiter(b';')
            .quote(b'"')
            .quoting(true)
            .double_quote(true)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(QuoteTracker::new(source));

        Self {
            reader,
            schema,
            record: ByteRecord::new(),
            header_skipped: false,
            finished: false
        }
    }

    pub fn schema(&self) -> &TransactionSchema {
        &self.schema
    }

    fn current_row(&self) -> RowNumber {
        self.record.position().map(|position| position.line()).unwrap_or(0)
    }
}

impl CamtReader<BufReader<File>> {
    pub fn from_path(path: impl AsRef<Path>, schema: TransactionSchema) -> Result<Self, ReaderError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), schema))
    }
}

impl<R: Read> Iterator for CamtReader<R> {
    type Item = Result<DecodedRow, RowError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.reader.read_byte_record(&mut self.record) {
                Ok(true) => {},
                Ok(false) => {
                    self.finished = true;
                    return None;
                },
                Err(error) => {
                    let row = error.position().map(|position| position.line()).unwrap_or(0);
                    // An I/O failure is not tied to a single row, reading further cannot succeed.
                    if matches!(error.kind(), csv::ErrorKind::Io(_)) {
                        self.finished = true;
                    }
                    debug!("Unreadable row [{row}]: {error}");
                    return Some(Err(RowError { row, source: DecodeError::malformed_row(error.to_string()) }));
                }
            }

            if self.reader.get_ref().ends_in_open_quote() {
                let row = self.current_row();
                self.finished = true;
                debug!("Unterminated quote in row [{row}]");
                return Some(Err(RowError { row, source: DecodeError::malformed_row("unterminated quote") }));
            }

            // A blank CRLF line reaches us as a lone `\r` cell.
            if self.record.len() == 1 && self.record.get(0) == Some(&b"\r"[..]) {
                continue;
            }

            if !self.header_skipped {
                self.header_skipped = true;
                trace!("Skipped header row [{}]", self.current_row());
                continue;
            }

            let row = self.current_row();
            let last = self.record.len().saturating_sub(1);
            let cells: Vec<Cow<'_, str>> = self.record.iter()
                .enumerate()
                .map(|(index, bytes)| if index == last {
                    decode_cell(bytes.strip_suffix(b"\r").unwrap_or(bytes))
                } else {
                    decode_cell(bytes)
                })
                .collect();

            return Some(match self.schema.decode(&cells) {
                Ok(record) => {
                    trace!("Decoded row [{row}] booked at [{}]", record.posted_at());
                    Ok(DecodedRow { row, record })
                },
                Err(source) => {
                    debug!("Rejected row [{row}]: {source}");
                    Err(RowError { row, source })
                }
            });
        }

        None
    }
}

fn decode_cell(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|byte| char::from(*byte)).collect())
    }
}
