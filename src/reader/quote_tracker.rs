use std::io;
use std::io::Read;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted
}

impl QuoteState {
    /// Same transitions the csv parser makes for the `;` / `"` / `\n` dialect.
    fn next(self, byte: u8) -> QuoteState {
        match (self, byte) {
            (QuoteState::FieldStart, b'"') => QuoteState::Quoted,
            (QuoteState::FieldStart | QuoteState::Unquoted, b';' | b'\n') => QuoteState::FieldStart,
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b';' | b'\n') => QuoteState::FieldStart,
            (QuoteState::QuoteInQuoted, _) => QuoteState::Unquoted
        }
    }
}

/// Watches the bytes handed to the csv parser. The parser closes a quoted
/// cell at end of input without complaint; this tells whether that happened.
#[derive(Debug)]
pub(crate) struct QuoteTracker<R> {
    inner: R,
    state: QuoteState,
    exhausted: bool
}

impl<R: Read> QuoteTracker<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
            exhausted: false
        }
    }

    /// Input is used up while a quoted cell is still open.
    pub(crate) fn ends_in_open_quote(&self) -> bool {
        self.exhausted && self.state == QuoteState::Quoted
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        let count = self.inner.read(buffer)?;

        if count == 0 && !buffer.is_empty() {
            self.exhausted = true;
        }

        self.state = buffer[..count].iter().fold(self.state, |state, byte| state.next(*byte));

        Ok(count)
    }
}
