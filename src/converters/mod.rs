mod account;
mod date;
#[cfg(test)]
mod tests;

use std::fmt::Debug;

pub use account::AccountConverter;
pub use date::DateConverter;

/// Converts a single cell of the export into a typed value and back.
pub trait Converter: Debug + Send + Sync {
    type Value;
    type Error;

    /// Parses a non-blank cell. Blank cells never reach a converter.
    fn from_cell(&self, text: &str) -> Result<Self::Value, Self::Error>;

    /// Renders a value the way the export writes it.
    fn to_cell(&self, value: &Self::Value) -> String;

    /// Human readable description of the accepted input, used in diagnostics.
    fn describe(&self) -> String;
}
