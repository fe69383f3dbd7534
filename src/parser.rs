//! Program text parser: one line of integers separated by any run of non-digit characters.
//! A `-` directly in front of digits is a sign; any other non-digit run only separates.

use crate::types::Word;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A digit run that does not fit in a cell.
    #[error("integer {token} at offset {offset} does not fit in 64 bits")]
    Overflow { token: String, offset: usize },
}

/// Program parser.
pub struct ProgramParser;

impl ProgramParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse program text into initial memory cells. Empty or digit-free text gives no cells.
    pub fn parse_program(&self, text: &str) -> Result<Vec<Word>, ParseError> {
        let bytes = text.as_bytes();
        let mut cells = Vec::new();
        let mut index = 0;

        while index < bytes.len() {
            if !bytes[index].is_ascii_digit() {
                index += 1;
                continue;
            }
            let digits_start = index;
            while index < bytes.len() && bytes[index].is_ascii_digit() {
                index += 1;
            }
            let negative = digits_start > 0 && bytes[digits_start - 1] == b'-';
            let start = if negative { digits_start - 1 } else { digits_start };
            let token = &text[start..index];
            let value = token.parse::<Word>().map_err(|_| ParseError::Overflow {
                token: token.to_string(),
                offset: start,
            })?;
            cells.push(value);
        }

        Ok(cells)
    }
}

impl Default for ProgramParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`ProgramParser::parse_program`].
pub fn parse_program(text: &str) -> Result<Vec<Word>, ParseError> {
    ProgramParser::new().parse_program(text)
}
