//! Numeric token conversion.

use std::str::FromStr;

use crate::{DecodeError, RecordKind};

/// A token that could not be converted to a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot convert {token:?} to a number")]
pub struct ParseError {
    pub token: String,
}

impl ParseError {
    fn new(token: &[u8]) -> Self {
        Self {
            token: String::from_utf8_lossy(token).into_owned(),
        }
    }

    /// Attach the record context the converter itself does not know.
    #[must_use]
    pub fn into_decode_error(self, kind: RecordKind, line: usize) -> DecodeError {
        DecodeError::InvalidNumber {
            kind,
            token: self.token,
            line,
        }
    }
}

/// Whether `byte` may appear inside a vector component.
#[must_use]
pub const fn is_number_byte(byte: u8) -> bool {
    matches!(byte, b'0'..=b'9' | b'.' | b'-')
}

fn convert<T: FromStr>(token: &[u8], budget: Option<usize>) -> Result<T, ParseError> {
    let token = match budget {
        Some(budget) => &token[..budget.min(token.len())],
        None => token,
    };
    std::str::from_utf8(token)
        .ok()
        .and_then(|text| text.parse().ok())
        .ok_or_else(|| ParseError::new(token))
}

/// Convert a `[-]digits[.digits]` token to a float.
///
/// With a `budget`, only the first `budget` bytes are converted.
pub fn parse_float(token: &[u8], budget: Option<usize>) -> Result<f32, ParseError> {
    convert(token, budget)
}

/// Convert a run of digits to an unsigned integer.
///
/// `0` is returned as-is; rejecting it is the caller's business.
pub fn parse_uint(token: &[u8], budget: Option<usize>) -> Result<u32, ParseError> {
    convert(token, budget)
}
