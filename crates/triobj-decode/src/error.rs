//! Error types for decoding.

use crate::{IndexSlot, Pool, RecordKind};

/// Errors that can occur while decoding a buffer.
///
/// Every variant raised during the scan carries the 1-based line of the
/// record that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// More records were found than the caller allowed for a pool.
    #[error("exceeded maximum number of {pool} ({limit}) on line {line}")]
    CapacityExceeded {
        pool: Pool,
        limit: usize,
        line: usize,
    },

    /// A byte outside the accepted character set appeared inside a record.
    #[error("invalid character {found:?} in {kind} record on line {line}")]
    InvalidCharacter {
        kind: RecordKind,
        found: char,
        line: usize,
    },

    /// A token passed the character check but is not a valid number.
    #[error("invalid number {token:?} in {kind} record on line {line}")]
    InvalidNumber {
        kind: RecordKind,
        token: String,
        line: usize,
    },

    /// A vector record ended before all of its components were delimited.
    #[error(
        "reached end of {kind} record without parsing the {component} element on line {line}"
    )]
    MissingComponent {
        kind: RecordKind,
        component: char,
        line: usize,
    },

    /// An index group lacks one of its three mandatory sub-indices.
    #[error("{slot} index of index group is missing on line {line}")]
    MissingIndex { slot: IndexSlot, line: usize },

    /// An index group names index 0, which is not a valid 1-based index.
    #[error("{slot} index of index group is 0 on line {line}, indices are 1-based")]
    ZeroIndex { slot: IndexSlot, line: usize },

    /// A face record does not have exactly three index groups.
    #[error(
        "face on line {line} has {groups} index groups, only triangulated geometry is supported"
    )]
    NonTriangulated { groups: usize, line: usize },

    /// The buffer ended in the middle of a record.
    #[error("reached end of buffer while parsing a {kind} record on line {line}")]
    Truncated { kind: RecordKind, line: usize },

    /// A face corner refers past the end of a populated pool.
    #[error("corner {corner} references {slot} {index} but only {available} were parsed")]
    DanglingIndex {
        corner: usize,
        slot: IndexSlot,
        /// The 1-based index as written in the source.
        index: usize,
        available: usize,
    },
}

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
