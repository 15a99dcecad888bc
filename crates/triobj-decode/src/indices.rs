//! Index group scanning.

use crate::number::{ParseError, parse_uint};
use crate::{
    CornerIndices, DecodeError, DecodeOptions, DecodeResult, IndexSlot, RecordKind, Source,
};

/// Scan one `v/vt/vn` index group starting at `start`.
///
/// All three sub-indices are mandatory and 1-based in the source; the
/// returned indices are 0-based. The returned offset is that of the space
/// or newline ending the group.
pub fn scan_index_group(
    src: &Source<'_>,
    start: usize,
    options: &DecodeOptions,
) -> DecodeResult<(CornerIndices, usize)> {
    // Offsets where each sub-index begins.
    let mut starts = [start; 3];
    let mut slashes = 0;

    for (i, &byte) in src.tail(start).iter().enumerate() {
        let offset = start + i;
        match byte {
            b'/' if slashes < 2 => {
                slashes += 1;
                starts[slashes] = offset + 1;
            }
            b' ' | b'\n' => {
                let mut resolved = [0u32; 3];
                for (slot_index, (value, slot)) in
                    resolved.iter_mut().zip(IndexSlot::ALL).enumerate()
                {
                    if slot_index > slashes {
                        return Err(DecodeError::MissingIndex {
                            slot,
                            line: src.line_of(start),
                        });
                    }
                    let end = if slot_index < slashes {
                        starts[slot_index + 1] - 1
                    } else {
                        offset
                    };
                    *value = to_zero_based(src, starts[slot_index], end, slot, options)
                        .map_err(|e| e.at_line(src.line_of(start)))?;
                }
                let [position, tex_coord, normal] = resolved;
                return Ok((
                    CornerIndices {
                        position,
                        tex_coord,
                        normal,
                    },
                    offset,
                ));
            }
            b'0'..=b'9' => {}
            b => {
                return Err(DecodeError::InvalidCharacter {
                    kind: RecordKind::Face,
                    found: char::from(b),
                    line: src.line_of(offset),
                });
            }
        }
    }

    Err(DecodeError::Truncated {
        kind: RecordKind::Face,
        line: src.line_of(start),
    })
}

/// A sub-index that failed to convert, before its line is known.
enum SubIndexError {
    Missing(IndexSlot),
    Zero(IndexSlot),
    Number(ParseError),
}

impl SubIndexError {
    fn at_line(self, line: usize) -> DecodeError {
        match self {
            Self::Missing(slot) => DecodeError::MissingIndex { slot, line },
            Self::Zero(slot) => DecodeError::ZeroIndex { slot, line },
            Self::Number(e) => e.into_decode_error(RecordKind::Face, line),
        }
    }
}

fn to_zero_based(
    src: &Source<'_>,
    start: usize,
    end: usize,
    slot: IndexSlot,
    options: &DecodeOptions,
) -> Result<u32, SubIndexError> {
    let token = src.slice(start, end);
    if token.is_empty() {
        return Err(SubIndexError::Missing(slot));
    }
    let index = parse_uint(token, options.token_budget).map_err(SubIndexError::Number)?;
    index.checked_sub(1).ok_or(SubIndexError::Zero(slot))
}
