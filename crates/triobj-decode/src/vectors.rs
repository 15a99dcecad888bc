//! Vector record scanning.
//!
//! Positions and normals are vec3 records, texture coordinates are vec2
//! records. Both share one scanner parameterised on the component count.

use crate::number::{is_number_byte, parse_float};
use crate::{DecodeError, DecodeOptions, DecodeResult, RecordKind, Source};

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Scan `x y z\n` starting at `start`.
///
/// Returns the components and the offset of the terminating newline.
pub fn scan_vec3(
    src: &Source<'_>,
    start: usize,
    kind: RecordKind,
    options: &DecodeOptions,
) -> DecodeResult<([f32; 3], usize)> {
    scan_components(src, start, kind, options)
}

/// Scan `u v\n` starting at `start`.
///
/// Returns the components and the offset of the terminating newline.
pub fn scan_vec2(
    src: &Source<'_>,
    start: usize,
    kind: RecordKind,
    options: &DecodeOptions,
) -> DecodeResult<([f32; 2], usize)> {
    scan_components(src, start, kind, options)
}

fn scan_components<const N: usize>(
    src: &Source<'_>,
    start: usize,
    kind: RecordKind,
    options: &DecodeOptions,
) -> DecodeResult<([f32; N], usize)> {
    // `delimiters[i]` is the space ending component `i`; the last component
    // ends at the newline instead.
    let mut delimiters = [0usize; N];
    let mut delimited = 0;

    for (i, &byte) in src.tail(start).iter().enumerate() {
        let offset = start + i;
        match byte {
            b' ' => {
                if delimited + 1 < N {
                    delimiters[delimited] = offset;
                    delimited += 1;
                }
            }
            b'\n' => {
                if delimited + 1 < N {
                    return Err(DecodeError::MissingComponent {
                        kind,
                        component: AXES[delimited + 1],
                        line: src.line_of(start),
                    });
                }
                delimiters[N - 1] = offset;

                let mut values = [0.0; N];
                let mut component_start = start;
                for (value, &end) in values.iter_mut().zip(&delimiters) {
                    let token = src.slice(component_start, end);
                    // Anything after the last component's first word is ignored.
                    let token = token.split(|&b| b == b' ').next().unwrap_or_default();
                    *value = parse_float(token, options.token_budget)
                        .map_err(|e| e.into_decode_error(kind, src.line_of(start)))?;
                    component_start = end + 1;
                }
                return Ok((values, offset));
            }
            b if is_number_byte(b) => {}
            b => {
                return Err(DecodeError::InvalidCharacter {
                    kind,
                    found: char::from(b),
                    line: src.line_of(offset),
                });
            }
        }
    }

    Err(DecodeError::Truncated {
        kind,
        line: src.line_of(start),
    })
}
