//! Triangle face scanning.

use crate::indices::scan_index_group;
use crate::{CornerIndices, DecodeError, DecodeOptions, DecodeResult, Source};

/// Scan exactly three index groups starting at `start`.
///
/// Groups are separated by single spaces and the third one must end the
/// line. Returns the corners and the offset of the terminating newline.
/// Errors from an inner group are returned unchanged.
pub fn scan_face(
    src: &Source<'_>,
    start: usize,
    options: &DecodeOptions,
) -> DecodeResult<([CornerIndices; 3], usize)> {
    let mut corners = [CornerIndices::default(); 3];
    let mut cursor = start;
    let mut line_end = start;

    for (i, corner) in corners.iter_mut().enumerate() {
        let (indices, group_end) = scan_index_group(src, cursor, options)?;
        let is_last = i == 2;
        let at_newline = src.byte(group_end) == Some(b'\n');
        if is_last != at_newline {
            return Err(DecodeError::NonTriangulated {
                groups: count_groups(src, start),
                line: src.line_of(start),
            });
        }
        *corner = indices;
        cursor = group_end + 1;
        line_end = group_end;
    }

    Ok((corners, line_end))
}

/// Number of space-separated groups between `start` and the end of its line.
fn count_groups(src: &Source<'_>, start: usize) -> usize {
    let end = src.find_newline(start).unwrap_or(src.len());
    src.slice(start, end)
        .split(|&b| b == b' ')
        .filter(|group| !group.is_empty())
        .count()
}
