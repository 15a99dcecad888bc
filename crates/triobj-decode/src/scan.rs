//! Record classification and the scanning driver loop.

use crate::face::scan_face;
use crate::vectors::{scan_vec2, scan_vec3};
use crate::{
    DecodeError, DecodeOptions, DecodeResult, Limits, Pool, RawMesh, RecordKind, Source,
};

/// Shortest possible `v` record (`v 0 0 0\n`), used to bound preallocation.
const MIN_VEC3_RECORD_LEN: usize = 8;
/// Shortest possible `vt` record (`vt 0 0\n`).
const MIN_VEC2_RECORD_LEN: usize = 7;
/// Shortest possible `f` record (`f 1/1/1 1/1/1 1/1/1\n`).
const MIN_FACE_RECORD_LEN: usize = 20;

/// Classify the record starting at `offset` from its two-byte lookahead.
#[must_use]
pub fn classify(src: &Source<'_>, offset: usize) -> RecordKind {
    match (src.byte(offset), src.byte(offset + 1)) {
        (Some(b'v'), Some(b' ')) => RecordKind::Position,
        (Some(b'v'), Some(b't')) => RecordKind::TexCoord,
        (Some(b'v'), Some(b'n')) => RecordKind::Normal,
        (Some(b'f'), Some(b' ')) => RecordKind::Face,
        _ => RecordKind::Other,
    }
}

/// Scan a whole buffer into raw attribute pools and face corners.
///
/// Each record is counted against `limits` before it is parsed. The first
/// error aborts the scan; no partial mesh is returned.
pub fn scan(bytes: &[u8], limits: &Limits, options: &DecodeOptions) -> DecodeResult<RawMesh> {
    let src = Source::new(bytes);
    let mut mesh = preallocate(bytes.len(), limits);
    let mut cursor = 0;
    let mut line = 1;

    while cursor < src.len() {
        let kind = classify(&src, cursor);
        let line_end = match kind {
            RecordKind::Position => {
                check_capacity(line, Pool::Positions, mesh.position_count() + 1, limits)?;
                let body = body_start(&src, cursor, kind, line)?;
                let (xyz, end) = scan_vec3(&src, body, kind, options)?;
                mesh.positions.extend_from_slice(&xyz);
                end
            }
            RecordKind::TexCoord => {
                check_capacity(line, Pool::TexCoords, mesh.tex_coord_count() + 1, limits)?;
                let body = body_start(&src, cursor, kind, line)?;
                let (uv, end) = scan_vec2(&src, body, kind, options)?;
                mesh.tex_coords.extend_from_slice(&uv);
                end
            }
            RecordKind::Normal => {
                check_capacity(line, Pool::Normals, mesh.normal_count() + 1, limits)?;
                let body = body_start(&src, cursor, kind, line)?;
                let (xyz, end) = scan_vec3(&src, body, kind, options)?;
                mesh.normals.extend_from_slice(&xyz);
                end
            }
            RecordKind::Face => {
                check_capacity(line, Pool::Corners, mesh.corners.len() + 3, limits)?;
                let body = body_start(&src, cursor, kind, line)?;
                let (corners, end) = scan_face(&src, body, options)?;
                mesh.corners.extend_from_slice(&corners);
                end
            }
            RecordKind::Other => {
                let end = src
                    .find_newline(cursor)
                    .ok_or(DecodeError::Truncated { kind, line })?;
                tracing::trace!(line, "skipping unrecognized record");
                end
            }
        };
        // Resume at the first byte of the next line.
        cursor = line_end + 1;
        line += 1;
    }

    tracing::debug!(
        positions = mesh.position_count(),
        tex_coords = mesh.tex_coord_count(),
        normals = mesh.normal_count(),
        faces = mesh.face_count(),
        "scanned buffer"
    );

    Ok(mesh)
}

/// Offset of the first byte after a record's tag and its space.
fn body_start(
    src: &Source<'_>,
    cursor: usize,
    kind: RecordKind,
    line: usize,
) -> DecodeResult<usize> {
    let space = cursor + kind.tag_len();
    match src.byte(space) {
        Some(b' ') => Ok(space + 1),
        Some(b) => Err(DecodeError::InvalidCharacter {
            kind,
            found: char::from(b),
            line,
        }),
        None => Err(DecodeError::Truncated { kind, line }),
    }
}

fn check_capacity(line: usize, pool: Pool, count: usize, limits: &Limits) -> DecodeResult<()> {
    let limit = limits.for_pool(pool);
    if count > limit {
        return Err(DecodeError::CapacityExceeded { pool, limit, line });
    }
    Ok(())
}

/// Size pools for the smaller of the caller's limits and what the buffer
/// could possibly hold, so a well-sized limit never reallocates.
fn preallocate(len: usize, limits: &Limits) -> RawMesh {
    let positions = limits.max_positions.min(len / MIN_VEC3_RECORD_LEN);
    let normals = limits.max_normals.min(len / MIN_VEC3_RECORD_LEN);
    let tex_coords = limits.max_corners.min(len / MIN_VEC2_RECORD_LEN);
    let corners = limits.max_corners.min(len / MIN_FACE_RECORD_LEN * 3);
    RawMesh {
        positions: Vec::with_capacity(positions * 3),
        tex_coords: Vec::with_capacity(tex_coords * 2),
        normals: Vec::with_capacity(normals * 3),
        corners: Vec::with_capacity(corners),
    }
}
