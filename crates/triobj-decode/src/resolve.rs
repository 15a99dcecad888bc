//! Unfaceting: expand indexed corners into a flat draw stream.

use crate::{DecodeError, DecodeResult, DrawStream, IndexSlot, RawMesh};

/// Gather every corner's attributes into a [`DrawStream`].
///
/// Corner `i` of the output copies the pool entries its indices select, so
/// vertices shared between faces are duplicated. Any index past the end of
/// its pool fails with [`DecodeError::DanglingIndex`].
pub fn resolve(mesh: &RawMesh) -> DecodeResult<DrawStream> {
    let corner_count = mesh.corners.len();
    let mut stream = DrawStream {
        positions: Vec::with_capacity(corner_count * 3),
        tex_coords: Vec::with_capacity(corner_count * 2),
        normals: Vec::with_capacity(corner_count * 3),
    };

    for (corner, indices) in mesh.corners.iter().enumerate() {
        let position =
            gather::<3>(&mesh.positions, indices.position, corner, IndexSlot::Position)?;
        let tex_coord =
            gather::<2>(&mesh.tex_coords, indices.tex_coord, corner, IndexSlot::TexCoord)?;
        let normal = gather::<3>(&mesh.normals, indices.normal, corner, IndexSlot::Normal)?;
        stream.positions.extend_from_slice(position);
        stream.tex_coords.extend_from_slice(tex_coord);
        stream.normals.extend_from_slice(normal);
    }

    Ok(stream)
}

fn gather<const N: usize>(
    pool: &[f32],
    index: u32,
    corner: usize,
    slot: IndexSlot,
) -> DecodeResult<&[f32]> {
    let index = index as usize;
    pool.chunks_exact(N)
        .nth(index)
        .ok_or(DecodeError::DanglingIndex {
            corner,
            slot,
            index: index + 1,
            available: pool.len() / N,
        })
}
