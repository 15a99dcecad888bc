//! Decode triangulated OBJ text into flat, render-ready vertex attribute arrays.
//!
//! This crate provides pure synchronous decoding of a restricted OBJ subset:
//! `v`, `vt`, `vn` records and triangle `f` records whose index groups carry
//! all three sub-indices. The output is a [`DrawStream`]: three parallel flat
//! arrays addressed by a single draw index, ready to upload without an index
//! buffer.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives, no I/O
//! - **Bounded**: Every pool is capped by a caller-supplied [`Limits`]
//! - **No partial results**: The first malformed record fails the decode
//!
//! # Key functions
//!
//! - [`decode`]: Scan a buffer and unfacet it into a [`DrawStream`]
//! - [`scan`]: Run only the driver loop, producing a [`RawMesh`]
//! - [`resolve`]: Expand a [`RawMesh`] into a [`DrawStream`]
//! - [`scan_vec3`] / [`scan_vec2`]: Parse one vector record
//! - [`scan_index_group`] / [`scan_face`]: Parse face index data

mod error;

pub mod face;
pub mod indices;
pub mod number;
pub mod resolve;
pub mod scan;
pub mod source;
pub mod vectors;

use std::fmt;

use glam::{Vec2, Vec3};

pub use error::{DecodeError, DecodeResult};
pub use face::scan_face;
pub use indices::scan_index_group;
pub use number::ParseError;
pub use resolve::resolve;
pub use scan::scan;
pub use source::Source;
pub use vectors::{scan_vec2, scan_vec3};

/// Token length used by [`DecodeOptions::legacy`].
pub const LEGACY_TOKEN_BUDGET: usize = 10;

/// Hard ceilings on the number of records a decode may accept.
///
/// Exceeding any of them fails the decode with
/// [`DecodeError::CapacityExceeded`]; nothing is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of `v` records.
    pub max_positions: usize,
    /// Maximum number of `vn` records.
    pub max_normals: usize,
    /// Maximum number of face corners (three per `f` record). Also caps the
    /// number of `vt` records.
    pub max_corners: usize,
}

impl Limits {
    #[must_use]
    pub const fn new(max_positions: usize, max_normals: usize, max_corners: usize) -> Self {
        Self {
            max_positions,
            max_normals,
            max_corners,
        }
    }

    /// Ceiling for a given pool.
    #[must_use]
    pub const fn for_pool(&self, pool: Pool) -> usize {
        match pool {
            Pool::Positions => self.max_positions,
            Pool::Normals => self.max_normals,
            Pool::TexCoords | Pool::Corners => self.max_corners,
        }
    }
}

/// Tuning for the numeric token converter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Convert only the first `n` bytes of each numeric token.
    ///
    /// `None` converts the whole token.
    pub token_budget: Option<usize>,
}

impl DecodeOptions {
    /// Convert at most [`LEGACY_TOKEN_BUDGET`] bytes per token, matching
    /// loaders that copy each number into a fixed 10-byte buffer.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            token_budget: Some(LEGACY_TOKEN_BUDGET),
        }
    }
}

/// A capacity-bounded pool filled during the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pool {
    Positions,
    TexCoords,
    Normals,
    Corners,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positions => "positions",
            Self::TexCoords => "texture coordinates",
            Self::Normals => "normals",
            Self::Corners => "corners",
        })
    }
}

/// Record type selected by the two-byte lookahead at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `v x y z`
    Position,
    /// `vt u v`
    TexCoord,
    /// `vn x y z`
    Normal,
    /// `f a/b/c d/e/f g/h/i`
    Face,
    /// Anything else; skipped to the next newline.
    Other,
}

impl RecordKind {
    /// Length of the record tag, not counting the space after it.
    #[must_use]
    pub const fn tag_len(self) -> usize {
        match self {
            Self::Position | Self::Face => 1,
            Self::TexCoord | Self::Normal => 2,
            Self::Other => 0,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
            Self::Face => "face",
            Self::Other => "unrecognized",
        })
    }
}

/// One of the three sub-indices of an index group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexSlot {
    Position,
    TexCoord,
    Normal,
}

impl IndexSlot {
    /// Slots in the order they appear in an `a/b/c` group.
    pub const ALL: [Self; 3] = [Self::Position, Self::TexCoord, Self::Normal];
}

impl fmt::Display for IndexSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Position => "position",
            Self::TexCoord => "texture coordinate",
            Self::Normal => "normal",
        })
    }
}

/// 0-based pool indices for one face corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CornerIndices {
    pub position: u32,
    pub tex_coord: u32,
    pub normal: u32,
}

/// Attribute pools and face corners accumulated by [`scan`].
///
/// Pools are flat scalar arrays: 3 floats per position and normal, 2 per
/// texture coordinate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMesh {
    pub positions: Vec<f32>,
    pub tex_coords: Vec<f32>,
    pub normals: Vec<f32>,
    pub corners: Vec<CornerIndices>,
}

impl RawMesh {
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[must_use]
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len() / 2
    }

    #[must_use]
    pub fn normal_count(&self) -> usize {
        self.normals.len() / 3
    }

    #[must_use]
    pub fn face_count(&self) -> usize {
        self.corners.len() / 3
    }
}

/// Flattened per-corner vertex attributes.
///
/// Entry `i` of every array belongs to corner `i`, in face-then-corner
/// order. Vertices shared between faces are duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawStream {
    /// 3 floats per corner.
    pub positions: Vec<f32>,
    /// 2 floats per corner.
    pub tex_coords: Vec<f32>,
    /// 3 floats per corner.
    pub normals: Vec<f32>,
}

/// Attributes of a single corner of a [`DrawStream`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub position: Vec3,
    pub tex_coord: Vec2,
    pub normal: Vec3,
}

impl DrawStream {
    /// Number of corners, i.e. the draw count.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.corner_count() / 3
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn position(&self, index: usize) -> Option<Vec3> {
        self.positions.chunks_exact(3).nth(index).map(Vec3::from_slice)
    }

    #[must_use]
    pub fn tex_coord(&self, index: usize) -> Option<Vec2> {
        self.tex_coords.chunks_exact(2).nth(index).map(Vec2::from_slice)
    }

    #[must_use]
    pub fn normal(&self, index: usize) -> Option<Vec3> {
        self.normals.chunks_exact(3).nth(index).map(Vec3::from_slice)
    }

    /// Iterate over corners in draw order.
    pub fn corners(&self) -> impl Iterator<Item = Corner> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.tex_coords.chunks_exact(2))
            .zip(self.normals.chunks_exact(3))
            .map(|((position, tex_coord), normal)| Corner {
                position: Vec3::from_slice(position),
                tex_coord: Vec2::from_slice(tex_coord),
                normal: Vec3::from_slice(normal),
            })
    }

    /// Axis-aligned bounds of all positions, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut positions = self.positions.chunks_exact(3).map(Vec3::from_slice);
        let first = positions.next()?;
        Some(positions.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

/// Decode a whole buffer into a [`DrawStream`].
///
/// Runs [`scan`] and then [`resolve`]. The intermediate [`RawMesh`] is
/// dropped before returning, on success and on failure alike.
pub fn decode(
    bytes: &[u8],
    limits: &Limits,
    options: &DecodeOptions,
) -> DecodeResult<DrawStream> {
    let raw = scan(bytes, limits, options)?;
    resolve(&raw)
}
