//! Load triangulated OBJ files into flat, render-ready vertex attribute arrays.
//!
//! This crate is the file-facing layer over [`triobj_decode`]. It reads a
//! whole file into memory, decodes it under caller-supplied capacity limits
//! and returns a [`DrawStream`]: positions, texture coordinates and normals
//! duplicated per face corner, drawable without an index buffer.
//!
//! # Supported subset
//!
//! - `v x y z`, `vt u v` and `vn x y z` records
//! - `f a/b/c d/e/f g/h/i` faces with exactly three groups, each carrying all
//!   three indices
//! - Every other line is skipped
//!
//! Non-triangulated faces and index groups without texture or normal indices
//! are rejected. Export with triangulation, UVs and normals enabled.
//!
//! # Example
//!
//! ```no_run
//! let stream = triobj::load("model.obj", 10_000, 10_000, 60_000)?;
//! for corner in stream.corners() {
//!     println!("{} {} {}", corner.position, corner.tex_coord, corner.normal);
//! }
//! # Ok::<(), triobj::Error>(())
//! ```

mod error;
mod loader;

pub use error::{Error, Result};
pub use glam::{Vec2, Vec3};
pub use loader::{Loader, load};
pub use triobj_decode::{
    Corner, CornerIndices, DecodeError, DecodeOptions, DrawStream, IndexSlot,
    LEGACY_TOKEN_BUDGET, Limits, Pool, RawMesh, RecordKind,
};

pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_PATCH: u32 = 0;
