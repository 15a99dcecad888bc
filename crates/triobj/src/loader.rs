//! Whole-file loading.
//!
//! Reads the entire input into memory up front and hands it to the decoder
//! in one synchronous call. Every intermediate buffer is owned by the call
//! and released on return, whether it succeeds or not.

use std::fs;
use std::io::Read;
use std::path::Path;

use triobj_decode::{DecodeOptions, DrawStream, Limits, decode};

use crate::error::{Error, Result};

/// Loads OBJ data under fixed capacity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    limits: Limits,
    options: DecodeOptions,
}

impl Loader {
    /// Create a loader with default decode options.
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self {
            limits,
            options: DecodeOptions { token_budget: None },
        }
    }

    /// Replace the decode options.
    #[must_use]
    pub const fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    #[must_use]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Load the file at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DrawStream> {
        let path = path.as_ref();
        let result = fs::read(path)
            .map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|bytes| self.load_bytes(&bytes));

        match &result {
            Ok(stream) => tracing::info!(
                "Loaded {}: {} faces, {} corners",
                path.display(),
                stream.face_count(),
                stream.corner_count()
            ),
            Err(e) => tracing::warn!("Failed to load {}: {}", path.display(), e),
        }
        result
    }

    /// Load everything `reader` yields.
    pub fn load_reader<R: Read>(&self, mut reader: R) -> Result<DrawStream> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load_bytes(&bytes)
    }

    /// Decode an in-memory buffer.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<DrawStream> {
        Ok(decode(bytes, &self.limits, &self.options)?)
    }
}

/// Load the OBJ file at `path`.
///
/// The three maximums are hard ceilings on `v` records, `vn` records and
/// face corners (three per `f` record, which also bounds `vt` records).
/// Exceeding any of them fails the load.
pub fn load(
    path: impl AsRef<Path>,
    max_positions: usize,
    max_normals: usize,
    max_corners: usize,
) -> Result<DrawStream> {
    Loader::new(Limits::new(max_positions, max_normals, max_corners)).load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_and_bytes_agree() {
        let text = b"v 1 2 3\nvt 0 1\nvn 0 1 0\nf 1/1/1 1/1/1 1/1/1\n";
        let loader = Loader::new(Limits::new(1, 1, 3));
        let from_reader = loader.load_reader(&text[..]).unwrap();
        let from_bytes = loader.load_bytes(text).unwrap();
        assert_eq!(from_reader, from_bytes);
        assert_eq!(from_bytes.corner_count(), 3);
    }

    #[test]
    fn options_reach_the_decoder() {
        let text = b"v 2.00000011999 0 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 1/1/1 1/1/1\n";
        let limits = Limits::new(1, 1, 3);

        let full = Loader::new(limits).load_bytes(text).unwrap();
        let legacy = Loader::new(limits)
            .with_options(DecodeOptions::legacy())
            .load_bytes(text)
            .unwrap();

        assert!(full.positions[0] > 2.0);
        assert_eq!(legacy.positions[0], 2.0);
    }

    #[test]
    fn decode_failures_are_wrapped() {
        let err = Loader::new(Limits::new(0, 0, 0))
            .load_bytes(b"v 1 2 3\n")
            .unwrap_err();
        assert!(err.as_decode().is_some());
    }
}
