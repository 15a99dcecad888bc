//! Source buffer access.

/// Immutable view of the bytes being decoded.
///
/// Scanners address the buffer with absolute offsets and never mutate it.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    bytes: &'a [u8],
}

impl<'a> Source<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte at `offset`, or `None` past the end.
    #[must_use]
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Bytes from `offset` to the end of the buffer.
    #[must_use]
    pub fn tail(&self, offset: usize) -> &'a [u8] {
        self.bytes.get(offset..).unwrap_or_default()
    }

    /// Bytes in `start..end`, clamped to the buffer.
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a [u8] {
        let end = end.min(self.bytes.len());
        self.bytes.get(start..end).unwrap_or_default()
    }

    /// Offset of the first newline at or after `offset`.
    #[must_use]
    pub fn find_newline(&self, offset: usize) -> Option<usize> {
        self.tail(offset)
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| offset + i)
    }

    /// 1-based line number containing `offset`.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        1 + self
            .slice(0, offset)
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
    }
}
