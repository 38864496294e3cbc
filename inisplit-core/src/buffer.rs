//! Owned byte storage for INI text.
//!
//! A [`Buffer`] holds the raw file content followed by a single NUL
//! sentinel. The sentinel is never part of the content (`end()` excludes
//! it) but guarantees that the last token in the buffer is NUL-terminated
//! just like every other token, which is what lets callers hand token
//! slices across a C boundary as `const char *`.

/// Owned INI content plus a trailing NUL sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Content bytes followed by exactly one sentinel NUL.
    data: Box<[u8]>,
}

impl Buffer {
    /// Wrap already-loaded bytes, appending the sentinel.
    ///
    /// If the vector has exactly one spare byte of capacity (as the loader
    /// arranges) this does not reallocate.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        let mut data = bytes.into();
        data.push(0);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Index one past the last content byte (the sentinel position).
    #[inline]
    pub fn end(&self) -> usize {
        self.data.len() - 1
    }

    /// Content length in bytes, excluding the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.end()
    }

    /// Check if there is no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end() == 0
    }

    /// Content bytes, excluding the sentinel.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.data[..self.end()]
    }

    /// Mutable content bytes, excluding the sentinel.
    #[inline]
    pub(crate) fn content_mut(&mut self) -> &mut [u8] {
        let end = self.end();
        &mut self.data[..end]
    }

    /// Content bytes including the sentinel.
    #[inline]
    pub(crate) fn with_sentinel(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Buffer {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl From<String> for Buffer {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}
