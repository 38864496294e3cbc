//! Token walking over a tokenized buffer.
//!
//! All positions are indices into the tokenized content (sentinel
//! excluded). A position equal to `data.len()` means "no more tokens".

use memchr::memchr;

/// Index of the NUL terminating the token at `pos`.
#[inline]
pub(crate) fn token_end(data: &[u8], pos: usize) -> usize {
    memchr(0, &data[pos..]).map_or(data.len(), |i| pos + i)
}

/// The token starting at `pos`, without its terminator.
#[inline]
pub(crate) fn token_at(data: &[u8], pos: usize) -> &[u8] {
    &data[pos..token_end(data, pos)]
}

#[inline]
fn skip_padding(data: &[u8], pos: usize) -> usize {
    data[pos..]
        .iter()
        .position(|&b| b != 0)
        .map_or(data.len(), |i| pos + i)
}

/// Start of the first token in the buffer.
#[inline]
pub(crate) fn first_token(data: &[u8]) -> usize {
    skip_padding(data, 0)
}

/// Start of the token following the one at `pos`.
///
/// Skips the remainder of the current token, then any NUL padding.
#[inline]
pub(crate) fn next_token(data: &[u8], pos: usize) -> usize {
    skip_padding(data, token_end(data, pos))
}
