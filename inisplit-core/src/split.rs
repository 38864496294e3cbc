//! Destructive, single-pass INI tokenizer.
//!
//! The tokenizer rewrites the buffer in place so that every byte ends up as
//! either token content or NUL. Section headers keep their leading `[` so the
//! lookup scan can tell them apart from keys; keys and values alternate.
//!
//! ```text
//! before:  [net]\n host = "a\tb" ; x\n bad line\n
//! after:   [net\0\0\0host\0\0\0a<TAB>b\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0\0
//! ```
//!
//! Nothing here reports errors. Lines that cannot be parsed are blanked out
//! and counted in [`SplitStats::discarded`].

use log::trace;
use memchr::{memchr, memchr2, memchr3};

/// Counters collected during tokenization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Section headers seen (including repeated names).
    pub sections: usize,
    /// Key/value pairs kept.
    pub entries: usize,
    /// Malformed lines blanked out.
    pub discarded: usize,
}

#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

// ============================================================================
// Line helpers
// ============================================================================

/// Replace trailing spaces, tabs and CRs before `end` with NUL, never
/// touching bytes below `floor`.
pub(crate) fn trim_back(data: &mut [u8], floor: usize, mut end: usize) {
    while end > floor && is_blank(data[end - 1]) {
        end -= 1;
        data[end] = 0;
    }
}

/// Overwrite everything from `from` up to the next `\n` with NUL.
///
/// Returns the index of that newline, or `data.len()` if the line runs to
/// the end of the buffer. The newline itself is left for the caller.
pub(crate) fn discard_line(data: &mut [u8], from: usize) -> usize {
    let stop = memchr(b'\n', &data[from..]).map_or(data.len(), |i| from + i);
    data[from..stop].fill(0);
    stop
}

// ============================================================================
// Escape decoder
// ============================================================================

/// Decode the quoted string whose opening `"` sits at `quote`.
///
/// The decoded text is written starting at `quote` itself. The read cursor
/// starts one byte ahead and every escape consumes two bytes to produce one,
/// so the write cursor can never overtake it.
///
/// Returns the write cursor: the exclusive end of the decoded text. Bytes
/// from there to the terminating quote are stale and must be blanked by the
/// caller.
pub(crate) fn unescape_quoted(data: &mut [u8], quote: usize) -> usize {
    let mut write = quote;
    let mut read = quote + 1;

    while read < data.len() {
        let out = match data[read] {
            b'"' | b'\r' | b'\n' | 0 => break,
            b'\\' => {
                read += 1;
                match data.get(read) {
                    None | Some(b'\r' | b'\n' | 0) => return write,
                    Some(b'r') => b'\r',
                    Some(b'n') => b'\n',
                    Some(b't') => b'\t',
                    // `\"`, `\\` and unknown escapes all yield the char itself
                    Some(&other) => other,
                }
            }
            other => other,
        };
        data[write] = out;
        write += 1;
        read += 1;
    }

    write
}

// ============================================================================
// Tokenizer
// ============================================================================

/// Tokenize `data` in place. `data` must not include the buffer sentinel.
pub(crate) fn split(data: &mut [u8]) -> SplitStats {
    let end = data.len();
    let mut stats = SplitStats::default();
    let mut p = 0;

    while p < end {
        match data[p] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                data[p] = 0;
                p += 1;
            }
            0 => p += 1,
            b'[' => {
                // The `[` stays as the first byte of the section token.
                p += memchr3(b']', b'\n', 0, &data[p..]).unwrap_or(end - p);
                if p < end {
                    data[p] = 0;
                }
                stats.sections += 1;
            }
            b';' => p = discard_line(data, p),
            _ => p = split_entry(data, p, &mut stats),
        }
    }

    stats
}

/// Tokenize one `key = value` line starting at `line_start`.
///
/// Returns the cursor position to resume the outer scan from.
fn split_entry(data: &mut [u8], line_start: usize, stats: &mut SplitStats) -> usize {
    let end = data.len();

    let mut p = line_start + memchr3(b'=', b'\n', 0, &data[line_start..]).unwrap_or(end - line_start);
    if p == end || data[p] != b'=' || p == line_start {
        return discard(data, line_start, stats);
    }
    trim_back(data, line_start, p);

    // `=` and the blanks after it
    data[p] = 0;
    p += 1;
    while p < end && is_blank(data[p]) {
        data[p] = 0;
        p += 1;
    }

    if p == end || matches!(data[p], b'\n' | 0) {
        return discard(data, line_start, stats);
    }

    if data[p] == b'"' {
        let decoded_end = unescape_quoted(data, p);
        if decoded_end == p {
            return discard(data, line_start, stats);
        }
        stats.entries += 1;
        // Closing quote and anything trailing it on this line.
        return discard_line(data, decoded_end);
    }

    let stop = p + memchr2(b'\n', 0, &data[p..]).unwrap_or(end - p);
    trim_back(data, p, stop);
    stats.entries += 1;
    stop
}

fn discard(data: &mut [u8], line_start: usize, stats: &mut SplitStats) -> usize {
    trace!("discarding malformed line at byte {}", line_start);
    stats.discarded += 1;
    discard_line(data, line_start)
}
