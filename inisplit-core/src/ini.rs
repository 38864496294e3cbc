//! The [`Ini`] handle: a tokenized buffer plus lookups over it.

use std::convert::Infallible;
use std::ffi::CStr;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::access::Lookup;
use crate::buffer::Buffer;
use crate::error::LoadError;
use crate::index::Index;
use crate::load;
use crate::lookup::{self, Entries, Entry};
use crate::split::{self, SplitStats};

/// A parsed INI document.
///
/// Owns the buffer it was parsed from. The buffer is rewritten once, during
/// construction, and only read afterwards; every borrowed result (strings,
/// entries, an [`Index`]) is tied to the lifetime of this handle, so the
/// borrow checker rules out use after the `Ini` is dropped.
///
/// ```
/// use inisplit_core::{Ini, Lookup};
///
/// let ini = Ini::from_bytes(&b"name = demo\n[db]\nhost = \"local\\thost\"\n"[..]);
/// assert_eq!(ini.get_str(None, "name"), Some("demo"));
/// assert_eq!(ini.get_str(Some("DB"), "host"), Some("local\thost"));
/// ```
#[derive(Debug)]
pub struct Ini {
    buffer: Buffer,
    stats: SplitStats,
}

impl Ini {
    /// Tokenize `buffer` in place and take ownership of it.
    pub fn new(mut buffer: Buffer) -> Self {
        let stats = split::split(buffer.content_mut());
        debug!(
            "tokenized {} bytes: {} sections, {} entries, {} discarded lines",
            buffer.len(),
            stats.sections,
            stats.entries,
            stats.discarded
        );
        Self { buffer, stats }
    }

    /// Tokenize already-loaded bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Buffer::new(bytes))
    }

    /// Read and tokenize the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let buffer = load::read_file(path.as_ref())?;
        Ok(Self::new(buffer))
    }

    /// Counters collected while tokenizing.
    pub fn stats(&self) -> SplitStats {
        self.stats
    }

    /// The tokenized content: token bytes separated by NUL runs.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.content()
    }

    /// All entries in file order, duplicates included.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(self.buffer.content())
    }

    /// Build a hash index for repeated lookups.
    pub fn index(&self) -> Index<'_> {
        Index::build(self.entries())
    }

    /// First matching entry, with its section and original key spelling.
    pub fn find(&self, section: Option<&str>, key: &str) -> Option<Entry<'_>> {
        lookup::find(
            self.buffer.content(),
            section.map(str::as_bytes),
            key.as_bytes(),
        )
    }

    /// Value as a NUL-terminated C string borrowed from the buffer.
    ///
    /// Every token in the buffer is followed by a NUL (the last one by the
    /// buffer sentinel), so this never copies.
    pub fn get_cstr(&self, section: Option<&str>, key: &str) -> Option<&CStr> {
        let entry = self.find(section, key)?;
        let start = entry.value_pos();
        let end = start + entry.value().len();
        CStr::from_bytes_with_nul(&self.buffer.with_sentinel()[start..=end]).ok()
    }
}

impl Lookup for Ini {
    fn get_bytes(&self, section: Option<&str>, key: &str) -> Option<&[u8]> {
        self.find(section, key).map(|entry| entry.value())
    }
}

impl From<Buffer> for Ini {
    fn from(buffer: Buffer) -> Self {
        Self::new(buffer)
    }
}

impl FromStr for Ini {
    type Err = Infallible;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_bytes(text))
    }
}
