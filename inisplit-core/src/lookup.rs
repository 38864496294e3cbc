//! Section-scoped key lookup over the tokenized buffer.
//!
//! Lookups are linear scans from the start of the buffer. The active
//! section starts out as the unnamed default section and changes whenever
//! a `[`-prefixed token is reached; every other token is a key and the
//! token after it is its value. Matching is ASCII case-insensitive on
//! whole tokens and the first match in scan order wins.

use std::iter::FusedIterator;
use std::str;

use crate::walk::{first_token, next_token, token_at};

/// One key/value pair, with the section it belongs to.
///
/// All slices borrow from the tokenized buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    section: &'a [u8],
    key: &'a [u8],
    value: &'a [u8],
    value_pos: usize,
}

impl<'a> Entry<'a> {
    /// Section name, empty for the default section.
    #[inline]
    pub fn section(&self) -> &'a [u8] {
        self.section
    }

    /// Key as written in the source (original case).
    #[inline]
    pub fn key(&self) -> &'a [u8] {
        self.key
    }

    /// Value with quotes removed and escapes decoded.
    #[inline]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Section name as UTF-8, if valid.
    pub fn section_str(&self) -> Option<&'a str> {
        str::from_utf8(self.section).ok()
    }

    /// Key as UTF-8, if valid.
    pub fn key_str(&self) -> Option<&'a str> {
        str::from_utf8(self.key).ok()
    }

    /// Value as UTF-8, if valid.
    pub fn value_str(&self) -> Option<&'a str> {
        str::from_utf8(self.value).ok()
    }

    /// Offset of the value within the buffer content.
    #[inline]
    pub(crate) fn value_pos(&self) -> usize {
        self.value_pos
    }

    /// Whether this entry answers a query for `section` / `key`.
    ///
    /// `None` matches every section.
    #[inline]
    pub fn matches(&self, section: Option<&[u8]>, key: &[u8]) -> bool {
        section.map_or(true, |s| s.eq_ignore_ascii_case(self.section))
            && key.eq_ignore_ascii_case(self.key)
    }
}

/// Iterator over all entries in scan order.
///
/// Created by [`Ini::entries`](crate::Ini::entries).
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    data: &'a [u8],
    pos: usize,
    section: &'a [u8],
}

impl<'a> Entries<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: first_token(data),
            section: b"",
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Entry<'a>> {
        let data = self.data;

        while self.pos < data.len() {
            let token = token_at(data, self.pos);

            if let Some(name) = token.strip_prefix(b"[") {
                self.section = name;
                self.pos = next_token(data, self.pos);
                continue;
            }

            let value_pos = next_token(data, self.pos);
            if value_pos >= data.len() {
                // Key without a value cannot come out of the tokenizer.
                self.pos = data.len();
                return None;
            }
            self.pos = next_token(data, value_pos);

            return Some(Entry {
                section: self.section,
                key: token,
                value: token_at(data, value_pos),
                value_pos,
            });
        }

        None
    }
}

impl FusedIterator for Entries<'_> {}

/// Find the first entry matching `section` / `key`.
pub(crate) fn find<'a>(data: &'a [u8], section: Option<&[u8]>, key: &[u8]) -> Option<Entry<'a>> {
    Entries::new(data).find(|entry| entry.matches(section, key))
}
