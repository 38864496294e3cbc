//! Hashed lookup table over a tokenized buffer.
//!
//! Scanning lookups walk the whole buffer on every call. For programs that
//! query many keys, [`Index`] pays for one scan up front and answers each
//! query with a hash lookup afterwards. Entries are inserted in scan order
//! and an existing key is never overwritten, so the answer is always the
//! one the scanning path would give.

use std::collections::HashMap;

use log::debug;

use crate::access::Lookup;
use crate::lookup::Entries;

/// Section/key folded for case-insensitive hashing.
type Folded = Box<[u8]>;

#[inline]
fn fold(name: &[u8]) -> Folded {
    name.to_ascii_lowercase().into_boxed_slice()
}

/// Hash index of every entry in an [`Ini`](crate::Ini).
///
/// Borrows the `Ini` it was built from; values are zero-copy.
#[derive(Debug, Clone, Default)]
pub struct Index<'a> {
    /// section -> key -> value
    scoped: HashMap<Folded, HashMap<Folded, &'a [u8]>>,
    /// key -> value, first occurrence in any section
    any: HashMap<Folded, &'a [u8]>,
    len: usize,
}

impl<'a> Index<'a> {
    pub(crate) fn build(entries: Entries<'a>) -> Self {
        let mut index = Index::default();

        for entry in entries {
            let key = fold(entry.key());
            index.any.entry(key.clone()).or_insert(entry.value());

            let section = index.scoped.entry(fold(entry.section())).or_default();
            if let std::collections::hash_map::Entry::Vacant(slot) = section.entry(key) {
                slot.insert(entry.value());
                index.len += 1;
            }
        }

        debug!(
            "built index: {} distinct entries in {} sections",
            index.len,
            index.scoped.len()
        );
        index
    }

    /// Number of distinct (section, key) pairs. Shadowed duplicates are not
    /// counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if a section with this name (case-insensitive) has any entries.
    pub fn has_section(&self, section: &str) -> bool {
        self.scoped.contains_key(&*fold(section.as_bytes()))
    }
}

impl Lookup for Index<'_> {
    fn get_bytes(&self, section: Option<&str>, key: &str) -> Option<&[u8]> {
        let key = fold(key.as_bytes());
        match section {
            None => self.any.get(&key).copied(),
            Some(section) => self
                .scoped
                .get(&*fold(section.as_bytes()))?
                .get(&key)
                .copied(),
        }
    }
}
