//! inisplit core parser
//!
//! In-place INI parser. The loaded text is tokenized in one destructive pass
//! (delimiters become NUL, quoted values are unescaped where they stand) and
//! lookups scan the resulting token stream. No parse tree is built.
//!
//! # Architecture
//!
//! - **buffer.rs** - Owned content plus NUL sentinel
//! - **split.rs** - Tokenizer, escape decoder, line helpers
//! - **walk.rs** - Token-to-token navigation
//! - **lookup.rs** - Section-scoped, first-match-wins scan; entry iterator
//! - **value.rs** - Raw value to integer/decimal/boolean/string
//! - **access.rs** - `Lookup` trait with the typed accessors
//! - **index.rs** - Hashed lookup table built from one scan
//! - **load.rs**, **error.rs** - File loading and its errors
//! - **ini.rs** - The `Ini` handle tying it together
//!
//! # Dialect
//!
//! ```text
//! ; comments take a whole line
//! top = before any header, in the default section ""
//! [section]
//! key = unquoted value, trailing blanks trimmed
//! quoted = "tab:\t newline:\n quote:\" backslash:\\"
//! ```
//!
//! Lines that cannot be parsed (no `=`, nothing after `=`, `""`) are
//! dropped without error. Section and key names match case-insensitively,
//! and for duplicate keys the first one wins.

pub mod value;

mod access;
mod buffer;
mod error;
mod index;
mod ini;
mod load;
mod lookup;
mod split;
mod walk;

pub use access::Lookup;
pub use buffer::Buffer;
pub use error::LoadError;
pub use index::Index;
pub use ini::Ini;
pub use lookup::{Entries, Entry};
pub use split::SplitStats;
pub use value::FromValue;
