//! Conversions from raw value bytes to typed results.
//!
//! Every conversion is all-or-nothing: the whole value must be consumed,
//! otherwise the result is `None`. There is no partial parse (`123abc` is
//! not `123`) and no separate error for malformed text. Leading blanks are
//! skipped before a number, trailing ones are not.

use std::str;

use phf::phf_map;

/// Boolean literals. Case-sensitive: `TRUE` and `True` are not booleans.
static BOOL_LITERALS: phf::Map<&'static [u8], bool> = phf_map! {
    b"true" => true,
    b"false" => false,
};

/// Types a raw INI value can be converted into.
///
/// The lifetime `'a` is the lifetime of the buffer the value lives in, so
/// borrowed conversions (`&str`, `&[u8]`) are zero-copy.
pub trait FromValue<'a>: Sized {
    /// Convert the raw value, or `None` if it is not valid for this type.
    fn from_value(raw: &'a [u8]) -> Option<Self>;
}

impl<'a> FromValue<'a> for &'a [u8] {
    #[inline]
    fn from_value(raw: &'a [u8]) -> Option<Self> {
        Some(raw)
    }
}

impl<'a> FromValue<'a> for &'a str {
    #[inline]
    fn from_value(raw: &'a [u8]) -> Option<Self> {
        str::from_utf8(raw).ok()
    }
}

impl FromValue<'_> for i64 {
    fn from_value(raw: &[u8]) -> Option<Self> {
        parse_int(raw)
    }
}

impl FromValue<'_> for f64 {
    fn from_value(raw: &[u8]) -> Option<Self> {
        parse_decimal(raw)
    }
}

impl FromValue<'_> for bool {
    fn from_value(raw: &[u8]) -> Option<Self> {
        parse_bool(raw)
    }
}

/// Whitespace a number may be preceded by: space, `\t`, `\n`, `\v`, `\f`,
/// `\r`.
#[inline]
fn is_number_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn number_text(raw: &[u8]) -> Option<&str> {
    let start = raw.iter().position(|&b| !is_number_space(b)).unwrap_or(raw.len());
    str::from_utf8(&raw[start..]).ok()
}

/// Base-10 integer with optional sign. Overflow is `None`.
pub fn parse_int(raw: &[u8]) -> Option<i64> {
    number_text(raw)?.parse().ok()
}

/// Floating point number: decimal or exponent notation, `inf`, `nan`.
///
/// Out of range is `None`: a finite literal that overflows to infinity, or
/// one with a nonzero mantissa that underflows to zero or a subnormal.
pub fn parse_decimal(raw: &[u8]) -> Option<f64> {
    let text = number_text(raw)?;
    let value: f64 = text.parse().ok()?;

    if value.is_infinite() && !spells_infinity(text) {
        return None;
    }
    if (value == 0.0 || value.is_subnormal()) && has_nonzero_mantissa(text) {
        return None;
    }
    Some(value)
}

fn spells_infinity(text: &str) -> bool {
    let unsigned = text.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Any nonzero digit before the exponent.
fn has_nonzero_mantissa(text: &str) -> bool {
    text.bytes()
        .take_while(|&b| b != b'e' && b != b'E')
        .any(|b| matches!(b, b'1'..=b'9'))
}

/// Exactly `true` or `false`.
#[inline]
pub fn parse_bool(raw: &[u8]) -> Option<bool> {
    BOOL_LITERALS.get(raw).copied()
}
