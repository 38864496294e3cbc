//! Typed accessors shared by the scanning and indexed lookup paths.

use crate::value::FromValue;

/// Typed key/value lookup.
///
/// Implementors only provide [`get_bytes`](Lookup::get_bytes); the typed
/// accessors are built on top of it. `section` of `None` searches every
/// section, `Some("")` only the default section. Section and key names are
/// compared ASCII case-insensitively; values are returned verbatim.
///
/// Every accessor returns `None` both when the key is missing and when the
/// value does not convert. The two cases are not told apart.
///
/// ```
/// use inisplit_core::{Ini, Lookup};
///
/// let ini: Ini = "[server]\nport = 8080\ndebug = true\n".parse().unwrap();
/// assert_eq!(ini.get_int(Some("Server"), "PORT"), Some(8080));
/// assert_eq!(ini.get_bool(None, "debug"), Some(true));
/// assert_eq!(ini.get_int(Some("server"), "debug"), None);
/// ```
pub trait Lookup {
    /// Raw bytes of the first matching value.
    fn get_bytes(&self, section: Option<&str>, key: &str) -> Option<&[u8]>;

    /// First matching value converted to `T`.
    fn get<'s, T: FromValue<'s>>(&'s self, section: Option<&str>, key: &str) -> Option<T> {
        self.get_bytes(section, key).and_then(T::from_value)
    }

    /// Value as a string slice borrowed from the buffer.
    ///
    /// `None` if the key is missing or the value is not valid UTF-8.
    fn get_str(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.get(section, key)
    }

    /// Value as a base-10 integer, consuming the whole value.
    fn get_int(&self, section: Option<&str>, key: &str) -> Option<i64> {
        self.get(section, key)
    }

    /// Value as a floating point number, consuming the whole value.
    fn get_decimal(&self, section: Option<&str>, key: &str) -> Option<f64> {
        self.get(section, key)
    }

    /// Value as a boolean; only the exact literals `true` and `false`.
    fn get_bool(&self, section: Option<&str>, key: &str) -> Option<bool> {
        self.get(section, key)
    }
}
