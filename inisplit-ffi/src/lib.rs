//! C FFI bindings for inisplit.
//!
//! Exposes the classic single-header INI API: load a file into an opaque
//! handle, query it with typed getters that return an `ok` flag plus a
//! union, free the handle. See `include/inisplit.h`.
//!
//! Strings returned by `ini_getstring` point into the handle's buffer and
//! stay valid until `ini_free`.

use std::ffi::{c_char, c_double, c_int, CStr};
use std::path::Path;
use std::ptr;

use inisplit_core::{Ini, Lookup};
use log::debug;

/// Payload of an [`IniValue`]. Which field is valid depends on the getter.
#[repr(C)]
#[derive(Clone, Copy)]
pub union IniValueData {
    pub integer: c_int,
    pub string: *const c_char,
    pub boolean: bool,
    pub decimal: c_double,
}

/// Result of a typed getter: `ok` is false when the key is missing or the
/// value does not convert.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct IniValue {
    pub ok: bool,
    pub value: IniValueData,
}

impl IniValue {
    fn zeroed() -> Self {
        // The widest member; leaves no uninitialized payload bytes.
        Self {
            ok: false,
            value: IniValueData { decimal: 0.0 },
        }
    }

    fn from_option(found: Option<IniValueData>) -> Self {
        let mut result = Self::zeroed();
        if let Some(data) = found {
            result.ok = true;
            result.value = data;
        }
        result
    }
}

/// Start from an all-zero payload, then write one member.
fn payload(write: impl FnOnce(&mut IniValueData)) -> IniValueData {
    let mut data = IniValueData { decimal: 0.0 };
    write(&mut data);
    data
}

/// Decode the `section`/`key` C strings and run `query` against `ini`.
///
/// A NULL `section` means "any section". NULL handles, NULL keys and names
/// that are not UTF-8 all yield `None`.
///
/// # Safety
///
/// `ini` must be NULL or a live handle from [`ini_load`]; `section` and
/// `key` must be NULL or valid NUL-terminated strings.
unsafe fn with_query<T>(
    ini: *const Ini,
    section: *const c_char,
    key: *const c_char,
    query: impl FnOnce(&Ini, Option<&str>, &str) -> Option<T>,
) -> Option<T> {
    let ini = ini.as_ref()?;
    let section = if section.is_null() {
        None
    } else {
        Some(CStr::from_ptr(section).to_str().ok()?)
    };
    if key.is_null() {
        return None;
    }
    let key = CStr::from_ptr(key).to_str().ok()?;
    query(ini, section, key)
}

/// Filename bytes as a path. Unix paths are arbitrary bytes; elsewhere the
/// name must be UTF-8.
#[cfg(unix)]
fn c_path(filename: &CStr) -> Option<&Path> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Some(Path::new(OsStr::from_bytes(filename.to_bytes())))
}

#[cfg(not(unix))]
fn c_path(filename: &CStr) -> Option<&Path> {
    filename.to_str().ok().map(Path::new)
}

/// Load and tokenize an INI file. Returns NULL on any load failure.
///
/// # Safety
///
/// `filename` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn ini_load(filename: *const c_char) -> *mut Ini {
    if filename.is_null() {
        return ptr::null_mut();
    }
    let path = match c_path(CStr::from_ptr(filename)) {
        Some(path) => path,
        None => {
            debug!("ini_load: filename is not valid UTF-8");
            return ptr::null_mut();
        }
    };

    match Ini::load(path) {
        Ok(ini) => Box::into_raw(Box::new(ini)),
        Err(err) => {
            debug!("ini_load: {}", err);
            ptr::null_mut()
        }
    }
}

/// Release a handle from [`ini_load`]. NULL is ignored.
///
/// # Safety
///
/// `ini` must be NULL or a handle from [`ini_load`] not yet freed. Strings
/// obtained from it are dangling afterwards.
#[no_mangle]
pub unsafe extern "C" fn ini_free(ini: *mut Ini) {
    if !ini.is_null() {
        drop(Box::from_raw(ini));
    }
}

/// Integer value. Values outside the range of `int` are not ok.
///
/// # Safety
///
/// See [`with_query`].
#[no_mangle]
pub unsafe extern "C" fn ini_getint(
    ini: *const Ini,
    section: *const c_char,
    key: *const c_char,
) -> IniValue {
    let found = with_query(ini, section, key, |ini, s, k| ini.get_int(s, k))
        .and_then(|v| c_int::try_from(v).ok())
        .map(|v| payload(|d| d.integer = v));
    IniValue::from_option(found)
}

/// Boolean value: exactly `true` or `false`.
///
/// # Safety
///
/// See [`with_query`].
#[no_mangle]
pub unsafe extern "C" fn ini_getbool(
    ini: *const Ini,
    section: *const c_char,
    key: *const c_char,
) -> IniValue {
    let found = with_query(ini, section, key, |ini, s, k| ini.get_bool(s, k))
        .map(|v| payload(|d| d.boolean = v));
    IniValue::from_option(found)
}

/// String value, borrowed from the handle.
///
/// # Safety
///
/// See [`with_query`].
#[no_mangle]
pub unsafe extern "C" fn ini_getstring(
    ini: *const Ini,
    section: *const c_char,
    key: *const c_char,
) -> IniValue {
    let found = with_query(ini, section, key, |ini, s, k| {
        ini.get_cstr(s, k).map(CStr::as_ptr)
    })
    .map(|v| payload(|d| d.string = v));
    IniValue::from_option(found)
}

/// Floating point value.
///
/// # Safety
///
/// See [`with_query`].
#[no_mangle]
pub unsafe extern "C" fn ini_getdecimal(
    ini: *const Ini,
    section: *const c_char,
    key: *const c_char,
) -> IniValue {
    let found = with_query(ini, section, key, |ini, s, k| ini.get_decimal(s, k))
        .map(|v| payload(|d| d.decimal = v));
    IniValue::from_option(found)
}
