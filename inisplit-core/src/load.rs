//! Reading INI files into a [`Buffer`].

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

use crate::buffer::Buffer;
use crate::error::LoadError;

/// Read the whole file at `path` into a single allocation.
///
/// The allocation is sized from the file metadata up front (plus one byte
/// for the sentinel) and the read must fill it exactly.
pub(crate) fn read_file(path: &Path) -> Result<Buffer, LoadError> {
    let read_error = |source: io::Error| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => read_error(source),
    })?;

    let size = file.metadata().map_err(read_error)?.len();
    let alloc_error = || LoadError::Allocation {
        path: path.to_path_buf(),
        size,
    };
    let expected = usize::try_from(size).map_err(|_| alloc_error())?;
    let capacity = expected.checked_add(1).ok_or_else(alloc_error)?;

    let mut data = Vec::new();
    data.try_reserve_exact(capacity).map_err(|_| alloc_error())?;

    let actual = file.take(size).read_to_end(&mut data).map_err(read_error)?;
    if actual != expected {
        return Err(LoadError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }

    debug!("loaded {} bytes from {}", actual, path.display());
    Ok(Buffer::new(data))
}
