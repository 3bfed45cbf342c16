//! Capability-based input file access built on `cap-std` and `camino`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

use crate::CliError;

/// Open `path` for reading, mapping failures onto [`CliError`].
pub(crate) fn open_input(path: &Utf8Path, field: &'static str) -> Result<fs_utf8::File, CliError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| CliError::OpenSource {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Require `path` to name an existing regular file.
pub(crate) fn require_file(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::OpenSource {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}
