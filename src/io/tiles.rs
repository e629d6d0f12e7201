//! Tile directory listing and collision-free path allocation

use std::fs;
use std::path::{Path, PathBuf};

use crate::io::error::{MosaicError, Result, file_system};

/// Files of a tile directory in canonical order
///
/// Canonical order is the lexicographic sort of the paths, which within
/// one directory is file-name order. It decides which tile owns a
/// duplicated palette color, so it must not vary between runs or
/// platforms. Subdirectories are skipped.
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when the directory cannot be
/// read and [`MosaicError::EmptyTileSet`] when it contains no files.
pub fn list_tile_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| file_system(dir, "read directory", source))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| file_system(dir, "read directory entry", source))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(MosaicError::EmptyTileSet {
            path: dir.to_path_buf(),
        });
    }
    Ok(files)
}

/// First non-existing variant of a desired path
///
/// Tries the path itself, then `stem_1`, `stem_2`, and so on, keeping
/// the extension. Used for both the work directory and the output file
/// so a run never overwrites anything that already exists.
#[must_use]
pub fn first_available_path(desired: &Path) -> PathBuf {
    if !desired.exists() {
        return desired.to_path_buf();
    }

    let stem = desired
        .file_stem()
        .map_or_else(|| String::from("mosaic"), |s| s.to_string_lossy().into_owned());
    let extension = desired
        .extension()
        .map(|e| e.to_string_lossy().into_owned());

    for attempt in 1_u32.. {
        let mut candidate = format!("{stem}_{attempt}");
        if let Some(ref ext) = extension {
            candidate.push('.');
            candidate.push_str(ext);
        }
        let path = desired.with_file_name(candidate);
        if !path.exists() {
            return path;
        }
    }
    desired.to_path_buf()
}

/// Create a directory and any missing parents
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when creation fails.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| file_system(path, "create directory", source))
}

/// Remove a directory tree produced by extraction
///
/// # Errors
///
/// Returns [`MosaicError::FileSystem`] when removal fails.
pub fn remove_directory(path: &Path) -> Result<()> {
    fs::remove_dir_all(path).map_err(|source| file_system(path, "remove directory", source))
}

/// File name of a path as an owned string, lossy for non-UTF-8 names
///
/// The lossy form is used both as the destination name of the
/// normalized copy and as the palette record, so the two always agree.
pub(crate) fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            file_system(
                path,
                "resolve file name",
                std::io::Error::other("path has no file name"),
            )
        })
}
