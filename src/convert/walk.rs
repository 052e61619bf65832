//! Discovery of documentation files below the target root.

use crate::{config::ConvertConfig, error::ConvertError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fail with [`ConvertError::InvalidInput`] unless `root` is an existing directory.
pub fn check_root(root: &Path) -> Result<(), ConvertError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(ConvertError::InvalidInput(root.to_path_buf()))
    }
}

/// Lazily walk `root` recursively, yielding every file with the configured
/// extension that is not in the ignore list.
///
/// Symlinked files are followed, symlinked directories are not descended.
/// Unreadable directory entries are skipped. Entries are visited in file name
/// order so runs are reproducible.
pub fn collect_documents(root: &Path, config: &ConvertConfig) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .filter(move |e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !config.ignored.iter().any(|ignored| ignored == name)
        })
        .filter(move |e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == config.extension.as_str())
        })
        .map(walkdir::DirEntry::into_path)
}

/// Name used as the first permalink segment for `root`.
///
/// Falls back to the canonical path when `root` has no final component
/// (e.g. `.` or `docs/..`).
pub fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .or_else(|| {
            root.canonicalize()
                .ok()?
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default()
}
