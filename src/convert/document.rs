//! A single documentation file on disk.
//!
//! Files are read fully and closed, transformed in memory, then written fully
//! and closed. No handle is held across both steps.

use super::front_matter::{DELIMITER, FrontMatter};
use crate::error::ConvertError;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// A file discovered under the target root.
#[derive(Debug, Clone)]
pub struct DocumentFile {
    /// Path as produced by the walker (root-prefixed)
    pub path: PathBuf,
    /// Path relative to the target root.
    /// Example: `docs/guide/start.html` → `guide/start.html`
    pub relative: PathBuf,
}

impl DocumentFile {
    pub fn new(path: PathBuf, root: &Path) -> Self {
        let relative = path
            .strip_prefix(root)
            .map_or_else(|_| path.clone(), Path::to_path_buf);
        Self { path, relative }
    }

    /// Read the whole file as UTF-8 with line endings normalized to `\n`.
    pub fn read(&self) -> Result<String, ConvertError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ConvertError::Read {
            path: self.path.clone(),
            source,
        })?;
        Ok(normalize_newlines(text))
    }

    /// Replace the file's content.
    pub fn write(&self, content: &str) -> Result<(), ConvertError> {
        fs::write(&self.path, content).map_err(|source| ConvertError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Whether the text already starts with a front matter delimiter.
///
/// Only the leading three characters are inspected, so any file that happens
/// to start with `---` is treated as converted.
pub fn is_converted(text: &str) -> bool {
    text.starts_with(DELIMITER)
}

/// Full page content: front matter, a separating newline, the body and a
/// trailing newline.
pub fn render_page(front_matter: &FrontMatter<'_>, body: &str) -> String {
    format!("{front_matter}\n{body}\n")
}

fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
