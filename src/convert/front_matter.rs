//! Jekyll front matter generation.
//!
//! Permalinks mirror the file tree below the target directory so links into
//! the old documentation keep resolving:
//!
//! | Relative path           | Root   | Permalink            |
//! |-------------------------|--------|----------------------|
//! | `index.html`            | `docs` | `/docs/`             |
//! | `guide/start.html`      | `docs` | `/docs/guide/start/` |
//! | `classes/Foo.html`      | `docs` | `/docs/classes/Foo/` |

use std::{
    borrow::Cow,
    fmt,
    path::{Component, Path},
};

/// Line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// Metadata header written at the top of every converted page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub layout: &'a str,
    pub title: &'a str,
    pub permalink: String,
}

impl<'a> FrontMatter<'a> {
    pub fn new(layout: &'a str, title: &'a str, permalink: String) -> Self {
        Self {
            layout,
            title,
            permalink,
        }
    }
}

impl fmt::Display for FrontMatter<'_> {
    /// Renders the block followed by one blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{DELIMITER}")?;
        writeln!(f, "layout: {}", self.layout)?;
        writeln!(f, "title: \"{}\"", escape_title(self.title))?;
        writeln!(f, "permalink: {}", self.permalink)?;
        writeln!(f, "{DELIMITER}")?;
        writeln!(f)
    }
}

/// Escape double quotes so the title stays a valid quoted YAML scalar.
pub fn escape_title(title: &str) -> Cow<'_, str> {
    if title.contains('"') {
        Cow::Owned(title.replace('"', "\\\""))
    } else {
        Cow::Borrowed(title)
    }
}

/// Relative path without its extension, always `/`-separated.
///
/// Built from path components rather than the raw string so host separators
/// never leak into URLs.
pub fn url_stem(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Permalink for a file at `relative` below a root published as `root_name`.
pub fn permalink(relative: &Path, root_name: &str) -> String {
    let stem = url_stem(relative);
    if stem == "index" {
        format!("/{root_name}/")
    } else {
        format!("/{root_name}/{stem}/")
    }
}
