//! `[convert]` section configuration.
//!
//! Controls which files are picked up and what goes into their front matter.

use super::defaults;
use educe::Educe;
use serde::Deserialize;

/// `[convert]` section in docs2jekyll.toml.
///
/// # Example
/// ```toml
/// [convert]
/// layout = "page"
/// fallback_title = "Documentation"
/// extension = "html"
/// ```
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Value of the `layout:` key written into every page.
    #[serde(default = "defaults::convert::layout")]
    #[educe(Default = defaults::convert::layout())]
    pub layout: String,

    /// Title used when a file has no `<title>` element.
    #[serde(default = "defaults::convert::fallback_title")]
    #[educe(Default = defaults::convert::fallback_title())]
    pub fallback_title: String,

    /// Extension (without dot) of the files to convert.
    #[serde(default = "defaults::convert::extension")]
    #[educe(Default = defaults::convert::extension())]
    pub extension: String,

    /// URL segment in front of every permalink.
    /// Defaults to the name of the target directory.
    #[serde(default)]
    pub permalink_root: Option<String>,

    /// File names that are never converted.
    #[serde(default = "defaults::convert::ignored")]
    #[educe(Default = defaults::convert::ignored())]
    pub ignored: Vec<String>,
}
