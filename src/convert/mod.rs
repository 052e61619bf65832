//! Conversion of a generated HTML documentation tree into Jekyll pages.
//!
//! - **walk**: Find the files to convert
//! - **extract**: Pull `<title>` and `<body>` out of raw HTML
//! - **front_matter**: Build the permalink and metadata header
//! - **document**: Read and overwrite a single file
//!
//! # Flow
//!
//! ```text
//! collect_documents() ──► DocumentFile::read() ──► extract_*() ──► FrontMatter ──► DocumentFile::write()
//!                                  │
//!                                  └── starts with `---` ──► skipped
//! ```
//!
//! Files are handled one after another. A file that fails to read or write is
//! logged and the batch moves on.

pub mod document;
pub mod extract;
pub mod front_matter;
pub mod walk;

use crate::{config::ConvertConfig, error::ConvertError, log};
use anyhow::Result;
use document::{DocumentFile, is_converted, render_page};
use front_matter::{FrontMatter, permalink};
use std::path::Path;

// ============================================================================
// Outcomes
// ============================================================================

/// What happened to a single file that was read successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Front matter was added and the file rewritten.
    Converted { title: String },
    /// Dry run: the file would have been rewritten.
    WouldConvert { permalink: String },
    /// The file already starts with a front matter delimiter.
    AlreadyConverted,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

// ============================================================================
// Converter
// ============================================================================

/// Converts every matching file below one root directory.
pub struct Converter<'a> {
    root: &'a Path,
    root_name: String,
    config: &'a ConvertConfig,
    dry_run: bool,
}

impl<'a> Converter<'a> {
    /// Check `root` and resolve the permalink segment.
    ///
    /// Fails with [`ConvertError::InvalidInput`] before touching any file.
    pub fn new(root: &'a Path, config: &'a ConvertConfig) -> Result<Self, ConvertError> {
        walk::check_root(root)?;
        let root_name = config
            .permalink_root
            .clone()
            .unwrap_or_else(|| walk::root_name(root));

        Ok(Self {
            root,
            root_name,
            config,
            dry_run: false,
        })
    }

    /// Go through the whole pipeline but never write.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Convert all files, logging one line per file.
    pub fn run(&self) -> Summary {
        let mut documents = walk::collect_documents(self.root, self.config).peekable();
        let mut summary = Summary::default();

        if documents.peek().is_none() {
            log!(
                "convert";
                "No {} files found under {}",
                self.config.extension.to_ascii_uppercase(),
                self.root.display()
            );
            return summary;
        }

        for path in documents {
            let doc = DocumentFile::new(path, self.root);
            self.report(&doc, self.process(&doc), &mut summary);
        }

        log!(
            "convert";
            "{} converted, {} skipped, {} failed",
            summary.converted,
            summary.skipped,
            summary.failed
        );
        summary
    }

    /// Read, transform and write one file.
    pub fn process(&self, doc: &DocumentFile) -> Result<Outcome, ConvertError> {
        let text = doc.read()?;
        if is_converted(&text) {
            return Ok(Outcome::AlreadyConverted);
        }

        let title = extract::extract_title(&text, &self.config.fallback_title);
        let body = extract::extract_body_inner(&text);
        let front_matter = FrontMatter::new(
            &self.config.layout,
            title,
            permalink(&doc.relative, &self.root_name),
        );

        if self.dry_run {
            return Ok(Outcome::WouldConvert {
                permalink: front_matter.permalink,
            });
        }

        doc.write(&render_page(&front_matter, body))?;
        Ok(Outcome::Converted {
            title: title.to_owned(),
        })
    }

    fn report(
        &self,
        doc: &DocumentFile,
        result: Result<Outcome, ConvertError>,
        summary: &mut Summary,
    ) {
        let path = doc.path.display();
        match result {
            Ok(Outcome::Converted { title }) => {
                summary.converted += 1;
                log!("convert"; "Converted: {path} (title: {title})");
            }
            Ok(Outcome::WouldConvert { permalink }) => {
                summary.converted += 1;
                log!("dry-run"; "Would convert: {path} (permalink: {permalink})");
            }
            Ok(Outcome::AlreadyConverted) => {
                summary.skipped += 1;
                log!("skip"; "Skipping (already converted): {path}");
            }
            Err(ConvertError::Read { source, .. }) => {
                summary.failed += 1;
                log!("skip"; "Skipping (read error): {path}: {source}");
            }
            Err(ConvertError::Write { source, .. }) => {
                summary.failed += 1;
                log!("error"; "Failed to write {path}: {source}");
            }
            Err(err) => {
                summary.failed += 1;
                log!("error"; "{path}: {err}");
            }
        }
    }
}

/// Convert every matching file under `root`.
pub fn convert_tree(root: &Path, config: &ConvertConfig, dry_run: bool) -> Result<Summary> {
    let converter = Converter::new(root, config)?.dry_run(dry_run);
    Ok(converter.run())
}

// ============================================================================
// Tests
// ============================================================================
