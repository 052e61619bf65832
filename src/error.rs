//! Conversion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting a documentation tree.
///
/// `Usage` and `InvalidInput` abort the run before any file is touched.
/// `Read` and `Write` only ever describe a single file and never stop the batch.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no target directory given")]
    Usage,

    #[error("Target dir does not exist or is not a directory: {}", .0.display())]
    InvalidInput(PathBuf),

    #[error("cannot read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Process exit code for this error when it ends the run.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::InvalidInput(_) | Self::Read { .. } | Self::Write { .. } => 1,
        }
    }
}

/// Exit code for any error that reaches `main`.
///
/// Anything that is not a [`ConvertError`] (config loading, for one) maps to 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<ConvertError>()
        .map_or(1, ConvertError::exit_code)
}
