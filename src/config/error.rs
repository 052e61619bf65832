//! Errors from loading `docs2jekyll.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("`{}` is not a valid docs2jekyll config", .0.display())]
    Parse(PathBuf, #[source] toml::de::Error),

    /// A value that would break the generated front matter.
    #[error("[convert.{field}] {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_read_error_names_file() {
        let err = ConfigError::Read(
            PathBuf::from("site/docs2jekyll.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "cannot read config file `site/docs2jekyll.toml`"
        );
    }

    #[test]
    fn test_parse_error_keeps_path_and_toml_cause() {
        let toml_err = toml::from_str::<toml::Table>("layout = ").unwrap_err();
        let err = ConfigError::Parse(PathBuf::from("docs2jekyll.toml"), toml_err);

        assert_eq!(
            err.to_string(),
            "`docs2jekyll.toml` is not a valid docs2jekyll config"
        );
        let chain = format!("{:#}", anyhow::Error::new(err));
        assert!(chain.contains("docs2jekyll.toml"));
        assert!(chain.len() > "`docs2jekyll.toml` is not a valid docs2jekyll config".len());
    }

    #[test]
    fn test_invalid_names_field() {
        let err = ConfigError::Invalid {
            field: "layout",
            reason: "must not be empty".into(),
        };
        assert_eq!(err.to_string(), "[convert.layout] must not be empty");
    }
}
