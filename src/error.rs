//! Configuration error type.
//!
//! Every variant here is a startup problem: there is no degraded mode for a
//! bad config file or a malformed rule, so the binary reports the error and
//! exits with status 2 before any scanning happens. I/O problems on scanned
//! files are not errors in this sense; the scan driver recovers from those
//! per file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("config {path} is not valid {format}: {message}")]
    Parse {
        path: String,
        format: &'static str,
        message: String,
    },

    #[error("rule `{label}`: invalid pattern: {source}")]
    Pattern {
        label: String,
        source: Box<regex::Error>,
    },

    #[error("rule `{label}`: capture group {group} is not present in the pattern")]
    Group { label: String, group: usize },

    #[error("invalid ignore pattern `{pattern}`: {source}")]
    IgnoreGlob {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("scan root {path} is not a directory")]
    Root { path: String },
}
