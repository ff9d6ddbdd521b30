//! Error taxonomy for configuration loading.
//!
//! Every variant is fatal to the enclosing load: nothing is caught and
//! recovered internally, so a failure anywhere in the inclusion tree
//! surfaces unchanged from `Configuration::load`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading and resolving a configuration tree.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No root configuration file was given on the command line.
    #[error("You must specify a config file")]
    NotSpecified,

    /// A referenced file is missing or unreadable.
    #[error("Cannot read file {}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration document is not valid JSON.
    #[error("Cannot parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A document was reached a second time within one resolution tree.
    #[error(
        "Config file '{}' is already included. Check your config files for circular inclusions.",
        .path.display()
    )]
    CircularInclusion { path: PathBuf },

    /// A record violates the document schema (missing source type,
    /// missing repo-url, a value that cannot be coerced).
    #[error("{0}")]
    Schema(String),

    /// The merged configuration failed post-resolution validation.
    /// Carries every violation found, not just the first.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
