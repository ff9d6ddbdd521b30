//! Artifact source records and their normalization.
//!
//! Raw source records arrive as untyped JSON maps with a required `type`
//! field and type-dependent contents. `normalize` is the single translation
//! point from the raw record into the [`ArtifactSource`] variant, resolving
//! referenced flat files and coercing loosely-typed fields along the way.

use super::coerce::coerce_bool;
use super::flatfile::load_flat_file;
use super::paths::resolve_ref;
use crate::error::{ConfigError, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;

/// One declared origin of candidate artifacts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ArtifactSource {
    /// A tag in the build system; gathered artifacts are filtered by the
    /// referenced GAV patterns.
    MeadTag {
        #[serde(rename = "included-gav-patterns")]
        included_gav_patterns: Vec<String>,
    },
    /// An explicit list of top-level GAVs whose dependencies are gathered
    /// from the given repositories.
    DependencyList {
        /// Follow transitive dependencies. Unset until the defaulting pass
        /// runs, then always `Some`.
        recursive: Option<bool>,
        /// Skip dependencies that cannot be found instead of failing.
        #[serde(rename = "skip-missing")]
        skip_missing: Option<bool>,
        #[serde(rename = "repo-url")]
        repo_urls: Vec<String>,
        #[serde(rename = "top-level-gavs")]
        top_level_gavs: Vec<String>,
    },
    /// A repository crawled directly, filtered by the referenced GAV
    /// patterns.
    Repository {
        #[serde(rename = "repo-url")]
        repo_urls: Vec<String>,
        #[serde(rename = "included-gav-patterns")]
        included_gav_patterns: Vec<String>,
    },
    /// A source kind this loader does not recognize, passed through with
    /// its literal fields (including its own `type`).
    #[serde(untagged)]
    Unknown(Map<String, Value>),
}

/// Normalize one raw source record.
///
/// Requires a `type` field, dispatches on it, resolves referenced flat
/// files relative to `base_dir` and coerces boolean-like fields. Unknown
/// types pass through untouched.
pub fn normalize(raw: &Map<String, Value>, base_dir: &Path) -> Result<ArtifactSource> {
    let Some(type_name) = raw.get("type").and_then(Value::as_str) else {
        return Err(ConfigError::Schema(format!(
            "Source doesn't have a type: {}",
            Value::Object(raw.clone())
        )));
    };

    match type_name {
        "mead-tag" => Ok(ArtifactSource::MeadTag {
            included_gav_patterns: load_referenced_lines(raw, "included-gav-patterns-ref", base_dir)?,
        }),
        "dependency-list" => Ok(ArtifactSource::DependencyList {
            recursive: optional_bool(raw, "recursive")?,
            skip_missing: optional_bool(raw, "skip-missing")?,
            repo_urls: repo_urls(raw, type_name)?,
            top_level_gavs: load_referenced_lines(raw, "top-level-gavs-ref", base_dir)?,
        }),
        "repository" => Ok(ArtifactSource::Repository {
            repo_urls: repo_urls(raw, type_name)?,
            included_gav_patterns: load_referenced_lines(raw, "included-gav-patterns-ref", base_dir)?,
        }),
        _ => Ok(ArtifactSource::Unknown(raw.clone())),
    }
}

/// Coerce an optional boolean-like field, leaving absence to the
/// defaulting pass.
fn optional_bool(raw: &Map<String, Value>, field: &str) -> Result<Option<bool>> {
    raw.get(field).map(|value| coerce_bool(value, field)).transpose()
}

/// Resolve a flat-file reference field into its lines.
///
/// An absent or empty reference yields an empty list; a present reference
/// is resolved relative to the declaring document and must be readable.
fn load_referenced_lines(
    raw: &Map<String, Value>,
    field: &str,
    base_dir: &Path,
) -> Result<Vec<String>> {
    match raw.get(field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(reference)) if reference.is_empty() => Ok(Vec::new()),
        Some(Value::String(reference)) => load_flat_file(&resolve_ref(reference, base_dir)),
        Some(other) => Err(ConfigError::Schema(format!(
            "{field} must be a file path, got {other}"
        ))),
    }
}

/// Normalize `repo-url` into a non-empty list of URLs.
///
/// A single string is promoted to a one-element list; a list is used
/// as-is. The field is required wherever this is called.
fn repo_urls(raw: &Map<String, Value>, type_name: &str) -> Result<Vec<String>> {
    let missing =
        || ConfigError::Schema(format!("Source {type_name} must have specified repo-url"));

    let urls = match raw.get("repo-url").ok_or_else(missing)? {
        Value::String(url) => vec![url.clone()],
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(url) => Ok(url.clone()),
                other => Err(ConfigError::Schema(format!(
                    "repo-url of source {type_name} must contain strings, got {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?,
        other => {
            return Err(ConfigError::Schema(format!(
                "repo-url of source {type_name} must be a string or a list of strings, got {other}"
            )));
        }
    };

    if urls.is_empty() {
        return Err(missing());
    }
    Ok(urls)
}
