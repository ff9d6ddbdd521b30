//! Recursive document resolution and the merged configuration.
//!
//! `Configuration::load` drives the whole pass: it walks the inclusion
//! tree depth-first through `DocumentResolver`, then applies process-wide
//! defaults and validates the merged result. Any failure at any depth
//! aborts the load; no partial configuration is ever returned.

use super::coerce::coerce_bool;
use super::flatfile::load_flat_file;
use super::paths::resolve_ref;
use super::sources::{self, ArtifactSource};
use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// The fully resolved artifact-list configuration.
///
/// Built once per load invocation, mutated only during document
/// resolution, then handed read-only to the rest of the program.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Whether only one version per artifact is retained. `None` only
    /// while resolution is in flight; defaulted to true afterwards.
    pub single_version: Option<bool>,
    /// Artifact sources in inclusion-resolution order.
    pub artifact_sources: Vec<ArtifactSource>,
    /// GAV patterns excluded from the generated list.
    pub excluded_gav_patterns: Vec<String>,
    /// Repository identifiers excluded from gathering.
    pub excluded_repositories: Vec<String>,
    /// Patterns of artifacts allowed to keep multiple versions.
    pub multi_version_ga_patterns: Vec<String>,
    /// Whether all artifact classifiers are considered.
    pub all_classifiers: bool,
}

impl Configuration {
    /// Resolve the configuration tree rooted at `root_config_path`.
    ///
    /// The root document is processed with rewrite rights for
    /// `single-version`, like the head of a high-priority chain.
    pub fn load(root_config_path: &Path, all_classifiers: bool) -> Result<Self> {
        let mut config = Configuration {
            single_version: None,
            artifact_sources: Vec::new(),
            excluded_gav_patterns: Vec::new(),
            excluded_repositories: Vec::new(),
            multi_version_ga_patterns: Vec::new(),
            all_classifiers,
        };

        let mut resolver = DocumentResolver::new();
        resolver.load_document(root_config_path, true, &mut config)?;

        config.apply_defaults();
        config.validate()?;

        info!(
            sources = config.artifact_sources.len(),
            excluded_gav_patterns = config.excluded_gav_patterns.len(),
            excluded_repositories = config.excluded_repositories.len(),
            multi_version_ga_patterns = config.multi_version_ga_patterns.len(),
            "Configuration resolved"
        );
        Ok(config)
    }

    /// Fill in values no document in the tree provided.
    fn apply_defaults(&mut self) {
        if self.single_version.is_none() {
            self.single_version = Some(true);
        }
        for source in &mut self.artifact_sources {
            if let ArtifactSource::DependencyList {
                recursive,
                skip_missing,
                ..
            } = source
            {
                recursive.get_or_insert(true);
                skip_missing.get_or_insert(true);
            }
        }
    }

    /// Check the merged result, collecting every violation before failing.
    fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();
        if self.single_version.is_none() {
            violations.push("Option single-version not set in configuration file".to_string());
        }
        if self.artifact_sources.is_empty() {
            violations.push("No artifact-sources set in configuration file".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                error!("{violation}");
            }
            Err(ConfigError::Validation(violations))
        }
    }
}

/// One configuration document as parsed from disk, before resolution.
///
/// `single-version` and the include references are kept as raw values:
/// the first is boolean-like, the latter may be a path or anything falsy.
/// Unrecognized top-level keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct Document {
    single_version: Option<Value>,
    artifact_sources: Vec<Map<String, Value>>,
    excluded_gav_patterns_ref: Vec<String>,
    excluded_repositories: Vec<String>,
    multi_version_ga_patterns_ref: Vec<String>,
    multi_version_ga_patterns: Vec<String>,
    include_high_priority: Option<Value>,
    include_low_priority: Option<Value>,
}

/// Extract an include reference, treating `null`, `false` and the empty
/// string as "no include".
fn include_target(value: &Option<Value>, key: &str) -> Result<Option<String>> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::String(reference)) if reference.is_empty() => Ok(None),
        Some(Value::String(reference)) => Ok(Some(reference.clone())),
        Some(other) => Err(ConfigError::Schema(format!(
            "{key} must be a file path, got {other}"
        ))),
    }
}

/// Depth-first resolver for one load invocation.
///
/// Holds the cycle-detection ledger over canonicalized paths. Created
/// fresh per `Configuration::load`, so repeated or concurrent loads
/// cannot leak visit history between runs.
struct DocumentResolver {
    visited: HashSet<PathBuf>,
}

impl DocumentResolver {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
        }
    }

    /// Load one document and everything it includes, in priority order:
    /// the high-priority include first, then the document's own settings,
    /// then the low-priority include. List ordering and the
    /// `single-version` write rule both fall out of this processing order.
    ///
    /// `rewrite_single_version` grants the document the right to overwrite
    /// an already-set `single-version`; it is true for the root and for
    /// every high-priority include, false for low-priority includes.
    fn load_document(
        &mut self,
        path: &Path,
        rewrite_single_version: bool,
        config: &mut Configuration,
    ) -> Result<()> {
        debug!("Loading configuration file {}", path.display());

        let canonical = path
            .canonicalize()
            .map_err(|source| ConfigError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        if !self.visited.insert(canonical.clone()) {
            return Err(ConfigError::CircularInclusion { path: canonical });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Document =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        // References are resolved against the document as written, not its
        // canonical location.
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

        if let Some(reference) =
            include_target(&document.include_high_priority, "include-high-priority")?
        {
            self.load_document(&resolve_ref(&reference, base_dir), true, config)?;
        }

        if let Some(ref value) = document.single_version
            && (rewrite_single_version || config.single_version.is_none())
        {
            config.single_version = Some(coerce_bool(value, "single-version")?);
        }

        for raw in &document.artifact_sources {
            config.artifact_sources.push(sources::normalize(raw, base_dir)?);
        }

        for reference in &document.excluded_gav_patterns_ref {
            config
                .excluded_gav_patterns
                .extend(load_flat_file(&resolve_ref(reference, base_dir))?);
        }

        config
            .excluded_repositories
            .extend(document.excluded_repositories);

        for reference in &document.multi_version_ga_patterns_ref {
            config
                .multi_version_ga_patterns
                .extend(load_flat_file(&resolve_ref(reference, base_dir))?);
        }

        config
            .multi_version_ga_patterns
            .extend(document.multi_version_ga_patterns);

        if let Some(reference) =
            include_target(&document.include_low_priority, "include-low-priority")?
        {
            self.load_document(&resolve_ref(&reference, base_dir), false, config)?;
        }

        Ok(())
    }
}
