//! Hierarchical configuration loading.
//!
//! A configuration is a tree of JSON documents connected by include
//! references, resolved in one synchronous depth-first pass:
//! 1. **High-priority include** - resolved before the including document's
//!    own settings, so the includer's scalars win by processing order
//! 2. **The document's own settings** - scalars, artifact sources, pattern
//!    and repository lists
//! 3. **Low-priority include** - resolved last; fills in scalars nobody set
//!    and appends its lists after everything already accumulated
//!
//! ## Merge Strategy
//! - `single-version`: written only when still unset, unless the writing
//!   document sits on a high-priority chain
//! - Lists (sources, patterns, repositories): append-only, first-seen order
//!   across the whole tree
//!
//! Auxiliary flat files (pattern and GAV lists) are resolved relative to
//! the document that references them, at any inclusion depth. Circular
//! inclusion is detected over canonicalized paths and is fatal.

mod coerce;
mod flatfile;
mod loader;
mod paths;
mod sources;

pub use coerce::coerce_bool;
pub use flatfile::load_flat_file;
pub use loader::Configuration;
pub use paths::resolve_ref;
pub use sources::ArtifactSource;
