//! Durable pattern storage: one JSON file per named pattern.
//!
//! The store is deliberately a small key-value-over-filesystem abstraction.
//! [`PatternStore`] is the capability set the CLI consumes; [`FsPatternStore`]
//! is the filesystem backend, with its base directory injected at
//! construction so tests can point it anywhere.

pub mod fs;

pub use fs::FsPatternStore;

use crate::error::Result;
use crate::models::Pattern;

/// Create/read/enumerate operations over named pattern definitions.
pub trait PatternStore {
    /// Load the definition saved under `name`.
    fn load(&self, name: &str) -> Result<Pattern>;

    /// Persist a new single-pattern definition under `name`. Never
    /// overwrites an existing one.
    fn save(&self, name: &str, flags: &str, pattern: &str) -> Result<()>;

    /// All saved pattern names, sorted lexically.
    fn list(&self) -> Result<Vec<String>>;
}
