//! gf - named shortcuts for grep-like search engines
//!
//! This library stores reusable search-pattern definitions (a regular
//! expression plus invocation flags and optionally an alternate engine) as
//! one JSON file per name under `~/.config/gf` or `~/.gf`. It supports:
//!
//! - Saving, loading and listing named pattern definitions
//! - Compiling a definition into a single search expression
//! - Resolving which engine binary a definition should be run with
//!
//! # Example
//!
//! ```no_run
//! use gf::compiler;
//! use gf::store::{FsPatternStore, PatternStore};
//!
//! let store = FsPatternStore::open_default()?;
//! let pattern = store.load("urls")?;
//! let expr = compiler::compile(&pattern)?;
//! println!("{} {} {}", compiler::resolve_engine(&pattern), pattern.flags, expr);
//! # Ok::<(), gf::GfError>(())
//! ```

pub mod cli;
pub mod compiler;
pub mod error;
pub mod models;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use compiler::{compile, resolve_engine};
pub use error::{GfError, Result};
pub use models::Pattern;
pub use store::{FsPatternStore, PatternStore};
