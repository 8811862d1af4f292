//! Pattern compilation: turning a definition into a search invocation.
//!
//! "Compilation" here is purely textual. The tool stays engine-agnostic, so
//! no attempt is made to validate the result against any particular regex
//! dialect; that is the engine's problem.

use crate::error::{GfError, Result};
use crate::models::Pattern;

/// Engine used when a definition does not name one.
pub const DEFAULT_ENGINE: &str = "grep";

/// Compile a definition into the single expression string handed to the
/// engine.
///
/// A non-empty single `pattern` is returned verbatim, with no escaping or
/// wrapping. Otherwise the alternatives are joined with `|` and wrapped in
/// one pair of parentheses: `["foo", "bar"]` compiles to `(foo|bar)`.
///
/// # Errors
///
/// Returns [`GfError::NoPattern`] if the definition has neither a single
/// pattern nor any alternatives.
pub fn compile(pattern: &Pattern) -> Result<String> {
    if !pattern.pattern.is_empty() {
        return Ok(pattern.pattern.clone());
    }

    if pattern.patterns.is_empty() {
        return Err(GfError::NoPattern);
    }

    Ok(format!("({})", pattern.patterns.join("|")))
}

/// The engine binary a definition should be run with: the explicit engine
/// if one is set, [`DEFAULT_ENGINE`] otherwise.
pub fn resolve_engine(pattern: &Pattern) -> &str {
    if pattern.engine.is_empty() {
        DEFAULT_ENGINE
    } else {
        &pattern.engine
    }
}
