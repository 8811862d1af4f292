use serde::{Deserialize, Serialize};

/// A stored search-pattern definition.
///
/// All fields are optional on disk and omitted when empty, so an empty
/// string or empty list means "absent". Exactly one of `pattern` or a
/// non-empty `patterns` must be present for the definition to compile;
/// `pattern` wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Invocation flags passed verbatim to the engine (e.g. `-Hnri`).
    /// Opaque: their contents are never validated.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub flags: String,

    /// A single regular-expression string.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    /// Ordered alternatives, joined into one expression at compile time.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<String>,

    /// Engine binary to invoke; empty means the default engine.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub engine: String,
}

impl Pattern {
    /// Create a single-pattern definition, as the save operation does.
    pub fn single(flags: &str, pattern: &str) -> Self {
        Self {
            flags: flags.to_string(),
            pattern: pattern.to_string(),
            ..Self::default()
        }
    }
}
