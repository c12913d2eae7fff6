use std::fmt;

use serde::{Deserialize, Serialize};

/// A value forced onto a variable by an intervention, or observed for it.
///
/// Serialized untagged, so JSON `true`, `0.5` and `"high"` map directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForcedValue {
    Bool(bool),
    Number(f64),
    Symbol(String),
}

impl ForcedValue {
    /// Whether the value counts as "on".
    ///
    /// `false`, zero, NaN and the empty symbol are falsy. An intervention that
    /// forces a falsy value stops the node from propagating, and an observed
    /// falsy value means the variable did not occur.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Symbol(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for ForcedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ForcedValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ForcedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ForcedValue {
    fn from(value: &str) -> Self {
        Self::Symbol(value.to_string())
    }
}

impl From<String> for ForcedValue {
    fn from(value: String) -> Self {
        Self::Symbol(value)
    }
}
