use serde::{Deserialize, Serialize};

/// Options for flattening and unflattening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// String placed between path segments. Default is `"."`.
    pub separator: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: ".".to_string(),
        }
    }
}

impl FlattenOptions {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}
