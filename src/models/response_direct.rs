use serde::{self, Deserialize, Serialize};

use super::Usage;

/// Lenient view of an upstream completion body, read only for usage
/// accounting. The body itself is returned to the caller untouched.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct CompletionEnvelope {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl CompletionEnvelope {
    pub fn from_body(body: &serde_json::Value) -> Self {
        serde_json::from_value(body.clone()).unwrap_or_default()
    }
}
