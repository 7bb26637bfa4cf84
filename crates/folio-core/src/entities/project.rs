use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    /// Technology labels, source order.
    pub tech: Vec<String>,
    /// ISO-8601 date, or empty when the source has none.
    pub date: String,
    pub published: bool,
}

impl Project {
    #[must_use]
    pub fn uses(&self, tech: &str) -> bool {
        self.tech.iter().any(|t| t == tech)
    }
}
