use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A curated link (tool, website, reference).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub url: String,
    pub categories: Vec<String>,
    pub description: String,
    pub published: bool,
}

impl Resource {
    #[must_use]
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
