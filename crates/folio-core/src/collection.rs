//! Remote content collections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the remote databases content is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Posts,
    Projects,
    Resources,
}

impl Collection {
    /// All collections, in the order the site navigation lists them.
    pub const ALL: [Self; 3] = [Self::Posts, Self::Projects, Self::Resources];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Projects => "projects",
            Self::Resources => "resources",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
