//! Database query filters.

use serde_json::{Value, json};

/// A Notion database filter.
///
/// Serializes to the API's filter grammar, e.g.
/// `{"property": "Published", "checkbox": {"equals": true}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Checkbox { property: String, equals: bool },
    RichText { property: String, equals: String },
    And(Vec<Filter>),
}

impl Filter {
    pub fn checkbox(property: impl Into<String>, equals: bool) -> Self {
        Self::Checkbox {
            property: property.into(),
            equals,
        }
    }

    pub fn rich_text(property: impl Into<String>, equals: impl Into<String>) -> Self {
        Self::RichText {
            property: property.into(),
            equals: equals.into(),
        }
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Checkbox { property, equals } => json!({
                "property": property,
                "checkbox": { "equals": equals },
            }),
            Self::RichText { property, equals } => json!({
                "property": property,
                "rich_text": { "equals": equals },
            }),
            Self::And(filters) => json!({
                "and": filters.iter().map(Self::to_json).collect::<Vec<_>>(),
            }),
        }
    }
}
