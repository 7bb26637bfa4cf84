//! Database pages and their typed properties.
//!
//! Notion returns every property as `{"id": .., "type": "<kind>", "<kind>": ..}`.
//! Only the kinds the site's databases use are modelled; anything else
//! deserializes to [`PropertyValue::Unsupported`]. Reads go through the
//! per-kind accessors on [`Page`], each returning `None` (or an empty list)
//! when the property is missing, has another kind, or is blank, so callers
//! pick their own default.

use std::collections::HashMap;

use serde::Deserialize;

/// Text formatting flags on a rich-text segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// One rich-text segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
}

/// Concatenated plain text of all segments.
#[must_use]
pub fn plain_text(segments: &[RichText]) -> String {
    segments.iter().map(|s| s.plain_text.as_str()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
}

/// A page property value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Checkbox { checkbox: bool },
    Date { date: Option<DateRange> },
    Select { select: Option<SelectOption> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Url { url: Option<String> },
    #[serde(other)]
    Unsupported,
}

/// A database row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Text of a title or rich-text property; `None` when blank.
    pub fn text(&self, name: &str) -> Option<String> {
        let segments = match self.properties.get(name)? {
            PropertyValue::Title { title } => title,
            PropertyValue::RichText { rich_text } => rich_text,
            _ => return None,
        };
        let text = plain_text(segments);
        if text.is_empty() { None } else { Some(text) }
    }

    pub fn checkbox(&self, name: &str) -> Option<bool> {
        match self.properties.get(name)? {
            PropertyValue::Checkbox { checkbox } => Some(*checkbox),
            _ => None,
        }
    }

    /// Start of a date property.
    pub fn date_start(&self, name: &str) -> Option<&str> {
        match self.properties.get(name)? {
            PropertyValue::Date { date: Some(range) } if !range.start.is_empty() => {
                Some(range.start.as_str())
            }
            _ => None,
        }
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        match self.properties.get(name)? {
            PropertyValue::Url { url: Some(url) } if !url.is_empty() => Some(url.as_str()),
            _ => None,
        }
    }

    /// Option names of a multi-select property, in source order.
    ///
    /// A single-select property yields a one-element list (empty when
    /// nothing is selected), so a database can switch between the two kinds
    /// without changing callers.
    pub fn labels(&self, name: &str) -> Vec<String> {
        match self.properties.get(name) {
            Some(PropertyValue::MultiSelect { multi_select }) => {
                multi_select.iter().map(|o| o.name.clone()).collect()
            }
            Some(PropertyValue::Select {
                select: Some(option),
            }) => vec![option.name.clone()],
            _ => Vec::new(),
        }
    }
}
