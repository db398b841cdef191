//! Content types and the payloads they describe

pub mod catalog;
mod content_type;

pub use content_type::ContentType;

use crate::error::ValidationError;
use serde::Serialize;
use serde_json::Value;

/// A transient content payload
///
/// Text-based formats (plain text, markdown, HTML) carry a string; JSON-based
/// formats carry a parsed JSON value. Payloads are owned by the caller and
/// never retained by the managers.
///
/// Serializes as the bare string or JSON value. There is no `Deserialize`:
/// a JSON string could be either variant, so reading content back needs its
/// content type and goes through [`Content::parse_as`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Json(Value),
}

impl Content {
    /// Interpret raw input according to a content type: JSON-based types are
    /// parsed, everything else is kept as text.
    pub fn parse_as(raw: &str, content_type: &ContentType) -> Result<Self, ValidationError> {
        if content_type.is_json() {
            serde_json::from_str(raw)
                .map(Content::Json)
                .map_err(|e| ValidationError::new("$", "JSON document", e.to_string()))
        } else {
            Ok(Content::Text(raw.to_string()))
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Text(_) => None,
        }
    }

    /// Render for output: text verbatim, JSON pretty-printed
    pub fn render(&self) -> Result<String, serde_json::Error> {
        match self {
            Content::Text(text) => Ok(text.clone()),
            Content::Json(value) => serde_json::to_string_pretty(value),
        }
    }

    /// Short description for error messages
    pub(crate) fn describe(&self) -> String {
        match self {
            Content::Text(text) => describe_str(text),
            Content::Json(value) => describe_value(value),
        }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::Json(value)
    }
}

const DESCRIBE_LIMIT: usize = 60;

fn truncate(mut s: String) -> String {
    if s.chars().count() > DESCRIBE_LIMIT {
        s = s.chars().take(DESCRIBE_LIMIT).collect();
        s.push('…');
    }
    s
}

pub(crate) fn describe_str(text: &str) -> String {
    truncate(format!("text {:?}", text))
}

pub(crate) fn describe_value(value: &Value) -> String {
    truncate(value.to_string())
}
