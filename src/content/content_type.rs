//! MIME-like content type identifiers

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A structural format a document's content can take
///
/// Parsed from `type/subtype` with at most one `key=value` parameter.
/// Equality and hashing only consider the canonical [`value`](Self::value),
/// so the human-readable name never affects identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentType {
    type_: String,
    sub_type: String,
    parameter: Option<(String, String)>,
    value: String,
    name: String,
}

impl ContentType {
    /// Build a content type from parts already known to be well formed
    ///
    /// Parts are normalized exactly as [`parse`](Self::parse) would normalize
    /// them but not checked; outside the crate every value goes through
    /// `parse`, so the canonical string always parses back to an equal type.
    pub(crate) fn new(type_: impl Into<String>, sub_type: impl Into<String>) -> Self {
        let type_ = type_.into().trim().to_ascii_lowercase();
        let sub_type = sub_type.into().trim().to_ascii_lowercase();
        let value = format!("{}/{}", type_, sub_type);
        Self {
            type_,
            sub_type,
            parameter: None,
            name: value.clone(),
            value,
        }
    }

    /// Attach the single `key=value` parameter
    pub(crate) fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into().trim().to_ascii_lowercase();
        let param_value = value.into().trim().to_string();
        let rename = self.name == self.value;
        self.value = format!("{}/{};{}={}", self.type_, self.sub_type, key, param_value);
        if rename {
            self.name = self.value.clone();
        }
        self.parameter = Some((key, param_value));
        self
    }

    /// Set the human-readable label
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse a raw `type/subtype[;key=value]` string
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = |expected: &str| ValidationError::new("$", expected, format!("{:?}", raw));

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(invalid("non-empty content type"));
        }

        let mut sections = raw.split(';');
        // split always yields at least one item
        let essence = sections.next().unwrap_or_default();
        let parameter = sections.next();
        if sections.next().is_some() {
            return Err(invalid("at most one parameter"));
        }

        let (type_, sub_type) = essence
            .split_once('/')
            .ok_or_else(|| invalid("type/subtype"))?;
        let (type_, sub_type) = (type_.trim(), sub_type.trim());
        if type_.is_empty() || sub_type.is_empty() || sub_type.contains('/') {
            return Err(invalid("type/subtype"));
        }

        let content_type = Self::new(type_, sub_type);
        match parameter {
            None => Ok(content_type),
            Some(parameter) => {
                let (key, value) = parameter
                    .split_once('=')
                    .ok_or_else(|| invalid("parameter of the form key=value"))?;
                let (key, value) = (key.trim(), value.trim());
                if key.is_empty() || value.is_empty() {
                    return Err(invalid("parameter of the form key=value"));
                }
                Ok(content_type.with_parameter(key, value))
            }
        }
    }

    /// Top-level type, e.g. `application`
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Subtype, e.g. `json`
    pub fn sub_type(&self) -> &str {
        &self.sub_type
    }

    /// Parameter key, e.g. `format`
    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_ref().map(|(key, _)| key.as_str())
    }

    /// Parameter value, e.g. `richtext-v1`
    pub fn parameter_value(&self) -> Option<&str> {
        self.parameter.as_ref().map(|(_, value)| value.as_str())
    }

    /// Canonical string form
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Human-readable label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Same base format family (`type`/`subType` match), regardless of
    /// parameters. Related types still need an explicit migration.
    pub fn is_related(&self, other: &ContentType) -> bool {
        self.type_ == other.type_ && self.sub_type == other.sub_type
    }

    /// Whether payloads of this type are JSON values rather than text
    pub fn is_json(&self) -> bool {
        self.sub_type == "json" || self.sub_type.ends_with("+json")
    }
}

impl PartialEq for ContentType {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ContentType {}

impl Hash for ContentType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ContentType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContentType> for String {
    fn from(content_type: ContentType) -> Self {
        content_type.value
    }
}
