//! Format validators
//!
//! Validators are schema checks, not conversions: each one either returns a
//! typed view of the content or a [`ValidationError`] naming the offending
//! path, the expected shape, and what was received.

mod rich_text;

use crate::content::{catalog, Content, ContentType};
use crate::error::{Error, Result, ValidationError};
use crate::rich_text::RichTextDocument;
use serde_json::Value;

fn expect_text<'a>(content: &'a Content, expected: &str) -> Result<&'a str, ValidationError> {
    content
        .as_text()
        .ok_or_else(|| ValidationError::new("$", expected, content.describe()))
}

/// Plain text must be a string
pub fn validate_plain_text(content: &Content) -> Result<&str, ValidationError> {
    expect_text(content, "plain text string")
}

/// Markdown source must be a string
pub fn validate_markdown(content: &Content) -> Result<&str, ValidationError> {
    expect_text(content, "markdown string")
}

/// HTML markup must be a string
pub fn validate_html(content: &Content) -> Result<&str, ValidationError> {
    expect_text(content, "HTML string")
}

/// JSON content must be a JSON value
///
/// A `serde_json::Value` is serializable by construction, so there are no
/// cycles or foreign types left to reject once the payload is a value.
pub fn validate_json(content: &Content) -> Result<&Value, ValidationError> {
    content
        .as_json()
        .ok_or_else(|| ValidationError::new("$", "JSON value", content.describe()))
}

/// Rich text v1: an array of paragraph, heading, and link elements
pub fn validate_rich_text(content: &Content) -> Result<RichTextDocument, ValidationError> {
    let value = validate_json(content)?;
    rich_text::check_document(value, "$")?;
    into_document(value.clone(), "$")
}

/// Rich text v2: the v1 element array inside `{ "version": 2, "children": [...] }`
pub fn validate_rich_text_v2(content: &Content) -> Result<RichTextDocument, ValidationError> {
    let value = validate_json(content)?;
    rich_text::check_envelope(value)?;
    into_document(value["children"].clone(), "$.children")
}

fn into_document(value: Value, path: &str) -> Result<RichTextDocument, ValidationError> {
    serde_json::from_value(value)
        .map_err(|e| ValidationError::new(path, "rich text document", e.to_string()))
}

/// Whether a JSON value is a valid rich text v1 document
pub fn is_rich_text(value: &Value) -> bool {
    rich_text::check_document(value, "$").is_ok()
}

/// Validate content against any built-in format
pub fn validate(content: &Content, content_type: &ContentType) -> Result<()> {
    let value = content_type.value();
    if value == catalog::PLAIN_TEXT.value() {
        validate_plain_text(content)?;
    } else if value == catalog::MARKDOWN.value() {
        validate_markdown(content)?;
    } else if value == catalog::HTML.value() {
        validate_html(content)?;
    } else if value == catalog::JSON.value() {
        validate_json(content)?;
    } else if value == catalog::RICH_TEXT_V1.value() {
        validate_rich_text(content)?;
    } else if value == catalog::RICH_TEXT_V2.value() {
        validate_rich_text_v2(content)?;
    } else {
        return Err(Error::UnknownContentType(value.to_string()));
    }
    Ok(())
}
