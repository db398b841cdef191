//! Built-in content types
//!
//! One constant per supported format, created on first use and never mutated.

use super::ContentType;
use once_cell::sync::Lazy;

pub static PLAIN_TEXT: Lazy<ContentType> =
    Lazy::new(|| ContentType::new("text", "plain").named("Plain Text"));

pub static MARKDOWN: Lazy<ContentType> =
    Lazy::new(|| ContentType::new("text", "markdown").named("Markdown"));

pub static HTML: Lazy<ContentType> = Lazy::new(|| ContentType::new("text", "html").named("HTML"));

pub static JSON: Lazy<ContentType> =
    Lazy::new(|| ContentType::new("application", "json").named("JSON"));

/// Rich text document: a bare array of element nodes
pub static RICH_TEXT_V1: Lazy<ContentType> = Lazy::new(|| {
    ContentType::new("application", "json")
        .with_parameter("format", "richtext-v1")
        .named("Rich Text (v1)")
});

/// Rich text document wrapped in a `{ "version": 2, "children": [...] }` envelope
pub static RICH_TEXT_V2: Lazy<ContentType> = Lazy::new(|| {
    ContentType::new("application", "json")
        .with_parameter("format", "richtext-v2")
        .named("Rich Text (v2)")
});

/// All built-in content types
pub fn builtin() -> Vec<&'static ContentType> {
    vec![
        &*PLAIN_TEXT,
        &*MARKDOWN,
        &*HTML,
        &*JSON,
        &*RICH_TEXT_V1,
        &*RICH_TEXT_V2,
    ]
}

/// Resolve a canonical value to its built-in content type
pub fn lookup(value: &str) -> Option<&'static ContentType> {
    builtin().into_iter().find(|ct| ct.value() == value)
}

/// Parse a raw content type, preferring the built-in constant (and its
/// label) when one matches
pub fn resolve(raw: &str) -> crate::Result<ContentType> {
    let parsed = ContentType::parse(raw)?;
    Ok(lookup(parsed.value()).cloned().unwrap_or(parsed))
}
