//! Migrations out of generic JSON

use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::migration::ContentMigration;
use crate::rich_text::RichTextDocument;
use crate::validate::{is_rich_text, validate_json};
use async_trait::async_trait;
use serde_json::Value;

/// Text form of a JSON value: strings unwrap, anything else is pretty-printed
fn text_of(value: &Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}

pub struct JsonToPlainText;

#[async_trait]
impl ContentMigration for JsonToPlainText {
    fn from_type(&self) -> &ContentType {
        &catalog::JSON
    }

    fn to_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let value = validate_json(&content)?;
        Ok(Content::Text(text_of(value)?))
    }
}

/// A JSON value that already is a rich text document passes through;
/// anything else becomes paragraphs of its text form
pub struct JsonToRichText;

#[async_trait]
impl ContentMigration for JsonToRichText {
    fn from_type(&self) -> &ContentType {
        &catalog::JSON
    }

    fn to_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let value = validate_json(&content)?;
        if is_rich_text(value) {
            return Ok(content);
        }
        let doc = RichTextDocument::from_plain_text(&text_of(value)?);
        Ok(Content::Json(doc.to_v1_value()?))
    }
}
