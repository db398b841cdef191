//! Migrations out of, and between, the rich text schema versions

use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::migration::ContentMigration;
use crate::validate::{validate_rich_text, validate_rich_text_v2};
use async_trait::async_trait;

/// The element array reinterpreted as generic JSON
pub struct RichTextToJson;

#[async_trait]
impl ContentMigration for RichTextToJson {
    fn from_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    fn to_type(&self) -> &ContentType {
        &catalog::JSON
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        validate_rich_text(&content)?;
        Ok(content)
    }
}

/// Element texts joined by newlines
pub struct RichTextToPlainText;

#[async_trait]
impl ContentMigration for RichTextToPlainText {
    fn from_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    fn to_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let doc = validate_rich_text(&content)?;
        Ok(Content::Text(doc.to_plain_text()))
    }
}

pub struct RichTextV1ToV2;

#[async_trait]
impl ContentMigration for RichTextV1ToV2 {
    fn from_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    fn to_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V2
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let doc = validate_rich_text(&content)?;
        Ok(Content::Json(doc.to_v2_value()?))
    }
}

pub struct RichTextV2ToV1;

#[async_trait]
impl ContentMigration for RichTextV2ToV1 {
    fn from_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V2
    }

    fn to_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let doc = validate_rich_text_v2(&content)?;
        Ok(Content::Json(doc.to_v1_value()?))
    }
}
