//! Migrations out of HTML and markdown

use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::markup::{html, markdown};
use crate::migration::ContentMigration;
use crate::validate::{validate_html, validate_markdown};
use async_trait::async_trait;

/// Rendered text content of the markup
pub struct HtmlToPlainText;

#[async_trait]
impl ContentMigration for HtmlToPlainText {
    fn from_type(&self) -> &ContentType {
        &catalog::HTML
    }

    fn to_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let markup = validate_html(&content)?;
        Ok(Content::Text(html::to_plain_text(markup)))
    }
}

pub struct MarkdownToHtml;

#[async_trait]
impl ContentMigration for MarkdownToHtml {
    fn from_type(&self) -> &ContentType {
        &catalog::MARKDOWN
    }

    fn to_type(&self) -> &ContentType {
        &catalog::HTML
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let source = validate_markdown(&content)?;
        Ok(Content::Text(markdown::to_html(source)))
    }
}

pub struct MarkdownToPlainText;

#[async_trait]
impl ContentMigration for MarkdownToPlainText {
    fn from_type(&self) -> &ContentType {
        &catalog::MARKDOWN
    }

    fn to_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let source = validate_markdown(&content)?;
        Ok(Content::Text(markdown::to_plain_text(source)))
    }
}
