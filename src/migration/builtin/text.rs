//! Migrations out of plain text

use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::markup::{html, markdown};
use crate::migration::ContentMigration;
use crate::rich_text::RichTextDocument;
use crate::validate::validate_plain_text;
use async_trait::async_trait;
use serde_json::Value;

/// Wraps text as a JSON string
pub struct PlainTextToJson;

#[async_trait]
impl ContentMigration for PlainTextToJson {
    fn from_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    fn to_type(&self) -> &ContentType {
        &catalog::JSON
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let text = validate_plain_text(&content)?;
        Ok(Content::Json(Value::String(text.to_string())))
    }
}

/// Escapes text into paragraphs; single newlines become `<br>`
pub struct PlainTextToHtml;

impl PlainTextToHtml {
    fn render(text: &str) -> String {
        let mut blocks: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }

        blocks
            .iter()
            .map(|lines| {
                let body: Vec<String> = lines.iter().map(|line| html::escape(line)).collect();
                format!("<p>{}</p>", body.join("<br>\n"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl ContentMigration for PlainTextToHtml {
    fn from_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    fn to_type(&self) -> &ContentType {
        &catalog::HTML
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let text = validate_plain_text(&content)?;
        Ok(Content::Text(Self::render(text)))
    }
}

/// Escapes markdown-significant characters so the text renders literally
pub struct PlainTextToMarkdown;

#[async_trait]
impl ContentMigration for PlainTextToMarkdown {
    fn from_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    fn to_type(&self) -> &ContentType {
        &catalog::MARKDOWN
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let text = validate_plain_text(&content)?;
        Ok(Content::Text(markdown::escape(text)))
    }
}

/// One paragraph per line
pub struct PlainTextToRichText;

#[async_trait]
impl ContentMigration for PlainTextToRichText {
    fn from_type(&self) -> &ContentType {
        &catalog::PLAIN_TEXT
    }

    fn to_type(&self) -> &ContentType {
        &catalog::RICH_TEXT_V1
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        let text = validate_plain_text(&content)?;
        let doc = RichTextDocument::from_plain_text(text);
        Ok(Content::Json(doc.to_v1_value()?))
    }
}
