//! Common test utilities for docshift integration tests
//!
//! Well-formed samples for every built-in format plus small test
//! migrations for building custom graphs.

#![allow(dead_code)]

use async_trait::async_trait;
use docshift::{
    catalog, Content, ContentAnalysis, ContentAnalyzer, ContentMigration, ContentType, Result,
    ValidationError,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The rich text document used throughout the analysis examples
pub fn sample_rich_text() -> Content {
    Content::Json(json!([
        { "type": "paragraph", "children": [{ "text": "hi" }] },
        { "type": "link", "url": "http://x", "children": [{ "text": "x" }] }
    ]))
}

/// A well-formed sample of a built-in format
pub fn sample(content_type: &ContentType) -> Content {
    if *content_type == *catalog::PLAIN_TEXT {
        Content::from("First line\nSecond line\n\nNew paragraph")
    } else if *content_type == *catalog::MARKDOWN {
        Content::from("# Title\n\nSome *emphasis* and a [link](http://x).")
    } else if *content_type == *catalog::HTML {
        Content::from("<h1>Title</h1><p>Hello <a href=\"http://x\">x</a></p>")
    } else if *content_type == *catalog::JSON {
        Content::Json(json!({ "title": "Doc", "tags": ["a", "b"] }))
    } else if *content_type == *catalog::RICH_TEXT_V1 {
        sample_rich_text()
    } else if *content_type == *catalog::RICH_TEXT_V2 {
        Content::Json(json!({
            "version": 2,
            "children": [
                { "type": "heading", "level": 2, "children": [{ "text": "Title", "bold": true }] },
                { "type": "paragraph", "children": [{ "text": "body" }] }
            ]
        }))
    } else {
        panic!("no sample for {}", content_type)
    }
}

pub fn ct(raw: &str) -> ContentType {
    ContentType::parse(raw).unwrap()
}

/// Appends its target subtype to text content and counts its calls
pub struct Tag {
    from: ContentType,
    to: ContentType,
    pub calls: Arc<AtomicUsize>,
}

impl Tag {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: ct(from),
            to: ct(to),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentMigration for Tag {
    fn from_type(&self) -> &ContentType {
        &self.from
    }

    fn to_type(&self) -> &ContentType {
        &self.to
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = content.as_text().unwrap_or_default();
        Ok(Content::Text(format!("{}>{}", text, self.to.sub_type())))
    }
}

/// Always fails with a validation error
pub struct Reject {
    from: ContentType,
    to: ContentType,
}

impl Reject {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: ct(from),
            to: ct(to),
        }
    }
}

#[async_trait]
impl ContentMigration for Reject {
    fn from_type(&self) -> &ContentType {
        &self.from
    }

    fn to_type(&self) -> &ContentType {
        &self.to
    }

    async fn migrate(&self, content: Content) -> Result<Content> {
        Err(ValidationError::new("$", "anything else", format!("{:?}", content)).into())
    }
}

/// Reports a fixed link for one content type
pub struct FixedAnalyzer {
    id: String,
    handles: ContentType,
}

impl FixedAnalyzer {
    pub fn new(id: impl Into<String>, handles: &ContentType) -> Self {
        Self {
            id: id.into(),
            handles: handles.clone(),
        }
    }
}

#[async_trait]
impl ContentAnalyzer for FixedAnalyzer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        "Fixed Analyzer"
    }

    fn content_types(&self) -> Vec<ContentType> {
        vec![self.handles.clone()]
    }

    async fn analyze(&self, _ct: &ContentType, _content: &Content) -> Result<ContentAnalysis> {
        Ok(ContentAnalysis::with_links([self.id.as_str()]))
    }
}
