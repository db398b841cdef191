//! Rich text link analyzer

use crate::analysis::{ContentAnalysis, ContentAnalyzer};
use crate::content::{catalog, Content, ContentType};
use crate::error::{Error, Result};
use crate::validate::{validate_rich_text, validate_rich_text_v2};
use async_trait::async_trait;

/// Extracts link URLs from rich text documents of either schema version
///
/// Every `link` element contributes its `url`, in document order. Link
/// elements without a `url` are skipped rather than reported as empty.
#[derive(Debug, Default)]
pub struct RichTextLinkAnalyzer;

impl RichTextLinkAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentAnalyzer for RichTextLinkAnalyzer {
    fn id(&self) -> &str {
        "rich-text-links"
    }

    fn name(&self) -> &str {
        "Rich Text Link Analyzer"
    }

    fn content_types(&self) -> Vec<ContentType> {
        vec![catalog::RICH_TEXT_V1.clone(), catalog::RICH_TEXT_V2.clone()]
    }

    async fn analyze(
        &self,
        content_type: &ContentType,
        content: &Content,
    ) -> Result<ContentAnalysis> {
        let doc = if *content_type == *catalog::RICH_TEXT_V1 {
            validate_rich_text(content)?
        } else if *content_type == *catalog::RICH_TEXT_V2 {
            validate_rich_text_v2(content)?
        } else {
            return Err(Error::NoAnalyzer {
                content_type: content_type.to_string(),
            });
        };

        Ok(ContentAnalysis::with_links(doc.link_urls()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_extracts_links_in_order() {
        let content = Content::Json(json!([
            { "type": "paragraph", "children": [{ "text": "hi" }] },
            { "type": "link", "url": "http://x", "children": [{ "text": "x" }] },
            { "type": "link", "children": [{ "text": "no url" }] },
            { "type": "link", "url": "http://y", "children": [] }
        ]));

        let analysis = RichTextLinkAnalyzer
            .analyze(&catalog::RICH_TEXT_V1, &content)
            .await
            .unwrap();
        assert_eq!(analysis.urls(), vec!["http://x", "http://y"]);
    }

    #[tokio::test]
    async fn test_v2_envelope() {
        let content = Content::Json(json!({
            "version": 2,
            "children": [{ "type": "link", "url": "http://v2", "children": [] }]
        }));

        let analysis = RichTextLinkAnalyzer
            .analyze(&catalog::RICH_TEXT_V2, &content)
            .await
            .unwrap();
        assert_eq!(analysis.urls(), vec!["http://v2"]);
    }

    #[tokio::test]
    async fn test_no_links_is_empty_list() {
        let content = Content::Json(json!([]));
        let analysis = RichTextLinkAnalyzer
            .analyze(&catalog::RICH_TEXT_V1, &content)
            .await
            .unwrap();
        assert_eq!(analysis.links, Some(vec![]));
    }

    #[tokio::test]
    async fn test_invalid_content_surfaces_validation_error() {
        let err = RichTextLinkAnalyzer
            .analyze(&catalog::RICH_TEXT_V1, &Content::from("text"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}
