//! Markdown link analyzer

use crate::analysis::{ContentAnalysis, ContentAnalyzer};
use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::markup::markdown;
use crate::validate::validate_markdown;
use async_trait::async_trait;

/// Extracts link destinations from markdown
///
/// Reports inline, reference and autolinks in document order, followed by
/// `[[wikilink]]` targets (which CommonMark itself does not recognize).
#[derive(Debug, Default)]
pub struct MarkdownLinkAnalyzer;

impl MarkdownLinkAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentAnalyzer for MarkdownLinkAnalyzer {
    fn id(&self) -> &str {
        "markdown-links"
    }

    fn name(&self) -> &str {
        "Markdown Link Analyzer"
    }

    fn content_types(&self) -> Vec<ContentType> {
        vec![catalog::MARKDOWN.clone()]
    }

    async fn analyze(
        &self,
        _content_type: &ContentType,
        content: &Content,
    ) -> Result<ContentAnalysis> {
        let source = validate_markdown(content)?;
        Ok(ContentAnalysis::with_links(markdown::link_targets(source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reference_links() {
        let content = Content::from("See [the docs][docs].\n\n[docs]: https://example.com/docs\n");
        let analysis = MarkdownLinkAnalyzer
            .analyze(&catalog::MARKDOWN, &content)
            .await
            .unwrap();
        assert_eq!(analysis.urls(), vec!["https://example.com/docs"]);
    }

    #[tokio::test]
    async fn test_code_is_not_linked() {
        let content = Content::from("```\nlet x = a[[0]];\n```\n\nUse `[[not a link]]` literally.");
        let analysis = MarkdownLinkAnalyzer
            .analyze(&catalog::MARKDOWN, &content)
            .await
            .unwrap();
        assert_eq!(analysis.links, Some(vec![]));
    }

    #[tokio::test]
    async fn test_handles_markdown_only() {
        assert!(MarkdownLinkAnalyzer.can_handle(&catalog::MARKDOWN));
        assert!(!MarkdownLinkAnalyzer.can_handle(&catalog::PLAIN_TEXT));
    }
}
