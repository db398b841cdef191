//! HTML link analyzer

use crate::analysis::{ContentAnalysis, ContentAnalyzer};
use crate::content::{catalog, Content, ContentType};
use crate::error::Result;
use crate::markup::html;
use crate::validate::validate_html;
use async_trait::async_trait;

/// Extracts the `href` of every `<a>` element; anchors without one are skipped
#[derive(Debug, Default)]
pub struct HtmlLinkAnalyzer;

impl HtmlLinkAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentAnalyzer for HtmlLinkAnalyzer {
    fn id(&self) -> &str {
        "html-links"
    }

    fn name(&self) -> &str {
        "HTML Link Analyzer"
    }

    fn content_types(&self) -> Vec<ContentType> {
        vec![catalog::HTML.clone()]
    }

    async fn analyze(
        &self,
        _content_type: &ContentType,
        content: &Content,
    ) -> Result<ContentAnalysis> {
        let markup = validate_html(content)?;
        Ok(ContentAnalysis::with_links(html::link_targets(markup)))
    }
}
