//! Built-in content analyzers
//!
//! Programmatic link extractors for rich text, markdown and HTML.

mod html;
mod markdown;
mod rich_text;

pub use html::HtmlLinkAnalyzer;
pub use markdown::MarkdownLinkAnalyzer;
pub use rich_text::RichTextLinkAnalyzer;

use super::ContentAnalyzer;
use std::sync::Arc;

/// The built-in analyzers, one per supported content family
pub fn default_analyzers() -> Vec<Arc<dyn ContentAnalyzer>> {
    vec![
        Arc::new(RichTextLinkAnalyzer::new()),
        Arc::new(MarkdownLinkAnalyzer::new()),
        Arc::new(HtmlLinkAnalyzer::new()),
    ]
}
