//! Analyzer trait defining the content analysis interface

use super::types::ContentAnalysis;
use crate::content::{Content, ContentType};
use crate::error::Result;
use async_trait::async_trait;

/// Trait for content analyzers
///
/// An analyzer extracts semantic metadata from content of one or more
/// declared content types. Analyzers are stateless and registered once.
///
/// # Example
///
/// ```ignore
/// struct EmptyAnalyzer;
///
/// #[async_trait]
/// impl ContentAnalyzer for EmptyAnalyzer {
///     fn id(&self) -> &str { "empty" }
///     fn name(&self) -> &str { "Empty Analyzer" }
///     fn content_types(&self) -> Vec<ContentType> {
///         vec![catalog::PLAIN_TEXT.clone()]
///     }
///
///     async fn analyze(&self, _ct: &ContentType, _content: &Content) -> Result<ContentAnalysis> {
///         Ok(ContentAnalysis::with_links(Vec::<String>::new()))
///     }
/// }
/// ```
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    /// Unique identifier for this analyzer
    fn id(&self) -> &str;

    /// Human-readable name
    fn name(&self) -> &str;

    /// Which content types this analyzer handles
    fn content_types(&self) -> Vec<ContentType>;

    /// Analyze content of the given type
    async fn analyze(
        &self,
        content_type: &ContentType,
        content: &Content,
    ) -> Result<ContentAnalysis>;

    /// Check if this analyzer can handle the given content type
    fn can_handle(&self, content_type: &ContentType) -> bool {
        self.content_types().contains(content_type)
    }
}
