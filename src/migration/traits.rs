//! Migration trait — the contract format conversions implement

use crate::content::{Content, ContentType};
use crate::error::Result;
use async_trait::async_trait;

/// A one-directional transformation between two content types
///
/// Implementations are stateless units registered once at startup. A
/// migration from A to B says nothing about B to A.
///
/// # Example
///
/// ```ignore
/// struct Shout;
///
/// #[async_trait]
/// impl ContentMigration for Shout {
///     fn from_type(&self) -> &ContentType { &catalog::PLAIN_TEXT }
///     fn to_type(&self) -> &ContentType { &LOUD_TEXT }
///
///     async fn migrate(&self, content: Content) -> Result<Content> {
///         let text = validate_plain_text(&content)?;
///         Ok(Content::Text(text.to_uppercase()))
///     }
/// }
/// ```
#[async_trait]
pub trait ContentMigration: Send + Sync {
    /// Source format
    fn from_type(&self) -> &ContentType;

    /// Target format
    fn to_type(&self) -> &ContentType;

    /// Transform content of the source format into the target format
    async fn migrate(&self, content: Content) -> Result<Content>;
}
