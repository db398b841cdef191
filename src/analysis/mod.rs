//! Content analysis
//!
//! Analyzers extract semantic metadata (currently outbound links) from
//! content of the types they declare. The [`AnalysisManager`] routes each
//! request to the single analyzer registered for the content type.
//!
//! # Example
//!
//! ```ignore
//! use docshift::analysis::AnalysisManager;
//! use docshift::content::{catalog, Content};
//!
//! let manager = AnalysisManager::with_defaults();
//! let content = Content::from("[home](https://example.com)");
//! let analysis = manager.analyze(&catalog::MARKDOWN, &content).await?;
//! assert_eq!(analysis.urls(), vec!["https://example.com"]);
//! ```

pub mod analyzers;
mod manager;
mod traits;
mod types;

pub use manager::AnalysisManager;
pub use traits::ContentAnalyzer;
pub use types::{ContentAnalysis, Link};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{catalog, Content};
    use serde_json::json;

    #[tokio::test]
    async fn test_full_pipeline() {
        let manager = AnalysisManager::with_defaults();

        let content = Content::Json(json!([
            { "type": "link", "url": "http://x", "children": [{ "text": "x" }] }
        ]));
        let analysis = manager
            .analyze(&catalog::RICH_TEXT_V1, &content)
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_value(&analysis).unwrap(),
            json!({ "links": [{ "url": "http://x" }] })
        );
    }

    #[tokio::test]
    async fn test_defaults_cover_markup() {
        let manager = AnalysisManager::with_defaults();

        let md = manager
            .analyze(&catalog::MARKDOWN, &Content::from("[a](https://a) and [[Notes]]"))
            .await
            .unwrap();
        assert_eq!(md.urls(), vec!["https://a", "Notes"]);

        let html = manager
            .analyze(&catalog::HTML, &Content::from(r#"<p><a href="/b">b</a></p>"#))
            .await
            .unwrap();
        assert_eq!(html.urls(), vec!["/b"]);
    }
}
