//! Built-in migrations between the catalog formats
//!
//! Plain text is the hub: every built-in format is reachable from it, and
//! every built-in format converts back to it (rich text v2 by way of v1).

mod json;
mod markup;
mod rich_text;
mod text;

use super::ContentMigration;
use std::sync::Arc;

pub use json::{JsonToPlainText, JsonToRichText};
pub use markup::{HtmlToPlainText, MarkdownToHtml, MarkdownToPlainText};
pub use rich_text::{RichTextToJson, RichTextToPlainText, RichTextV1ToV2, RichTextV2ToV1};
pub use text::{PlainTextToHtml, PlainTextToJson, PlainTextToMarkdown, PlainTextToRichText};

/// The built-in registration list, in registration order
pub fn default_migrations() -> Vec<Arc<dyn ContentMigration>> {
    vec![
        Arc::new(PlainTextToJson),
        Arc::new(PlainTextToHtml),
        Arc::new(PlainTextToMarkdown),
        Arc::new(PlainTextToRichText),
        Arc::new(JsonToPlainText),
        Arc::new(JsonToRichText),
        Arc::new(RichTextToJson),
        Arc::new(RichTextToPlainText),
        Arc::new(RichTextV1ToV2),
        Arc::new(RichTextV2ToV1),
        Arc::new(HtmlToPlainText),
        Arc::new(MarkdownToHtml),
        Arc::new(MarkdownToPlainText),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pairs_are_distinct() {
        let migrations = default_migrations();
        let pairs: HashSet<(String, String)> = migrations
            .iter()
            .map(|m| (m.from_type().to_string(), m.to_type().to_string()))
            .collect();
        assert_eq!(pairs.len(), migrations.len());
        assert_eq!(pairs.len(), 13);
    }
}
