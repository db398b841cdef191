//! Typed rich text document model
//!
//! A document is an ordered sequence of element nodes. Each element holds
//! styled text leaves:
//!
//! ```json
//! [
//!   { "type": "heading", "level": 1, "children": [{ "text": "Title" }] },
//!   { "type": "paragraph", "children": [{ "text": "Hello", "bold": true }] },
//!   { "type": "link", "url": "https://example.com", "children": [{ "text": "site" }] }
//! ]
//! ```
//!
//! Version 2 wraps the same element array in `{ "version": 2, "children": [...] }`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Envelope version written for rich text v2
pub const V2_VERSION: u64 = 2;

/// Styled text leaf
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Block-level element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Paragraph {
        children: Vec<TextNode>,
    },
    Heading {
        level: u8,
        children: Vec<TextNode>,
    },
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        url: Option<String>,
        children: Vec<TextNode>,
    },
}

impl Element {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Element::Paragraph {
            children: vec![TextNode::new(text)],
        }
    }

    pub fn children(&self) -> &[TextNode] {
        match self {
            Element::Paragraph { children }
            | Element::Heading { children, .. }
            | Element::Link { children, .. } => children,
        }
    }

    /// Concatenated text of all leaves
    pub fn text(&self) -> String {
        self.children().iter().map(|t| t.text.as_str()).collect()
    }
}

/// A rich text document (the v1 layout)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichTextDocument(pub Vec<Element>);

impl RichTextDocument {
    pub fn elements(&self) -> &[Element] {
        &self.0
    }

    /// One paragraph per line; empty input yields a single empty paragraph
    pub fn from_plain_text(text: &str) -> Self {
        Self(text.split('\n').map(|line| Element::paragraph(line.trim_end_matches('\r'))).collect())
    }

    /// Element texts joined by newlines
    pub fn to_plain_text(&self) -> String {
        self.0
            .iter()
            .map(Element::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over `url`s of link elements, skipping links without one
    pub fn link_urls(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|element| match element {
            Element::Link { url: Some(url), .. } => Some(url.as_str()),
            _ => None,
        })
    }

    /// v1 representation: the bare element array
    pub fn to_v1_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// v2 representation: the versioned envelope
    pub fn to_v2_value(&self) -> Result<Value, serde_json::Error> {
        Ok(json!({
            "version": V2_VERSION,
            "children": self.to_v1_value()?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_round_trip() {
        let text = "first line\n\nthird line";
        let doc = RichTextDocument::from_plain_text(text);
        assert_eq!(doc.elements().len(), 3);
        assert_eq!(doc.to_plain_text(), text);
    }

    #[test]
    fn test_empty_text_is_one_paragraph() {
        let doc = RichTextDocument::from_plain_text("");
        assert_eq!(doc.elements(), &[Element::paragraph("")]);
    }

    #[test]
    fn test_serialized_layout() {
        let doc = RichTextDocument(vec![
            Element::Heading {
                level: 2,
                children: vec![TextNode::new("Title")],
            },
            Element::Link {
                url: None,
                children: vec![TextNode {
                    text: "bare".into(),
                    bold: Some(true),
                    ..TextNode::default()
                }],
            },
        ]);

        assert_eq!(
            doc.to_v1_value().unwrap(),
            json!([
                { "type": "heading", "level": 2, "children": [{ "text": "Title" }] },
                { "type": "link", "children": [{ "text": "bare", "bold": true }] }
            ])
        );

        let v2 = doc.to_v2_value().unwrap();
        assert_eq!(v2["version"], json!(2));
        assert_eq!(v2["children"], doc.to_v1_value().unwrap());
    }

    #[test]
    fn test_link_urls_skip_missing() {
        let doc = RichTextDocument(vec![
            Element::Link {
                url: Some("http://a".into()),
                children: vec![],
            },
            Element::Link {
                url: None,
                children: vec![],
            },
            Element::paragraph("text"),
        ]);
        assert_eq!(doc.link_urls().collect::<Vec<_>>(), vec!["http://a"]);
    }
}
