//! Analysis result types

use serde::{Deserialize, Serialize};

/// An outbound link found in content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Semantic metadata extracted from content
///
/// An open bag: only `links` is populated by the built-in analyzers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

impl ContentAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analysis carrying the given link URLs
    pub fn with_links<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: Some(urls.into_iter().map(Link::new).collect()),
        }
    }

    /// Link URLs, empty when no links were reported
    pub fn urls(&self) -> Vec<&str> {
        self.links
            .iter()
            .flatten()
            .map(|link| link.url.as_str())
            .collect()
    }
}
