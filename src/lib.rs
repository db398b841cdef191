//! Docshift: Content Conversion and Analysis Engine
//!
//! Converts content between declared formats by chaining single-step
//! migrations along the shortest available path, validates content against
//! its format, and extracts semantic metadata such as outbound links.
//!
//! # Core Concepts
//!
//! - **ContentType**: A `type/subtype[;key=value]` format identifier
//! - **Migrations**: Single-step conversions registered in a directed graph
//! - **Analyzers**: Per-format extractors producing a [`ContentAnalysis`]
//!
//! # Example
//!
//! ```ignore
//! use docshift::{catalog, Content, MigrationManager};
//!
//! let manager = MigrationManager::with_defaults();
//! let html = manager
//!     .convert(Content::from("Hello"), &catalog::PLAIN_TEXT, &catalog::HTML)
//!     .await?;
//! assert_eq!(html.as_text(), Some("<p>Hello</p>"));
//! ```

pub mod analysis;
pub mod content;
pub mod error;
pub mod markup;
pub mod migration;
pub mod rich_text;
pub mod validate;

pub use analysis::{AnalysisManager, ContentAnalysis, ContentAnalyzer, Link};
pub use content::{catalog, Content, ContentType};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use migration::{ContentMigration, MigrationManager, MigrationPath, WithTimeout};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
