//! Format migrations and chained conversion
//!
//! # Architecture
//!
//! - **ContentMigration trait**: one directed transformation between two formats
//! - **MigrationManager**: registry of migrations as edges of a directed graph,
//!   with breadth-first path search and sequential chain execution
//! - **WithTimeout**: deadline decorator for migrations that may hang
//!
//! # Example
//!
//! ```ignore
//! use docshift::content::{catalog, Content};
//! use docshift::migration::MigrationManager;
//!
//! let manager = MigrationManager::with_defaults();
//!
//! // No direct edge exists; the manager chains text -> rich text v1 -> v2
//! let doc = manager
//!     .convert(Content::from("hello"), &catalog::PLAIN_TEXT, &catalog::RICH_TEXT_V2)
//!     .await?;
//! ```

pub mod builtin;
mod manager;
mod path;
mod timeout;
mod traits;

pub use manager::{execute, MigrationManager, DEFAULT_MAX_HOPS};
pub use path::MigrationPath;
pub use timeout::WithTimeout;
pub use traits::ContentMigration;
