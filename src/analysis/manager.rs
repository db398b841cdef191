//! Analyzer registry keyed by content type

use super::traits::ContentAnalyzer;
use super::types::ContentAnalysis;
use crate::content::{Content, ContentType};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Registry of analyzers; each content type value is owned by at most one
pub struct AnalysisManager {
    analyzers: RwLock<HashMap<String, Arc<dyn ContentAnalyzer>>>,
}

impl Default for AnalysisManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            analyzers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a manager from an explicit, ordered registration list
    pub fn with_analyzers<I>(analyzers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn ContentAnalyzer>>,
    {
        let manager = Self::new();
        for analyzer in analyzers {
            manager.register(analyzer, false)?;
        }
        Ok(manager)
    }

    /// Create a manager holding the built-in analyzers
    ///
    /// # Panics
    ///
    /// If two built-in analyzers claim the same content type.
    pub fn with_defaults() -> Self {
        Self::with_analyzers(super::analyzers::default_analyzers())
            .expect("built-in analyzers must not claim the same content type")
    }

    // A panic while holding the lock cannot leave the map half-updated,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<dyn ContentAnalyzer>>> {
        self.analyzers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<dyn ContentAnalyzer>>> {
        self.analyzers.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an analyzer for every content type it declares
    ///
    /// Fails with [`Error::AnalyzerConflict`] if any declared type is owned
    /// by an analyzer with a different id, unless `replace` is set. Either all
    /// declared types are registered or none are.
    pub fn register(&self, analyzer: Arc<dyn ContentAnalyzer>, replace: bool) -> Result<()> {
        let content_types = analyzer.content_types();
        let mut analyzers = self.write();

        for ct in &content_types {
            if let Some(existing) = analyzers.get(ct.value()) {
                if existing.id() == analyzer.id() {
                    continue;
                }
                if !replace {
                    return Err(Error::AnalyzerConflict {
                        content_type: ct.to_string(),
                        existing: existing.id().to_string(),
                    });
                }
                info!(
                    content_type = %ct,
                    replaced = existing.id(),
                    analyzer = analyzer.id(),
                    "replacing analyzer"
                );
            }
        }

        for ct in content_types {
            debug!(content_type = %ct, analyzer = analyzer.id(), "registered analyzer");
            analyzers.insert(ct.value().to_string(), analyzer.clone());
        }
        Ok(())
    }

    /// Distinct registered analyzers, ordered by id
    pub fn list(&self) -> Vec<Arc<dyn ContentAnalyzer>> {
        let analyzers = self.read();
        let unique: BTreeMap<&str, &Arc<dyn ContentAnalyzer>> = analyzers
            .values()
            .map(|analyzer| (analyzer.id(), analyzer))
            .collect();
        unique.into_values().cloned().collect()
    }

    /// The analyzer owning a content type value
    pub fn get(&self, content_type: &str) -> Result<Arc<dyn ContentAnalyzer>> {
        self.read()
            .get(content_type)
            .cloned()
            .ok_or_else(|| Error::NoAnalyzer {
                content_type: content_type.to_string(),
            })
    }

    /// Content type values that have an analyzer, sorted
    pub fn content_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.read().keys().cloned().collect();
        types.sort();
        types
    }

    /// Analyze content with the analyzer registered for its type
    ///
    /// The analyzer's own failures are returned unchanged.
    pub async fn analyze(
        &self,
        content_type: &ContentType,
        content: &Content,
    ) -> Result<ContentAnalysis> {
        // Resolve before awaiting so the lock is not held across the call
        let analyzer = self.get(content_type.value())?;
        debug!(content_type = %content_type, analyzer = analyzer.id(), "analyzing content");
        analyzer.analyze(content_type, content).await
    }
}
