//! Migration registry and chained conversion

use super::path::{shortest_path, MigrationPath, Outgoing};
use super::traits::ContentMigration;
use crate::content::{Content, ContentType};
use crate::error::{Error, Result};
use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Default bound on the number of hops a conversion may take
pub const DEFAULT_MAX_HOPS: usize = 16;

/// Registry of migrations, stored as a directed graph over content types
///
/// Nodes are canonical content type values; each registered migration is an
/// edge. At most one migration exists per ordered `(from, to)` pair.
pub struct MigrationManager {
    /// Adjacency: source value -> (target value -> migration)
    edges: DashMap<String, Outgoing>,
    max_hops: usize,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            edges: DashMap::new(),
            max_hops: DEFAULT_MAX_HOPS,
        }
    }

    /// Create a manager from an explicit, ordered registration list
    ///
    /// Fails on the first duplicate `(from, to)` pair.
    pub fn with_migrations<I>(migrations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn ContentMigration>>,
    {
        let manager = Self::new();
        for migration in migrations {
            manager.register(migration, false)?;
        }
        Ok(manager)
    }

    /// Create a manager holding the built-in migrations
    ///
    /// # Panics
    ///
    /// If two built-in migrations share a `(from, to)` pair.
    pub fn with_defaults() -> Self {
        Self::with_migrations(super::builtin::default_migrations())
            .expect("built-in migrations must not share a (from, to) pair")
    }

    /// Bound path search depth; paths longer than this count as missing
    pub fn with_max_hops(mut self, max_hops: usize) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn max_hops(&self) -> usize {
        self.max_hops
    }

    /// Register a migration as the edge `(from, to)`
    ///
    /// Fails with [`Error::MigrationExists`] when the pair is taken and
    /// `replace` is false. The check and the insert happen while the
    /// source's entry is locked, so concurrent registrations cannot both win.
    pub fn register(&self, migration: Arc<dyn ContentMigration>, replace: bool) -> Result<()> {
        let from = migration.from_type().value().to_string();
        let to = migration.to_type().value().to_string();

        let mut outgoing = self.edges.entry(from.clone()).or_default();
        if outgoing.contains_key(&to) {
            if !replace {
                return Err(Error::MigrationExists { from, to });
            }
            info!(%from, %to, "replacing migration");
        } else {
            debug!(%from, %to, "registered migration");
        }
        outgoing.insert(to, migration);
        Ok(())
    }

    /// Remove the edge `(from, to)`, returning the migration it held
    pub fn unregister(
        &self,
        from: &ContentType,
        to: &ContentType,
    ) -> Result<Arc<dyn ContentMigration>> {
        let removed = self
            .edges
            .get_mut(from.value())
            .and_then(|mut outgoing| outgoing.remove(to.value()));
        // Drop emptied adjacency lists so content_types() only reports live nodes
        self.edges
            .remove_if(from.value(), |_, outgoing| outgoing.is_empty());

        match removed {
            Some(migration) => {
                debug!(from = %from, to = %to, "unregistered migration");
                Ok(migration)
            }
            None => Err(Error::NoMigration {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Direct-edge lookup
    pub fn get(&self, from: &ContentType, to: &ContentType) -> Result<Arc<dyn ContentMigration>> {
        self.edges
            .get(from.value())
            .and_then(|outgoing| outgoing.get(to.value()).cloned())
            .ok_or_else(|| Error::NoMigration {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Snapshot of all registered migrations, ordered by `(from, to)` value
    pub fn list_migrations(&self) -> Vec<Arc<dyn ContentMigration>> {
        let mut migrations: Vec<Arc<dyn ContentMigration>> = self
            .edges
            .iter()
            .flat_map(|entry| entry.value().values().cloned().collect::<Vec<_>>())
            .collect();
        migrations.sort_by(|a, b| {
            (a.from_type().value(), a.to_type().value())
                .cmp(&(b.from_type().value(), b.to_type().value()))
        });
        migrations
    }

    /// Number of registered migrations
    pub fn len(&self) -> usize {
        self.edges.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every content type that appears on some edge, ordered by value
    pub fn content_types(&self) -> Vec<ContentType> {
        let mut seen = BTreeSet::new();
        let mut types = Vec::new();
        for migration in self.list_migrations() {
            for ct in [migration.from_type(), migration.to_type()] {
                if seen.insert(ct.value().to_string()) {
                    types.push(ct.clone());
                }
            }
        }
        types.sort_by(|a, b| a.value().cmp(b.value()));
        types
    }

    /// Find the migration chain with the fewest hops from `from` to `to`
    pub fn find_path(&self, from: &ContentType, to: &ContentType) -> Result<MigrationPath> {
        // Clone each adjacency list out so no shard lock is held past the lookup
        shortest_path(from.value(), to.value(), self.max_hops, |node| {
            self.edges.get(node).map(|outgoing| outgoing.value().clone())
        })
        .ok_or_else(|| Error::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// Whether some migration path connects the two formats
    pub fn can_convert(&self, from: &ContentType, to: &ContentType) -> bool {
        self.find_path(from, to).is_ok()
    }

    /// Convert content between formats, chaining migrations as needed
    ///
    /// Identical formats return the content unchanged. Otherwise the shortest
    /// path is executed step by step, each step awaited before the next
    /// starts. A failing step aborts the conversion with [`Error::Step`]
    /// wrapping that step's own error.
    pub async fn convert(
        &self,
        content: Content,
        from: &ContentType,
        to: &ContentType,
    ) -> Result<Content> {
        let path = self.find_path(from, to)?;
        execute(&path, content).await
    }
}

/// Run a migration path in sequence, feeding each output to the next step
pub async fn execute(path: &MigrationPath, content: Content) -> Result<Content> {
    let total = path.hops();
    let mut current = content;

    for (i, step) in path.steps().iter().enumerate() {
        let from = step.from_type();
        let to = step.to_type();
        debug!(step = i + 1, total, from = %from, to = %to, "running migration");

        current = match step.migrate(current).await {
            Ok(next) => next,
            Err(e) => {
                warn!(step = i + 1, total, from = %from, to = %to, error = %e, "migration failed");
                return Err(Error::Step {
                    index: i + 1,
                    total,
                    from: from.to_string(),
                    to: to.to_string(),
                    source: Box::new(e),
                });
            }
        };
    }

    Ok(current)
}
