//! Shortest migration path search

use super::traits::ContentMigration;
use crate::content::ContentType;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Outgoing edges of one source format, keyed by target value
pub(crate) type Outgoing = BTreeMap<String, Arc<dyn ContentMigration>>;

/// An ordered chain of migrations connecting a source to a target format
#[derive(Clone)]
pub struct MigrationPath {
    steps: Vec<Arc<dyn ContentMigration>>,
}

impl MigrationPath {
    pub(crate) fn new(steps: Vec<Arc<dyn ContentMigration>>) -> Self {
        Self { steps }
    }

    /// The zero-hop path used when source and target coincide
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn steps(&self) -> &[Arc<dyn ContentMigration>] {
        &self.steps
    }

    /// Number of migrations in the path
    pub fn hops(&self) -> usize {
        self.steps.len()
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Formats visited in order, source first. Empty for the identity path.
    pub fn formats(&self) -> Vec<&ContentType> {
        let mut formats = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            formats.push(first.from_type());
        }
        formats.extend(self.steps.iter().map(|step| step.to_type()));
        formats
    }
}

impl fmt::Debug for MigrationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.formats().iter().map(|ct| ct.value()))
            .finish()
    }
}

impl fmt::Display for MigrationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.formats().iter().map(|ct| ct.value()).collect();
        f.write_str(&values.join(" -> "))
    }
}

/// Breadth-first search from `source` to `target`
///
/// `neighbors` returns the outgoing edges of a format. Because each node's
/// edges come back ordered by target value and the first discovery of a node
/// wins, ties between equally short paths resolve to the path whose
/// intermediate formats sort first, independent of registration order.
/// Nodes are never revisited, so cyclic graphs terminate and paths are simple.
pub(crate) fn shortest_path<F>(
    source: &str,
    target: &str,
    max_hops: usize,
    neighbors: F,
) -> Option<MigrationPath>
where
    F: Fn(&str) -> Option<Outgoing>,
{
    if source == target {
        return Some(MigrationPath::identity());
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<(String, usize)> = VecDeque::new();
    let mut predecessors: HashMap<String, (String, Arc<dyn ContentMigration>)> = HashMap::new();

    visited.insert(source.to_string());
    queue.push_back((source.to_string(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_hops {
            continue;
        }

        let Some(edges) = neighbors(&current) else {
            continue;
        };

        for (next, migration) in edges {
            if visited.contains(&next) {
                continue;
            }

            visited.insert(next.clone());
            predecessors.insert(next.clone(), (current.clone(), migration));

            if next == target {
                return Some(reconstruct(target, &predecessors));
            }
            queue.push_back((next, depth + 1));
        }
    }

    None
}

/// Walk predecessors back from the target and reverse
fn reconstruct(
    target: &str,
    predecessors: &HashMap<String, (String, Arc<dyn ContentMigration>)>,
) -> MigrationPath {
    let mut steps = Vec::new();
    let mut current = target;

    while let Some((previous, migration)) = predecessors.get(current) {
        steps.push(migration.clone());
        current = previous.as_str();
    }

    steps.reverse();
    MigrationPath::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::error::Result;
    use async_trait::async_trait;

    struct Edge {
        from: ContentType,
        to: ContentType,
    }

    #[async_trait]
    impl ContentMigration for Edge {
        fn from_type(&self) -> &ContentType {
            &self.from
        }
        fn to_type(&self) -> &ContentType {
            &self.to
        }
        async fn migrate(&self, content: Content) -> Result<Content> {
            Ok(content)
        }
    }

    fn graph(edges: &[(&str, &str)]) -> HashMap<String, Outgoing> {
        let mut graph: HashMap<String, Outgoing> = HashMap::new();
        for (from, to) in edges {
            let edge = Edge {
                from: ContentType::parse(from).unwrap(),
                to: ContentType::parse(to).unwrap(),
            };
            graph
                .entry(from.to_string())
                .or_default()
                .insert(to.to_string(), Arc::new(edge));
        }
        graph
    }

    fn search(edges: &[(&str, &str)], from: &str, to: &str, max_hops: usize) -> Option<String> {
        let graph = graph(edges);
        shortest_path(from, to, max_hops, |node| graph.get(node).cloned())
            .map(|path| path.to_string())
    }

    #[test]
    fn test_identity() {
        let path = shortest_path("a/a", "a/a", 8, |_| None).unwrap();
        assert!(path.is_identity());
        assert_eq!(path.hops(), 0);
        assert!(path.formats().is_empty());
    }

    #[test]
    fn test_prefers_fewest_hops() {
        let edges = [("a/a", "b/b"), ("b/b", "c/c"), ("c/c", "d/d"), ("a/a", "d/d")];
        assert_eq!(search(&edges, "a/a", "d/d", 8).unwrap(), "a/a -> d/d");
    }

    #[test]
    fn test_cycle_terminates() {
        let edges = [("a/a", "b/b"), ("b/b", "a/a"), ("b/b", "c/c")];
        assert_eq!(search(&edges, "a/a", "c/c", 8).unwrap(), "a/a -> b/b -> c/c");
        assert!(search(&edges, "c/c", "a/a", 8).is_none());
    }

    #[test]
    fn test_tie_break_is_lexicographic() {
        // Registered with the lexicographically larger intermediate first
        let edges = [("a/a", "z/z"), ("a/a", "m/m"), ("z/z", "t/t"), ("m/m", "t/t")];
        assert_eq!(search(&edges, "a/a", "t/t", 8).unwrap(), "a/a -> m/m -> t/t");
    }

    #[test]
    fn test_max_hops() {
        let edges = [("a/a", "b/b"), ("b/b", "c/c"), ("c/c", "d/d")];
        assert!(search(&edges, "a/a", "d/d", 2).is_none());
        assert!(search(&edges, "a/a", "d/d", 3).is_some());
    }
}
