//! Supporter to dependent edges.

use indexmap::{IndexMap, IndexSet};

use crate::property::PropertyName;

/// Outcome of [`DependencyGraph::record_edge`].
///
/// The engine treats every outcome other than `Added` as a silent no-op; the
/// distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// The edge is new.
    Added,

    /// The edge was already present.
    Existing,

    /// Supporter and dependent are the same property.
    SelfLoop,

    /// The dependent already supports the supporter. Only this symmetric
    /// two-node cycle is rejected here; longer cycles are caught by the
    /// cascade guards.
    Reversed,
}

/// Per-instance mapping from a supporting property to its dependents.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    edges: IndexMap<PropertyName, IndexSet<PropertyName>>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `dependent` reads `supporter`.
    pub fn record_edge(&mut self, supporter: &PropertyName, dependent: &PropertyName) -> EdgeInsert {
        if supporter == dependent {
            return EdgeInsert::SelfLoop;
        }

        if self.contains_edge(dependent.as_str(), supporter.as_str()) {
            return EdgeInsert::Reversed;
        }

        let inserted = self
            .edges
            .entry(supporter.clone())
            .or_default()
            .insert(dependent.clone());

        if inserted {
            EdgeInsert::Added
        } else {
            EdgeInsert::Existing
        }
    }

    /// Check whether the edge `supporter -> dependent` exists.
    pub fn contains_edge(&self, supporter: &str, dependent: &str) -> bool {
        self.edges
            .get(supporter)
            .map(|dependents| dependents.contains(dependent))
            .unwrap_or(false)
    }

    /// Get the properties that read `supporter`. Empty if none were recorded.
    pub fn dependents_of(&self, supporter: &str) -> impl Iterator<Item = &PropertyName> + '_ {
        self.edges.get(supporter).into_iter().flatten()
    }

    /// Get the number of direct dependents of `supporter`.
    pub fn dependent_count(&self, supporter: &str) -> usize {
        self.edges.get(supporter).map(IndexSet::len).unwrap_or(0)
    }

    /// Get the properties that `dependent` reads.
    pub fn supporters_of(&self, dependent: &str) -> Vec<PropertyName> {
        self.edges
            .iter()
            .filter(|(_, dependents)| dependents.contains(dependent))
            .map(|(supporter, _)| supporter.clone())
            .collect()
    }

    /// Iterate over every supporter and its dependents.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyName, &IndexSet<PropertyName>)> + '_ {
        self.edges.iter()
    }

    /// Get the total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> PropertyName {
        PropertyName::from(s)
    }

    #[test]
    fn self_edge_is_ignored() {
        let mut graph = DependencyGraph::new();
        let total = name("Total");

        assert_eq!(graph.record_edge(&total, &total), EdgeInsert::SelfLoop);
        assert!(graph.is_empty());
        assert!(!graph.contains_edge("Total", "Total"));
    }

    #[test]
    fn reverse_edge_is_rejected() {
        let mut graph = DependencyGraph::new();
        let a = name("A");
        let b = name("B");

        assert_eq!(graph.record_edge(&a, &b), EdgeInsert::Added);
        assert_eq!(graph.record_edge(&b, &a), EdgeInsert::Reversed);

        assert!(graph.contains_edge("A", "B"));
        assert!(!graph.contains_edge("B", "A"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn duplicate_edge_is_idempotent() {
        let mut graph = DependencyGraph::new();
        let price = name("Price");
        let total = name("Total");

        assert_eq!(graph.record_edge(&price, &total), EdgeInsert::Added);
        assert_eq!(graph.record_edge(&price, &total), EdgeInsert::Existing);
        assert_eq!(graph.dependent_count("Price"), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn longer_cycles_are_not_rejected_by_the_graph() {
        let mut graph = DependencyGraph::new();
        let (a, b, c) = (name("A"), name("B"), name("C"));

        graph.record_edge(&a, &b);
        graph.record_edge(&b, &c);
        assert_eq!(graph.record_edge(&c, &a), EdgeInsert::Added);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn dependents_and_supporters() {
        let mut graph = DependencyGraph::new();
        let first = name("First");
        let last = name("Last");
        let full = name("FullName");
        let greeting = name("Greeting");

        graph.record_edge(&first, &full);
        graph.record_edge(&last, &full);
        graph.record_edge(&full, &greeting);

        let dependents: Vec<_> = graph.dependents_of("First").cloned().collect();
        assert_eq!(dependents, vec![full.clone()]);
        assert_eq!(graph.dependents_of("Unknown").count(), 0);

        let mut supporters = graph.supporters_of("FullName");
        supporters.sort();
        assert_eq!(supporters, vec![first, last]);
        assert_eq!(graph.supporters_of("Greeting"), vec![full]);
    }
}
