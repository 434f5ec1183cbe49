//! Serializable view of an instance's dependency bookkeeping.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{DependencyGraph, EvaluationRegistry};
use crate::error::Result;
use crate::property::PropertyName;

/// Sorted copy of the graph and registry, for logging and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    /// Supporter to sorted dependents.
    pub edges: BTreeMap<PropertyName, Vec<PropertyName>>,

    /// Computed properties whose edges have been discovered, sorted.
    pub configured: Vec<PropertyName>,
}

impl GraphSnapshot {
    pub fn capture(graph: &DependencyGraph, registry: &EvaluationRegistry) -> Self {
        let edges = graph
            .iter()
            .map(|(supporter, dependents)| {
                let mut dependents: Vec<_> = dependents.iter().cloned().collect();
                dependents.sort();
                (supporter.clone(), dependents)
            })
            .collect();

        let mut configured: Vec<_> = registry.iter().cloned().collect();
        configured.sort();

        Self { edges, configured }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
