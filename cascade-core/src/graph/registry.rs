//! Evaluation Registry
//!
//! Tracks which computed properties have completed their one dependency
//! discovery pass. Membership is monotonic.

use std::collections::HashSet;

use crate::property::PropertyName;

/// Set of computed properties whose edges have been discovered.
#[derive(Debug, Default, Clone)]
pub struct EvaluationRegistry {
    configured: HashSet<PropertyName>,
}

impl EvaluationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `name` as configured.
    ///
    /// Returns `true` if this is the first time, i.e. the caller should run
    /// the discovery pass.
    pub fn register(&mut self, name: &PropertyName) -> bool {
        if self.configured.contains(name.as_str()) {
            return false;
        }
        self.configured.insert(name.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configured.contains(name)
    }

    pub fn len(&self) -> usize {
        self.configured.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configured.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyName> + '_ {
        self.configured.iter()
    }
}
