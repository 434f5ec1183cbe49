//! Notifier
//!
//! Raises the change signal for a property and cascades it, depth first,
//! through the dependency graph to every transitive dependent.
//!
//! # Cycle Guards
//!
//! The graph itself only rejects self edges and symmetric two-node cycles,
//! so a longer cycle such as A -> B -> C -> A can be recorded. The cascade
//! therefore carries the path of properties it is currently notifying and
//! fails with [`CascadeError::CycleDetected`] before signalling a property
//! that is already on that path. Independently, nesting beyond
//! `max_cascade_depth` fails with [`CascadeError::DepthExceeded`].
//!
//! Only the current path counts. A property reachable along two different
//! paths (a diamond) is signalled once per path, which is not a cycle.
//!
//! Signals raised before a guard trips are not retracted.

use tracing::{trace, warn};

use super::engine::PropertyCore;
use super::subscriber::PropertyChanged;
use crate::error::{CascadeError, Result};
use crate::property::PropertyName;

impl PropertyCore {
    /// Signal that `name` changed, then signal everything that depends on it.
    pub fn notify_changed(&self, name: impl Into<PropertyName>) -> Result<()> {
        let mut path = Vec::new();
        self.signal(&name.into(), &mut path)
    }

    /// Signal every transitive dependent of `name`, but not `name` itself.
    pub fn notify_dependents(&self, name: impl Into<PropertyName>) -> Result<()> {
        let name = name.into();
        let mut path = vec![name.clone()];
        self.cascade(&name, &mut path)
    }

    fn signal(&self, name: &PropertyName, path: &mut Vec<PropertyName>) -> Result<()> {
        let config = self.config();

        if config.detect_cycles && path.contains(name) {
            let mut cycle = path.clone();
            cycle.push(name.clone());
            warn!(instance = self.id().raw(), property = %name, "cascade aborted, dependency cycle");
            return Err(CascadeError::CycleDetected {
                property: name.clone(),
                path: cycle,
            });
        }

        if path.len() > config.max_cascade_depth {
            warn!(
                instance = self.id().raw(),
                property = %name,
                limit = config.max_cascade_depth,
                "cascade aborted, depth limit exceeded"
            );
            return Err(CascadeError::DepthExceeded {
                property: name.clone(),
                limit: config.max_cascade_depth,
            });
        }

        trace!(instance = self.id().raw(), property = %name, depth = path.len(), "property changed");
        self.listeners.emit(&PropertyChanged {
            source: self.id(),
            property: name.clone(),
        });

        path.push(name.clone());
        let result = self.cascade(name, path);
        path.pop();
        result
    }

    fn cascade(&self, name: &PropertyName, path: &mut Vec<PropertyName>) -> Result<()> {
        // Copy out so listeners can grow the graph while we walk it.
        let dependents: Vec<PropertyName> = self
            .graph
            .borrow()
            .dependents_of(name.as_str())
            .cloned()
            .collect();

        for dependent in &dependents {
            self.signal(dependent, path)?;
        }
        Ok(())
    }
}
