//! Property Engine
//!
//! `PropertyCore` is the per-instance engine a reactive object embeds. Its
//! accessors are what the object's getters call through; they drive the
//! evaluation stack and registry and populate the dependency graph as a side
//! effect of ordinary reads.
//!
//! # How It Works
//!
//! 1. Every accessor first performs implicit dependency capture: if some
//!    computed property is on top of the evaluation stack, the property
//!    being read is recorded as its supporter.
//!
//! 2. The first time a computed property is read, its name is registered and
//!    pushed onto the stack for the duration of the computation, so every
//!    property read inside it is attributed to it.
//!
//! 3. On later reads the computation runs again (values are never cached),
//!    but without the push. Its edges were discovered on the first read and
//!    stay as they are.
//!
//! # Threading
//!
//! All state lives behind `RefCell`, so a core is `!Sync`. One instance is
//! meant to be driven from a single thread; re-entrant reads are expected.

use std::cell::RefCell;

use tracing::{debug, trace};

use super::context::{EvaluationScope, EvaluationStack};
use super::subscriber::{ChangeListeners, InstanceId, PropertyChanged, SubscriberId};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::{DependencyGraph, EdgeInsert, EvaluationRegistry, GraphSnapshot};
use crate::property::PropertyName;

/// Dependency discovery and change propagation for one reactive instance.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use cascade_core::{PropertyCore, PropertyName};
///
/// struct Person {
///     core: PropertyCore,
///     first: RefCell<String>,
///     last: RefCell<String>,
/// }
///
/// impl Person {
///     fn first(&self) -> String {
///         self.core.read_value("First", self.first.borrow().clone())
///     }
///
///     fn last(&self) -> String {
///         self.core.read_value("Last", self.last.borrow().clone())
///     }
///
///     fn full_name(&self) -> String {
///         self.core
///             .read_computed("FullName", || format!("{} {}", self.first(), self.last()))
///     }
/// }
///
/// let person = Person {
///     core: PropertyCore::new(),
///     first: RefCell::new("J".into()),
///     last: RefCell::new("D".into()),
/// };
///
/// assert_eq!(person.full_name(), "J D");
/// assert_eq!(person.core.dependents_of("First"), vec![PropertyName::from("FullName")]);
/// ```
#[derive(Debug)]
pub struct PropertyCore {
    id: InstanceId,
    config: EngineConfig,
    stack: RefCell<EvaluationStack>,
    pub(super) graph: RefCell<DependencyGraph>,
    registry: RefCell<EvaluationRegistry>,
    pub(super) listeners: ChangeListeners,
}

impl PropertyCore {
    /// Create a core with the default cascade guards.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Create a core with custom cascade guards.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            id: InstanceId::new(),
            config,
            stack: RefCell::new(EvaluationStack::new()),
            graph: RefCell::new(DependencyGraph::new()),
            registry: RefCell::new(EvaluationRegistry::new()),
            listeners: ChangeListeners::new(),
        }
    }

    /// Get the identity this core reports as the source of its signals.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Read a stored property.
    ///
    /// Returns `value` unchanged after recording `name` as a supporter of
    /// whatever computed property is currently being evaluated.
    pub fn read_value<T>(&self, name: impl Into<PropertyName>, value: T) -> T {
        self.capture(&name.into());
        value
    }

    /// Read a computed property.
    ///
    /// `compute` runs on every call. Only the first call for a given `name`
    /// runs it with `name` on the evaluation stack, which is when its
    /// supporters are discovered. On later calls, reads made by `compute` are
    /// attributed to the enclosing evaluation, if any.
    ///
    /// A panic in `compute` propagates to the caller; the stack is unwound
    /// first, so the core stays usable.
    pub fn read_computed<T, F>(&self, name: impl Into<PropertyName>, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        let name = name.into();
        self.capture(&name);

        let first_evaluation = self.registry.borrow_mut().register(&name);
        if !first_evaluation {
            return compute();
        }

        debug!(instance = self.id.raw(), property = %name, "discovering dependencies");
        let _scope = EvaluationScope::enter(&self.stack, name);
        compute()
    }

    /// Declare that the property currently being evaluated depends on `name`.
    ///
    /// For reliance the accessors cannot observe: another object's property,
    /// a collection item, or a read that only happens on some branches.
    pub fn declare_dependency(&self, name: impl Into<PropertyName>) {
        self.capture(&name.into());
    }

    /// Store `value` into `slot` and notify if it differs from the old value.
    ///
    /// Returns whether the value changed.
    pub fn assign<T: PartialEq>(
        &self,
        name: impl Into<PropertyName>,
        slot: &mut T,
        value: T,
    ) -> Result<bool> {
        if *slot == value {
            return Ok(false);
        }
        *slot = value;
        self.notify_changed(name)?;
        Ok(true)
    }

    /// Implicit dependency capture: `name` supports the evaluation on top of
    /// the stack, unless that evaluation is `name` itself.
    fn capture(&self, name: &PropertyName) {
        let Some(dependent) = self.stack.borrow().top().cloned() else {
            return;
        };

        match self.graph.borrow_mut().record_edge(name, &dependent) {
            EdgeInsert::Added => {
                trace!(instance = self.id.raw(), supporter = %name, dependent = %dependent, "edge recorded");
            }
            EdgeInsert::Reversed => {
                debug!(instance = self.id.raw(), supporter = %name, dependent = %dependent, "edge rejected, reverse edge exists");
            }
            EdgeInsert::Existing | EdgeInsert::SelfLoop => {}
        }
    }

    // ------------------------------------------------------------------------
    // Subscribers
    // ------------------------------------------------------------------------

    /// Register a listener for this instance's change signals.
    pub fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn(&PropertyChanged) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.listeners.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// Get the direct dependents of `name`.
    pub fn dependents_of(&self, name: &str) -> Vec<PropertyName> {
        self.graph.borrow().dependents_of(name).cloned().collect()
    }

    /// Get the direct supporters of `name`.
    pub fn supporters_of(&self, name: &str) -> Vec<PropertyName> {
        self.graph.borrow().supporters_of(name)
    }

    pub fn has_edge(&self, supporter: &str, dependent: &str) -> bool {
        self.graph.borrow().contains_edge(supporter, dependent)
    }

    pub fn edge_count(&self) -> usize {
        self.graph.borrow().edge_count()
    }

    /// Check whether `name` has completed its discovery pass.
    pub fn is_configured(&self, name: &str) -> bool {
        self.registry.borrow().contains(name)
    }

    /// Get the computed property currently being discovered, if any.
    pub fn current_evaluation(&self) -> Option<PropertyName> {
        self.stack.borrow().top().cloned()
    }

    pub fn evaluation_depth(&self) -> usize {
        self.stack.borrow().depth()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot::capture(&self.graph.borrow(), &self.registry.borrow())
    }
}

impl Default for PropertyCore {
    fn default() -> Self {
        Self::new()
    }
}
