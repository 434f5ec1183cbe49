//! Dependency Graph
//!
//! This module holds the per-instance bookkeeping behind implicit dependency
//! capture.
//!
//! # Overview
//!
//! - [`DependencyGraph`] maps each supporting property to the set of
//!   dependent properties that read it. An edge from S to D means "D's
//!   computed value may change when S changes."
//! - [`EvaluationRegistry`] records which computed properties have already
//!   had their edges discovered.
//! - [`GraphSnapshot`] is a serializable, sorted view of both for diagnostics.
//!
//! # Design Decisions
//!
//! 1. Both structures only grow. Edges are discovered once, on a computed
//!    property's first evaluation, and are never pruned.
//!
//! 2. Only the forward (supporter to dependents) direction is stored, because
//!    the cascade is the only hot traversal. Reverse lookups scan.
//!
//! 3. Dependent sets are insertion ordered so that cascades are reproducible,
//!    although callers must not rely on sibling order.

mod dependency;
mod registry;
mod snapshot;

pub use dependency::{DependencyGraph, EdgeInsert};
pub use registry::EvaluationRegistry;
pub use snapshot::GraphSnapshot;
