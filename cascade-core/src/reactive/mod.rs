//! Reactive Properties
//!
//! This module implements the per-instance engine behind computed
//! properties: implicit dependency capture on read and change propagation
//! on write.
//!
//! # Concepts
//!
//! ## Accessors
//!
//! A reactive object's getters call through [`PropertyCore::read_value`]
//! (stored properties) or [`PropertyCore::read_computed`] (derived
//! properties). While a computed property is being evaluated for the first
//! time, every property read through an accessor is recorded as one of its
//! supporters.
//!
//! ## Notification
//!
//! When a stored value changes, the owner calls
//! [`PropertyCore::notify_changed`]. Listeners receive a signal for that
//! property and then, depth first, for every property that transitively
//! depends on it.
//!
//! # Implementation Notes
//!
//! The "currently evaluating" property is tracked with an explicit stack
//! owned by each instance rather than a global or thread-local one, so
//! independently constructed objects never see each other's evaluations.

mod context;
mod engine;
mod notifier;
mod observable;
mod subscriber;

pub use self::context::{EvaluationScope, EvaluationStack};
pub use self::engine::PropertyCore;
pub use self::observable::Observable;
pub use self::subscriber::{ChangeListeners, InstanceId, PropertyChanged, SubscriberId};
