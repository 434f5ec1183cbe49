//! Cascade Core
//!
//! This crate provides change propagation for objects with computed
//! properties. It implements:
//!
//! - Implicit dependency discovery when a computed property is first read
//! - A per-instance supporter to dependent graph
//! - Depth-first change notification to every transitive dependent
//!
//! Computed values are never cached. Every read runs the computation again;
//! only the dependency edges are remembered.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `reactive`: The per-instance engine, its accessors and the notifier
//! - `graph`: Dependency graph and evaluation registry
//! - `binding`: Copying values between view-models and plain entities
//! - `config`: Cascade guards
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use cascade_core::{Observable, PropertyCore};
//!
//! struct Person {
//!     core: PropertyCore,
//!     first: RefCell<String>,
//!     last: RefCell<String>,
//! }
//!
//! impl Observable for Person {
//!     fn core(&self) -> &PropertyCore {
//!         &self.core
//!     }
//! }
//!
//! impl Person {
//!     fn first(&self) -> String {
//!         self.core.read_value("First", self.first.borrow().clone())
//!     }
//!
//!     fn last(&self) -> String {
//!         self.core.read_value("Last", self.last.borrow().clone())
//!     }
//!
//!     fn full_name(&self) -> String {
//!         self.core
//!             .read_computed("FullName", || format!("{} {}", self.first(), self.last()))
//!     }
//! }
//!
//! let person = Person {
//!     core: PropertyCore::new(),
//!     first: RefCell::new("J".into()),
//!     last: RefCell::new("D".into()),
//! };
//! assert_eq!(person.full_name(), "J D");
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let log_clone = Rc::clone(&log);
//! person.subscribe(move |e| log_clone.borrow_mut().push(e.property.to_string()));
//!
//! person.notify_changed("First").unwrap();
//! assert_eq!(*log.borrow(), vec!["First", "FullName"]);
//! ```

pub mod binding;
pub mod config;
pub mod error;
pub mod graph;
pub mod property;
pub mod reactive;

pub use binding::{copy_into, EntityBinding};
pub use config::EngineConfig;
pub use error::{CascadeError, Result};
pub use graph::{DependencyGraph, EdgeInsert, EvaluationRegistry, GraphSnapshot};
pub use property::PropertyName;
pub use reactive::{InstanceId, Observable, PropertyChanged, PropertyCore, SubscriberId};
