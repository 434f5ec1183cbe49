//! Entity Binding
//!
//! Copies values between a reactive view-model and a plain data holder.
//! This layer adds no dependency logic of its own; implementations usually
//! write through their setters so the normal change signals fire.

/// Two-way mapping between a view-model and its plain entity.
///
/// Implementors provide the field copies; the hooks are optional extension
/// points around them.
pub trait EntityBinding {
    type Entity;

    /// Copy values from `entity` into this view-model.
    fn read_from(&mut self, entity: &Self::Entity);

    /// Copy this view-model's current values into `entity`.
    fn write_to(&self, entity: &mut Self::Entity);

    fn before_populate(&mut self, _entity: &Self::Entity) {}

    fn after_populate(&mut self, _entity: &Self::Entity) {}

    fn after_export(&self, _entity: &mut Self::Entity) {}

    /// Populate this view-model from `entity`, running the hooks around the copy.
    fn populate_from(&mut self, entity: &Self::Entity) {
        self.before_populate(entity);
        self.read_from(entity);
        self.after_populate(entity);
    }

    /// Produce a fresh entity holding this view-model's current values.
    fn to_entity(&self) -> Self::Entity
    where
        Self::Entity: Default,
    {
        let mut entity = Self::Entity::default();
        self.write_to(&mut entity);
        self.after_export(&mut entity);
        entity
    }
}

/// Replace the contents of `target` with a copy of `source`.
///
/// Does nothing and returns `false` if either side is missing.
pub fn copy_into<T: Clone>(source: Option<&[T]>, target: Option<&mut Vec<T>>) -> bool {
    let (Some(source), Some(target)) = (source, target) else {
        return false;
    };
    target.clear();
    target.extend_from_slice(source);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Observable, PropertyCore};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct PersonRecord {
        first: String,
        last: String,
        tags: Vec<String>,
    }

    struct PersonView {
        core: PropertyCore,
        first: String,
        last: String,
        tags: Vec<String>,
        hooks: Vec<&'static str>,
    }

    impl Observable for PersonView {
        fn core(&self) -> &PropertyCore {
            &self.core
        }
    }

    impl PersonView {
        fn new() -> Self {
            Self {
                core: PropertyCore::new(),
                first: String::new(),
                last: String::new(),
                tags: Vec::new(),
                hooks: Vec::new(),
            }
        }

        fn full_name(&self) -> String {
            self.core.read_computed("FullName", || {
                let first = self.core.read_value("First", &self.first);
                let last = self.core.read_value("Last", &self.last);
                format!("{first} {last}")
            })
        }

        fn set_first(&mut self, value: &str) {
            self.core
                .assign("First", &mut self.first, value.to_string())
                .unwrap();
        }
    }

    impl EntityBinding for PersonView {
        type Entity = PersonRecord;

        fn read_from(&mut self, entity: &PersonRecord) {
            self.set_first(&entity.first);
            self.last = entity.last.clone();
            copy_into(Some(entity.tags.as_slice()), Some(&mut self.tags));
        }

        fn write_to(&self, entity: &mut PersonRecord) {
            entity.first = self.first.clone();
            entity.last = self.last.clone();
            copy_into(Some(self.tags.as_slice()), Some(&mut entity.tags));
        }

        fn before_populate(&mut self, _entity: &PersonRecord) {
            self.hooks.push("before");
        }

        fn after_populate(&mut self, _entity: &PersonRecord) {
            self.hooks.push("after");
            self.notify_changed("Last").unwrap();
        }
    }

    #[test]
    fn populate_runs_hooks_and_signals() {
        let mut view = PersonView::new();
        assert_eq!(view.full_name(), " ");

        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = Rc::clone(&log);
        view.subscribe(move |e| log_clone.borrow_mut().push(e.property.to_string()));

        let record = PersonRecord {
            first: "J".into(),
            last: "D".into(),
            tags: vec!["admin".into()],
        };
        view.populate_from(&record);

        assert_eq!(view.hooks, vec!["before", "after"]);
        assert_eq!(view.full_name(), "J D");
        assert_eq!(
            *log.borrow(),
            vec!["First", "FullName", "Last", "FullName"]
        );
        assert_eq!(view.to_entity(), record);
    }

    #[test]
    fn copy_into_replaces_target() {
        let source = vec![1, 2, 3];
        let mut target = vec![9];

        assert!(copy_into(Some(source.as_slice()), Some(&mut target)));
        assert_eq!(target, vec![1, 2, 3]);
    }

    #[test]
    fn copy_into_missing_side_is_noop() {
        let mut target = vec![9];

        assert!(!copy_into::<i32>(None, Some(&mut target)));
        assert_eq!(target, vec![9]);
        assert!(!copy_into(Some(&[1, 2][..]), None));
    }
}
