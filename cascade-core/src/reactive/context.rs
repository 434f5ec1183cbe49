//! Evaluation Context
//!
//! The evaluation stack tracks which computed property is currently running.
//! This enables implicit dependency capture: when any property is read
//! through an accessor, the property on top of the stack is the one reading
//! it.
//!
//! # Implementation
//!
//! Each [`PropertyCore`](super::PropertyCore) owns its own stack. When a
//! computed property runs its discovery pass we push its name, and the
//! returned [`EvaluationScope`] pops it when dropped, including while
//! unwinding from a panicking computation.
//!
//! The stack supports nesting: a computed property that reads another
//! computed property pushes a second entry on top of the first.

use std::cell::RefCell;

use smallvec::SmallVec;

use crate::property::PropertyName;

/// Ordered record of the computed properties currently being evaluated,
/// most recent last. Empty at rest.
#[derive(Debug, Default)]
pub struct EvaluationStack {
    entries: SmallVec<[PropertyName; 8]>,
}

impl EvaluationStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: PropertyName) {
        self.entries.push(name);
    }

    pub fn pop(&mut self) -> Option<PropertyName> {
        self.entries.pop()
    }

    /// Get the property currently being evaluated, if any.
    pub fn top(&self) -> Option<&PropertyName> {
        self.entries.last()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Guard that pops the evaluation stack when dropped.
///
/// This keeps push and pop paired even if the computation panics, so a
/// failed evaluation cannot leave a stale entry that would misattribute
/// later reads.
pub struct EvaluationScope<'a> {
    stack: &'a RefCell<EvaluationStack>,
    name: PropertyName,
}

impl<'a> EvaluationScope<'a> {
    /// Push `name` onto `stack` until the returned guard is dropped.
    pub fn enter(stack: &'a RefCell<EvaluationStack>, name: PropertyName) -> Self {
        stack.borrow_mut().push(name.clone());
        Self { stack, name }
    }

    pub fn name(&self) -> &PropertyName {
        &self.name
    }
}

impl Drop for EvaluationScope<'_> {
    fn drop(&mut self) {
        let popped = self.stack.borrow_mut().pop();

        // Catch mismatched scopes in debug builds.
        if let Some(entry) = popped {
            debug_assert_eq!(
                entry, self.name,
                "EvaluationScope mismatch: expected {:?}, got {:?}",
                self.name, entry
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_pushes_and_pops() {
        let stack = RefCell::new(EvaluationStack::new());

        assert!(stack.borrow().is_empty());
        assert!(stack.borrow().top().is_none());

        {
            let scope = EvaluationScope::enter(&stack, "Total".into());
            assert_eq!(scope.name(), "Total");
            assert_eq!(stack.borrow().top().map(PropertyName::as_str), Some("Total"));
        }

        assert!(stack.borrow().is_empty());
    }

    #[test]
    fn nested_scopes() {
        let stack = RefCell::new(EvaluationStack::new());

        {
            let _outer = EvaluationScope::enter(&stack, "Outer".into());
            assert_eq!(stack.borrow().depth(), 1);

            {
                let _inner = EvaluationScope::enter(&stack, "Inner".into());
                assert_eq!(stack.borrow().top().map(PropertyName::as_str), Some("Inner"));
                assert_eq!(stack.borrow().depth(), 2);
            }

            // After inner scope drops, outer should be current
            assert_eq!(stack.borrow().top().map(PropertyName::as_str), Some("Outer"));
        }

        assert_eq!(stack.borrow().depth(), 0);
    }

    #[test]
    fn scope_pops_on_panic() {
        let stack = RefCell::new(EvaluationStack::new());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = EvaluationScope::enter(&stack, "Broken".into());
            panic!("computation failed");
        }));

        assert!(result.is_err());
        assert!(stack.borrow().is_empty());
    }
}
