//! Observable view-models.
//!
//! Types that embed a [`PropertyCore`] implement [`Observable`] to expose
//! the notification and subscription surface directly on themselves.

use super::engine::PropertyCore;
use super::subscriber::{PropertyChanged, SubscriberId};
use crate::error::Result;
use crate::property::PropertyName;

/// A type whose properties participate in change propagation.
pub trait Observable {
    /// Get the engine backing this object's properties.
    fn core(&self) -> &PropertyCore;

    fn notify_changed(&self, name: impl Into<PropertyName>) -> Result<()> {
        self.core().notify_changed(name)
    }

    fn notify_dependents(&self, name: impl Into<PropertyName>) -> Result<()> {
        self.core().notify_dependents(name)
    }

    fn declare_dependency(&self, name: impl Into<PropertyName>) {
        self.core().declare_dependency(name)
    }

    fn subscribe<F>(&self, listener: F) -> SubscriberId
    where
        F: Fn(&PropertyChanged) + 'static,
    {
        self.core().subscribe(listener)
    }

    fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.core().unsubscribe(id)
    }
}

impl Observable for PropertyCore {
    fn core(&self) -> &PropertyCore {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    crate::property_names! {
        enum CartProperty {
            Quantity => "Quantity",
            UnitPrice => "UnitPrice",
            Total => "Total",
        }
    }

    struct Cart {
        core: PropertyCore,
        quantity: Cell<u32>,
        unit_price: Cell<u32>,
    }

    impl Observable for Cart {
        fn core(&self) -> &PropertyCore {
            &self.core
        }
    }

    impl Cart {
        fn quantity(&self) -> u32 {
            self.core.read_value(CartProperty::Quantity, self.quantity.get())
        }

        fn unit_price(&self) -> u32 {
            self.core.read_value(CartProperty::UnitPrice, self.unit_price.get())
        }

        fn total(&self) -> u32 {
            self.core
                .read_computed(CartProperty::Total, || self.quantity() * self.unit_price())
        }

        fn set_quantity(&self, quantity: u32) -> Result<()> {
            self.quantity.set(quantity);
            self.notify_changed(CartProperty::Quantity)
        }
    }

    #[test]
    fn observable_type_propagates_changes() {
        let cart = Cart {
            core: PropertyCore::new(),
            quantity: Cell::new(2),
            unit_price: Cell::new(5),
        };
        assert_eq!(cart.total(), 10);

        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = Rc::clone(&log);
        let id = cart.subscribe(move |e| log_clone.borrow_mut().push(e.property.to_string()));

        cart.set_quantity(3).unwrap();
        assert_eq!(*log.borrow(), vec!["Quantity", "Total"]);
        assert_eq!(cart.total(), 15);

        assert!(cart.unsubscribe(id));
        cart.set_quantity(4).unwrap();
        assert_eq!(log.borrow().len(), 2);
    }
}
