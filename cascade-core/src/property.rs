//! Property identifiers.
//!
//! Properties are identified by name, unique within the owning instance only.
//! The dependency graph never sees a property's type; that is known solely at
//! the accessor call site.
//!
//! Names are string keyed so that dependencies can be declared on things the
//! owner does not statically know about (collection items, properties of
//! other objects). Owners that want typo-proof names can declare them with
//! [`property_names!`](crate::property_names).

use std::borrow::Borrow;
use std::fmt;
use std::rc::Rc;

use serde::{Serialize, Serializer};

/// Name of a property within its owning instance.
///
/// Cloning is a reference count bump, so names can be pushed onto the
/// evaluation stack and stored in the graph freely.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyName(Rc<str>);

impl PropertyName {
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PropertyName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for PropertyName {
    fn from(name: String) -> Self {
        Self(Rc::from(name))
    }
}

impl From<&PropertyName> for PropertyName {
    fn from(name: &PropertyName) -> Self {
        name.clone()
    }
}

impl Borrow<str> for PropertyName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PropertyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PropertyName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for PropertyName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PropertyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Declare an enum of property ids for a reactive type.
///
/// Each variant maps to the string used in the dependency graph. The enum
/// converts into [`PropertyName`], so it can be passed anywhere the engine
/// accepts a name.
///
/// ```rust
/// cascade_core::property_names! {
///     pub enum PersonProperty {
///         First => "First",
///         Last => "Last",
///         FullName => "FullName",
///     }
/// }
///
/// assert_eq!(PersonProperty::FullName.as_str(), "FullName");
/// let name: cascade_core::PropertyName = PersonProperty::First.into();
/// assert_eq!(name, "First");
/// ```
#[macro_export]
macro_rules! property_names {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),*
        }

        impl $name {
            /// Every declared property, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),*
                }
            }
        }

        impl ::core::convert::From<$name> for $crate::PropertyName {
            fn from(id: $name) -> Self {
                $crate::PropertyName::new(id.as_str())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
