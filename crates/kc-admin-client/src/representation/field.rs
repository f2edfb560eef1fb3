//! Tri-state optional field.
//!
//! Keycloak distinguishes "not sent" (keep the server default) from an
//! explicit value, including explicit `false` and `0`. `Option<bool>` read
//! through `unwrap_or_default` collapses the two, so optional scalars on the
//! representations use [`Field`] instead:
//!
//! ```rust
//! use kc_admin_client::Field;
//!
//! let unset: Field<bool> = Field::Unset;
//! let off = Field::Value(false);
//! assert_ne!(unset, off);
//! ```
//!
//! Pair every field with
//! `#[serde(default, skip_serializing_if = "Field::is_unset")]` so unset
//! values never reach the wire.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional value that remembers whether it was ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field<T> {
    /// Omitted from payloads; the server keeps its own value.
    #[default]
    Unset,
    /// Sent as-is, even when it equals the type's default.
    Value(T),
}

impl<T> Field<T> {
    /// Returns `true` when no value was set.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns `true` when a value was set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrows the value, if any.
    #[must_use]
    pub const fn as_ref(&self) -> Field<&T> {
        match self {
            Self::Unset => Field::Unset,
            Self::Value(v) => Field::Value(v),
        }
    }

    /// Converts into an `Option`, losing the distinction at the call site only.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Unset => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Value(v) => Some(v),
        }
    }

    /// Maps the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Self::Unset => Field::Unset,
            Self::Value(v) => Field::Value(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reached when a field forgot its skip_serializing_if.
            Self::Unset => serializer.serialize_none(),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
