use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::guard::{Field, Guarded};
use crate::nullish::{Nullable, Nullish, is_nullish};

/// A value that may legitimately be absent
///
/// `Some` holds any present value, including `0`, `false`, `""` and empty
/// collections. `None` holds nothing. The payload can only be read back with
/// [`coalesce`](Maybe::coalesce) or [`coalesce_ref`](Maybe::coalesce_ref).
///
/// ```rust
/// use guarded_returns::Maybe;
///
/// let empty = Maybe::new(Some(""));
/// assert!(empty.is_some());
/// assert_eq!(empty.coalesce(Some("default")), Some(""));
///
/// let missing = Maybe::<&str>::none();
/// assert_eq!(missing.to_string(), "None(null)");
/// assert_eq!(missing.coalesce(Some("default")), Some("default"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[must_use]
pub struct Maybe<T> {
    slot: Option<T>,
}

impl<T> Maybe<T> {
    /// Wraps a nullable input; only `None` becomes the `None` variant
    #[inline]
    pub const fn new(value: Option<T>) -> Self {
        Self { slot: value }
    }

    /// Wraps a present value
    #[inline]
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// The absent variant
    #[inline]
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// Wraps a tri-state input; both null and undefined become `None`
    pub fn from_nullable(value: Nullable<T>) -> Self {
        if is_nullish(&value) {
            return Self::none();
        }
        Self::new(value.into_option())
    }

    /// Returns true if a value is present
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns true if no value is present
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns the held value, or `default` when absent
    ///
    /// On `Some` the default is ignored even when supplied. On `None` the
    /// result is `default`, which is itself `None` when no fallback was given.
    #[inline]
    #[must_use]
    pub fn coalesce(self, default: Option<T>) -> Option<T> {
        self.slot.or(default)
    }

    /// Borrowing form of [`coalesce`](Maybe::coalesce)
    #[inline]
    #[must_use]
    pub fn coalesce_ref<'a>(&'a self, default: Option<&'a T>) -> Option<&'a T> {
        self.slot.as_ref().or(default)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Nullable<T>> for Maybe<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        Self::from_nullable(value)
    }
}

// A container is a present value even when it holds nothing.
impl<T> Nullish for Maybe<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T> Guarded for Maybe<T> {
    const FAULT: AccessError = AccessError::Option;

    #[inline]
    fn has_field(&self, field: Field) -> bool {
        matches!(field, Field::Value)
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Some(value) => write!(f, "Some({value})"),
            None => f.write_str("None(null)"),
        }
    }
}
