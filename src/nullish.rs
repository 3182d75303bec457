use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::string::String;
use alloc::vec::Vec;

/// Classifies a value as absent (nullish) or present
///
/// Only genuine absence is nullish. Falsy-looking values such as `0`,
/// `false`, `NaN`, `""` and empty collections are present.
pub trait Nullish {
    /// Returns true if the value represents absence
    fn is_nullish(&self) -> bool;
}

/// Returns true if `value` is nullish
///
/// ```rust
/// use guarded_returns::{is_nullish, Nullable};
///
/// assert!(is_nullish(&None::<u8>));
/// assert!(is_nullish(&Nullable::<u8>::Undefined));
/// assert!(!is_nullish(&0));
/// assert!(!is_nullish(""));
/// ```
#[inline]
#[must_use]
pub fn is_nullish<T: Nullish + ?Sized>(value: &T) -> bool {
    value.is_nullish()
}

/// A value that may be present, explicitly null, or missing altogether
///
/// Boundaries that must refuse a missing value while accepting an explicit
/// null take this instead of [`Option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// A present value
    Value(T),
    /// An explicit null
    Null,
    /// No value was supplied at all
    #[default]
    Undefined,
}

impl<T> Nullable<T> {
    /// Returns true if this is an explicit null
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if no value was supplied
    #[inline]
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Collapses null and undefined into [`None`]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Null | Self::Undefined => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    /// `None` maps to an explicit null
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T> Nullish for Option<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        self.is_none()
    }
}

impl<T> Nullish for Nullable<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        !matches!(self, Self::Value(_))
    }
}

impl<T: Nullish + ?Sized> Nullish for &T {
    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

impl<T: Nullish + ?Sized> Nullish for Box<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        (**self).is_nullish()
    }
}

macro_rules! never_nullish {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nullish for $ty {
                #[inline]
                fn is_nullish(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nullish!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

impl<T> Nullish for [T] {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullish for [T; N] {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T> Nullish for Vec<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T> Nullish for VecDeque<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<K, V> Nullish for BTreeMap<K, V> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T> Nullish for BTreeSet<T> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

#[cfg(feature = "std")]
impl<K, V, S> Nullish for std::collections::HashMap<K, V, S> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

#[cfg(feature = "std")]
impl<T, S> Nullish for std::collections::HashSet<T, S> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}
