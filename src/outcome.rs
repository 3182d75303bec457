use core::fmt::{self, Display};

use crate::error::{AccessError, ConfigError};
use crate::guard::{Field, Guarded};
use crate::nullish::{Nullable, Nullish};

/// The raw payload of an [`Outcome`], as handed back by [`Outcome::unwrap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload<T, E> {
    /// Payload of an `Ok`
    Value(T),
    /// Payload of an `Err`
    Error(E),
}

impl<T, E> Payload<T, E> {
    /// Returns true if this came from an `Ok`
    #[inline]
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns true if this came from an `Err`
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the success payload, if any
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Returns the failure payload, if any
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Value(_) => None,
            Self::Error(error) => Some(error),
        }
    }
}

impl<U> Payload<U, U> {
    /// Returns the payload when both branches share a type
    #[inline]
    pub fn into_inner(self) -> U {
        match self {
            Self::Value(inner) | Self::Error(inner) => inner,
        }
    }
}

impl<T: Display, E: Display> Display for Payload<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => value.fmt(f),
            Self::Error(error) => error.fmt(f),
        }
    }
}

/// The outcome of an operation that can fail
///
/// The variant is chosen once, at construction, by explicit selection:
/// [`ok`](Outcome::ok) / [`err`](Outcome::err), a caller-supplied classifier
/// in [`classify`](Outcome::classify), or a `core::result::Result`.
/// Successful absence is not an outcome: use a nested [`Maybe`](crate::Maybe).
///
/// ```rust
/// use guarded_returns::{Outcome, Payload};
///
/// let done: Outcome<&str, std::fmt::Error> = Outcome::ok("Everything is fine");
/// assert_eq!(done.unwrap(), Payload::Value(&"Everything is fine"));
/// assert_eq!(done.unwrap_err(), Ok(&"Everything is fine"));
/// assert_eq!(done.to_string(), "Ok(Everything is fine)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Outcome<T, E> {
    inner: Result<T, E>,
}

impl<T, E> Outcome<T, E> {
    /// A successful outcome
    #[inline]
    pub const fn ok(value: T) -> Self {
        Self { inner: Ok(value) }
    }

    /// A failed outcome
    #[inline]
    pub const fn err(error: E) -> Self {
        Self { inner: Err(error) }
    }

    /// A successful outcome from a nullable payload
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NullishResult`] when the payload is null or
    /// undefined.
    pub fn from_nullable(payload: impl Into<Nullable<T>>) -> Result<Self, ConfigError> {
        Self::classify(payload, Ok)
    }

    /// Builds an outcome from a single payload, letting `classifier` decide
    /// whether it is a success or a failure
    ///
    /// ```rust
    /// use guarded_returns::{ConfigError, Outcome};
    ///
    /// let parse = |raw: &str| raw.parse::<u16>().map_err(|e| e.to_string());
    /// let port = Outcome::classify(Some("8080"), parse).unwrap();
    /// assert!(port.is_ok());
    ///
    /// let missing = Outcome::classify(None::<&str>, parse);
    /// assert_eq!(missing, Err(ConfigError::NullishResult));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NullishResult`] when the payload is null or
    /// undefined. The classifier is not called in that case.
    pub fn classify<P, F>(payload: impl Into<Nullable<P>>, classifier: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(P) -> Result<T, E>,
    {
        match payload.into() {
            Nullable::Value(payload) => Ok(Self::from(classifier(payload))),
            absent => {
                tracing::debug!(
                    undefined = absent.is_undefined(),
                    "refusing to build an outcome from a nullish payload"
                );
                Err(ConfigError::NullishResult)
            }
        }
    }

    /// Returns true for a successful outcome
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns true for a failed outcome
    #[inline]
    #[must_use]
    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns the raw payload of whichever variant is active
    ///
    /// Never fails: on `Err` the error itself is returned for inspection.
    #[inline]
    pub const fn unwrap(&self) -> Payload<&T, &E> {
        match &self.inner {
            Ok(value) => Payload::Value(value),
            Err(error) => Payload::Error(error),
        }
    }

    /// Owning form of [`unwrap`](Outcome::unwrap)
    #[inline]
    pub fn into_payload(self) -> Payload<T, E> {
        match self.inner {
            Ok(value) => Payload::Value(value),
            Err(error) => Payload::Error(error),
        }
    }

    /// Returns the success value, or raises the held error
    ///
    /// # Errors
    ///
    /// On `Err` the wrapped error is returned unchanged, ready for `?`.
    #[inline]
    pub const fn unwrap_err(&self) -> Result<&T, &E> {
        self.inner.as_ref()
    }

    /// Owning form of [`unwrap_err`](Outcome::unwrap_err)
    ///
    /// # Errors
    ///
    /// On `Err` the wrapped error is returned unchanged, ready for `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.inner
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(inner: Result<T, E>) -> Self {
        Self { inner }
    }
}

impl<T, E> Nullish for Outcome<T, E> {
    #[inline]
    fn is_nullish(&self) -> bool {
        false
    }
}

impl<T, E> Guarded for Outcome<T, E> {
    const FAULT: AccessError = AccessError::Result;

    #[inline]
    fn has_field(&self, field: Field) -> bool {
        match field {
            Field::Value => self.is_ok(),
            Field::Error => self.is_err(),
        }
    }
}

impl<T: Display, E: Display> Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Ok(value) => write!(f, "Ok({value})"),
            Err(error) => write!(f, "Err({error})"),
        }
    }
}
