use thiserror::Error;

/// Misuse fault raised when a constructor is handed a payload it must refuse
///
/// These are programmer errors: they surface at construction time and are
/// never silently converted into a container value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// An [`Outcome`](crate::Outcome) was built from a null or undefined payload
    #[error("Result cannot contain nullish values, try wrapping your data in an Option first")]
    NullishResult,
    /// An [`ApiResponse`](crate::ApiResponse) was built from undefined data
    #[error("ApiResponse cannot contain undefined data")]
    UndefinedApiData,
}

/// Fault raised when a payload slot is read without the sanctioned accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AccessError {
    /// Direct read on a [`Maybe`](crate::Maybe)
    #[error("cannot access option directly, use `coalesce()` instead!")]
    Option,
    /// Direct read on an [`Outcome`](crate::Outcome)
    #[error("cannot access result directly, use `unwrap()` instead!")]
    Result,
}

impl AccessError {
    /// Returns the accessor that must be used instead of the direct read
    #[inline]
    #[must_use]
    pub const fn accessor(self) -> &'static str {
        match self {
            Self::Option => "coalesce()",
            Self::Result => "unwrap()",
        }
    }
}
