//! Server/client boundary: package a response on one side, turn it back into
//! an [`Outcome`] on the other.
//!
//! Wire contract (with the `serde` feature):
//!
//! ```text
//! {"success": true,  "data": <T or null>}
//! {"success": false, "error": {"name": "Error", "message": "..."}}
//! ```

use alloc::string::{String, ToString};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

use crate::error::ConfigError;
use crate::maybe::Maybe;
use crate::nullish::Nullable;
use crate::outcome::Outcome;

const DEFAULT_ERROR_NAME: &str = "Error";
const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// A full error object carried across the boundary
///
/// Renders as `<name>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{name}: {message}")]
pub struct ApiError {
    #[cfg_attr(feature = "serde", serde(default = "default_error_name"))]
    name: String,
    message: String,
}

#[cfg(feature = "serde")]
fn default_error_name() -> String {
    DEFAULT_ERROR_NAME.to_string()
}

impl ApiError {
    /// A plain error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self::named(DEFAULT_ERROR_NAME, message)
    }

    /// An error with an explicit name, e.g. the originating error type
    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Placeholder used when a failed response carries no error
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR_MESSAGE)
    }

    /// Captures any error: its type name becomes the name, its `Display`
    /// output the message
    pub fn from_error<E: core::error::Error + ?Sized>(error: &E) -> Self {
        Self::named(short_type_name::<E>(), error.to_string())
    }

    /// The error's name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The human-readable message
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

// `my_crate::errors::Timeout<u8>` -> `Timeout`, `dyn core::error::Error` -> `Error`
fn short_type_name<E: ?Sized>() -> &'static str {
    let full = core::any::type_name::<E>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A response packaged for consumption by a client
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize),
    serde(
        from = "RawApiResponse<T>",
        bound(deserialize = "T: Deserialize<'de>")
    )
)]
pub enum ApiResponse<T> {
    /// The request succeeded; `data` may be null
    Success {
        /// Response data
        data: Option<T>,
    },
    /// The request failed
    Failure {
        /// What went wrong
        error: ApiError,
    },
}

impl<T> ApiResponse<T> {
    /// Packages response data, refusing undefined
    ///
    /// An explicit null is fine and becomes a success with no data.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UndefinedApiData`] for [`Nullable::Undefined`].
    pub fn new(input: Nullable<T>) -> Result<Self, ConfigError> {
        if input.is_undefined() {
            tracing::debug!("refusing to package undefined api response data");
            return Err(ConfigError::UndefinedApiData);
        }
        Ok(Self::success(input.into_option()))
    }

    /// A successful response
    #[inline]
    pub const fn success(data: Option<T>) -> Self {
        Self::Success { data }
    }

    /// A failed response
    #[inline]
    #[must_use]
    pub const fn failure(error: ApiError) -> Self {
        Self::Failure { error }
    }

    /// A failed response capturing `error` via [`ApiError::from_error`]
    pub fn from_error<E: core::error::Error + ?Sized>(error: &E) -> Self {
        Self::failure(ApiError::from_error(error))
    }

    /// Returns the success flag
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Turns the response into an outcome; see [`consume_api_response`]
    pub fn consume(self) -> Outcome<Maybe<T>, ApiError> {
        match self {
            Self::Success { data } => Outcome::ok(Maybe::new(data)),
            Self::Failure { error } => {
                tracing::trace!(
                    name = error.name(),
                    error_message = error.message(),
                    "consumed failed api response"
                );
                Outcome::err(error)
            }
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    #[inline]
    fn from(error: ApiError) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(Some(data)),
            Err(error) => Self::failure(error),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            Self::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// A response as it arrives off the wire, before it is checked
///
/// Every field is optional so that malformed input can still be represented.
/// Converting into [`ApiResponse`] never fails: a response that neither
/// claims success nor carries an error becomes a failure with
/// [`ApiError::unknown`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(deserialize = "T: Deserialize<'de>"))
)]
pub struct RawApiResponse<T> {
    /// The success flag, if present
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub success: Option<bool>,
    /// Response data, if present
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub data: Option<T>,
    /// Error object, if present
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<ApiError>,
}

impl<T> From<RawApiResponse<T>> for ApiResponse<T> {
    fn from(raw: RawApiResponse<T>) -> Self {
        let RawApiResponse {
            success,
            data,
            error,
        } = raw;
        match (success, error) {
            (Some(true), error) => {
                if error.is_some() {
                    tracing::debug!("ignoring error object on a successful api response");
                }
                Self::success(data)
            }
            (_, Some(error)) => Self::failure(error),
            (_, None) => {
                tracing::warn!(?success, "malformed api response, substituting unknown error");
                Self::failure(ApiError::unknown())
            }
        }
    }
}

impl<T> From<ApiResponse<T>> for RawApiResponse<T> {
    fn from(response: ApiResponse<T>) -> Self {
        match response {
            ApiResponse::Success { data } => Self {
                success: Some(true),
                data,
                error: None,
            },
            ApiResponse::Failure { error } => Self {
                success: Some(false),
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Consumes a response on the client side and returns an [`Outcome`]
///
/// Success becomes `Ok` holding a [`Maybe`], so null data is
/// `Ok(None(null))` rather than a nullish outcome. Failure becomes `Err`
/// holding the error object. Raw transport responses are accepted too and
/// degrade to "Unknown error" when malformed.
///
/// ```rust
/// use guarded_returns::{consume_api_response, ApiError, ApiResponse};
///
/// let response = ApiResponse::<String>::failure(ApiError::new("x"));
/// let outcome = consume_api_response(response);
/// assert_eq!(outcome.unwrap_err().unwrap_err().message(), "x");
/// ```
pub fn consume_api_response<T>(response: impl Into<ApiResponse<T>>) -> Outcome<Maybe<T>, ApiError> {
    response.into().consume()
}
