//! # Guarded Returns - explicit presence and failure in function signatures.
//!
//! This library replaces ad-hoc nullable returns and panicking control flow
//! with two small containers whose payload can only be read through a
//! sanctioned accessor.
//!
//! ## Overview
//!
//! - **[`Maybe`]**: a value that may legitimately be absent. Absence is
//!   decided by the [`Nullish`] predicate, never by falsiness: `0`, `false`
//!   and `""` are present values.
//! - **[`Outcome`]**: an operation that can fail. The variant is picked once,
//!   by explicit construction, and a success never wraps a nullish payload.
//! - **[`ApiResponse`]**: a success/failure envelope for the server/client
//!   boundary, turned back into an [`Outcome`] by [`consume_api_response`].
//!
//! ## Quick Start
//!
//! ```rust
//! use guarded_returns::{AccessError, Field, Guarded, Maybe, Outcome, Payload};
//!
//! fn lookup(found: bool) -> Maybe<u32> {
//!     Maybe::new(found.then_some(0))
//! }
//!
//! let hit = lookup(true);
//! assert!(hit.is_some()); // zero is a value, not absence
//! assert_eq!(hit.coalesce(Some(7)), Some(0));
//! assert_eq!(lookup(false).coalesce(Some(7)), Some(7));
//!
//! let failed: Outcome<u32, std::num::ParseIntError> = "x".parse::<u32>().into();
//! assert!(failed.is_err());
//! assert!(matches!(failed.unwrap(), Payload::Error(_)));
//! assert!(failed.unwrap_err().is_err());
//! assert_eq!(failed.read_field(Field::Error), Err(AccessError::Result));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for [`ApiResponse`],
//!   [`RawApiResponse`], [`ApiError`] and [`Maybe`]
//! - `std`: Enable standard library support (enabled by default). Disable for `no_std` + `alloc` environments.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

/// Server/client response envelope and its conversion into outcomes.
pub mod api;
/// Construction and access faults.
pub mod error;
/// Payload slots and the direct-access guard.
pub mod guard;
/// The optional-value container.
pub mod maybe;
/// The absence predicate.
pub mod nullish;
/// The success-or-failure container.
pub mod outcome;

pub use api::{ApiError, ApiResponse, RawApiResponse, consume_api_response};
pub use error::{AccessError, ConfigError};
pub use guard::{Field, Guarded};
pub use maybe::Maybe;
pub use nullish::{Nullable, Nullish, is_nullish};
pub use outcome::{Outcome, Payload};
