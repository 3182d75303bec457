use core::convert::Infallible;
use core::fmt::{self, Display};

use crate::error::AccessError;

/// A payload slot on one of the guarded containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The success or present-value slot
    Value,
    /// The failure slot
    Error,
}

impl Field {
    /// Returns the slot name as it appears in rendered faults
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Error => "error",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Containers whose payload may only be read through a sanctioned accessor
///
/// The payload fields of [`Maybe`](crate::Maybe) and
/// [`Outcome`](crate::Outcome) are private, so the compiler already rejects
/// direct reads. This trait covers the dynamic case: callers can ask which
/// slots the active variant exposes, and any attempt to read one directly
/// yields the container's [`AccessError`].
pub trait Guarded {
    /// The fault every direct read produces
    const FAULT: AccessError;

    /// Returns true if the active variant exposes `field`
    fn has_field(&self, field: Field) -> bool;

    /// Attempts to read `field` directly
    ///
    /// # Errors
    ///
    /// Always fails, on every variant and every field, with
    /// [`Self::FAULT`]. The error names the accessor to use instead.
    fn read_field(&self, field: Field) -> Result<Infallible, AccessError> {
        tracing::trace!(
            %field,
            exposed = self.has_field(field),
            accessor = Self::FAULT.accessor(),
            "rejected direct payload read"
        );
        Err(Self::FAULT)
    }
}
