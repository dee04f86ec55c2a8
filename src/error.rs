//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A derived scalar reduced to zero modulo the group order.
    ///
    /// This is a transient condition, not a failure of the inputs' shape:
    /// the caller is expected to retry the derivation with fresh
    /// randomness.
    IntermediateValue,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IntermediateValue => write!(f, "derived scalar is zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
