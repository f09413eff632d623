//! Error types for beacon-alloc.

use thiserror::Error;

/// Result type for beacon-alloc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate an allocation call.
///
/// Palette exhaustion is not an error: it is reported per node as
/// [`Outcome::Unassignable`](crate::Outcome::Unassignable).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No nodes were supplied.
    #[error("node set is empty")]
    EmptyNodeSet,

    /// The interference radius is not a finite, strictly positive number.
    #[error("interference radius must be finite and positive, got {0} km")]
    InvalidRadius(f64),

    /// The palette has no channels.
    #[error("palette is empty")]
    EmptyPalette,

    /// A palette channel is not a positive integer.
    #[error("invalid channel {0}: channels must be positive")]
    InvalidChannel(u32),

    /// A palette entry could not be parsed as a channel number.
    #[error("unparsable palette entry: {0:?}")]
    UnparsableChannel(String),

    /// A channel appears more than once in the palette.
    #[error("duplicate channel {0} in palette")]
    DuplicateChannel(u32),

    /// A node has an empty identity.
    #[error("node identity is empty")]
    EmptyIdentity,

    /// Two nodes share the same identity.
    #[error("duplicate node identity: {0}")]
    DuplicateIdentity(String),

    /// A node position contains NaN or infinity.
    #[error("node {id} has non-finite coordinates ({lat}, {lon})")]
    NonFiniteCoordinate { id: String, lat: f64, lon: f64 },

    /// The interference graph or processing order is inconsistent.
    #[error("interference graph invariant violated: {0}")]
    InvariantViolation(String),
}
