//! Error types for booking-core operations.

use thiserror::Error;

/// Errors surfaced by the submission validator and the textual boundaries.
///
/// Every variant is recoverable: the caller keeps the session alive, the
/// reservation store is never modified on a failed submission, and the user
/// may correct their inputs and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// One or more required form fields were unset at submission time.
    #[error("Please fill out all fields.")]
    MissingField,

    /// The drop-off date was not strictly after the pick-up date.
    #[error("Drop-off date must be after pick-up date.")]
    InvalidRange,

    /// The chosen vehicle type has no remaining unit for the chosen range,
    /// including the case where availability changed between selection and
    /// submission.
    #[error("The selected vehicle type is no longer available for these dates.")]
    UnavailableVehicle,

    /// The input text was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The input text did not name a vehicle type in the fleet.
    #[error("Unknown vehicle type: '{0}'")]
    UnknownVehicle(String),
}

/// Convenience alias used throughout booking-core.
pub type Result<T> = std::result::Result<T, BookingError>;
