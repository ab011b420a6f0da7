//! Error types for colony.

use thiserror::Error;

/// Errors raised while setting up a dish. Running a simulation never fails;
/// non-termination is reported through [`crate::Response`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColonyError {
    /// Requested side length is negative or above the supported maximum.
    #[error("invalid dish size {size}: must be within 0..={max}")]
    InvalidSize {
        /// Requested side length.
        size: i32,
        /// Largest accepted side length.
        max: i32,
    },
}

/// Result type for colony operations.
pub type Result<T> = std::result::Result<T, ColonyError>;
