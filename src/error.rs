//! Store error types.

use thiserror::Error;

/// Errors returned by [`DeviceStore`](crate::store::DeviceStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A device with this serial number is already registered.
    #[error("device `{0}` already exists")]
    AlreadyExists(String),

    /// No device with this serial number is registered.
    #[error("device `{0}` not found")]
    NotFound(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
