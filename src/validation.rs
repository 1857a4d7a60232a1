//! Structural validation of device records before they reach the store.

use std::net::Ipv4Addr;

use thiserror::Error;

use crate::device::Device;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid serial number")]
    EmptySerialNumber,

    #[error("invalid model")]
    EmptyModel,

    #[error("invalid IP address `{0}`")]
    InvalidIp(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Checks serial number, model and IP in that order and reports the first
/// defect found.
pub fn validate_device(device: &Device) -> Result<()> {
    if device.serial_num.is_empty() {
        return Err(ValidationError::EmptySerialNumber);
    }

    if device.model.is_empty() {
        return Err(ValidationError::EmptyModel);
    }

    // Ipv4Addr only accepts plain dotted quads: leading zeros, IPv6 and
    // IPv4-mapped IPv6 forms are all rejected.
    device
        .ip
        .parse::<Ipv4Addr>()
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidIp(device.ip.clone()))
}
