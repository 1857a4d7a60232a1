pub mod api;
pub mod constants;
pub mod device;
pub mod env;
pub mod error;
pub mod store;
pub mod validation;

pub use device::Device;
pub use error::StoreError;
pub use store::DeviceStore;
pub use validation::{validate_device, ValidationError};
