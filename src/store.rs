use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::{
    device::Device,
    error::{Result, StoreError},
};

/// In-memory device registry keyed by serial number.
///
/// Reads share the lock, every mutation holds it exclusively for both the
/// existence check and the write. No operation can leave the map half-updated,
/// so a poisoned lock is recovered instead of propagated.
#[derive(Debug, Default)]
pub struct DeviceStore {
    devices: RwLock<HashMap<String, Device>>,
}

impl DeviceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Device>> {
        self.devices.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Device>> {
        self.devices.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(&self, device: Device) -> Result<()> {
        match self.write().entry(device.serial_num.clone()) {
            Entry::Occupied(entry) => Err(StoreError::AlreadyExists(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(device);
                Ok(())
            }
        }
    }

    pub fn get(&self, serial_num: &str) -> Result<Device> {
        self.read()
            .get(serial_num)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(serial_num.to_string()))
    }

    /// Replaces the whole record stored under `device.serial_num`.
    pub fn update(&self, device: Device) -> Result<()> {
        match self.write().get_mut(&device.serial_num) {
            Some(existing) => {
                *existing = device;
                Ok(())
            }
            None => Err(StoreError::NotFound(device.serial_num)),
        }
    }

    pub fn delete(&self, serial_num: &str) -> Result<()> {
        self.write()
            .remove(serial_num)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(serial_num.to_string()))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
