use super::WrapperRef;
use crate::{core::*, device::Device};
use once_cell::sync::OnceCell;
use std::fmt::Debug;
use tracing::debug;

/// Device list of a platform, context or program.
///
/// The list is discovered through the native API on first access and never
/// refreshed afterwards. Each device in it is a counted reference held for as
/// long as the container lives.
pub struct DevContainer {
    devices: OnceCell<Box<[Device]>>,
}

impl DevContainer {
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            devices: OnceCell::new(),
        }
    }

    /// Container whose device list is already known, so it's never queried.
    #[inline(always)]
    pub fn with_devices(devices: impl Into<Box<[Device]>>) -> Self {
        Self {
            devices: OnceCell::with_value(devices.into()),
        }
    }

    #[inline(always)]
    pub fn is_populated(&self) -> bool {
        self.devices.get().is_some()
    }

    /// Device list of `owner`, enumerating it if it isn't known yet.
    ///
    /// Concurrent first calls enumerate once; a failed enumeration leaves the
    /// container empty so a later call may try again.
    pub(crate) fn devices_of(&self, owner: &WrapperRef) -> Result<&[Device]> {
        let devices = self.devices.get_or_try_init(|| {
            let class = owner.class();
            let handle = owner.handle();

            let ids = owner.native().device_ids(class, handle).map_err(|status| {
                Error::from_native(status, format!("unable to list the devices of {class} {handle}"))
            })?;

            debug!(%handle, %class, count = ids.len(), "populating device list");
            let registry = owner.registry();
            ids.into_iter()
                .map(|id| Device::wrap_borrowed(&registry, id))
                .collect::<Result<Vec<_>>>()
                .map(Vec::into_boxed_slice)
        })?;

        Ok(devices)
    }
}

impl Default for DevContainer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for DevContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.devices.get() {
            Some(devices) => f.debug_list().entries(devices.iter()).finish(),
            None => f.write_str("[..]"),
        }
    }
}
