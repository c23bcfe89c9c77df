use crate::{
    core::*,
    device::Device,
    wrapper::{DevContainer, Registry, Variant},
};
use tracing::debug;

wrapper_type! {
    /// OpenCL context
    pub struct Context => Context;
}

impl Context {
    /// Creates a context over the given devices.
    ///
    /// The device list of the new context is known up front, so it's never
    /// enumerated through the native API.
    pub fn new(devices: &[Device]) -> Result<Self> {
        let first = devices.first().ok_or_else(|| {
            Error::new(ErrorKind::Args, "a context needs at least one device")
        })?;

        let registry = first.registry();
        if let Some(foreign) = devices.iter().find(|x| !x.registry().ptr_eq(&registry)) {
            return Err(Error::new(
                ErrorKind::Args,
                format!("device {} belongs to another registry", foreign.handle()),
            ));
        }

        let ids = devices.iter().map(|x| x.handle()).collect::<Vec<_>>();
        let handle = registry
            .native()
            .create_context(&ids)
            .map_err(|status| Error::from_native(status, "unable to create context"))?;

        debug!(%handle, devices = ids.len(), "context created");
        let devices = devices.to_vec();
        registry
            .acquire(handle, ClassTag::Context, move || {
                Ok(Variant::Context(DevContainer::with_devices(devices)))
            })
            .map(Self)
    }

    /// Wraps a context handle owned by the caller.
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Context).map(Self)
    }

    #[inline(always)]
    pub fn wrap_borrowed(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap_borrowed(handle, ClassTag::Context).map(Self)
    }
}
