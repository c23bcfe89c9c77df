use crate::{
    core::{consts::*, *},
    platform::Platform,
    wrapper::Registry,
};

wrapper_type! {
    /// OpenCL device
    pub struct Device => Device;
}

impl Device {
    /// Wraps a device handle owned by the caller.
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Device).map(Self)
    }

    /// Wraps a device handle the caller doesn't own, such as one returned by
    /// device enumeration or an info query.
    #[inline(always)]
    pub fn wrap_borrowed(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap_borrowed(handle, ClassTag::Device).map(Self)
    }

    /// Device name string.
    #[inline(always)]
    pub fn name(&self) -> Result<String> {
        self.info_string(CL_DEVICE_NAME)
    }

    /// Vendor name string.
    #[inline(always)]
    pub fn vendor(&self) -> Result<String> {
        self.info_string(CL_DEVICE_VENDOR)
    }

    /// OpenCL version string.
    #[inline(always)]
    pub fn version(&self) -> Result<String> {
        self.info_string(CL_DEVICE_VERSION)
    }

    #[inline]
    pub fn api_version(&self) -> Result<ApiVersion> {
        ApiVersion::from_version_string(&self.version()?)
    }

    /// OpenCL software driver version string.
    #[inline(always)]
    pub fn driver_version(&self) -> Result<String> {
        self.info_string(CL_DRIVER_VERSION)
    }

    #[inline(always)]
    pub fn profile(&self) -> Result<String> {
        self.info_string(CL_DEVICE_PROFILE)
    }

    #[inline]
    pub fn extensions(&self) -> Result<Vec<String>> {
        Ok(self
            .info_string(CL_DEVICE_EXTENSIONS)?
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>())
    }

    /// Raw `cl_device_type` bitfield.
    #[inline(always)]
    pub fn ty(&self) -> Result<u64> {
        self.info_scalar(CL_DEVICE_TYPE)
    }

    /// The number of parallel compute units on the OpenCL device.
    #[inline(always)]
    pub fn max_compute_units(&self) -> Result<u32> {
        self.info_scalar(CL_DEVICE_MAX_COMPUTE_UNITS)
    }

    /// Size of global device memory in bytes.
    #[inline(always)]
    pub fn global_mem_size(&self) -> Result<u64> {
        self.info_scalar(CL_DEVICE_GLOBAL_MEM_SIZE)
    }

    /// The platform associated with this device.
    pub fn platform(&self) -> Result<Platform> {
        let handle = self.info_handle(CL_DEVICE_PLATFORM)?.ok_or_else(|| {
            Error::new(
                ErrorKind::InfoUnavailable,
                format!("device {} reported no platform", self.handle()),
            )
        })?;

        Platform::wrap(&self.registry(), handle)
    }
}
