use crate::{
    context::Context,
    core::{consts::*, *},
    device::Device,
    native::InfoTarget,
    wrapper::Registry,
};
use std::sync::Arc;

wrapper_type! {
    /// OpenCL program
    pub struct Program => Program;
}

impl Program {
    /// Wraps a program handle owned by the caller. Its devices are listed on first use.
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Program).map(Self)
    }

    #[inline(always)]
    pub fn wrap_borrowed(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap_borrowed(handle, ClassTag::Program).map(Self)
    }

    /// Program source, as given when the program was created.
    #[inline(always)]
    pub fn source(&self) -> Result<String> {
        self.info_string(CL_PROGRAM_SOURCE)
    }

    /// Context the program belongs to.
    pub fn context(&self) -> Result<Context> {
        let handle = self.info_handle(CL_PROGRAM_CONTEXT)?.ok_or_else(|| {
            Error::new(
                ErrorKind::InfoUnavailable,
                format!("program {} reported no context", self.handle()),
            )
        })?;

        Context::wrap_borrowed(&self.registry(), handle)
    }

    /// Raw build information of the program for `device`.
    #[inline(always)]
    pub fn build_info(&self, device: &Device, code: u32) -> Result<Arc<[u8]>> {
        self.get_info_with(InfoTarget::ProgramBuild(device.handle()), code)
    }

    /// Build status for `device`, as a raw `cl_build_status`.
    #[inline(always)]
    pub fn build_status(&self, device: &Device) -> Result<i32> {
        self.info_scalar_with(InfoTarget::ProgramBuild(device.handle()), CL_PROGRAM_BUILD_STATUS)
    }

    #[inline(always)]
    pub fn build_options(&self, device: &Device) -> Result<String> {
        self.info_string_with(InfoTarget::ProgramBuild(device.handle()), CL_PROGRAM_BUILD_OPTIONS)
    }

    /// Build log for `device`.
    #[inline(always)]
    pub fn build_log(&self, device: &Device) -> Result<String> {
        self.info_string_with(InfoTarget::ProgramBuild(device.handle()), CL_PROGRAM_BUILD_LOG)
    }
}
