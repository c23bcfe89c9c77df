use crate::{
    core::{consts::*, *},
    device::Device,
    native::InfoTarget,
    program::Program,
    wrapper::Registry,
};
use std::sync::Arc;

wrapper_type! {
    /// OpenCL kernel
    pub struct Kernel => Kernel;
}

impl Kernel {
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Kernel).map(Self)
    }

    /// Return the kernel function name.
    #[inline(always)]
    pub fn function_name(&self) -> Result<String> {
        self.info_string(CL_KERNEL_FUNCTION_NAME)
    }

    /// Return the number of arguments to kernel.
    #[inline(always)]
    pub fn num_args(&self) -> Result<u32> {
        self.info_scalar(CL_KERNEL_NUM_ARGS)
    }

    /// Return the program object associated with kernel.
    pub fn program(&self) -> Result<Program> {
        let handle = self.info_handle(CL_KERNEL_PROGRAM)?.ok_or_else(|| {
            Error::new(
                ErrorKind::InfoUnavailable,
                format!("kernel {} reported no program", self.handle()),
            )
        })?;

        Program::wrap_borrowed(&self.registry(), handle)
    }

    /// Raw work-group information of the kernel for `device`.
    #[inline(always)]
    pub fn work_group_info(&self, device: &Device, code: u32) -> Result<Arc<[u8]>> {
        self.get_info_with(InfoTarget::KernelWorkGroup(device.handle()), code)
    }

    /// Maximum work-group size that can be used to execute the kernel on `device`.
    #[inline(always)]
    pub fn work_group_size(&self, device: &Device) -> Result<usize> {
        self.info_scalar_with(InfoTarget::KernelWorkGroup(device.handle()), CL_KERNEL_WORK_GROUP_SIZE)
    }

    /// Amount of local memory used by the kernel on `device`, in bytes.
    #[inline(always)]
    pub fn local_mem_size(&self, device: &Device) -> Result<u64> {
        self.info_scalar_with(InfoTarget::KernelWorkGroup(device.handle()), CL_KERNEL_LOCAL_MEM_SIZE)
    }

    /// Raw information about argument `index`. Requires OpenCL 1.2.
    #[inline(always)]
    pub fn arg_info(&self, index: u32, code: u32) -> Result<Arc<[u8]>> {
        self.get_info_with(InfoTarget::KernelArg(index), code)
    }

    /// Name of argument `index`. Requires OpenCL 1.2.
    #[inline(always)]
    pub fn arg_name(&self, index: u32) -> Result<String> {
        self.info_string_with(InfoTarget::KernelArg(index), CL_KERNEL_ARG_NAME)
    }

    /// Type name of argument `index`. Requires OpenCL 1.2.
    #[inline(always)]
    pub fn arg_type_name(&self, index: u32) -> Result<String> {
        self.info_string_with(InfoTarget::KernelArg(index), CL_KERNEL_ARG_TYPE_NAME)
    }
}
