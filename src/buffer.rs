use crate::{
    context::Context,
    core::{consts::*, *},
    memobj::{check_host_ptr, created_mem_object, query_mem_object, HostPtr, MemFlags, MemObjectType},
    wrapper::{Registry, Variant},
};
use std::{ffi::c_void, ptr::NonNull};
use tracing::debug;

wrapper_type! {
    /// OpenCL buffer
    pub struct Buffer => Buffer;
}

impl Buffer {
    /// Allocates a buffer of `size` bytes in `context`.
    ///
    /// `host_ptr` must be given exactly when `flags` contain
    /// [`USE_HOST_PTR`](MemFlags::USE_HOST_PTR) or
    /// [`COPY_HOST_PTR`](MemFlags::COPY_HOST_PTR), and point to at least
    /// `size` bytes.
    pub fn new(
        context: &Context,
        flags: MemFlags,
        size: usize,
        host_ptr: Option<NonNull<c_void>>,
    ) -> Result<Self> {
        if size == 0 {
            return Err(Error::new(ErrorKind::Args, "buffers can't be empty"));
        }
        check_host_ptr(flags, host_ptr)?;

        let registry = context.registry();
        let handle = registry
            .native()
            .create_buffer(context.handle(), flags, size, host_ptr)
            .map_err(|status| {
                Error::from_native(status, format!("unable to allocate a {size}-byte buffer"))
            })?;

        debug!(%handle, size, ?flags, "buffer created");
        registry
            .acquire(handle, ClassTag::Buffer, || {
                Ok(Variant::Buffer(created_mem_object(flags, size, host_ptr)))
            })
            .map(Self)
    }

    /// Wraps a buffer handle owned by the caller. Its size and host pointer
    /// are read through the native API.
    #[inline]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        let native = registry.native();
        registry
            .acquire(handle, ClassTag::Buffer, || {
                query_mem_object(native, handle).map(Variant::Buffer)
            })
            .map(Self)
    }

    /// Size of the buffer, in bytes.
    #[inline]
    pub fn get_size(&self) -> Result<usize> {
        self.mem_object().map(|x| x.size())
    }

    /// Host memory the buffer was created on, if any.
    #[inline]
    pub fn get_host_ptr(&self) -> Result<Option<HostPtr>> {
        self.mem_object().map(|x| x.host_ptr())
    }

    #[inline]
    pub fn flags(&self) -> Result<MemFlags> {
        self.info_scalar::<u64>(CL_MEM_FLAGS)
            .map(MemFlags::from_bits_truncate)
    }

    #[inline]
    pub fn mem_type(&self) -> Result<MemObjectType> {
        let ty = self.info_scalar::<u32>(CL_MEM_TYPE)?;
        MemObjectType::try_from(ty).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }
}
