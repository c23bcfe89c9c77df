use super::MemFlags;
use crate::{
    core::{consts::*, *},
    native::{InfoTarget, NativeApi},
    wrapper::decode_scalar,
};
use std::{ffi::c_void, ptr::NonNull};

/// Non-owning reference to the host memory a memory object was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct HostPtr(NonNull<c_void>);

impl HostPtr {
    #[inline(always)]
    pub const fn new(ptr: NonNull<c_void>) -> Self {
        Self(ptr)
    }

    #[inline(always)]
    pub fn from_raw(ptr: *mut c_void) -> Option<Self> {
        NonNull::new(ptr).map(Self)
    }

    #[inline(always)]
    pub const fn as_non_null(self) -> NonNull<c_void> {
        self.0
    }

    #[inline(always)]
    pub const fn as_ptr(self) -> *mut c_void {
        self.0.as_ptr()
    }
}

// The pointer is only carried around, never dereferenced by the wrappers.
unsafe impl Send for HostPtr {}
unsafe impl Sync for HostPtr {}

/// Bookkeeping shared by buffers and images.
///
/// Both fields are fixed when the wrapper is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemObject {
    size: usize,
    host_ptr: Option<HostPtr>,
}

impl MemObject {
    #[inline(always)]
    pub const fn new(size: usize, host_ptr: Option<HostPtr>) -> Self {
        Self { size, host_ptr }
    }

    /// Size of the underlying allocation, in bytes.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub const fn host_ptr(&self) -> Option<HostPtr> {
        self.host_ptr
    }
}

/// Checks that a host pointer is given exactly when the flags ask for one.
pub(crate) fn check_host_ptr(flags: MemFlags, host_ptr: Option<NonNull<c_void>>) -> Result<()> {
    match (flags.needs_host_ptr(), host_ptr.is_some()) {
        (true, false) => Err(Error::new(
            ErrorKind::Args,
            "USE_HOST_PTR and COPY_HOST_PTR need a host pointer",
        )),
        (false, true) => Err(Error::new(
            ErrorKind::Args,
            "a host pointer needs USE_HOST_PTR or COPY_HOST_PTR",
        )),
        _ => Ok(()),
    }
}

/// Bookkeeping of a memory object created from parameters. Only memory used
/// in place is remembered; copied host memory isn't referenced afterwards.
#[inline]
pub(crate) fn created_mem_object(
    flags: MemFlags,
    size: usize,
    host_ptr: Option<NonNull<c_void>>,
) -> MemObject {
    let host_ptr = match flags.contains(MemFlags::USE_HOST_PTR) {
        true => host_ptr.map(HostPtr::new),
        false => None,
    };

    MemObject::new(size, host_ptr)
}

/// Bookkeeping of an existing memory object, read through the native API.
pub(crate) fn query_mem_object(native: &dyn NativeApi, handle: RawHandle) -> Result<MemObject> {
    let query = |code: u32| -> Result<usize> {
        let bytes = native
            .get_info(handle, InfoTarget::MemObject, code)
            .map_err(|status| {
                Error::from_native(status, format!("unable to query memory object {handle}"))
            })?;
        decode_scalar(&bytes)
    };

    let size = query(CL_MEM_SIZE)?;
    let host_ptr = HostPtr::from_raw(query(CL_MEM_HOST_PTR)? as *mut c_void);
    Ok(MemObject::new(size, host_ptr))
}
