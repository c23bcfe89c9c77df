use std::{
    ffi::c_void,
    fmt::{Debug, Display},
    num::NonZeroUsize,
};

/// Opaque, non-null native handle.
///
/// This is a plain identifier: it doesn't own anything, and copying it doesn't
/// touch the native reference count.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct RawHandle(NonZeroUsize);

impl RawHandle {
    #[inline(always)]
    pub const fn new(id: usize) -> Option<Self> {
        match NonZeroUsize::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    #[inline(always)]
    pub fn from_ptr(ptr: *mut c_void) -> Option<Self> {
        Self::new(ptr as usize)
    }

    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    #[inline(always)]
    pub fn as_ptr(self) -> *mut c_void {
        self.0.get() as *mut c_void
    }
}

impl Debug for RawHandle {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawHandle({:#x})", self.0.get())
    }
}

impl Display for RawHandle {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}
