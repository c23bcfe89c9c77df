#![allow(clippy::needless_return)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Reference-counted, identity-cached wrappers over OpenCL handles.
//!
//! Every native handle (platform, device, context, queue, program, kernel,
//! memory object, event or sampler) is owned by exactly one [`WrapperRef`](wrapper::WrapperRef)-backed
//! wrapper per [`Registry`](wrapper::Registry). Wrapping the same handle twice hands back the same
//! wrapper with its reference count bumped, and the native handle is released
//! once the last reference goes away.
//!
//! Failures are reported through a single [`Error`](core::Error) type whose
//! [`ErrorDomain`](core::ErrorDomain) tells apart errors raised by this crate
//! from errors returned by the native API.
//!
//! ```rust
//! use blaze_wrap::prelude::*;
//! # use blaze_wrap::native::{NativeApi, NativeResult, InfoTarget};
//! # use std::{ffi::c_void, ptr::NonNull};
//! # struct Null;
//! # impl NativeApi for Null {
//! #     fn version(&self) -> ApiVersion { ApiVersion::CL1_2 }
//! #     fn get_info(&self, _: RawHandle, _: InfoTarget, _: u32) -> NativeResult<Vec<u8>> { Err(-30) }
//! #     fn retain(&self, _: ClassTag, _: RawHandle) -> NativeResult<()> { Ok(()) }
//! #     fn release(&self, _: ClassTag, _: RawHandle) -> NativeResult<()> { Ok(()) }
//! #     fn platform_ids(&self) -> NativeResult<Vec<RawHandle>> { Ok(Vec::new()) }
//! #     fn device_ids(&self, _: ClassTag, _: RawHandle) -> NativeResult<Vec<RawHandle>> { Ok(Vec::new()) }
//! #     fn create_context(&self, _: &[RawHandle]) -> NativeResult<RawHandle> { Err(-34) }
//! #     fn create_queue(&self, _: RawHandle, _: RawHandle, _: QueueProperties) -> NativeResult<RawHandle> { Err(-36) }
//! #     fn create_buffer(&self, _: RawHandle, _: MemFlags, _: usize, _: Option<NonNull<c_void>>) -> NativeResult<RawHandle> { Err(-38) }
//! #     fn create_image(&self, _: RawHandle, _: MemFlags, _: &ImageFormat, _: &ImageDesc, _: Option<NonNull<c_void>>) -> NativeResult<RawHandle> { Err(-38) }
//! #     fn create_sampler(&self, _: RawHandle, _: &SamplerProperties) -> NativeResult<RawHandle> { Err(-41) }
//! # }
//! # fn main() -> Result<()> {
//! let registry = Registry::new(Null);
//! let handle = RawHandle::new(0x10).unwrap();
//!
//! let first = Device::wrap(&registry, handle)?;
//! let second = Device::wrap(&registry, handle)?;
//! assert_eq!(first, second);
//! assert_eq!(registry.ref_count(&first), 2);
//!
//! first.release()?;
//! second.release()?;
//! assert!(registry.memcheck());
//! # Ok(())
//! # }
//! ```

macro_rules! flat_mod {
    ($($i:ident),+) => {
        $(
            mod $i;
            pub use $i::*;
        )+
    };
}

#[allow(unused_macros)]
macro_rules! lazy_static {
    ($($vis:vis static ref $name:ident : $ty:ty = $expr:expr;)+) => {
        $(
            $vis static $name : ::once_cell::sync::Lazy<$ty> = ::once_cell::sync::Lazy::new(|| $expr);
        )+
    };
}

/// Returns early with the raw status as the error if it isn't `CL_SUCCESS`.
#[allow(unused_macros)]
macro_rules! tri {
    ($e:expr) => {{
        let err = $e;
        if err != 0 {
            return Err(err);
        }
    }};

    ($($e:expr);+) => {{
        let mut err;
        $(
            err = $e;
            if err != 0 {
                return Err(err);
            }
        )+
    }};
}

/// Declares a typed wrapper over [`WrapperRef`](crate::wrapper::WrapperRef) for a single [`ClassTag`](crate::core::ClassTag).
macro_rules! wrapper_type {
    ($(#[$meta:meta])* $vis:vis struct $name:ident => $class:ident;) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        #[repr(transparent)]
        $vis struct $name($crate::wrapper::WrapperRef);

        impl $name {
            /// Class tag carried by every wrapper of this type.
            pub const CLASS: $crate::core::ClassTag = $crate::core::ClassTag::$class;

            #[inline(always)]
            pub fn as_wrapper(&self) -> &$crate::wrapper::WrapperRef {
                &self.0
            }

            #[inline(always)]
            pub fn into_wrapper(self) -> $crate::wrapper::WrapperRef {
                self.0
            }

            /// Gives up this reference, reporting a failed native teardown if this was the last one.
            #[inline(always)]
            pub fn release(self) -> $crate::core::Result<()> {
                self.0.release()
            }
        }

        impl ::core::ops::Deref for $name {
            type Target = $crate::wrapper::WrapperRef;

            #[inline(always)]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl TryFrom<$crate::wrapper::WrapperRef> for $name {
            type Error = $crate::core::Error;

            #[inline]
            fn try_from(wrapper: $crate::wrapper::WrapperRef) -> $crate::core::Result<Self> {
                wrapper.expect_class($crate::core::ClassTag::$class)?;
                Ok(Self(wrapper))
            }
        }

        impl From<$name> for $crate::wrapper::WrapperRef {
            #[inline(always)]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.0.handle())
                    .finish()
            }
        }
    };
}

pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::context::Context;
    pub use crate::core::*;
    pub use crate::device::Device;
    pub use crate::event::Event;
    pub use crate::image::{
        AddressingMode, ChannelOrder, ChannelType, FilterMode, Image, ImageDesc, ImageFormat,
        ImageType, Sampler, SamplerProperties,
    };
    pub use crate::kernel::Kernel;
    pub use crate::memobj::{HostPtr, MemFlags, MemObject};
    pub use crate::platform::{Platform, Platforms};
    pub use crate::program::Program;
    pub use crate::queue::{Queue, QueueProperties};
    pub use crate::wrapper::{DevContainer, Registry, Variant, WrapperRef};
}

/// Error domains, class tags, raw handles and OpenCL constants
pub mod core;
/// The native API seam
pub mod native;
/// Base wrapper, variants and the identity cache
pub mod wrapper;

/// Buffer wrappers
pub mod buffer;
/// Context wrappers
pub mod context;
/// Device wrappers
pub mod device;
/// Event wrappers
pub mod event;
/// Image and sampler wrappers
pub mod image;
/// Kernel wrappers
pub mod kernel;
/// Shared memory object bookkeeping
pub mod memobj;
/// Platform wrappers
pub mod platform;
/// Program wrappers
pub mod program;
/// Command queue wrappers
pub mod queue;

flat_mod!(version);
