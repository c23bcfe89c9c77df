use crate::{
    core::{ApiVersion, ClassTag, RawHandle},
    image::{ImageDesc, ImageFormat, SamplerProperties},
    memobj::MemFlags,
    queue::QueueProperties,
};
use std::{ffi::c_void, ptr::NonNull};

#[cfg(feature = "opencl")]
flat_mod!(opencl);

/// Result of a native call. The error is the raw, non-success status code.
pub type NativeResult<T> = ::core::result::Result<T, i32>;

/// Native info query function answering a request.
///
/// Most objects have a single info function, but some have auxiliary ones that
/// take an extra parameter (a device, or a kernel argument index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoTarget {
    Platform,
    Device,
    Context,
    Queue,
    MemObject,
    Image,
    Sampler,
    Program,
    /// Build information of a program for the given device.
    ProgramBuild(RawHandle),
    Kernel,
    /// Work-group information of a kernel for the given device.
    KernelWorkGroup(RawHandle),
    /// Information about the kernel argument with the given index.
    KernelArg(u32),
    Event,
    EventProfiling,
}

impl InfoTarget {
    /// Main info target for wrappers of the given class.
    #[inline]
    pub const fn primary(class: ClassTag) -> Option<Self> {
        return Some(match class {
            ClassTag::Buffer => Self::MemObject,
            ClassTag::Context => Self::Context,
            ClassTag::Device => Self::Device,
            ClassTag::Event => Self::Event,
            ClassTag::Image => Self::Image,
            ClassTag::Kernel => Self::Kernel,
            ClassTag::Platform => Self::Platform,
            ClassTag::Program => Self::Program,
            ClassTag::Sampler => Self::Sampler,
            ClassTag::Queue => Self::Queue,
            ClassTag::None => return None,
        });
    }

    /// First native API version in which the info function exists.
    #[inline]
    pub const fn since(self) -> ApiVersion {
        match self {
            Self::KernelArg(_) => ApiVersion::CL1_2,
            _ => ApiVersion::CL1,
        }
    }

    /// Whether this target may be queried on a wrapper of the given class.
    #[inline]
    pub const fn applies_to(self, class: ClassTag) -> bool {
        match (self, class) {
            (Self::Platform, ClassTag::Platform)
            | (Self::Device, ClassTag::Device)
            | (Self::Context, ClassTag::Context)
            | (Self::Queue, ClassTag::Queue)
            | (Self::MemObject, ClassTag::Buffer | ClassTag::Image)
            | (Self::Image, ClassTag::Image)
            | (Self::Sampler, ClassTag::Sampler)
            | (Self::Program | Self::ProgramBuild(_), ClassTag::Program)
            | (Self::Kernel | Self::KernelWorkGroup(_) | Self::KernelArg(_), ClassTag::Kernel)
            | (Self::Event | Self::EventProfiling, ClassTag::Event) => true,
            _ => false,
        }
    }
}

/// The native compute API, as seen by the wrappers.
///
/// Implementations only translate calls: every failure is returned as the raw
/// native status, and the wrappers decide which error domain it belongs to.
pub trait NativeApi: Send + Sync {
    /// Version of the native API this backend exposes.
    fn version(&self) -> ApiVersion;

    /// Queries a piece of information about `handle`, returning its raw bytes.
    fn get_info(&self, handle: RawHandle, target: InfoTarget, code: u32) -> NativeResult<Vec<u8>>;

    /// Increments the native reference count of `handle`.
    fn retain(&self, class: ClassTag, handle: RawHandle) -> NativeResult<()>;

    /// Decrements the native reference count of `handle`.
    fn release(&self, class: ClassTag, handle: RawHandle) -> NativeResult<()>;

    /// Lists the available platforms.
    fn platform_ids(&self) -> NativeResult<Vec<RawHandle>>;

    /// Lists the devices contained in a platform, context or program.
    fn device_ids(&self, class: ClassTag, handle: RawHandle) -> NativeResult<Vec<RawHandle>>;

    fn create_context(&self, devices: &[RawHandle]) -> NativeResult<RawHandle>;

    fn create_queue(
        &self,
        context: RawHandle,
        device: RawHandle,
        props: QueueProperties,
    ) -> NativeResult<RawHandle>;

    fn create_buffer(
        &self,
        context: RawHandle,
        flags: MemFlags,
        size: usize,
        host_ptr: Option<NonNull<c_void>>,
    ) -> NativeResult<RawHandle>;

    fn create_image(
        &self,
        context: RawHandle,
        flags: MemFlags,
        format: &ImageFormat,
        desc: &ImageDesc,
        host_ptr: Option<NonNull<c_void>>,
    ) -> NativeResult<RawHandle>;

    fn create_sampler(
        &self,
        context: RawHandle,
        props: &SamplerProperties,
    ) -> NativeResult<RawHandle>;
}
