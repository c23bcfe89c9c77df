use super::{InfoTarget, NativeApi, NativeResult};
use crate::{
    core::*,
    image::{ImageDesc, ImageFormat, SamplerProperties},
    memobj::MemFlags,
    queue::QueueProperties,
};
use opencl_sys::*;
use std::{
    ffi::c_void,
    ptr::{addr_of_mut, NonNull},
};

/// Backend over the system's OpenCL library.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCl;

impl OpenCl {
    #[inline(always)]
    fn checked(id: *mut c_void, err: cl_int) -> NativeResult<RawHandle> {
        tri!(err);
        RawHandle::from_ptr(id).ok_or(CL_INVALID_VALUE)
    }
}

/// Runs a `clGet*Info`-shaped query twice: once for the size, once for the value.
#[inline]
fn two_step(mut f: impl FnMut(usize, *mut c_void, *mut usize) -> cl_int) -> NativeResult<Vec<u8>> {
    let mut size = 0;
    tri!(f(0, std::ptr::null_mut(), addr_of_mut!(size)));

    let mut result = vec![0u8; size];
    if size > 0 {
        tri!(f(size, result.as_mut_ptr().cast(), std::ptr::null_mut()));
    }

    Ok(result)
}

#[inline]
fn handles(bytes: &[u8]) -> Vec<RawHandle> {
    bytes
        .chunks_exact(std::mem::size_of::<usize>())
        .filter_map(|x| RawHandle::new(bytemuck::pod_read_unaligned(x)))
        .collect()
}

impl NativeApi for OpenCl {
    #[inline]
    fn version(&self) -> ApiVersion {
        cfg_if::cfg_if! {
            if #[cfg(feature = "cl3")] {
                ApiVersion::CL3
            } else if #[cfg(feature = "cl2_2")] {
                ApiVersion::CL2_2
            } else if #[cfg(feature = "cl2_1")] {
                ApiVersion::CL2_1
            } else if #[cfg(feature = "cl2")] {
                ApiVersion::CL2
            } else if #[cfg(feature = "cl1_2")] {
                ApiVersion::CL1_2
            } else if #[cfg(feature = "cl1_1")] {
                ApiVersion::CL1_1
            } else {
                ApiVersion::CL1
            }
        }
    }

    fn get_info(&self, handle: RawHandle, target: InfoTarget, code: u32) -> NativeResult<Vec<u8>> {
        let id = handle.as_ptr();

        unsafe {
            match target {
                InfoTarget::Platform => two_step(|n, v, r| clGetPlatformInfo(id.cast(), code, n, v, r)),
                InfoTarget::Device => two_step(|n, v, r| clGetDeviceInfo(id.cast(), code, n, v, r)),
                InfoTarget::Context => two_step(|n, v, r| clGetContextInfo(id.cast(), code, n, v, r)),
                InfoTarget::Queue => two_step(|n, v, r| clGetCommandQueueInfo(id.cast(), code, n, v, r)),
                InfoTarget::MemObject => two_step(|n, v, r| clGetMemObjectInfo(id.cast(), code, n, v, r)),
                InfoTarget::Image => two_step(|n, v, r| clGetImageInfo(id.cast(), code, n, v, r)),
                InfoTarget::Sampler => two_step(|n, v, r| clGetSamplerInfo(id.cast(), code, n, v, r)),
                InfoTarget::Program => two_step(|n, v, r| clGetProgramInfo(id.cast(), code, n, v, r)),
                InfoTarget::ProgramBuild(device) => two_step(|n, v, r| {
                    clGetProgramBuildInfo(id.cast(), device.as_ptr().cast(), code, n, v, r)
                }),
                InfoTarget::Kernel => two_step(|n, v, r| clGetKernelInfo(id.cast(), code, n, v, r)),
                InfoTarget::KernelWorkGroup(device) => two_step(|n, v, r| {
                    clGetKernelWorkGroupInfo(id.cast(), device.as_ptr().cast(), code, n, v, r)
                }),
                #[cfg(feature = "cl1_2")]
                InfoTarget::KernelArg(index) => two_step(|n, v, r| clGetKernelArgInfo(id.cast(), index, code, n, v, r)),
                #[cfg(not(feature = "cl1_2"))]
                InfoTarget::KernelArg(_) => Err(CL_INVALID_VALUE),
                InfoTarget::Event => two_step(|n, v, r| clGetEventInfo(id.cast(), code, n, v, r)),
                InfoTarget::EventProfiling => two_step(|n, v, r| clGetEventProfilingInfo(id.cast(), code, n, v, r)),
            }
        }
    }

    fn retain(&self, class: ClassTag, handle: RawHandle) -> NativeResult<()> {
        let id = handle.as_ptr();

        unsafe {
            match class {
                ClassTag::Buffer | ClassTag::Image => tri!(clRetainMemObject(id.cast())),
                ClassTag::Context => tri!(clRetainContext(id.cast())),
                #[cfg(feature = "cl1_2")]
                ClassTag::Device => tri!(clRetainDevice(id.cast())),
                ClassTag::Event => tri!(clRetainEvent(id.cast())),
                ClassTag::Kernel => tri!(clRetainKernel(id.cast())),
                ClassTag::Program => tri!(clRetainProgram(id.cast())),
                ClassTag::Sampler => tri!(clRetainSampler(id.cast())),
                ClassTag::Queue => tri!(clRetainCommandQueue(id.cast())),
                _ => {}
            }
        }

        Ok(())
    }

    fn release(&self, class: ClassTag, handle: RawHandle) -> NativeResult<()> {
        let id = handle.as_ptr();

        unsafe {
            match class {
                ClassTag::Buffer | ClassTag::Image => tri!(clReleaseMemObject(id.cast())),
                ClassTag::Context => tri!(clReleaseContext(id.cast())),
                #[cfg(feature = "cl1_2")]
                ClassTag::Device => tri!(clReleaseDevice(id.cast())),
                ClassTag::Event => tri!(clReleaseEvent(id.cast())),
                ClassTag::Kernel => tri!(clReleaseKernel(id.cast())),
                ClassTag::Program => tri!(clReleaseProgram(id.cast())),
                ClassTag::Sampler => tri!(clReleaseSampler(id.cast())),
                ClassTag::Queue => tri!(clReleaseCommandQueue(id.cast())),
                _ => {}
            }
        }

        Ok(())
    }

    fn platform_ids(&self) -> NativeResult<Vec<RawHandle>> {
        let mut count = 0;
        unsafe {
            tri!(clGetPlatformIDs(0, std::ptr::null_mut(), addr_of_mut!(count)));
        }

        let mut result = vec![std::ptr::null_mut(); count as usize];
        if count > 0 {
            unsafe {
                tri!(clGetPlatformIDs(count, result.as_mut_ptr(), std::ptr::null_mut()));
            }
        }

        Ok(result.into_iter().filter_map(|x| RawHandle::from_ptr(x.cast())).collect())
    }

    fn device_ids(&self, class: ClassTag, handle: RawHandle) -> NativeResult<Vec<RawHandle>> {
        match class {
            ClassTag::Platform => unsafe {
                let mut count = 0;
                match clGetDeviceIDs(handle.as_ptr().cast(), CL_DEVICE_TYPE_ALL, 0, std::ptr::null_mut(), addr_of_mut!(count)) {
                    CL_DEVICE_NOT_FOUND => return Ok(Vec::new()),
                    err => tri!(err),
                }

                let mut result = vec![std::ptr::null_mut(); count as usize];
                tri!(clGetDeviceIDs(handle.as_ptr().cast(), CL_DEVICE_TYPE_ALL, count, result.as_mut_ptr(), std::ptr::null_mut()));
                Ok(result.into_iter().filter_map(|x| RawHandle::from_ptr(x.cast())).collect())
            },

            ClassTag::Context => self
                .get_info(handle, InfoTarget::Context, CL_CONTEXT_DEVICES)
                .map(|x| handles(&x)),

            ClassTag::Program => self
                .get_info(handle, InfoTarget::Program, CL_PROGRAM_DEVICES)
                .map(|x| handles(&x)),

            _ => Err(CL_INVALID_VALUE),
        }
    }

    fn create_context(&self, devices: &[RawHandle]) -> NativeResult<RawHandle> {
        let devices = devices.iter().map(|x| x.as_ptr().cast()).collect::<Vec<cl_device_id>>();
        let num_devices = cl_uint::try_from(devices.len()).map_err(|_| CL_INVALID_VALUE)?;

        let mut err = 0;
        let id = unsafe {
            clCreateContext(std::ptr::null(), num_devices, devices.as_ptr(), None, std::ptr::null_mut(), addr_of_mut!(err))
        };

        Self::checked(id.cast(), err)
    }

    fn create_queue(&self, context: RawHandle, device: RawHandle, props: QueueProperties) -> NativeResult<RawHandle> {
        let mut err = 0;

        #[allow(deprecated)]
        let id = unsafe {
            clCreateCommandQueue(context.as_ptr().cast(), device.as_ptr().cast(), props.bits(), addr_of_mut!(err))
        };

        Self::checked(id.cast(), err)
    }

    fn create_buffer(&self, context: RawHandle, flags: MemFlags, size: usize, host_ptr: Option<NonNull<c_void>>) -> NativeResult<RawHandle> {
        let host_ptr = match host_ptr {
            Some(x) => x.as_ptr(),
            None => std::ptr::null_mut(),
        };

        let mut err = 0;
        let id = unsafe {
            clCreateBuffer(context.as_ptr().cast(), flags.bits(), size, host_ptr, addr_of_mut!(err))
        };

        Self::checked(id.cast(), err)
    }

    #[cfg(feature = "cl1_2")]
    fn create_image(&self, context: RawHandle, flags: MemFlags, format: &ImageFormat, desc: &ImageDesc, host_ptr: Option<NonNull<c_void>>) -> NativeResult<RawHandle> {
        use std::ptr::addr_of;

        let [order, ty] = format.into_raw();
        let image_format = cl_image_format {
            image_channel_order: order,
            image_channel_data_type: ty,
        };

        let image_desc = cl_image_desc {
            image_type: u32::from(desc.ty),
            image_width: desc.width,
            image_height: desc.height,
            image_depth: desc.depth,
            image_array_size: desc.array_size,
            image_row_pitch: desc.row_pitch,
            image_slice_pitch: desc.slice_pitch,
            num_mip_levels: 0,
            num_samples: 0,
            buffer: std::ptr::null_mut(),
        };

        let host_ptr = match host_ptr {
            Some(x) => x.as_ptr(),
            None => std::ptr::null_mut(),
        };

        let mut err = 0;
        let id = unsafe {
            clCreateImage(context.as_ptr().cast(), flags.bits(), addr_of!(image_format), addr_of!(image_desc), host_ptr, addr_of_mut!(err))
        };

        Self::checked(id.cast(), err)
    }

    #[cfg(not(feature = "cl1_2"))]
    #[inline(always)]
    fn create_image(&self, _context: RawHandle, _flags: MemFlags, _format: &ImageFormat, _desc: &ImageDesc, _host_ptr: Option<NonNull<c_void>>) -> NativeResult<RawHandle> {
        Err(NativeStatus::InvalidOperation as i32)
    }

    fn create_sampler(&self, context: RawHandle, props: &SamplerProperties) -> NativeResult<RawHandle> {
        let mut err = 0;

        #[allow(deprecated)]
        let id = unsafe {
            clCreateSampler(
                context.as_ptr().cast(),
                props.normalized_coords as cl_bool,
                u32::from(props.addressing_mode),
                u32::from(props.filter_mode),
                addr_of_mut!(err),
            )
        };

        Self::checked(id.cast(), err)
    }
}
