use crate::{
    context::Context,
    core::{consts::*, *},
    memobj::{check_host_ptr, created_mem_object, query_mem_object, HostPtr, MemFlags},
    wrapper::{Registry, Variant},
};
use std::{ffi::c_void, ptr::NonNull};
use tracing::debug;

flat_mod!(format, sampler);

wrapper_type! {
    /// OpenCL image
    pub struct Image => Image;
}

impl Image {
    /// Allocates an image in `context`.
    ///
    /// Requires OpenCL 1.2. The size of the image is computed from its format
    /// and the dimensions its type uses.
    pub fn new(
        context: &Context,
        flags: MemFlags,
        format: ImageFormat,
        desc: ImageDesc,
        host_ptr: Option<NonNull<c_void>>,
    ) -> Result<Self> {
        let registry = context.registry();
        let version = registry.native().version();
        if version < ApiVersion::CL1_2 {
            return Err(Error::new(
                ErrorKind::Unsupported,
                format!("image creation requires OpenCL 1.2, but the native API is {version}"),
            ));
        }

        check_host_ptr(flags, host_ptr)?;
        let size = desc
            .element_count()?
            .checked_mul(format.element_size())
            .ok_or_else(|| Error::new(ErrorKind::Args, "image size overflows"))?;

        let handle = registry
            .native()
            .create_image(context.handle(), flags, &format, &desc, host_ptr)
            .map_err(|status| {
                Error::from_native(status, format!("unable to create a {:?} image", desc.ty))
            })?;

        debug!(%handle, size, ?format, ?desc, "image created");
        registry
            .acquire(handle, ClassTag::Image, || {
                Ok(Variant::Image(created_mem_object(flags, size, host_ptr)))
            })
            .map(Self)
    }

    /// Wraps an image handle owned by the caller. Its size and host pointer
    /// are read through the native API.
    #[inline]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        let native = registry.native();
        registry
            .acquire(handle, ClassTag::Image, || {
                query_mem_object(native, handle).map(Variant::Image)
            })
            .map(Self)
    }

    /// Size of the image, in bytes.
    #[inline]
    pub fn get_size(&self) -> Result<usize> {
        self.mem_object().map(|x| x.size())
    }

    #[inline]
    pub fn get_host_ptr(&self) -> Result<Option<HostPtr>> {
        self.mem_object().map(|x| x.host_ptr())
    }

    /// Image format descriptor specified when the image was created.
    #[inline]
    pub fn format(&self) -> Result<ImageFormat> {
        let [order, ty] = self.info_scalar::<[u32; 2]>(CL_IMAGE_FORMAT)?;
        ImageFormat::from_raw(order, ty)
    }

    /// Size of each element of the image, in bytes.
    #[inline(always)]
    pub fn element_size(&self) -> Result<usize> {
        self.info_scalar(CL_IMAGE_ELEMENT_SIZE)
    }

    #[inline(always)]
    pub fn width(&self) -> Result<usize> {
        self.info_scalar(CL_IMAGE_WIDTH)
    }

    #[inline(always)]
    pub fn height(&self) -> Result<usize> {
        self.info_scalar(CL_IMAGE_HEIGHT)
    }

    #[inline(always)]
    pub fn depth(&self) -> Result<usize> {
        self.info_scalar(CL_IMAGE_DEPTH)
    }
}
