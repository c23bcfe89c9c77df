use crate::core::{consts::*, *};
use num_enum::{IntoPrimitive, TryFromPrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ImageFormat {
    pub order: ChannelOrder,
    pub ty: ChannelType,
}

impl ImageFormat {
    #[inline(always)]
    pub const fn new(order: ChannelOrder, ty: ChannelType) -> Self {
        Self { order, ty }
    }

    /// Decodes a `cl_image_format` pair.
    #[inline]
    pub fn from_raw(order: u32, ty: u32) -> Result<Self> {
        let order = ChannelOrder::try_from(order)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        let ty = ChannelType::try_from(ty).map_err(|e| Error::new(ErrorKind::InvalidData, e))?;
        Ok(Self { order, ty })
    }

    #[inline(always)]
    pub fn into_raw(self) -> [u32; 2] {
        [self.order.into(), self.ty.into()]
    }

    /// Size of a single image element, in bytes.
    ///
    /// Packed channel types hold every channel in one value, whatever the channel order.
    #[inline]
    pub const fn element_size(&self) -> usize {
        match self.ty.is_packed() {
            true => self.ty.size(),
            false => self.ty.size() * self.order.channel_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum ChannelOrder {
    /// Single channel image formats where the single channel represents a red component.
    Red = CL_R,
    /// Single channel image formats where the single channel represents a alpha component.
    Alpha = CL_A,
    /// A single channel image format where the single channel represents a luminance value.
    /// The luminance value is replicated into the red, green, and blue components.
    Luminance = CL_LUMINANCE,
    /// A single channel image format where the single channel represents an intensity value.
    /// The intensity value is replicated into the red, green, blue, and alpha components.
    Intensity = CL_INTENSITY,
    /// Two channel image formats.
    /// The first channel represents a red component, and the second channel represents a green component.
    RedGreen = CL_RG,
    /// Two channel image formats.
    /// The first channel represents a red component, and the second channel represents a alpha component.
    RedAlpha = CL_RA,
    /// A three channel image format, where the three channels represent red, green, and blue components.
    RGB = CL_RGB,
    /// Four channel image format, where the four channels represent red, green, blue, and alpha components.
    RGBA = CL_RGBA,
    /// Four channel image format, where the four channels represent red, green, blue, and alpha components.
    ARGB = CL_ARGB,
    /// Four channel image format, where the four channels represent red, green, blue, and alpha components.
    BGRA = CL_BGRA,
}

impl ChannelOrder {
    #[inline]
    pub const fn channel_count(&self) -> usize {
        use ChannelOrder::*;

        match self {
            Red | Alpha | Luminance | Intensity => 1,
            RedGreen | RedAlpha => 2,
            RGB => 3,
            RGBA | ARGB | BGRA => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
#[allow(non_camel_case_types)]
pub enum ChannelType {
    /// Each channel component is a normalized signed 8-bit integer value.
    NormI8 = CL_SNORM_INT8,
    /// Each channel component is a normalized unsigned 8-bit integer value.
    NormU8 = CL_UNORM_INT8,
    /// Each channel component is a normalized signed 16-bit integer value.
    NormI16 = CL_SNORM_INT16,
    /// Each channel component is a normalized unsigned 16-bit integer value.
    NormU16 = CL_UNORM_INT16,
    /// Each channel component is an unnormalized signed 8-bit integer value.
    I8 = CL_SIGNED_INT8,
    /// Each channel component is an unnormalized unsigned 8-bit integer value.
    U8 = CL_UNSIGNED_INT8,
    /// Each channel component is an unnormalized signed 16-bit integer value.
    I16 = CL_SIGNED_INT16,
    /// Each channel component is an unnormalized unsigned 16-bit integer value.
    U16 = CL_UNSIGNED_INT16,
    /// Each channel component is an unnormalized signed 32-bit integer value.
    I32 = CL_SIGNED_INT32,
    /// Each channel component is an unnormalized unsigned 32-bit integer value.
    U32 = CL_UNSIGNED_INT32,
    /// Each channel component is a 16-bit half-float value.
    F16 = CL_HALF_FLOAT,
    /// Each channel component is a single precision floating-point value
    F32 = CL_FLOAT,
    /// Represents a normalized 5-6-5 3-channel RGB image.
    U16_565 = CL_UNORM_SHORT_565,
    /// Represents a normalized x-5-5-5 4-channel xRGB image.
    U16_555 = CL_UNORM_SHORT_555,
    /// Represents a normalized x-10-10-10 4-channel xRGB image.
    U32_10_10_10 = CL_UNORM_INT_101010,
}

impl ChannelType {
    #[inline(always)]
    pub const fn is_packed(&self) -> bool {
        matches!(self, Self::U16_565 | Self::U16_555 | Self::U32_10_10_10)
    }

    #[inline(always)]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::F16 | Self::F32)
    }

    /// Size of one channel component, or of the whole element for packed types.
    #[inline(always)]
    pub const fn size(&self) -> usize {
        use ChannelType::*;

        match self {
            U8 | I8 | NormI8 | NormU8 => std::mem::size_of::<u8>(),
            U16 | I16 | NormI16 | NormU16 | F16 | U16_565 | U16_555 => std::mem::size_of::<u16>(),
            U32 | I32 | U32_10_10_10 => std::mem::size_of::<u32>(),
            F32 => std::mem::size_of::<f32>(),
        }
    }
}

/// Image dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum ImageType {
    Image1D = CL_MEM_OBJECT_IMAGE1D,
    Image1DBuffer = CL_MEM_OBJECT_IMAGE1D_BUFFER,
    Image1DArray = CL_MEM_OBJECT_IMAGE1D_ARRAY,
    Image2D = CL_MEM_OBJECT_IMAGE2D,
    Image2DArray = CL_MEM_OBJECT_IMAGE2D_ARRAY,
    Image3D = CL_MEM_OBJECT_IMAGE3D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct ImageDesc {
    /// Describes the image type.
    pub ty: ImageType,
    /// The width of the image in pixels.
    pub width: usize,
    /// The height of the image in pixels. Only used by 2D and 3D images and 2D image arrays.
    pub height: usize,
    /// The depth of the image in pixels. Only used by 3D images.
    pub depth: usize,
    /// The number of images in the image array. Only used by image arrays.
    pub array_size: usize,
    /// The scan-line pitch in bytes. Must be 0 if there's no host pointer.
    pub row_pitch: usize,
    /// The size in bytes of each 2D slice in a 3D image, or of each image in an array.
    /// Must be 0 if there's no host pointer.
    pub slice_pitch: usize,
}

impl ImageDesc {
    #[inline(always)]
    pub const fn new(ty: ImageType, width: usize, height: usize) -> Self {
        Self {
            ty,
            width,
            height,
            depth: 0,
            array_size: 0,
            row_pitch: 0,
            slice_pitch: 0,
        }
    }

    #[inline(always)]
    pub const fn with_depth(self, depth: usize) -> Self {
        Self { depth, ..self }
    }

    #[inline(always)]
    pub const fn with_array_size(self, array_size: usize) -> Self {
        Self { array_size, ..self }
    }

    #[inline(always)]
    pub const fn with_pitch(self, row_pitch: usize, slice_pitch: usize) -> Self {
        Self {
            row_pitch,
            slice_pitch,
            ..self
        }
    }

    /// Number of elements in the image, counting only the dimensions its type uses.
    pub fn element_count(&self) -> Result<usize> {
        let dims: &[(&str, usize)] = match self.ty {
            ImageType::Image1D | ImageType::Image1DBuffer => &[("width", self.width)],
            ImageType::Image1DArray => &[("width", self.width), ("array size", self.array_size)],
            ImageType::Image2D => &[("width", self.width), ("height", self.height)],
            ImageType::Image2DArray => &[
                ("width", self.width),
                ("height", self.height),
                ("array size", self.array_size),
            ],
            ImageType::Image3D => &[
                ("width", self.width),
                ("height", self.height),
                ("depth", self.depth),
            ],
        };

        let mut count = 1usize;
        for (name, value) in dims {
            if *value == 0 {
                return Err(Error::new(
                    ErrorKind::Args,
                    format!("{:?} {name} can't be zero", self.ty),
                ));
            }

            count = count.checked_mul(*value).ok_or_else(|| {
                Error::new(ErrorKind::Args, format!("{:?} dimensions overflow", self.ty))
            })?;
        }

        Ok(count)
    }
}
