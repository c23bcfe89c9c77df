use crate::{
    context::Context,
    core::{consts::*, *},
    wrapper::Registry,
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

wrapper_type! {
    /// OpenCL sampler
    pub struct Sampler => Sampler;
}

impl Sampler {
    pub fn new(context: &Context, props: SamplerProperties) -> Result<Self> {
        let registry = context.registry();
        let handle = registry
            .native()
            .create_sampler(context.handle(), &props)
            .map_err(|status| Error::from_native(status, "unable to create sampler"))?;

        tracing::debug!(%handle, ?props, "sampler created");
        Self::wrap(&registry, handle)
    }

    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Sampler).map(Self)
    }

    /// Return the normalized coords value associated with sampler.
    #[inline]
    pub fn normalized_coords(&self) -> Result<bool> {
        let v = self.info_scalar::<u32>(CL_SAMPLER_NORMALIZED_COORDS)?;
        Ok(v != 0)
    }

    #[inline]
    pub fn addressing_mode(&self) -> Result<AddressingMode> {
        let v = self.info_scalar::<u32>(CL_SAMPLER_ADDRESSING_MODE)?;
        AddressingMode::try_from(v).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    #[inline]
    pub fn filter_mode(&self) -> Result<FilterMode> {
        let v = self.info_scalar::<u32>(CL_SAMPLER_FILTER_MODE)?;
        FilterMode::try_from(v).map_err(|e| Error::new(ErrorKind::InvalidData, e))
    }

    #[inline]
    pub fn properties(&self) -> Result<SamplerProperties> {
        let normalized_coords = self.normalized_coords()?;
        let addressing_mode = self.addressing_mode()?;
        let filter_mode = self.filter_mode()?;
        Ok(SamplerProperties::new(normalized_coords, addressing_mode, filter_mode))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct SamplerProperties {
    /// Whether the image coordinates specified are normalized.
    pub normalized_coords: bool,
    /// Specifies how out-of-range image coordinates are handled when reading from an image.
    pub addressing_mode: AddressingMode,
    /// Specifies the type of filter that is applied when reading an image.
    pub filter_mode: FilterMode,
}

impl SamplerProperties {
    #[inline(always)]
    pub const fn new(normalized_coords: bool, addressing_mode: AddressingMode, filter_mode: FilterMode) -> Self {
        Self {
            normalized_coords,
            addressing_mode,
            filter_mode,
        }
    }
}

impl Default for SamplerProperties {
    #[inline(always)]
    fn default() -> Self {
        Self {
            normalized_coords: true,
            addressing_mode: Default::default(),
            filter_mode: Default::default(),
        }
    }
}

/// Specifies how out-of-range image coordinates are handled when reading from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[non_exhaustive]
#[repr(u32)]
pub enum AddressingMode {
    /// Behavior is undefined for out-of-range image coordinates.
    None = CL_ADDRESS_NONE,
    /// Out-of-range image coordinates are clamped to the edge of the image.
    ClampToEdge = CL_ADDRESS_CLAMP_TO_EDGE,
    /// Out-of-range image coordinates are assigned a border color value.
    Clamp = CL_ADDRESS_CLAMP,
    /// Out-of-range image coordinates read from the image as-if the image data were replicated in all dimensions.
    Repeat = CL_ADDRESS_REPEAT,
    /// Like [`Repeat`](AddressingMode::Repeat), mirroring the image contents at the edge of each replication.
    MirroredRepeat = CL_ADDRESS_MIRRORED_REPEAT,
}

impl Default for AddressingMode {
    #[inline(always)]
    fn default() -> Self {
        Self::Clamp
    }
}

/// Specifies the type of filter that is applied when reading an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[non_exhaustive]
#[repr(u32)]
pub enum FilterMode {
    /// Returns the image element nearest to the image coordinate.
    Nearest = CL_FILTER_NEAREST,
    /// Returns a weighted average of the four image elements nearest to the image coordinate.
    Linear = CL_FILTER_LINEAR,
}

impl Default for FilterMode {
    #[inline(always)]
    fn default() -> Self {
        Self::Nearest
    }
}
