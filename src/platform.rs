use crate::{
    core::{consts::*, *},
    wrapper::Registry,
};
use std::{ops::Index, slice::Iter};

wrapper_type! {
    /// OpenCL platform
    pub struct Platform => Platform;
}

impl Platform {
    /// Wraps a platform handle. Platforms aren't reference counted natively,
    /// so the handle is never retained.
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Platform).map(Self)
    }

    /// OpenCL profile string.
    #[inline(always)]
    pub fn profile(&self) -> Result<String> {
        self.info_string(CL_PLATFORM_PROFILE)
    }

    /// OpenCL version string.
    #[inline(always)]
    pub fn version(&self) -> Result<String> {
        self.info_string(CL_PLATFORM_VERSION)
    }

    /// Version of the platform, parsed from its version string.
    #[inline]
    pub fn api_version(&self) -> Result<ApiVersion> {
        ApiVersion::from_version_string(&self.version()?)
    }

    /// Platform name string.
    #[inline(always)]
    pub fn name(&self) -> Result<String> {
        self.info_string(CL_PLATFORM_NAME)
    }

    /// Platform vendor string.
    #[inline(always)]
    pub fn vendor(&self) -> Result<String> {
        self.info_string(CL_PLATFORM_VENDOR)
    }

    /// Returns a list of extension names supported by the platform.
    #[inline]
    pub fn extensions(&self) -> Result<Vec<String>> {
        Ok(self
            .info_string(CL_PLATFORM_EXTENSIONS)?
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>())
    }
}

/// Every platform the native API knows about, wrapped.
#[derive(Debug, Clone)]
pub struct Platforms {
    platforms: Box<[Platform]>,
}

impl Platforms {
    /// Enumerates and wraps the available platforms.
    pub fn new(registry: &Registry) -> Result<Self> {
        let ids = registry
            .native()
            .platform_ids()
            .map_err(|status| Error::from_native(status, "unable to list the available platforms"))?;

        let platforms = ids
            .into_iter()
            .map(|id| Platform::wrap(registry, id))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            platforms: platforms.into_boxed_slice(),
        })
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.platforms.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platform at `index`, failing with [`ErrorKind::InvalidData`] if it's out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&Platform> {
        self.platforms.get(index).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!(
                    "platform index {index} out of range ({} platforms)",
                    self.platforms.len()
                ),
            )
        })
    }

    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, Platform> {
        self.platforms.iter()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }
}

impl Index<usize> for Platforms {
    type Output = Platform;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.platforms[index]
    }
}

impl<'a> IntoIterator for &'a Platforms {
    type Item = &'a Platform;
    type IntoIter = Iter<'a, Platform>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.platforms.iter()
    }
}

impl IntoIterator for Platforms {
    type Item = Platform;
    type IntoIter = std::vec::IntoIter<Platform>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.platforms.into_vec().into_iter()
    }
}
