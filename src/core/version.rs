use super::{Error, ErrorKind};
use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

const PATCH_BITS: u32 = 12;
const MINOR_BITS: u32 = 10;
const MAJOR_MASK: u32 = (1 << 10) - 1;
const MINOR_MASK: u32 = (1 << MINOR_BITS) - 1;
const PATCH_MASK: u32 = (1 << PATCH_BITS) - 1;

/// Native API version, packed the same way as OpenCL's `cl_version`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ApiVersion(u32);

impl ApiVersion {
    pub const CL1: Self = Self::from_inner_parts(1, 0, 0);
    pub const CL1_1: Self = Self::from_inner_parts(1, 1, 0);
    pub const CL1_2: Self = Self::from_inner_parts(1, 2, 0);
    pub const CL2: Self = Self::from_inner_parts(2, 0, 0);
    pub const CL2_1: Self = Self::from_inner_parts(2, 1, 0);
    pub const CL2_2: Self = Self::from_inner_parts(2, 2, 0);
    pub const CL3: Self = Self::from_inner_parts(3, 0, 0);

    const MAJOR: u32 = MINOR_BITS + PATCH_BITS;

    #[inline(always)]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn from_inner_parts(major: u32, minor: u32, patch: u32) -> Self {
        Self(
            ((major & MAJOR_MASK) << Self::MAJOR)
                | ((minor & MINOR_MASK) << PATCH_BITS)
                | (patch & PATCH_MASK),
        )
    }

    #[inline(always)]
    pub const fn major(&self) -> u32 {
        self.0 >> Self::MAJOR
    }

    #[inline(always)]
    pub const fn minor(&self) -> u32 {
        (self.0 >> PATCH_BITS) & MINOR_MASK
    }

    #[inline(always)]
    pub const fn patch(&self) -> u32 {
        self.0 & PATCH_MASK
    }

    /// Parses the version reported by platforms and devices, which has the
    /// shape `OpenCL <major>.<minor> <vendor-specific information>`.
    pub fn from_version_string(s: &str) -> Result<Self, Error> {
        let mut parts = s.split_whitespace();
        if parts.next() != Some("OpenCL") {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("malformed version string '{s}'"),
            ));
        }

        let section = parts.next().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!("version string '{s}' has no version number"),
            )
        })?;

        Self::from_str(section)
    }
}

impl FromStr for ApiVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid =
            || Error::new(ErrorKind::InvalidData, format!("malformed version number '{s}'"));

        let mut parts = s.split('.');
        let major = parts
            .next()
            .and_then(|x| x.parse::<u32>().ok())
            .ok_or_else(invalid)?;
        let minor = parts
            .next()
            .and_then(|x| x.parse::<u32>().ok())
            .ok_or_else(invalid)?;

        let patch = match parts.next() {
            Some(x) => x.parse::<u32>().map_err(|_| invalid())?,
            None => 0,
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::from_inner_parts(major, minor, patch))
    }
}

impl Debug for ApiVersion {
    #[inline(always)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for ApiVersion {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.patch() {
            0 => write!(f, "{}.{}", self.major(), self.minor()),
            patch => write!(f, "{}.{}.{patch}", self.major(), self.minor()),
        }
    }
}
