use crate::core::{Error, ErrorKind, Result};
use std::io::Write;

/// Version of this crate, in `x.y.z` format.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
pub const VERSION_MAJOR: u32 = parse_u32(env!("CARGO_PKG_VERSION_MAJOR"));
pub const VERSION_MINOR: u32 = parse_u32(env!("CARGO_PKG_VERSION_MINOR"));
pub const VERSION_PATCH: u32 = parse_u32(env!("CARGO_PKG_VERSION_PATCH"));
/// Pre-release part of the version, empty for releases.
pub const VERSION_TWEAK: &str = env!("CARGO_PKG_VERSION_PRE");
/// Version with the commit it was built from (when known), target and profile.
pub const VERSION_STRING_FULL: &str = env!("BLAZE_WRAP_VERSION_FULL");
/// [`VERSION_STRING`] for releases, [`VERSION_STRING_FULL`] for pre-releases.
pub const VERSION_STRING_FINAL: &str = match VERSION_TWEAK.is_empty() {
    true => VERSION_STRING,
    false => VERSION_STRING_FULL,
};
/// Compiler this crate was built with, as reported by `rustc --version`.
pub const COMPILER: &str = env!("BLAZE_WRAP_COMPILER");

cfg_if::cfg_if! {
    if #[cfg(feature = "cl3")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "3.0";
    } else if #[cfg(feature = "cl2_2")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "2.2";
    } else if #[cfg(feature = "cl2_1")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "2.1";
    } else if #[cfg(feature = "cl2")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "2.0";
    } else if #[cfg(feature = "cl1_2")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "1.2";
    } else if #[cfg(feature = "cl1_1")] {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "1.1";
    } else {
        /// Highest OpenCL version this crate was compiled against.
        pub const OPENCL_VERSION: &str = "1.0";
    }
}

const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut result = 0;
    let mut i = 0;

    while i < bytes.len() {
        result = result * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }

    result
}

/// Writes a one-line version banner for `exec_name` to `out`.
///
/// ```rust
/// let mut out = Vec::new();
/// blaze_wrap::write_version(&mut out, "clinfo").unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("clinfo "));
/// ```
pub fn write_version<W: Write + ?Sized>(out: &mut W, exec_name: &str) -> Result<()> {
    writeln!(
        out,
        "{exec_name} {VERSION_STRING} - compiled with OpenCL {OPENCL_VERSION}"
    )
    .and_then(|_| out.flush())
    .map_err(|e| Error::new(ErrorKind::StreamWrite, e))
}
