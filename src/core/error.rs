use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::{
    backtrace::Backtrace,
    fmt::{Debug, Display},
    sync::Arc,
};

pub type Result<T> = ::core::result::Result<T, Error>;

/// Subsystem an [`Error`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDomain {
    /// The failure was detected by this crate, before or independently of a native call.
    Library,
    /// The native API returned a non-success status.
    Native,
}

impl Display for ErrorDomain {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Library => f.write_str("library"),
            Self::Native => f.write_str("native"),
        }
    }
}

/// Error codes of the [`Library`](ErrorDomain::Library) domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Unable to open file.
    OpenFile = 1,
    /// Invalid function arguments.
    Args = 2,
    /// Invalid data passed to a function or returned from a function.
    InvalidData = 3,
    /// Error writing to a stream.
    StreamWrite = 4,
    /// The requested device was not found.
    DeviceNotFound = 5,
    /// The operation is not supported by the version of the native API in use.
    Unsupported = 6,
    /// Object information is unavailable.
    InfoUnavailable = 7,
    /// Any other error.
    Other = 15,
}

impl ErrorKind {
    #[inline]
    pub const fn description(self) -> &'static str {
        match self {
            Self::OpenFile => "unable to open file",
            Self::Args => "invalid function arguments",
            Self::InvalidData => "invalid data",
            Self::StreamWrite => "error writing to stream",
            Self::DeviceNotFound => "device not found",
            Self::Unsupported => "unsupported by the native API version",
            Self::InfoUnavailable => "object information is unavailable",
            Self::Other => "other error",
        }
    }
}

/// An error record, tagged with the domain it was raised in.
#[derive(Clone)]
#[non_exhaustive]
pub struct Error {
    pub domain: ErrorDomain,
    pub code: i32,
    pub desc: Option<String>,
    #[cfg(debug_assertions)]
    pub backtrace: Arc<Backtrace>,
}

impl Error {
    /// Creates a [`Library`](ErrorDomain::Library) error.
    #[inline(always)]
    pub fn new(kind: ErrorKind, desc: impl ToString) -> Self {
        Self::report(ErrorDomain::Library, kind.into(), Some(desc.to_string()))
    }

    /// Creates a [`Native`](ErrorDomain::Native) error, preserving the native status code.
    #[inline(always)]
    pub fn from_native(status: i32, desc: impl ToString) -> Self {
        Self::report(ErrorDomain::Native, status, Some(desc.to_string()))
    }

    /// Builds an error record for an arbitrary domain and code.
    #[inline]
    pub fn report(domain: ErrorDomain, code: i32, desc: Option<String>) -> Self {
        Self {
            domain,
            code,
            desc,
            #[cfg(debug_assertions)]
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    #[inline(always)]
    pub fn domain(&self) -> ErrorDomain {
        self.domain
    }

    #[inline(always)]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline(always)]
    pub fn is_native(&self) -> bool {
        self.domain == ErrorDomain::Native
    }

    /// Returns the library error kind, if this error belongs to the library domain and its code is known.
    #[inline]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self.domain {
            ErrorDomain::Library => ErrorKind::try_from(self.code).ok(),
            ErrorDomain::Native => None,
        }
    }

    /// Returns the native status, if this error belongs to the native domain and its code is known.
    #[inline]
    pub fn status(&self) -> Option<NativeStatus> {
        match self.domain {
            ErrorDomain::Native => NativeStatus::try_from(self.code).ok(),
            ErrorDomain::Library => None,
        }
    }

    /// Human-readable message: the attached description, or the default one for the code.
    pub fn message(&self) -> String {
        if let Some(ref desc) = self.desc {
            return desc.clone();
        }

        return match self.domain {
            ErrorDomain::Library => self
                .kind()
                .map_or("unknown library error", ErrorKind::description)
                .to_string(),
            ErrorDomain::Native => match self.status() {
                Some(status) => format!("{status:?}"),
                None => format!("unknown native status {}", self.code),
            },
        };
    }

    /// Replaces the attached description.
    #[inline]
    pub fn with_desc(mut self, desc: impl ToString) -> Self {
        self.desc = Some(desc.to_string());
        self
    }
}

impl From<ErrorKind> for Error {
    #[inline(always)]
    fn from(kind: ErrorKind) -> Self {
        Self::report(ErrorDomain::Library, kind.into(), None)
    }
}

impl From<i32> for Error {
    #[inline(always)]
    fn from(status: i32) -> Self {
        Self::report(ErrorDomain::Native, status, None)
    }
}

impl From<NativeStatus> for Error {
    #[inline(always)]
    fn from(status: NativeStatus) -> Self {
        Self::from(i32::from(status))
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self, f)?;

        #[cfg(debug_assertions)]
        write!(f, "\n{}", self.backtrace)?;

        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.domain {
            ErrorDomain::Library => match self.kind() {
                Some(kind) => write!(f, "[library] {kind:?} ({})", self.code)?,
                None => write!(f, "[library] {}", self.code)?,
            },
            ErrorDomain::Native => match self.status() {
                Some(status) => write!(f, "[native] {status:?} ({})", self.code)?,
                None => write!(f, "[native] {}", self.code)?,
            },
        }

        if let Some(ref desc) = self.desc {
            write!(f, ": {desc}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Status codes returned by the OpenCL API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
#[non_exhaustive]
pub enum NativeStatus {
    DeviceNotFound = -1,
    DeviceNotAvailable = -2,
    CompilerNotAvailable = -3,
    MemObjectAllocationFailure = -4,
    OutOfResources = -5,
    OutOfHostMemory = -6,
    ProfilingInfoNotAvailable = -7,
    MemCopyOverlap = -8,
    ImageFormatMismatch = -9,
    ImageFormatNotSupported = -10,
    BuildProgramFailure = -11,
    MapFailure = -12,
    MisalignedSubBufferOffset = -13,
    ExecStatusErrorForEventsInWaitList = -14,
    CompileProgramFailure = -15,
    LinkerNotAvailable = -16,
    LinkProgramFailure = -17,
    DevicePartitionFailed = -18,
    KernelArgInfoNotAvailable = -19,
    InvalidValue = -30,
    InvalidDeviceType = -31,
    InvalidPlatform = -32,
    InvalidDevice = -33,
    InvalidContext = -34,
    InvalidQueueProperties = -35,
    InvalidCommandQueue = -36,
    InvalidHostPtr = -37,
    InvalidMemObject = -38,
    InvalidImageFormatDescriptor = -39,
    InvalidImageSize = -40,
    InvalidSampler = -41,
    InvalidBinary = -42,
    InvalidBuildOptions = -43,
    InvalidProgram = -44,
    InvalidProgramExecutable = -45,
    InvalidKernelName = -46,
    InvalidKernelDefinition = -47,
    InvalidKernel = -48,
    InvalidArgIndex = -49,
    InvalidArgValue = -50,
    InvalidArgSize = -51,
    InvalidKernelArgs = -52,
    InvalidWorkDimension = -53,
    InvalidWorkGroupSize = -54,
    InvalidWorkItemSize = -55,
    InvalidGlobalOffset = -56,
    InvalidEventWaitList = -57,
    InvalidEvent = -58,
    InvalidOperation = -59,
    InvalidGlObject = -60,
    InvalidBufferSize = -61,
    InvalidMipLevel = -62,
    InvalidGlobalWorkSize = -63,
    InvalidProperty = -64,
    InvalidImageDescriptor = -65,
    InvalidCompilerOptions = -66,
    InvalidLinkerOptions = -67,
    InvalidDevicePartitionCount = -68,
    InvalidPipeSize = -69,
    InvalidDeviceQueue = -70,
    InvalidSpecId = -71,
    MaxSizeRestrictionExceeded = -72,
    NvidiaIllegalBufferAction = -9999,
}
