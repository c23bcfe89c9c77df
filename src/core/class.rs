use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::Display;

/// Class of a wrapped native object.
///
/// Every wrapper carries exactly one tag, fixed when it's constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum ClassTag {
    Buffer = 0,
    Context = 1,
    Device = 2,
    Event = 3,
    Image = 4,
    Kernel = 5,
    Platform = 6,
    Program = 7,
    Sampler = 8,
    Queue = 9,
    /// Unclassified. No live wrapper ever carries this tag.
    None = 10,
}

impl ClassTag {
    /// Whether wrappers of this class aggregate a list of devices.
    #[inline(always)]
    pub const fn is_dev_container(self) -> bool {
        matches!(self, Self::Context | Self::Platform | Self::Program)
    }

    /// Whether wrappers of this class represent device-addressable memory.
    #[inline(always)]
    pub const fn is_mem_object(self) -> bool {
        matches!(self, Self::Buffer | Self::Image)
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Buffer => "buffer",
            Self::Context => "context",
            Self::Device => "device",
            Self::Event => "event",
            Self::Image => "image",
            Self::Kernel => "kernel",
            Self::Platform => "platform",
            Self::Program => "program",
            Self::Sampler => "sampler",
            Self::Queue => "queue",
            Self::None => "none",
        }
    }
}

impl Display for ClassTag {
    #[inline(always)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
