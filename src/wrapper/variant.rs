use super::DevContainer;
use crate::{
    core::{ClassTag, Error, ErrorKind, Result},
    memobj::MemObject,
    queue::QueueLinks,
};

/// Kind-specific state of a wrapper.
///
/// The [`ClassTag`] of a wrapper is derived from its variant, so it can't
/// change once the wrapper is built.
#[derive(Debug)]
#[non_exhaustive]
pub enum Variant {
    Buffer(MemObject),
    Context(DevContainer),
    Device,
    Event,
    Image(MemObject),
    Kernel,
    Platform(DevContainer),
    Program(DevContainer),
    Sampler,
    Queue(QueueLinks),
}

impl Variant {
    #[inline]
    pub const fn class(&self) -> ClassTag {
        match self {
            Self::Buffer(_) => ClassTag::Buffer,
            Self::Context(_) => ClassTag::Context,
            Self::Device => ClassTag::Device,
            Self::Event => ClassTag::Event,
            Self::Image(_) => ClassTag::Image,
            Self::Kernel => ClassTag::Kernel,
            Self::Platform(_) => ClassTag::Platform,
            Self::Program(_) => ClassTag::Program,
            Self::Sampler => ClassTag::Sampler,
            Self::Queue(_) => ClassTag::Queue,
        }
    }

    /// Default state for a freshly wrapped handle of a class without extra
    /// construction parameters. Memory objects need their size, so they
    /// aren't covered.
    pub fn empty(class: ClassTag) -> Result<Self> {
        return Ok(match class {
            ClassTag::Context => Self::Context(DevContainer::new()),
            ClassTag::Device => Self::Device,
            ClassTag::Event => Self::Event,
            ClassTag::Kernel => Self::Kernel,
            ClassTag::Platform => Self::Platform(DevContainer::new()),
            ClassTag::Program => Self::Program(DevContainer::new()),
            ClassTag::Sampler => Self::Sampler,
            ClassTag::Queue => Self::Queue(QueueLinks::default()),
            other => {
                return Err(Error::new(
                    ErrorKind::Args,
                    format!("a {other} wrapper can't be built without construction parameters"),
                ))
            }
        });
    }

    #[inline]
    pub fn as_dev_container(&self) -> Option<&DevContainer> {
        match self {
            Self::Context(x) | Self::Platform(x) | Self::Program(x) => Some(x),
            _ => None,
        }
    }

    #[inline]
    pub fn as_mem_object(&self) -> Option<&MemObject> {
        match self {
            Self::Buffer(x) | Self::Image(x) => Some(x),
            _ => None,
        }
    }

    #[inline]
    pub fn as_queue_links(&self) -> Option<&QueueLinks> {
        match self {
            Self::Queue(x) => Some(x),
            _ => None,
        }
    }
}
