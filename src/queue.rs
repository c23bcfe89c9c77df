use crate::{
    context::Context,
    core::{consts::*, *},
    device::Device,
    wrapper::{Registry, Variant},
};
use once_cell::sync::OnceCell;
use tracing::debug;

bitflags::bitflags! {
    /// Properties of a command queue.
    #[repr(transparent)]
    #[derive(Default)]
    pub struct QueueProperties : u64 {
        const OUT_OF_ORDER_EXEC_MODE_ENABLE = CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE;
        const PROFILING_ENABLE = CL_QUEUE_PROFILING_ENABLE;
    }
}

/// Context and device a queue belongs to, resolved at most once each.
#[derive(Debug, Default)]
pub struct QueueLinks {
    context: OnceCell<Context>,
    device: OnceCell<Device>,
}

impl QueueLinks {
    #[inline(always)]
    pub fn new(context: Context, device: Device) -> Self {
        Self {
            context: OnceCell::with_value(context),
            device: OnceCell::with_value(device),
        }
    }
}

wrapper_type! {
    /// OpenCL command queue
    pub struct Queue => Queue;
}

impl Queue {
    /// Creates a command queue on `device` within `context`.
    pub fn new(context: &Context, device: &Device, props: QueueProperties) -> Result<Self> {
        let registry = context.registry();
        if !device.registry().ptr_eq(&registry) {
            return Err(Error::new(
                ErrorKind::Args,
                "context and device belong to different registries",
            ));
        }

        let handle = registry
            .native()
            .create_queue(context.handle(), device.handle(), props)
            .map_err(|status| {
                Error::from_native(
                    status,
                    format!("unable to create a queue for device {}", device.handle()),
                )
            })?;

        debug!(%handle, context = %context.handle(), device = %device.handle(), "queue created");
        let links = QueueLinks::new(context.clone(), device.clone());
        registry
            .acquire(handle, ClassTag::Queue, move || Ok(Variant::Queue(links)))
            .map(Self)
    }

    /// Wraps a queue handle owned by the caller.
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Queue).map(Self)
    }

    #[inline(always)]
    pub fn wrap_borrowed(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap_borrowed(handle, ClassTag::Queue).map(Self)
    }

    /// Context this queue was created in.
    pub fn context(&self) -> Result<&Context> {
        self.links()?.context.get_or_try_init(|| {
            let handle = self.linked_handle(CL_QUEUE_CONTEXT, "context")?;
            Context::wrap_borrowed(&self.registry(), handle)
        })
    }

    /// Device this queue submits commands to.
    pub fn device(&self) -> Result<&Device> {
        self.links()?.device.get_or_try_init(|| {
            let handle = self.linked_handle(CL_QUEUE_DEVICE, "device")?;
            Device::wrap_borrowed(&self.registry(), handle)
        })
    }

    /// Properties the queue was created with.
    #[inline]
    pub fn properties(&self) -> Result<QueueProperties> {
        self.info_scalar::<u64>(CL_QUEUE_PROPERTIES)
            .map(QueueProperties::from_bits_truncate)
    }

    #[inline]
    fn links(&self) -> Result<&QueueLinks> {
        self.variant().as_queue_links().ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, "queue wrapper without queue links")
        })
    }

    fn linked_handle(&self, code: u32, what: &str) -> Result<RawHandle> {
        self.info_handle(code)?.ok_or_else(|| {
            Error::new(
                ErrorKind::InfoUnavailable,
                format!("queue {} reported no {what}", self.handle()),
            )
        })
    }
}
