use crate::{
    core::{consts::*, *},
    native::InfoTarget,
    queue::Queue,
    wrapper::Registry,
};

wrapper_type! {
    /// OpenCL event
    pub struct Event => Event;
}

impl Event {
    #[inline(always)]
    pub fn wrap(registry: &Registry, handle: RawHandle) -> Result<Self> {
        registry.wrap(handle, ClassTag::Event).map(Self)
    }

    /// Raw `cl_command_type` of the command associated with the event.
    #[inline(always)]
    pub fn command_type(&self) -> Result<u32> {
        self.info_scalar(CL_EVENT_COMMAND_TYPE)
    }

    /// Queue associated with the event.
    pub fn queue(&self) -> Result<Queue> {
        let handle = self.info_handle(CL_EVENT_COMMAND_QUEUE)?.ok_or_else(|| {
            Error::new(
                ErrorKind::InfoUnavailable,
                format!("event {} reported no queue", self.handle()),
            )
        })?;

        Queue::wrap_borrowed(&self.registry(), handle)
    }

    /// Profiling counter of the event, in nanoseconds.
    ///
    /// Only available once the command has completed, on queues created with
    /// [`PROFILING_ENABLE`](crate::queue::QueueProperties::PROFILING_ENABLE).
    #[inline(always)]
    pub fn profiling_info(&self, code: u32) -> Result<u64> {
        self.info_scalar_with(InfoTarget::EventProfiling, code)
    }

    #[inline(always)]
    pub fn queued_time(&self) -> Result<u64> {
        self.profiling_info(CL_PROFILING_COMMAND_QUEUED)
    }

    #[inline(always)]
    pub fn submit_time(&self) -> Result<u64> {
        self.profiling_info(CL_PROFILING_COMMAND_SUBMIT)
    }

    #[inline(always)]
    pub fn start_time(&self) -> Result<u64> {
        self.profiling_info(CL_PROFILING_COMMAND_START)
    }

    #[inline(always)]
    pub fn end_time(&self) -> Result<u64> {
        self.profiling_info(CL_PROFILING_COMMAND_END)
    }

    /// Time the command took to execute, in nanoseconds.
    #[inline]
    pub fn duration(&self) -> Result<u64> {
        let start = self.start_time()?;
        let end = self.end_time()?;
        Ok(end.saturating_sub(start))
    }
}
