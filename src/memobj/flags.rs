use crate::core::consts::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

bitflags::bitflags! {
    /// Flags passed to the native allocation call of a memory object.
    #[repr(transparent)]
    pub struct MemFlags : u64 {
        const READ_WRITE = CL_MEM_READ_WRITE;
        const WRITE_ONLY = CL_MEM_WRITE_ONLY;
        const READ_ONLY = CL_MEM_READ_ONLY;
        const USE_HOST_PTR = CL_MEM_USE_HOST_PTR;
        const ALLOC_HOST_PTR = CL_MEM_ALLOC_HOST_PTR;
        const COPY_HOST_PTR = CL_MEM_COPY_HOST_PTR;
    }
}

impl MemFlags {
    /// Whether the allocation is created from (or initialized with) existing host memory.
    #[inline(always)]
    pub const fn needs_host_ptr(self) -> bool {
        self.intersects(Self::USE_HOST_PTR) || self.intersects(Self::COPY_HOST_PTR)
    }
}

impl Default for MemFlags {
    #[inline(always)]
    fn default() -> Self {
        Self::READ_WRITE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum MemObjectType {
    Buffer = CL_MEM_OBJECT_BUFFER,
    Image1D = CL_MEM_OBJECT_IMAGE1D,
    Image2D = CL_MEM_OBJECT_IMAGE2D,
    Image3D = CL_MEM_OBJECT_IMAGE3D,
    Image1DArray = CL_MEM_OBJECT_IMAGE1D_ARRAY,
    Image2DArray = CL_MEM_OBJECT_IMAGE2D_ARRAY,
    Image1DBuffer = CL_MEM_OBJECT_IMAGE1D_BUFFER,
}
