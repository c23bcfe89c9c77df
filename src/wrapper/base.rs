use super::{DevContainer, Registry, RegistryInner, Variant};
use crate::{
    core::*,
    device::Device,
    memobj::MemObject,
    native::{InfoTarget, NativeApi},
};
use bytemuck::Pod;
use parking_lot::Mutex;
use std::{
    collections::HashMap,
    fmt::Debug,
    hash::Hash,
    mem::ManuallyDrop,
    ptr,
    sync::Arc,
};
use tracing::trace;

/// Key of a cached info query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoKey {
    pub target: InfoTarget,
    pub code: u32,
}

/// Base wrapper: one native handle, its variant state and its info cache.
///
/// Wrappers are only ever reached through a [`WrapperRef`]; the reference
/// count lives in the [`Registry`] that created them.
pub struct Wrapper {
    handle: RawHandle,
    variant: Variant,
    info: Mutex<HashMap<InfoKey, Arc<[u8]>>>,
}

impl Wrapper {
    #[inline]
    pub(crate) fn new(handle: RawHandle, variant: Variant) -> Self {
        Self {
            handle,
            variant,
            info: Mutex::new(HashMap::new()),
        }
    }

    #[inline(always)]
    pub fn handle(&self) -> RawHandle {
        self.handle
    }

    #[inline(always)]
    pub fn class(&self) -> ClassTag {
        self.variant.class()
    }

    #[inline(always)]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }
}

impl Debug for Wrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wrapper")
            .field("handle", &self.handle)
            .field("variant", &self.variant)
            .field("cached_info", &self.info.lock().len())
            .finish()
    }
}

/// Counted reference to a [`Wrapper`].
///
/// Cloning acquires a new reference and dropping releases it. When the last
/// reference goes away the native handle is released and the wrapper leaves
/// its registry. Use [`release`](WrapperRef::release) to observe a failed
/// native teardown, which `Drop` can only log.
pub struct WrapperRef {
    registry: Arc<RegistryInner>,
    inner: Arc<Wrapper>,
}

impl WrapperRef {
    /// Builds a reference whose count has already been accounted for by the registry.
    #[inline(always)]
    pub(crate) fn from_parts(registry: Arc<RegistryInner>, inner: Arc<Wrapper>) -> Self {
        Self { registry, inner }
    }

    #[inline(always)]
    pub(crate) fn registry_inner(&self) -> &Arc<RegistryInner> {
        &self.registry
    }

    #[inline(always)]
    pub(crate) fn wrapper(&self) -> &Arc<Wrapper> {
        &self.inner
    }

    /// Non-owning view of the native handle.
    #[inline(always)]
    pub fn handle(&self) -> RawHandle {
        self.inner.handle
    }

    #[inline(always)]
    pub fn class(&self) -> ClassTag {
        self.inner.class()
    }

    #[inline(always)]
    pub fn variant(&self) -> &Variant {
        self.inner.variant()
    }

    #[inline(always)]
    pub fn registry(&self) -> Registry {
        Registry::from_inner(self.registry.clone())
    }

    #[inline(always)]
    pub fn native(&self) -> &dyn NativeApi {
        self.registry.native()
    }

    /// Current number of references to this wrapper.
    #[inline]
    pub fn ref_count(&self) -> usize {
        self.registry.ref_count(&self.inner)
    }

    /// Whether both references point to the very same wrapper.
    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Fails with [`ErrorKind::InvalidData`] unless this wrapper is of the given class.
    #[inline]
    pub fn expect_class(&self, class: ClassTag) -> Result<()> {
        let found = self.class();
        if found != class {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("expected a {class} wrapper, found a {found} ({})", self.handle()),
            ));
        }

        Ok(())
    }

    /// Device container state, for platforms, contexts and programs.
    #[inline]
    pub fn dev_container(&self) -> Result<&DevContainer> {
        self.variant().as_dev_container().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!("a {} wrapper doesn't contain devices", self.class()),
            )
        })
    }

    /// Memory object state, for buffers and images.
    #[inline]
    pub fn mem_object(&self) -> Result<&MemObject> {
        self.variant().as_mem_object().ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!("a {} wrapper isn't a memory object", self.class()),
            )
        })
    }

    /// Devices contained in this wrapper, discovered on first call.
    #[inline]
    pub fn devices(&self) -> Result<&[Device]> {
        self.dev_container()?.devices_of(self)
    }

    /// Device at `index`, failing with [`ErrorKind::InvalidData`] if it's out of range.
    pub fn device(&self, index: usize) -> Result<&Device> {
        let devices = self.devices()?;
        devices.get(index).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidData,
                format!(
                    "device index {index} out of range for {} {} with {} devices",
                    self.class(),
                    self.handle(),
                    devices.len()
                ),
            )
        })
    }

    #[inline(always)]
    pub fn num_devices(&self) -> Result<usize> {
        self.devices().map(<[Device]>::len)
    }

    /// Queries the wrapper's main info function.
    #[inline]
    pub fn get_info(&self, code: u32) -> Result<Arc<[u8]>> {
        let class = self.class();
        let target = InfoTarget::primary(class).ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, "unclassified wrappers have no info")
        })?;

        self.get_info_with(target, code)
    }

    /// Queries info through a specific native info function.
    ///
    /// Results are cached per wrapper: once a query succeeds, later calls hand
    /// back the same bytes without asking the native API again. Failed queries
    /// aren't cached.
    pub fn get_info_with(&self, target: InfoTarget, code: u32) -> Result<Arc<[u8]>> {
        let class = self.class();
        let handle = self.handle();

        if !target.applies_to(class) {
            return Err(Error::new(
                ErrorKind::Args,
                format!("{target:?} info can't be queried on a {class}"),
            ));
        }

        let version = self.native().version();
        if version < target.since() {
            return Err(Error::new(
                ErrorKind::Unsupported,
                format!(
                    "{target:?} info requires OpenCL {}, but the native API is {version}",
                    target.since()
                ),
            ));
        }

        let key = InfoKey { target, code };
        let mut cache = self.inner.info.lock();
        if let Some(value) = cache.get(&key) {
            trace!(%handle, %class, code, "info cache hit");
            return Ok(value.clone());
        }

        let bytes = self
            .native()
            .get_info(handle, target, code)
            .map_err(|status| {
                Error::from_native(
                    status,
                    format!("unable to get {target:?} info {code:#x} of {class} {handle}"),
                )
            })?;

        if bytes.is_empty() {
            return Err(Error::new(
                ErrorKind::InfoUnavailable,
                format!("{target:?} info {code:#x} of {class} {handle} is unavailable"),
            ));
        }

        let value = Arc::<[u8]>::from(bytes);
        cache.insert(key, value.clone());
        Ok(value)
    }

    /// Number of info results cached so far.
    #[inline]
    pub fn cached_info(&self) -> usize {
        self.inner.info.lock().len()
    }

    #[inline(always)]
    pub fn info_scalar<T: Pod>(&self, code: u32) -> Result<T> {
        decode_scalar(&self.get_info(code)?)
    }

    #[inline(always)]
    pub fn info_scalar_with<T: Pod>(&self, target: InfoTarget, code: u32) -> Result<T> {
        decode_scalar(&self.get_info_with(target, code)?)
    }

    #[inline(always)]
    pub fn info_vec<T: Pod>(&self, code: u32) -> Result<Vec<T>> {
        decode_vec(&self.get_info(code)?)
    }

    #[inline(always)]
    pub fn info_string(&self, code: u32) -> Result<String> {
        decode_string(&self.get_info(code)?)
    }

    #[inline(always)]
    pub fn info_string_with(&self, target: InfoTarget, code: u32) -> Result<String> {
        decode_string(&self.get_info_with(target, code)?)
    }

    /// Reads a native handle out of an info result. `None` if the native API reported a null handle.
    #[inline]
    pub fn info_handle(&self, code: u32) -> Result<Option<RawHandle>> {
        self.info_scalar::<usize>(code).map(RawHandle::new)
    }

    /// Gives up this reference.
    ///
    /// If it was the last one, the wrapper is removed from its registry and the
    /// native handle released. A failed native release is returned, but the
    /// wrapper is gone from the registry either way.
    pub fn release(self) -> Result<()> {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so each field is moved out exactly once.
        let (registry, inner) = unsafe { (ptr::read(&this.registry), ptr::read(&this.inner)) };
        registry.release(&inner)
    }
}

impl Clone for WrapperRef {
    #[inline]
    fn clone(&self) -> Self {
        self.registry.increment(&self.inner);
        Self {
            registry: self.registry.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl Drop for WrapperRef {
    fn drop(&mut self) {
        if let Err(e) = self.registry.release(&self.inner) {
            cfg_if::cfg_if! {
                if #[cfg(feature = "strict")] {
                    panic!("{e:?}")
                } else {
                    tracing::warn!(
                        handle = %self.inner.handle,
                        class = %self.inner.class(),
                        error = %e,
                        "implicit release failed"
                    );
                }
            }
        }
    }
}

impl PartialEq for WrapperRef {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for WrapperRef {}

impl Hash for WrapperRef {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.handle.hash(state)
    }
}

impl Debug for WrapperRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrapperRef")
            .field("class", &self.class())
            .field("handle", &self.handle())
            .finish()
    }
}

pub(crate) fn decode_scalar<T: Pod>(bytes: &[u8]) -> Result<T> {
    bytemuck::try_pod_read_unaligned(bytes).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!(
                "expected {} info bytes, got {} ({e:?})",
                std::mem::size_of::<T>(),
                bytes.len()
            ),
        )
    })
}

fn decode_vec<T: Pod>(bytes: &[u8]) -> Result<Vec<T>> {
    let size = std::mem::size_of::<T>();
    if size == 0 || bytes.len() % size != 0 {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "{} info bytes aren't a whole number of {size}-byte elements",
                bytes.len()
            ),
        ));
    }

    Ok(bytes
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

fn decode_string(bytes: &[u8]) -> Result<String> {
    let end = bytes.iter().position(|&x| x == 0).unwrap_or(bytes.len());
    String::from_utf8(bytes[..end].to_vec())
        .map_err(|e| Error::new(ErrorKind::InvalidData, e))
}
