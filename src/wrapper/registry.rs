use super::{Variant, Wrapper, WrapperRef};
use crate::{core::*, native::NativeApi};
use parking_lot::Mutex;
use std::{
    collections::{hash_map::Entry, HashMap},
    fmt::Debug,
    sync::Arc,
};
use tracing::{debug, trace};

#[cfg(feature = "opencl")]
lazy_static! {
    static ref GLOBAL: Registry = Registry::new(crate::native::OpenCl);
}

struct Slot {
    wrapper: Arc<Wrapper>,
    refs: usize,
}

pub(crate) struct RegistryInner {
    native: Arc<dyn NativeApi>,
    slots: Mutex<HashMap<RawHandle, Slot>>,
}

/// Identity cache mapping native handles to their one live wrapper.
///
/// Cloning a `Registry` is cheap and yields another handle to the same cache.
/// Every wrapper keeps its registry alive.
#[derive(Clone)]
pub struct Registry(Arc<RegistryInner>);

impl Registry {
    #[inline]
    pub fn new<N: 'static + NativeApi>(native: N) -> Self {
        Self::from_arc(Arc::new(native))
    }

    #[inline]
    pub fn from_arc(native: Arc<dyn NativeApi>) -> Self {
        Self(Arc::new(RegistryInner {
            native,
            slots: Mutex::new(HashMap::new()),
        }))
    }

    /// Process-wide registry backed by the system's OpenCL library.
    ///
    /// Wrappers still alive when the process exits are never released.
    #[cfg(feature = "opencl")]
    #[cfg_attr(docsrs, doc(cfg(feature = "opencl")))]
    #[inline(always)]
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    #[inline(always)]
    pub(crate) fn from_inner(inner: Arc<RegistryInner>) -> Self {
        Self(inner)
    }

    #[inline(always)]
    pub fn native(&self) -> &dyn NativeApi {
        self.0.native()
    }

    /// Returns the wrapper for `handle`, building it with `ctor` if there isn't one yet.
    ///
    /// The registry takes over the caller's native reference when a new
    /// wrapper is built. If a wrapper already exists its count is incremented,
    /// `ctor` isn't called, and the caller keeps its native reference.
    /// `ctor` runs without the registry locked and may wrap other handles of
    /// the same registry. Racing first acquires of one handle may each run
    /// their `ctor`; one variant is kept and the others are dropped.
    /// Asking for a class other than the cached wrapper's is an
    /// [`ErrorKind::InvalidData`] error that leaves the count untouched.
    #[inline]
    pub fn acquire(
        &self,
        handle: RawHandle,
        class: ClassTag,
        ctor: impl FnOnce() -> Result<Variant>,
    ) -> Result<WrapperRef> {
        self.0.acquire(handle, class, false, ctor)
    }

    /// Like [`acquire`](Registry::acquire), for handles the caller doesn't own.
    ///
    /// A newly built wrapper first retains the handle natively, so it can be
    /// released like any other once the last reference goes away.
    #[inline]
    pub fn acquire_borrowed(
        &self,
        handle: RawHandle,
        class: ClassTag,
        ctor: impl FnOnce() -> Result<Variant>,
    ) -> Result<WrapperRef> {
        self.0.acquire(handle, class, true, ctor)
    }

    /// Wraps an owned handle of a class that needs no construction parameters.
    #[inline]
    pub fn wrap(&self, handle: RawHandle, class: ClassTag) -> Result<WrapperRef> {
        self.acquire(handle, class, || Variant::empty(class))
    }

    /// Wraps a borrowed handle of a class that needs no construction parameters.
    #[inline]
    pub fn wrap_borrowed(&self, handle: RawHandle, class: ClassTag) -> Result<WrapperRef> {
        self.acquire_borrowed(handle, class, || Variant::empty(class))
    }

    /// New reference to the wrapper of `handle`, if it's alive.
    pub fn lookup(&self, handle: RawHandle) -> Option<WrapperRef> {
        let mut slots = self.0.slots.lock();
        let slot = slots.get_mut(&handle)?;
        slot.refs += 1;
        Some(WrapperRef::from_parts(self.0.clone(), slot.wrapper.clone()))
    }

    /// Gives up a reference. Equivalent to [`WrapperRef::release`].
    #[inline(always)]
    pub fn release(&self, wrapper: WrapperRef) -> Result<()> {
        wrapper.release()
    }

    /// Reference count of `wrapper`, or zero if it doesn't belong to this registry.
    #[inline]
    pub fn ref_count(&self, wrapper: &WrapperRef) -> usize {
        match Arc::ptr_eq(&self.0, wrapper.registry_inner()) {
            true => self.0.ref_count(wrapper.wrapper()),
            false => 0,
        }
    }

    /// Number of live wrappers.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.slots.lock().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.slots.lock().is_empty()
    }

    /// Checks that every wrapper has been released.
    #[inline]
    pub fn memcheck(&self) -> bool {
        let slots = self.0.slots.lock();
        for (handle, slot) in slots.iter() {
            debug!(%handle, class = %slot.wrapper.class(), refs = slot.refs, "wrapper still alive");
        }
        slots.is_empty()
    }

    /// Handle, class and reference count of every live wrapper, ordered by handle.
    pub fn live(&self) -> Vec<(RawHandle, ClassTag, usize)> {
        let mut live = self
            .0
            .slots
            .lock()
            .iter()
            .map(|(handle, slot)| (*handle, slot.wrapper.class(), slot.refs))
            .collect::<Vec<_>>();

        live.sort_unstable_by_key(|(handle, ..)| *handle);
        live
    }

    #[inline(always)]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("version", &self.native().version())
            .field("live", &self.len())
            .finish()
    }
}

impl RegistryInner {
    #[inline(always)]
    pub(crate) fn native(&self) -> &dyn NativeApi {
        &*self.native
    }

    fn acquire(
        self: &Arc<Self>,
        handle: RawHandle,
        class: ClassTag,
        borrowed: bool,
        ctor: impl FnOnce() -> Result<Variant>,
    ) -> Result<WrapperRef> {
        if class == ClassTag::None {
            return Err(Error::new(
                ErrorKind::Args,
                format!("{handle} can't be wrapped without a class"),
            ));
        }

        if let Some(slot) = self.slots.lock().get_mut(&handle) {
            return self.hit(slot, handle, class);
        }

        let variant = ctor()?;
        let built = variant.class();
        if built != class {
            return Err(Error::new(
                ErrorKind::Args,
                format!("constructor built a {built} for a {class} request"),
            ));
        }

        // the slot may have been filled while `ctor` ran
        let mut unused = None;
        let result = {
            let mut slots = self.slots.lock();
            match slots.entry(handle) {
                Entry::Occupied(mut entry) => {
                    unused = Some(variant);
                    self.hit(entry.get_mut(), handle, class)
                }

                Entry::Vacant(entry) => {
                    let retained = match borrowed {
                        true => self.native.retain(class, handle).map_err(|status| {
                            Error::from_native(status, format!("unable to retain {class} {handle}"))
                        }),
                        false => Ok(()),
                    };

                    match retained {
                        Ok(()) => {
                            let wrapper = Arc::new(Wrapper::new(handle, variant));
                            entry.insert(Slot {
                                wrapper: wrapper.clone(),
                                refs: 1,
                            });

                            debug!(%handle, %class, borrowed, "wrapper created");
                            Ok(WrapperRef::from_parts(self.clone(), wrapper))
                        }

                        Err(e) => {
                            unused = Some(variant);
                            Err(e)
                        }
                    }
                }
            }
        };

        // rejected variants may own wrappers, so they're dropped unlocked
        drop(unused);
        result
    }

    fn hit(self: &Arc<Self>, slot: &mut Slot, handle: RawHandle, class: ClassTag) -> Result<WrapperRef> {
        let cached = slot.wrapper.class();
        if cached != class {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("{handle} is already wrapped as a {cached}, not as a {class}"),
            ));
        }

        slot.refs += 1;
        trace!(%handle, %class, refs = slot.refs, "wrapper cache hit");
        Ok(WrapperRef::from_parts(self.clone(), slot.wrapper.clone()))
    }

    pub(crate) fn increment(&self, wrapper: &Arc<Wrapper>) {
        let mut slots = self.slots.lock();
        match slots.get_mut(&wrapper.handle()) {
            Some(slot) if Arc::ptr_eq(&slot.wrapper, wrapper) => slot.refs += 1,
            _ => debug_assert!(false, "cloned a wrapper that is no longer registered"),
        }
    }

    pub(crate) fn ref_count(&self, wrapper: &Arc<Wrapper>) -> usize {
        match self.slots.lock().get(&wrapper.handle()) {
            Some(slot) if Arc::ptr_eq(&slot.wrapper, wrapper) => slot.refs,
            _ => 0,
        }
    }

    /// Drops one reference, finalizing the wrapper when it was the last.
    ///
    /// The wrapper leaves the cache before the native release is attempted, so
    /// it's finalized even if that release fails.
    pub(crate) fn release(&self, wrapper: &Arc<Wrapper>) -> Result<()> {
        let handle = wrapper.handle();
        let class = wrapper.class();

        let removed = {
            let mut slots = self.slots.lock();
            let slot = match slots.get_mut(&handle) {
                Some(slot) if Arc::ptr_eq(&slot.wrapper, wrapper) => slot,
                _ => {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("{class} {handle} isn't registered"),
                    ))
                }
            };

            slot.refs -= 1;
            if slot.refs > 0 {
                trace!(%handle, %class, refs = slot.refs, "wrapper reference released");
                return Ok(());
            }

            slots.remove(&handle)
        };

        debug!(%handle, %class, "finalizing wrapper");
        let result = self.native.release(class, handle).map_err(|status| {
            Error::from_native(status, format!("unable to release {class} {handle}"))
        });

        drop(removed);
        result
    }
}
