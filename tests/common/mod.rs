#![allow(dead_code)]

use blaze_wrap::{
    native::{InfoTarget, NativeApi, NativeResult},
    prelude::*,
};
use parking_lot::Mutex;
use std::{
    collections::HashMap,
    ffi::c_void,
    ptr::NonNull,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

pub const CL_INVALID_VALUE: i32 = -30;
pub const CL_OUT_OF_RESOURCES: i32 = -5;
pub const CL_INVALID_MEM_OBJECT: i32 = -38;

#[inline]
pub fn handle(id: usize) -> RawHandle {
    RawHandle::new(id).unwrap()
}

/// Installs a test subscriber once, honoring `RUST_LOG`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Created {
    Context(Vec<RawHandle>),
    Queue(RawHandle, RawHandle, QueueProperties),
    Buffer(RawHandle, MemFlags, usize),
    Image(RawHandle, MemFlags, ImageFormat, ImageDesc),
    Sampler(RawHandle, SamplerProperties),
}

/// Native backend that answers from tables and counts every call.
pub struct MockNative {
    version: Mutex<ApiVersion>,
    info: Mutex<HashMap<(RawHandle, InfoTarget, u32), NativeResult<Vec<u8>>>>,
    devices: Mutex<HashMap<RawHandle, NativeResult<Vec<RawHandle>>>>,
    platforms: Mutex<NativeResult<Vec<RawHandle>>>,
    release_failures: Mutex<HashMap<RawHandle, i32>>,
    create_failure: Mutex<Option<i32>>,
    next_handle: AtomicUsize,

    info_calls: Mutex<HashMap<(RawHandle, u32), usize>>,
    device_calls: Mutex<HashMap<RawHandle, usize>>,
    retains: Mutex<HashMap<RawHandle, usize>>,
    releases: Mutex<HashMap<RawHandle, usize>>,
    created: Mutex<Vec<(RawHandle, Created)>>,
}

impl MockNative {
    pub fn new() -> Arc<Self> {
        Self::with_version(ApiVersion::CL1_2)
    }

    pub fn with_version(version: ApiVersion) -> Arc<Self> {
        Arc::new(Self {
            version: Mutex::new(version),
            info: Mutex::default(),
            devices: Mutex::default(),
            platforms: Mutex::new(Ok(Vec::new())),
            release_failures: Mutex::default(),
            create_failure: Mutex::new(None),
            next_handle: AtomicUsize::new(0x1000),
            info_calls: Mutex::default(),
            device_calls: Mutex::default(),
            retains: Mutex::default(),
            releases: Mutex::default(),
            created: Mutex::default(),
        })
    }

    pub fn registry(self: &Arc<Self>) -> Registry {
        Registry::from_arc(self.clone())
    }

    /* CONFIGURATION */
    pub fn set_info(&self, handle: RawHandle, target: InfoTarget, code: u32, bytes: impl Into<Vec<u8>>) {
        self.info.lock().insert((handle, target, code), Ok(bytes.into()));
    }

    pub fn set_info_str(&self, handle: RawHandle, target: InfoTarget, code: u32, value: &str) {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.set_info(handle, target, code, bytes)
    }

    pub fn set_info_scalar<T: bytemuck::Pod>(&self, handle: RawHandle, target: InfoTarget, code: u32, value: T) {
        self.set_info(handle, target, code, bytemuck::bytes_of(&value))
    }

    pub fn fail_info(&self, handle: RawHandle, target: InfoTarget, code: u32, status: i32) {
        self.info.lock().insert((handle, target, code), Err(status));
    }

    pub fn set_devices(&self, owner: RawHandle, devices: Vec<RawHandle>) {
        self.devices.lock().insert(owner, Ok(devices));
    }

    pub fn fail_devices(&self, owner: RawHandle, status: i32) {
        self.devices.lock().insert(owner, Err(status));
    }

    pub fn set_platforms(&self, platforms: Vec<RawHandle>) {
        *self.platforms.lock() = Ok(platforms);
    }

    pub fn fail_platforms(&self, status: i32) {
        *self.platforms.lock() = Err(status);
    }

    pub fn fail_release(&self, handle: RawHandle, status: i32) {
        self.release_failures.lock().insert(handle, status);
    }

    pub fn fail_create(&self, status: Option<i32>) {
        *self.create_failure.lock() = status;
    }

    /* COUNTERS */
    pub fn info_calls(&self, handle: RawHandle, code: u32) -> usize {
        self.info_calls.lock().get(&(handle, code)).copied().unwrap_or_default()
    }

    pub fn total_info_calls(&self) -> usize {
        self.info_calls.lock().values().sum()
    }

    pub fn device_calls(&self, handle: RawHandle) -> usize {
        self.device_calls.lock().get(&handle).copied().unwrap_or_default()
    }

    pub fn retains(&self, handle: RawHandle) -> usize {
        self.retains.lock().get(&handle).copied().unwrap_or_default()
    }

    pub fn releases(&self, handle: RawHandle) -> usize {
        self.releases.lock().get(&handle).copied().unwrap_or_default()
    }

    pub fn total_releases(&self) -> usize {
        self.releases.lock().values().sum()
    }

    pub fn created(&self) -> Vec<(RawHandle, Created)> {
        self.created.lock().clone()
    }

    fn create(&self, what: Created) -> NativeResult<RawHandle> {
        if let Some(status) = *self.create_failure.lock() {
            return Err(status);
        }

        let handle = handle(self.next_handle.fetch_add(0x10, Ordering::Relaxed));
        self.created.lock().push((handle, what));
        Ok(handle)
    }
}

impl NativeApi for MockNative {
    fn version(&self) -> ApiVersion {
        *self.version.lock()
    }

    fn get_info(&self, handle: RawHandle, target: InfoTarget, code: u32) -> NativeResult<Vec<u8>> {
        *self.info_calls.lock().entry((handle, code)).or_default() += 1;
        self.info
            .lock()
            .get(&(handle, target, code))
            .cloned()
            .unwrap_or(Err(CL_INVALID_VALUE))
    }

    fn retain(&self, _class: ClassTag, handle: RawHandle) -> NativeResult<()> {
        *self.retains.lock().entry(handle).or_default() += 1;
        Ok(())
    }

    fn release(&self, _class: ClassTag, handle: RawHandle) -> NativeResult<()> {
        *self.releases.lock().entry(handle).or_default() += 1;
        match self.release_failures.lock().get(&handle) {
            Some(status) => Err(*status),
            None => Ok(()),
        }
    }

    fn platform_ids(&self) -> NativeResult<Vec<RawHandle>> {
        self.platforms.lock().clone()
    }

    fn device_ids(&self, _class: ClassTag, handle: RawHandle) -> NativeResult<Vec<RawHandle>> {
        *self.device_calls.lock().entry(handle).or_default() += 1;
        self.devices
            .lock()
            .get(&handle)
            .cloned()
            .unwrap_or(Ok(Vec::new()))
    }

    fn create_context(&self, devices: &[RawHandle]) -> NativeResult<RawHandle> {
        self.create(Created::Context(devices.to_vec()))
    }

    fn create_queue(&self, context: RawHandle, device: RawHandle, props: QueueProperties) -> NativeResult<RawHandle> {
        self.create(Created::Queue(context, device, props))
    }

    fn create_buffer(&self, context: RawHandle, flags: MemFlags, size: usize, _host_ptr: Option<NonNull<c_void>>) -> NativeResult<RawHandle> {
        self.create(Created::Buffer(context, flags, size))
    }

    fn create_image(&self, context: RawHandle, flags: MemFlags, format: &ImageFormat, desc: &ImageDesc, _host_ptr: Option<NonNull<c_void>>) -> NativeResult<RawHandle> {
        self.create(Created::Image(context, flags, *format, *desc))
    }

    fn create_sampler(&self, context: RawHandle, props: &SamplerProperties) -> NativeResult<RawHandle> {
        self.create(Created::Sampler(context, *props))
    }
}
