use blaze_wrap::{
    core::consts::{
        CL_ADDRESS_REPEAT, CL_FILTER_LINEAR, CL_FLOAT, CL_IMAGE_FORMAT, CL_MEM_HOST_PTR,
        CL_MEM_OBJECT_BUFFER, CL_MEM_SIZE, CL_MEM_TYPE, CL_QUEUE_CONTEXT, CL_QUEUE_PROPERTIES,
        CL_RGBA, CL_SAMPLER_ADDRESSING_MODE, CL_SAMPLER_FILTER_MODE, CL_SAMPLER_NORMALIZED_COORDS,
    },
    memobj::MemObjectType,
    native::InfoTarget,
    prelude::*,
};
use common::*;
use std::{ffi::c_void, ptr::NonNull, sync::Arc};

mod common;

fn context(mock: &Arc<MockNative>) -> Result<Context> {
    let registry = mock.registry();
    let device = Device::wrap(&registry, handle(0x100))?;
    Context::new(&[device])
}

fn host_memory(data: &mut [u8]) -> NonNull<c_void> {
    NonNull::from(data).cast()
}

#[test]
fn buffers_remember_their_size() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;

    let buffer = Buffer::new(&context, MemFlags::READ_WRITE, 256, None)?;
    assert_eq!(buffer.get_size()?, 256);
    assert_eq!(buffer.get_host_ptr()?, None);
    assert_eq!(mock.total_info_calls(), 0);
    assert_eq!(
        mock.created().last(),
        Some(&(buffer.handle(), Created::Buffer(context.handle(), MemFlags::READ_WRITE, 256)))
    );
    Ok(())
}

#[test]
fn used_host_memory_is_remembered() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let mut data = vec![0u8; 64];
    let ptr = host_memory(&mut data);

    let used = Buffer::new(&context, MemFlags::READ_WRITE | MemFlags::USE_HOST_PTR, 64, Some(ptr))?;
    assert_eq!(used.get_host_ptr()?.map(HostPtr::as_non_null), Some(ptr));

    let copied = Buffer::new(&context, MemFlags::READ_ONLY | MemFlags::COPY_HOST_PTR, 64, Some(ptr))?;
    assert_eq!(copied.get_host_ptr()?, None);
    assert_eq!(copied.get_size()?, 64);
    Ok(())
}

#[test]
fn invalid_buffer_arguments_skip_the_native_call() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let mut data = vec![0u8; 16];
    let ptr = host_memory(&mut data);
    let before = mock.created().len();

    let err = Buffer::new(&context, MemFlags::READ_WRITE, 0, None).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));

    let err = Buffer::new(&context, MemFlags::USE_HOST_PTR, 16, None).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));

    let err = Buffer::new(&context, MemFlags::READ_WRITE, 16, Some(ptr)).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));

    assert_eq!(mock.created().len(), before);
    Ok(())
}

#[test]
fn failed_allocation_keeps_the_native_status() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    mock.fail_create(Some(CL_OUT_OF_RESOURCES));

    let err = Buffer::new(&context, MemFlags::READ_WRITE, 128, None).unwrap_err();
    assert_eq!(err.domain(), ErrorDomain::Native);
    assert_eq!(err.status(), Some(NativeStatus::OutOfResources));
    assert_eq!(context.registry().len(), 2);
    Ok(())
}

#[test]
fn wrapped_buffers_are_queried_once() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.set_info_scalar(handle(0x10), InfoTarget::MemObject, CL_MEM_SIZE, 1024usize);
    mock.set_info_scalar(handle(0x10), InfoTarget::MemObject, CL_MEM_HOST_PTR, 0usize);
    mock.set_info_scalar(handle(0x10), InfoTarget::MemObject, CL_MEM_TYPE, CL_MEM_OBJECT_BUFFER);

    let buffer = Buffer::wrap(&registry, handle(0x10))?;
    let again = Buffer::wrap(&registry, handle(0x10))?;
    assert_eq!(buffer, again);
    assert_eq!(again.get_size()?, 1024);
    assert_eq!(again.get_host_ptr()?, None);
    assert_eq!(mock.info_calls(handle(0x10), CL_MEM_SIZE), 1);
    assert_eq!(buffer.mem_type()?, MemObjectType::Buffer);
    Ok(())
}

#[test]
fn unreadable_buffers_are_not_wrapped() {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.fail_info(handle(0x10), InfoTarget::MemObject, CL_MEM_SIZE, CL_INVALID_MEM_OBJECT);

    let err = Buffer::wrap(&registry, handle(0x10)).unwrap_err();
    assert_eq!(err.status(), Some(NativeStatus::InvalidMemObject));
    assert!(registry.is_empty());
}

#[test]
fn image_size_follows_format_and_type() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let format = ImageFormat::new(ChannelOrder::RGBA, ChannelType::U8);

    let flat = Image::new(
        &context,
        MemFlags::READ_ONLY,
        format,
        ImageDesc::new(ImageType::Image2D, 16, 8),
        None,
    )?;
    assert_eq!(flat.get_size()?, 16 * 8 * 4);

    // depth is ignored outside 3D images
    let desc = ImageDesc::new(ImageType::Image2D, 16, 8).with_depth(100);
    let same = Image::new(&context, MemFlags::READ_ONLY, format, desc, None)?;
    assert_eq!(same.get_size()?, 16 * 8 * 4);

    let packed = ImageFormat::new(ChannelOrder::RGB, ChannelType::U16_565);
    let desc = ImageDesc::new(ImageType::Image3D, 4, 4).with_depth(4);
    let volume = Image::new(&context, MemFlags::READ_WRITE, packed, desc, None)?;
    assert_eq!(volume.get_size()?, 4 * 4 * 4 * 2);

    assert_eq!(
        mock.created().last(),
        Some(&(volume.handle(), Created::Image(context.handle(), MemFlags::READ_WRITE, packed, desc)))
    );
    Ok(())
}

#[test]
fn images_need_every_used_dimension() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let format = ImageFormat::new(ChannelOrder::Red, ChannelType::F32);

    let desc = ImageDesc::new(ImageType::Image2DArray, 32, 32);
    let err = Image::new(&context, MemFlags::READ_WRITE, format, desc, None).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));

    let desc = ImageDesc::new(ImageType::Image1D, 0, 0);
    let err = Image::new(&context, MemFlags::READ_WRITE, format, desc, None).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));

    assert!(mock.created().iter().all(|(_, x)| !matches!(x, Created::Image(..))));
    Ok(())
}

#[test]
fn images_need_a_recent_api() -> Result<()> {
    let mock = MockNative::with_version(ApiVersion::CL1_1);
    let context = context(&mock)?;
    let format = ImageFormat::new(ChannelOrder::RGBA, ChannelType::F32);

    let err = Image::new(
        &context,
        MemFlags::READ_WRITE,
        format,
        ImageDesc::new(ImageType::Image2D, 8, 8),
        None,
    )
    .unwrap_err();

    assert_eq!(err.domain(), ErrorDomain::Library);
    assert_eq!(err.kind(), Some(ErrorKind::Unsupported));
    assert_eq!(mock.created().len(), 1);
    Ok(())
}

#[test]
fn image_format_is_decoded() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.set_info_scalar(handle(0x10), InfoTarget::MemObject, CL_MEM_SIZE, 4096usize);
    mock.set_info_scalar(handle(0x10), InfoTarget::MemObject, CL_MEM_HOST_PTR, 0usize);
    mock.set_info_scalar(handle(0x10), InfoTarget::Image, CL_IMAGE_FORMAT, [CL_RGBA, CL_FLOAT]);

    let image = Image::wrap(&registry, handle(0x10))?;
    assert_eq!(image.get_size()?, 4096);
    assert_eq!(
        image.format()?,
        ImageFormat::new(ChannelOrder::RGBA, ChannelType::F32)
    );
    assert_eq!(image.format()?.element_size(), 16);

    assert_eq!(
        ImageFormat::from_raw(CL_RGBA, 0).unwrap_err().kind(),
        Some(ErrorKind::InvalidData)
    );
    Ok(())
}

#[test]
fn new_queues_know_their_links() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let device = context.device(0)?.clone();

    let queue = Queue::new(&context, &device, QueueProperties::PROFILING_ENABLE)?;
    assert_eq!(queue.context()?, &context);
    assert_eq!(queue.device()?, &device);
    assert_eq!(mock.total_info_calls(), 0);
    assert_eq!(
        mock.created().last(),
        Some(&(
            queue.handle(),
            Created::Queue(context.handle(), device.handle(), QueueProperties::PROFILING_ENABLE)
        ))
    );

    // the queue keeps its context alive
    let context_handle = context.handle();
    drop(context);
    assert_eq!(mock.releases(context_handle), 0);
    drop(queue);
    assert_eq!(mock.releases(context_handle), 1);
    Ok(())
}

#[test]
fn wrapped_queues_resolve_links_lazily() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.set_info_scalar(handle(0x10), InfoTarget::Queue, CL_QUEUE_CONTEXT, 0x20usize);
    mock.set_info_scalar(handle(0x10), InfoTarget::Queue, CL_QUEUE_PROPERTIES, 3u64);

    let queue = Queue::wrap(&registry, handle(0x10))?;
    assert_eq!(mock.total_info_calls(), 0);

    let context = queue.context()?;
    assert_eq!(context.handle(), handle(0x20));
    assert_eq!(queue.context()?, context);
    assert_eq!(mock.info_calls(handle(0x10), CL_QUEUE_CONTEXT), 1);
    assert_eq!(mock.retains(handle(0x20)), 1);

    assert_eq!(
        queue.properties()?,
        QueueProperties::OUT_OF_ORDER_EXEC_MODE_ENABLE | QueueProperties::PROFILING_ENABLE
    );

    let err = queue.device().unwrap_err();
    assert_eq!(err.code(), CL_INVALID_VALUE);
    Ok(())
}

#[test]
fn queues_cant_mix_registries() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;
    let other = Device::wrap(&mock.registry(), handle(0x200))?;

    let err = Queue::new(&context, &other, QueueProperties::default()).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Args));
    Ok(())
}

#[test]
fn samplers_report_their_properties() -> Result<()> {
    let mock = MockNative::new();
    let context = context(&mock)?;

    let props = SamplerProperties::default();
    let sampler = Sampler::new(&context, props)?;
    assert_eq!(
        mock.created().last(),
        Some(&(sampler.handle(), Created::Sampler(context.handle(), props)))
    );

    let handle = sampler.handle();
    mock.set_info_scalar(handle, InfoTarget::Sampler, CL_SAMPLER_NORMALIZED_COORDS, 0u32);
    mock.set_info_scalar(handle, InfoTarget::Sampler, CL_SAMPLER_ADDRESSING_MODE, CL_ADDRESS_REPEAT);
    mock.set_info_scalar(handle, InfoTarget::Sampler, CL_SAMPLER_FILTER_MODE, CL_FILTER_LINEAR);

    assert_eq!(
        sampler.properties()?,
        SamplerProperties::new(false, AddressingMode::Repeat, FilterMode::Linear)
    );
    Ok(())
}

#[test]
fn unknown_sampler_modes_are_invalid_data() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.set_info_scalar(handle(0x10), InfoTarget::Sampler, CL_SAMPLER_ADDRESSING_MODE, 0xffffu32);

    let sampler = Sampler::wrap(&registry, handle(0x10))?;
    assert_eq!(
        sampler.addressing_mode().unwrap_err().kind(),
        Some(ErrorKind::InvalidData)
    );
    Ok(())
}
