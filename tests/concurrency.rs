use blaze_wrap::{core::consts::CL_DEVICE_NAME, native::InfoTarget, prelude::*};
use common::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Barrier,
    },
    thread,
};

mod common;

const THREADS: usize = 8;

#[test]
fn concurrent_wraps_share_one_wrapper() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    let barrier = Barrier::new(THREADS);

    let wrappers = thread::scope(|s| {
        let handles = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    Device::wrap_borrowed(&registry, handle(0x10))
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|x| x.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(wrappers.iter().all(|x| x.ptr_eq(&wrappers[0])));
    assert_eq!(wrappers[0].ref_count(), THREADS);
    assert_eq!(mock.retains(handle(0x10)), 1);

    thread::scope(|s| {
        for wrapper in wrappers {
            s.spawn(move || drop(wrapper));
        }
    });

    assert_eq!(mock.releases(handle(0x10)), 1);
    assert!(registry.memcheck());
    Ok(())
}

#[test]
fn random_interleavings_finalize_once() {
    const HANDLES: usize = 4;
    const STEPS: usize = 500;

    let mock = MockNative::new();
    let registry = mock.registry();
    let built = (0..HANDLES).map(|_| AtomicUsize::new(0)).collect::<Vec<_>>();

    thread::scope(|s| {
        for seed in 0..THREADS as u64 {
            let registry = &registry;
            let built = &built;

            s.spawn(move || {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut held = Vec::<Event>::new();

                for _ in 0..STEPS {
                    match rng.gen_range(0..4) {
                        0 | 1 => {
                            let idx = rng.gen_range(0..HANDLES);
                            let event = registry
                                .acquire_borrowed(handle(0x100 * (idx + 1)), ClassTag::Event, || {
                                    built[idx].fetch_add(1, Ordering::SeqCst);
                                    Ok(Variant::Event)
                                })
                                .and_then(Event::try_from)
                                .unwrap();
                            held.push(event);
                        }
                        2 if !held.is_empty() => {
                            let idx = rng.gen_range(0..held.len());
                            let clone = held[idx].clone();
                            held.push(clone);
                        }
                        _ if !held.is_empty() => {
                            let idx = rng.gen_range(0..held.len());
                            held.swap_remove(idx).release().unwrap();
                        }
                        _ => {}
                    }
                }
            });
        }
    });

    assert!(registry.memcheck());

    // only registered wrappers retain, and each of them was finalized once
    for (idx, built) in built.iter().enumerate() {
        let handle = handle(0x100 * (idx + 1));
        let retains = mock.retains(handle);
        assert!(retains >= 1);
        assert!(retains <= built.load(Ordering::SeqCst));
        assert_eq!(mock.releases(handle), retains);
    }
}

#[test]
fn concurrent_info_queries_hit_native_once() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    mock.set_info_str(handle(0x10), InfoTarget::Device, CL_DEVICE_NAME, "Mock Device");

    let device = Device::wrap(&registry, handle(0x10))?;
    let barrier = Barrier::new(THREADS);

    let names = thread::scope(|s| {
        let handles = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    device.name()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|x| x.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(names.iter().all(|x| x == "Mock Device"));
    assert_eq!(mock.info_calls(handle(0x10), CL_DEVICE_NAME), 1);
    Ok(())
}

#[test]
fn concurrent_device_listing_enumerates_once() -> Result<()> {
    let mock = MockNative::new();
    let registry = mock.registry();
    let devices = (1..=3).map(|x| handle(0x100 * x)).collect::<Vec<_>>();
    mock.set_devices(handle(0x10), devices.clone());

    let platform = Platform::wrap(&registry, handle(0x10))?;
    let barrier = Barrier::new(THREADS);

    let counts = thread::scope(|s| {
        let handles = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    platform.num_devices()
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|x| x.join().unwrap())
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(counts.iter().all(|x| *x == 3));
    assert_eq!(mock.device_calls(handle(0x10)), 1);

    let retained = devices
        .iter()
        .map(|x| (*x, mock.retains(*x)))
        .collect::<HashMap<_, _>>();
    assert!(retained.values().all(|x| *x == 1));
    Ok(())
}
