#![allow(dead_code)]

use std::sync::mpsc::Sender;

use texbind::events::TextureEvent;
use texbind::{ContextDescriptor, GpuContext};
use wgpu::{self, ExperimentalFeatures};

pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .filter_module("naga", log::LevelFilter::Warn)
        .filter_module("wgpu", log::LevelFilter::Warn)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Warn)
        .is_test(true)
        .try_init();
}

/// `None` when the machine has no usable adapter; callers skip in that case.
pub fn context(events: Option<Sender<TextureEvent>>) -> Option<GpuContext> {
    init_logging();
    let (device, queue) = setup_wgpu()?;
    Some(GpuContext::new(ContextDescriptor {
        device,
        queue,
        on_event: events.map(|tx| {
            Box::new(move |event| {
                tx.send(event).unwrap();
            }) as texbind::events::EventCallback
        }),
    }))
}

pub fn setup_wgpu() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::default();

    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::default(),
        force_fallback_adapter: false,
        compatible_surface: None,
    }));
    let Ok(adapter) = adapter else {
        eprintln!("no wgpu adapter available, skipping");
        return None;
    };

    let required_limits = wgpu::Limits::downlevel_defaults().using_resolution(adapter.limits());

    let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
        label: None,
        required_features: wgpu::Features::empty(),
        required_limits,
        memory_hints: wgpu::MemoryHints::Performance,
        experimental_features: ExperimentalFeatures::disabled(),
        trace: wgpu::Trace::Off,
    }))
    .ok()?;

    device.on_uncaptured_error(std::sync::Arc::new(|e| match e {
        wgpu::Error::Internal {
            source,
            description,
        } => {
            panic!("wgpu internal error: {source}, {description}");
        }
        wgpu::Error::OutOfMemory { .. } => {
            panic!("Out of GPU memory");
        }
        wgpu::Error::Validation {
            source,
            description,
        } => {
            panic!("wgpu validation error: {description}: {source}");
        }
    }));

    Some((device, queue))
}
