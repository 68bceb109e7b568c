use wgpu::{Device, Queue, Sampler, Texture};

use crate::binding::TextureHandle;
use crate::error::Result;
use crate::events::{EventCallback, TextureEvent};
use crate::gpu;

pub struct ContextDescriptor {
    pub device: Device,
    pub queue: Queue,
    pub on_event: Option<EventCallback>,
}

/// The device side of the texture layer. Textures flagged for upload are
/// synced here, typically once per frame before encoding a render pass.
pub struct GpuContext {
    pub device: Device,
    pub queue: Queue,
    sampler: Sampler,
    on_event: Option<EventCallback>,
}

impl GpuContext {
    pub fn new(desc: ContextDescriptor) -> Self {
        let sampler = gpu::create_nearest_sampler(&desc.device);
        log::info!("texbind context ready");
        Self {
            device: desc.device,
            queue: desc.queue,
            sampler,
            on_event: desc.on_event,
        }
    }

    /// Upload the handle's samples if it is flagged. Returns whether anything was written.
    pub fn upload(&self, handle: &mut TextureHandle) -> Result<bool> {
        let uploaded = handle.texture_mut().upload(&self.device, &self.queue)?;
        if uploaded {
            self.emit(TextureEvent::Uploaded {
                id: handle.id(),
                version: handle.version(),
            });
        }
        Ok(uploaded)
    }

    /// Upload every flagged handle, stopping at the first failure.
    pub fn upload_all<'a>(
        &self,
        handles: impl IntoIterator<Item = &'a mut TextureHandle>,
    ) -> Result<usize> {
        let mut count = 0;
        for handle in handles {
            if self.upload(handle)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Dispose through the context so listeners on the context hear about it.
    pub fn dispose(&self, handle: &mut TextureHandle) {
        let was_live = !handle.is_disposed();
        crate::dispose_texture(handle);
        if was_live {
            self.emit(TextureEvent::Disposed { id: handle.id() });
        }
    }

    pub fn texture<'a>(&self, handle: &'a TextureHandle) -> Option<&'a Texture> {
        handle.texture().gpu_texture()
    }

    /// Read the uploaded texels back as packed RGBA bytes. `None` if the
    /// handle has never been uploaded or has been disposed.
    pub fn read_back(&self, handle: &TextureHandle) -> Option<Vec<u8>> {
        let texture = handle.texture().gpu_texture()?;
        gpu::read_texels(&self.device, &self.queue, texture)
    }

    /// Nearest filtering, clamped edges.
    pub fn sampler(&self) -> &Sampler {
        &self.sampler
    }

    /// Block until queued uploads have reached the GPU.
    pub fn flush(&self) {
        self.queue.submit(std::iter::empty());
        if let Err(e) = self.device.poll(wgpu::PollType::wait_indefinitely()) {
            log::error!("device poll failed: {e}");
        }
    }

    fn emit(&self, event: TextureEvent) {
        if let Some(cb) = &self.on_event {
            cb(event);
        }
    }
}
