use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};
use wgpu::{Device, Queue, Texture};

use crate::data::TextureData;
use crate::error::{Error, Result};
use crate::format::{PixelFormat, SampleType};
use crate::gpu;
use crate::options::TextureOptions;

static NEXT_TEXTURE_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique identifier, used for labels, logs and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureId(u32);

impl TextureId {
    fn next() -> Self {
        TextureId(NEXT_TEXTURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type DisposeListener = Box<dyn FnMut(TextureId) + Send>;

/// A texture whose pixels live in a CPU-side sample buffer.
///
/// Nothing touches the GPU until [DataTexture::upload] runs with the
/// needs-update flag set. Disposal is explicit and terminal: dropping a
/// texture without disposing it leaves the GPU allocation to wgpu's own
/// reclamation, which may be arbitrarily late.
pub struct DataTexture {
    id: TextureId,
    width: u32,
    height: u32,
    format: PixelFormat,
    sample_type: SampleType,
    options: TextureOptions,
    /// `None` once disposed.
    data: Option<TextureData>,
    needs_update: bool,
    version: u32,
    gpu: Option<Texture>,
    disposed: bool,
    listeners: Vec<DisposeListener>,
}

impl DataTexture {
    /// Wrap a sample buffer. The buffer must hold at least
    /// `width * height * format.channels()` samples; extra samples are ignored.
    pub fn new(
        data: impl Into<TextureData>,
        width: u32,
        height: u32,
        format: PixelFormat,
        options: TextureOptions,
    ) -> Result<Self> {
        let data = data.into();
        check_extent(&data, width, height, format)?;

        let texture = Self {
            id: TextureId::next(),
            width,
            height,
            format,
            sample_type: data.sample_type(),
            options,
            data: Some(data),
            needs_update: false,
            version: 0,
            gpu: None,
            disposed: false,
            listeners: Vec::new(),
        };
        log::debug!(
            "created data texture {} ({}x{} {} {})",
            texture.id,
            width,
            height,
            format,
            texture.sample_type
        );
        Ok(texture)
    }

    /// Build an RGBA texture from a decoded image. Float images keep
    /// `f32` samples, everything else is converted to 8-bit.
    pub fn from_image(img: &image::DynamicImage, options: TextureOptions) -> Result<Self> {
        Self::new(
            TextureData::from(img),
            img.width(),
            img.height(),
            PixelFormat::Rgba,
            options,
        )
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn options(&self) -> &TextureOptions {
        &self.options
    }

    /// `None` after disposal.
    pub fn data(&self) -> Option<&TextureData> {
        self.data.as_ref()
    }

    pub fn needs_update(&self) -> bool {
        self.needs_update
    }

    /// Bumped every time the texture is flagged for upload.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The GPU side of the texture, present after the first upload.
    pub fn gpu_texture(&self) -> Option<&Texture> {
        self.gpu.as_ref()
    }

    /// Flag the texture so the next [DataTexture::upload] re-sends its samples.
    pub fn set_needs_update(&mut self) {
        if self.disposed {
            return;
        }
        self.version = self.version.wrapping_add(1);
        self.needs_update = true;
    }

    /// Swap the sample buffer, keeping dimensions and format.
    pub fn replace_data(&mut self, data: impl Into<TextureData>) -> Result<()> {
        if self.disposed {
            return Err(Error::Disposed(self.id));
        }
        let data = data.into();
        check_extent(&data, self.width, self.height, self.format)?;
        self.sample_type = data.sample_type();
        self.data = Some(data);
        self.set_needs_update();
        Ok(())
    }

    /// Called once when the texture is disposed.
    pub fn on_dispose(&mut self, listener: impl FnMut(TextureId) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Send the samples to the GPU if flagged. Returns whether anything was written.
    pub fn upload(&mut self, device: &Device, queue: &Queue) -> Result<bool> {
        if self.disposed {
            return Err(Error::Disposed(self.id));
        }
        if !self.needs_update {
            return Ok(false);
        }

        let limit = device.limits().max_texture_dimension_2d;
        if self.width > limit || self.height > limit {
            return Err(Error::DimensionTooLarge {
                width: self.width,
                height: self.height,
                limit,
            });
        }

        let wgpu_format = self
            .format
            .to_wgpu(self.sample_type, self.options.color_space);
        let reusable = self.gpu.as_ref().is_some_and(|tex| {
            tex.width() == self.width && tex.height() == self.height && tex.format() == wgpu_format
        });
        if !reusable {
            if let Some(stale) = self.gpu.take() {
                stale.destroy();
            }
            let label = self
                .options
                .label
                .clone()
                .unwrap_or_else(|| format!("texbind data texture {}", self.id));
            self.gpu = Some(gpu::create_data_texture(
                device,
                &label,
                self.width,
                self.height,
                wgpu_format,
            ));
        }

        // Both are set above for a live texture.
        let (Some(texture), Some(data)) = (self.gpu.as_ref(), self.data.as_ref()) else {
            return Err(Error::Disposed(self.id));
        };
        let pixels = self.width as usize * self.height as usize;
        gpu::write_texels(
            queue,
            texture,
            &data.rgba_bytes(self.format, pixels),
            self.sample_type,
        );

        self.needs_update = false;
        log::debug!("uploaded texture {} version {}", self.id, self.version);
        Ok(true)
    }

    /// Release the GPU allocation and the sample buffer. Calling this twice is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            log::warn!("texture {} disposed more than once", self.id);
            return;
        }

        if let Some(texture) = self.gpu.take() {
            texture.destroy();
        }
        self.data = None;
        self.needs_update = false;
        self.disposed = true;
        log::debug!("disposed texture {}", self.id);

        for mut listener in self.listeners.drain(..) {
            listener(self.id);
        }
    }
}

impl fmt::Debug for DataTexture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DataTexture")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("sample_type", &self.sample_type)
            .field("needs_update", &self.needs_update)
            .field("version", &self.version)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

fn check_extent(data: &TextureData, width: u32, height: u32, format: PixelFormat) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::ZeroExtent { width, height });
    }
    let expected = width as usize * height as usize * format.channels();
    if data.len() < expected {
        return Err(Error::BufferTooSmall {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
