//! The exported texture surface.
//!
//! Every function here hands straight through to [DataTexture]. Nothing is
//! validated, tracked or translated at this layer: errors come back exactly as
//! the texture layer reports them.

use crate::data::TextureData;
use crate::error::Result;
use crate::format::{PixelFormat, SampleType};
use crate::options::TextureOptions;
use crate::texture::{DataTexture, TextureId};

/// Opaque, caller-owned reference to a data texture.
///
/// The caller decides when the texture dies by calling [dispose_texture].
#[derive(Debug)]
pub struct TextureHandle(DataTexture);

impl TextureHandle {
    pub fn id(&self) -> TextureId {
        self.0.id()
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    pub fn format(&self) -> PixelFormat {
        self.0.format()
    }

    pub fn sample_type(&self) -> SampleType {
        self.0.sample_type()
    }

    /// True until the texture has been uploaded by a [crate::GpuContext].
    pub fn needs_upload(&self) -> bool {
        self.0.needs_update()
    }

    pub fn version(&self) -> u32 {
        self.0.version()
    }

    pub fn is_disposed(&self) -> bool {
        self.0.is_disposed()
    }

    /// The wrapped texture object.
    pub fn texture(&self) -> &DataTexture {
        &self.0
    }

    pub fn texture_mut(&mut self) -> &mut DataTexture {
        &mut self.0
    }
}

impl From<DataTexture> for TextureHandle {
    fn from(texture: DataTexture) -> Self {
        TextureHandle(texture)
    }
}

/// Wrap `data` in a new texture flagged for upload on next use.
pub fn construct_texture_from_data(
    data: impl Into<TextureData>,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<TextureHandle> {
    construct_texture_with_options(data, width, height, format, TextureOptions::default())
}

pub fn construct_texture_with_options(
    data: impl Into<TextureData>,
    width: u32,
    height: u32,
    format: PixelFormat,
    options: TextureOptions,
) -> Result<TextureHandle> {
    let mut texture = DataTexture::new(data, width, height, format, options)?;
    texture.set_needs_update();
    Ok(TextureHandle(texture))
}

pub fn pixel_format_rgb() -> PixelFormat {
    PixelFormat::Rgb
}

pub fn pixel_format_rgba() -> PixelFormat {
    PixelFormat::Rgba
}

/// Release the texture's GPU resources now. The handle stays readable but
/// must not be uploaded or rendered afterwards.
pub fn dispose_texture(handle: &mut TextureHandle) {
    handle.0.dispose();
}
