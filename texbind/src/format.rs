use serde::{Deserialize, Serialize};
use std::fmt;

use crate::options::ColorSpace;

/// Channel layout of a data texture.
///
/// These are plain tags. They are only turned into a [wgpu::TextureFormat]
/// when a texture is uploaded, see [PixelFormat::to_wgpu].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    /// Number of samples per pixel in the caller's buffer.
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Rgb => "rgb",
            PixelFormat::Rgba => "rgba",
        }
    }

    /// wgpu has no three channel formats, so both tags resolve to an RGBA
    /// format. RGB data gets an opaque alpha channel during upload.
    pub fn to_wgpu(self, sample: SampleType, color_space: ColorSpace) -> wgpu::TextureFormat {
        match (sample, color_space) {
            (SampleType::U8, ColorSpace::Linear) => wgpu::TextureFormat::Rgba8Unorm,
            (SampleType::U8, ColorSpace::Srgb) => wgpu::TextureFormat::Rgba8UnormSrgb,
            // No float sRGB format exists, values are passed through as-is.
            (SampleType::F32, _) => wgpu::TextureFormat::Rgba32Float,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeric type of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleType {
    U8,
    F32,
}

impl SampleType {
    pub const fn size_bytes(self) -> u32 {
        match self {
            SampleType::U8 => 1,
            SampleType::F32 => 4,
        }
    }

    /// Bytes per texel once expanded to four channels on the GPU.
    pub const fn gpu_texel_bytes(self) -> u32 {
        self.size_bytes() * 4
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SampleType::U8 => write!(f, "u8"),
            SampleType::F32 => write!(f, "f32"),
        }
    }
}
