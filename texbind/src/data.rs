use std::borrow::Cow;

use derive_more::From;

use crate::format::{PixelFormat, SampleType};

/// Raw samples backing a data texture, row-major with no row padding.
#[derive(Debug, Clone, PartialEq, From)]
pub enum TextureData {
    U8(Vec<u8>),
    F32(Vec<f32>),
}

impl TextureData {
    /// Number of samples, not bytes.
    pub fn len(&self) -> usize {
        match self {
            TextureData::U8(v) => v.len(),
            TextureData::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_type(&self) -> SampleType {
        match self {
            TextureData::U8(_) => SampleType::U8,
            TextureData::F32(_) => SampleType::F32,
        }
    }

    /// Bytes laid out as four channel texels, ready for `write_texture`.
    ///
    /// Only the first `pixels` texels are used. RGB input is widened with an
    /// opaque alpha channel; RGBA input is borrowed without copying.
    pub(crate) fn rgba_bytes(&self, format: PixelFormat, pixels: usize) -> Cow<'_, [u8]> {
        let samples = pixels * format.channels();
        match (self, format) {
            (TextureData::U8(v), PixelFormat::Rgba) => Cow::Borrowed(&v[..samples]),
            (TextureData::F32(v), PixelFormat::Rgba) => {
                Cow::Borrowed(bytemuck::cast_slice(&v[..samples]))
            }
            (TextureData::U8(v), PixelFormat::Rgb) => Cow::Owned(
                v[..samples]
                    .chunks_exact(3)
                    .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
                    .collect(),
            ),
            (TextureData::F32(v), PixelFormat::Rgb) => {
                let widened: Vec<f32> = v[..samples]
                    .chunks_exact(3)
                    .flat_map(|px| [px[0], px[1], px[2], 1.0])
                    .collect();
                Cow::Owned(bytemuck::cast_slice::<f32, u8>(&widened).to_vec())
            }
        }
    }
}

impl From<&image::DynamicImage> for TextureData {
    fn from(img: &image::DynamicImage) -> Self {
        match img {
            image::DynamicImage::ImageRgb32F(_) | image::DynamicImage::ImageRgba32F(_) => {
                TextureData::F32(img.to_rgba32f().into_raw())
            }
            _ => TextureData::U8(img.to_rgba8().into_raw()),
        }
    }
}
