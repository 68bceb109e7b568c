use thiserror::Error;

use crate::texture::TextureId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Texture extent must be non-zero, got {width}x{height}")]
    ZeroExtent { width: u32, height: u32 },

    #[error("Sample buffer too small: expected at least {expected} samples, found {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    #[error("Texture {0} was used after being disposed")]
    Disposed(TextureId),

    #[error("Texture size {width}x{height} exceeds the device limit of {limit}")]
    DimensionTooLarge { width: u32, height: u32, limit: u32 },
}
