mod binding;
mod context;
mod data;
mod format;
mod gpu;
mod options;
mod texture;

pub mod error;
pub mod events;

pub use binding::*;
pub use context::*;
pub use data::TextureData;
pub use format::{PixelFormat, SampleType};
pub use options::{ColorSpace, TextureOptions};
pub use texture::{DataTexture, DisposeListener, TextureId};
