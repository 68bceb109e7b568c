use crate::texture::TextureId;

/// Informational notifications emitted by [crate::GpuContext].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureEvent {
    /// Samples were written to the GPU.
    Uploaded { id: TextureId, version: u32 },
    /// A texture was disposed through the context.
    Disposed { id: TextureId },
}

pub type EventCallback = Box<dyn Fn(TextureEvent) + Send>;
