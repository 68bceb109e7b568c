use serde::{Deserialize, Serialize};

/// How 8-bit samples should be interpreted when sampled in a shader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpace {
    #[default]
    Linear,
    Srgb,
}

/// Per-texture settings. Every field is optional when deserialized so host
/// layers can keep these in their own config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureOptions {
    /// Debug label forwarded to the GPU texture.
    pub label: Option<String>,
    pub color_space: ColorSpace,
}

impl TextureOptions {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }
}
