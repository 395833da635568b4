use crate::foundation::core::Tile;

/// Per-tile render parameters handed to a [`RenderContext`](crate::RenderContext).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RendererJob {
    /// Tile being rendered; its zoom level drives stroke scaling.
    pub tile: Tile,
    /// Multiplier applied to every text size of the theme.
    #[serde(default = "default_text_scale")]
    pub text_scale: f32,
}

fn default_text_scale() -> f32 {
    1.0
}

impl RendererJob {
    /// Build a job for `tile` with the given text scale.
    pub fn new(tile: Tile, text_scale: f32) -> Self {
        Self { tile, text_scale }
    }

    /// Zoom level of the job's tile.
    pub fn zoom_level(&self) -> i8 {
        self.tile.zoom_level
    }
}
