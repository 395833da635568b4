use crate::{
    foundation::error::{TilePaintError, TilePaintResult},
    job::RendererJob,
    render::instructions::{MapElementContainer, ShapePaintContainer},
    theme::RenderTheme,
};

/// Number of coarse drawing layers. Independent of the theme's level count.
pub const LAYERS: usize = 11;

/// Per-zoom-step stroke growth above [`STROKE_MIN_ZOOM_LEVEL`].
pub const STROKE_INCREASE: f32 = 1.5;

/// Zoom level at and below which strokes keep their base width.
pub const STROKE_MIN_ZOOM_LEVEL: i8 = 12;

/// The levels of one drawing layer; each level is a bucket in paint order.
pub type WayLayer = Vec<Vec<ShapePaintContainer>>;

/// Stroke scale factor for a zoom level: `1.5 ^ max(zoom - 12, 0)`.
pub fn stroke_scale_factor(zoom_level: i8) -> f32 {
    let diff = (i32::from(zoom_level) - i32::from(STROKE_MIN_ZOOM_LEVEL)).max(0);
    STROKE_INCREASE.powi(diff)
}

/// Accumulates the draw instructions and labels for a single tile render.
///
/// The grid is `LAYERS` layers by `levels` levels; painting visits layers in ascending order,
/// levels in ascending order, and instructions within a level in insertion order. Labels are kept
/// apart and drawn after every way.
///
/// Construction scales the theme for the job's zoom level and text scale. The theme is borrowed
/// mutably for the whole render, so one theme instance can never back two renders at once; build
/// one [`Theme`](crate::Theme) per render from a shared [`ThemeDef`](crate::ThemeDef) instead.
#[derive(Debug)]
pub struct RenderContext<'a, T: RenderTheme + ?Sized> {
    theme: &'a mut T,
    job: &'a RendererJob,
    levels: usize,
    ways: Vec<WayLayer>,
    labels: Vec<MapElementContainer>,
    drawing_layer: Option<usize>,
}

impl<'a, T: RenderTheme + ?Sized> RenderContext<'a, T> {
    /// Allocate the drawing grid and scale `theme` for `job`.
    #[tracing::instrument(
        skip_all,
        fields(zoom_level = job.zoom_level(), text_scale = job.text_scale)
    )]
    pub fn new(theme: &'a mut T, job: &'a RendererJob) -> Self {
        let levels = theme.levels();
        let ways: Vec<WayLayer> = (0..LAYERS)
            .map(|_| (0..levels).map(|_| Vec::new()).collect())
            .collect();

        let stroke_factor = stroke_scale_factor(job.zoom_level());
        theme.scale_stroke_width(stroke_factor);
        theme.scale_text_size(job.text_scale);
        tracing::debug!(levels, stroke_factor, "render context ready");

        Self {
            theme,
            job,
            levels,
            ways,
            labels: Vec::new(),
            drawing_layer: None,
        }
    }

    /// Point the insertion cursor at `layer`, clamped into `0..LAYERS`.
    pub fn set_drawing_layer(&mut self, layer: i32) {
        let clamped = layer.clamp(0, LAYERS as i32 - 1) as usize;
        self.drawing_layer = Some(clamped);
    }

    /// Append `element` to bucket `level` of the currently selected layer.
    ///
    /// Fails without inserting anything when no layer has been selected yet or when `level` is not
    /// below the theme's level count.
    pub fn add_to_current_drawing_layer(
        &mut self,
        level: usize,
        element: ShapePaintContainer,
    ) -> TilePaintResult<()> {
        let layer = self.drawing_layer.ok_or(TilePaintError::NoDrawingLayer)?;
        let bucket = self.ways[layer]
            .get_mut(level)
            .ok_or(TilePaintError::LevelOutOfRange {
                level,
                levels: self.levels,
            })?;
        bucket.push(element);
        Ok(())
    }

    /// Append a label; labels are painted after all ways, in insertion order.
    pub fn add_label(&mut self, label: MapElementContainer) {
        self.labels.push(label);
    }

    /// Currently selected layer, if any.
    pub fn drawing_layer(&self) -> Option<usize> {
        self.drawing_layer
    }

    /// Level count captured from the theme at construction.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The whole drawing grid, indexed `[layer][level]`.
    pub fn ways(&self) -> &[WayLayer] {
        &self.ways
    }

    /// One layer of the drawing grid, or `None` when `layer >= LAYERS`.
    pub fn layer(&self, layer: usize) -> Option<&[Vec<ShapePaintContainer>]> {
        self.ways.get(layer).map(Vec::as_slice)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[MapElementContainer] {
        &self.labels
    }

    /// The scaled theme, for style lookups by the rule engine.
    pub fn theme(&self) -> &T {
        &*self.theme
    }

    /// The job this context renders.
    pub fn job(&self) -> &RendererJob {
        self.job
    }

    /// Draw instructions in final paint order.
    pub fn paint_order(&self) -> impl Iterator<Item = &ShapePaintContainer> {
        self.ways.iter().flatten().flatten()
    }

    /// Release the theme borrow and hand the finished buckets over for painting.
    pub fn into_output(self) -> RenderOutput {
        RenderOutput {
            levels: self.levels,
            ways: self.ways,
            labels: self.labels,
        }
    }
}

/// Finished buckets of a tile render, read-only input to the rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOutput {
    levels: usize,
    ways: Vec<WayLayer>,
    labels: Vec<MapElementContainer>,
}

impl RenderOutput {
    /// Level count of every layer.
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// The drawing grid, indexed `[layer][level]`.
    pub fn ways(&self) -> &[WayLayer] {
        &self.ways
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[MapElementContainer] {
        &self.labels
    }

    /// Draw instructions in final paint order.
    pub fn paint_order(&self) -> impl Iterator<Item = &ShapePaintContainer> {
        self.ways.iter().flatten().flatten()
    }

    /// Total number of draw instructions across the grid.
    pub fn way_count(&self) -> usize {
        self.ways.iter().flatten().map(Vec::len).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
