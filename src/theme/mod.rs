pub(crate) mod model;

/// The styling collaborator a [`RenderContext`](crate::RenderContext) renders against.
///
/// A theme reports how many draw-order levels it uses inside each layer and accepts the per-render
/// stroke and text scale factors. Factors replace earlier ones; they are not cumulative.
pub trait RenderTheme {
    /// Number of levels every layer of the drawing grid is split into.
    fn levels(&self) -> usize;

    /// Rescale every stroke-bearing style by `factor` relative to its base width.
    fn scale_stroke_width(&mut self, factor: f32);

    /// Rescale every text-bearing style by `factor` relative to its base size.
    fn scale_text_size(&mut self, factor: f32);
}
