use crate::{
    foundation::error::TilePaintResult,
    render::context::RenderOutput,
    render::instructions::{MapElementContainer, ShapePaintContainer},
};

/// Rasterizer side of a tile render. Implementations receive instructions in final paint order.
pub trait PaintBackend {
    /// Draw one way instruction.
    fn draw_way(&mut self, way: &ShapePaintContainer) -> TilePaintResult<()>;

    /// Draw one label. Called only after every way has been drawn.
    fn draw_label(&mut self, label: &MapElementContainer) -> TilePaintResult<()>;
}

/// Counts of what [`paint_tile`] handed to the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Way instructions drawn.
    pub ways: usize,
    /// Labels drawn.
    pub labels: usize,
}

/// Drive `backend` over a finished tile: ways layer by layer, level by level, then labels.
///
/// Stops at the first backend error.
pub fn paint_tile<B: PaintBackend + ?Sized>(
    backend: &mut B,
    output: &RenderOutput,
) -> TilePaintResult<PaintStats> {
    let mut stats = PaintStats::default();

    for way in output.paint_order() {
        backend.draw_way(way)?;
        stats.ways += 1;
    }
    for label in output.labels() {
        backend.draw_label(label)?;
        stats.labels += 1;
    }

    tracing::debug!(ways = stats.ways, labels = stats.labels, "tile painted");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
