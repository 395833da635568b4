//! tilepaint collects the drawing work of a single map tile into paint order.
//!
//! While a theme's rules are matched against a tile's vector data, the rule engine feeds the
//! results into a [`RenderContext`]:
//!
//! 1. **Construct**: `RenderContext::new(&mut theme, &job)` allocates an 11-layer grid, each layer
//!    split into the theme's level count, and scales the theme for the job's zoom level and text
//!    scale.
//! 2. **Accumulate**: select a layer with [`RenderContext::set_drawing_layer`], then append way
//!    instructions per level with [`RenderContext::add_to_current_drawing_layer`]; labels go to
//!    [`RenderContext::add_label`].
//! 3. **Paint**: [`RenderContext::into_output`] hands the finished buckets to a
//!    [`PaintBackend`] through [`paint_tile`]: layers ascending, levels ascending, insertion order
//!    within a level, then labels.
//!
//! A context serves exactly one tile render and is single-threaded. Themes are borrowed mutably
//! for the render; use one [`Theme`] per concurrent render, all built from a shared
//! [`ThemeDef`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod job;
mod render;
mod theme;

pub use crate::foundation::core::{BezPath, Point, Rect, Rgba8, Tile};
pub use crate::foundation::error::{TilePaintError, TilePaintResult};
pub use crate::job::RendererJob;
pub use crate::render::context::{
    LAYERS, RenderContext, RenderOutput, STROKE_INCREASE, STROKE_MIN_ZOOM_LEVEL, WayLayer,
    stroke_scale_factor,
};
pub use crate::render::instructions::{
    MapElementContainer, MapElementKind, Paint, PaintStyle, ShapeContainer, ShapePaintContainer,
};
pub use crate::render::paint::{PaintBackend, PaintStats, paint_tile};
pub use crate::theme::RenderTheme;
pub use crate::theme::model::{StyleDef, Theme, ThemeDef};
