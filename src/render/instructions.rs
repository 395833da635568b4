use crate::foundation::core::{BezPath, Point, Rgba8};

/// Geometry of a single way draw instruction, in tile pixel space.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeContainer {
    /// An open or closed path (roads, rivers, area outlines).
    Polyline(BezPath),
    /// A circle around a point (e.g. rendered POIs).
    Circle {
        /// Circle center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
    },
}

/// Whether a shape is filled or stroked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PaintStyle {
    /// Fill the interior.
    Fill,
    /// Stroke the outline with [`Paint::stroke_width`].
    Stroke,
}

/// Paint attributes attached to a shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paint {
    /// Paint color.
    pub color: Rgba8,
    /// Fill or stroke.
    pub style: PaintStyle,
    /// Already zoom-scaled stroke width; ignored for fills.
    pub stroke_width: f32,
}

impl Paint {
    /// A fill paint.
    pub fn fill(color: Rgba8) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
        }
    }

    /// A stroke paint of the given width.
    pub fn stroke(color: Rgba8, stroke_width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width,
        }
    }
}

/// A shape plus the paint it is drawn with: one entry of the drawing grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapePaintContainer {
    /// Geometry to draw.
    pub shape: ShapeContainer,
    /// How to draw it.
    pub paint: Paint,
    /// Perpendicular offset in pixels (used for parallel casings); 0 for none.
    pub dy: f32,
}

impl ShapePaintContainer {
    /// Pair a shape with a paint, without offset.
    pub fn new(shape: ShapeContainer, paint: Paint) -> Self {
        Self {
            shape,
            paint,
            dy: 0.0,
        }
    }

    /// Set the perpendicular offset.
    pub fn with_dy(mut self, dy: f32) -> Self {
        self.dy = dy;
        self
    }
}

/// What a label draws.
#[derive(Clone, Debug, PartialEq)]
pub enum MapElementKind {
    /// A text caption, already text-scaled.
    Caption {
        /// Caption text.
        text: String,
        /// Font size in pixels.
        font_size: f32,
        /// Text color.
        fill: Rgba8,
    },
    /// An icon referenced by symbol id.
    Symbol {
        /// Symbol id resolved by the rasterizer.
        symbol: String,
    },
}

/// A label or icon composited after all ways, in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapElementContainer {
    /// Anchor position in tile pixel space.
    pub position: Point,
    /// Collision priority; higher wins when the rasterizer resolves overlaps.
    pub priority: i32,
    /// Caption or symbol payload.
    pub kind: MapElementKind,
}

impl MapElementContainer {
    /// A caption label.
    pub fn caption(
        position: Point,
        text: impl Into<String>,
        font_size: f32,
        fill: Rgba8,
    ) -> Self {
        Self {
            position,
            priority: 0,
            kind: MapElementKind::Caption {
                text: text.into(),
                font_size,
                fill,
            },
        }
    }

    /// A symbol label.
    pub fn symbol(position: Point, symbol: impl Into<String>) -> Self {
        Self {
            position,
            priority: 0,
            kind: MapElementKind::Symbol {
                symbol: symbol.into(),
            },
        }
    }

    /// Set the collision priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
