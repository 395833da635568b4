use super::*;
use crate::{
    foundation::core::{BezPath, Point, Rgba8, Tile},
    foundation::error::TilePaintError,
    job::RendererJob,
    render::context::RenderContext,
    render::instructions::{Paint, ShapeContainer},
    theme::RenderTheme,
};

struct Levels(usize);

impl RenderTheme for Levels {
    fn levels(&self) -> usize {
        self.0
    }

    fn scale_stroke_width(&mut self, _factor: f32) {}

    fn scale_text_size(&mut self, _factor: f32) {}
}

#[derive(Debug, PartialEq)]
enum Event {
    Way(f32),
    Label(i32),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
    fail_on_label: bool,
}

impl PaintBackend for Recorder {
    fn draw_way(&mut self, way: &ShapePaintContainer) -> TilePaintResult<()> {
        self.events.push(Event::Way(way.paint.stroke_width));
        Ok(())
    }

    fn draw_label(&mut self, label: &MapElementContainer) -> TilePaintResult<()> {
        if self.fail_on_label {
            return Err(TilePaintError::Other(anyhow::anyhow!("label atlas full")));
        }
        self.events.push(Event::Label(label.priority));
        Ok(())
    }
}

fn line(width: f32) -> ShapePaintContainer {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((256.0, 256.0));
    ShapePaintContainer::new(
        ShapeContainer::Polyline(path),
        Paint::stroke(Rgba8::BLACK, width),
    )
}

fn output() -> RenderOutput {
    let mut theme = Levels(2);
    let job = RendererJob::new(Tile::new(0, 0, 12), 1.0);
    let mut ctx = RenderContext::new(&mut theme, &job);
    ctx.add_label(MapElementContainer::symbol(Point::ORIGIN, "peak").with_priority(7));
    ctx.set_drawing_layer(9);
    ctx.add_to_current_drawing_layer(0, line(3.0)).unwrap();
    ctx.set_drawing_layer(1);
    ctx.add_to_current_drawing_layer(1, line(2.0)).unwrap();
    ctx.add_to_current_drawing_layer(0, line(1.0)).unwrap();
    ctx.add_label(
        MapElementContainer::caption(Point::new(5.0, 5.0), "Main St", 12.0, Rgba8::BLACK)
            .with_priority(3),
    );
    ctx.into_output()
}

#[test]
fn ways_are_painted_before_labels_in_grid_order() {
    let mut rec = Recorder::default();
    let stats = paint_tile(&mut rec, &output()).unwrap();
    assert_eq!(stats, PaintStats { ways: 3, labels: 2 });
    assert_eq!(
        rec.events,
        vec![
            Event::Way(1.0),
            Event::Way(2.0),
            Event::Way(3.0),
            Event::Label(7),
            Event::Label(3),
        ]
    );
}

#[test]
fn backend_errors_stop_painting() {
    let mut rec = Recorder {
        fail_on_label: true,
        ..Recorder::default()
    };
    let err = paint_tile(&mut rec, &output()).unwrap_err();
    assert!(err.to_string().contains("label atlas full"));
    assert_eq!(rec.events.len(), 3);
}
