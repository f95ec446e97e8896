//! Display list built from a render context.

use crate::renderer::{EraserCursor, Painter, RenderContext, RenderResult, stroke_style};
use inkboard_core::{Point, Renderable, guide_path};
use kurbo::{BezPath, Rect, Shape};
use peniko::Color;

/// One drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Image {
        renderable: Renderable,
        center: Point,
    },
    Text {
        renderable: Renderable,
        rect: Rect,
    },
    Stroke {
        path: BezPath,
        color: Color,
        style: kurbo::Stroke,
    },
    Guides {
        path: BezPath,
        color: Color,
        style: kurbo::Stroke,
    },
    EraserCursor(EraserCursor),
}

/// Ordered draw commands for one frame.
#[derive(Debug, Clone)]
pub struct Scene {
    pub background: Color,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Send every command to `painter`, in order.
    pub fn replay<P: Painter + ?Sized>(&self, painter: &mut P) {
        painter.clear(self.background);
        for command in &self.commands {
            match command {
                DrawCommand::Image { renderable, center } => painter.draw_image(renderable, *center),
                DrawCommand::Text { renderable, rect } => painter.draw_text(renderable, *rect),
                DrawCommand::Stroke { path, color, style }
                | DrawCommand::Guides { path, color, style } => {
                    painter.stroke_path(path, *color, style);
                }
                DrawCommand::EraserCursor(cursor) => {
                    let circle = cursor.circle();
                    painter.fill_circle(circle, cursor.fill);
                    painter.stroke_path(
                        &circle.to_path(0.1),
                        cursor.outline,
                        &kurbo::Stroke::new(EraserCursor::OUTLINE_WIDTH),
                    );
                }
            }
        }
    }
}

/// Build the display list for a frame.
///
/// Images come first, then texts, strokes, guides and finally the eraser
/// cursor. Images and texts without a renderable are skipped, as are texts
/// with an empty string.
pub fn build_scene(ctx: &RenderContext) -> RenderResult<Scene> {
    let mut commands = Vec::new();

    for image in &ctx.board.images {
        if let Some(renderable) = image.renderable() {
            commands.push(DrawCommand::Image {
                renderable: renderable.clone(),
                center: image.point(),
            });
        }
    }

    for text in &ctx.board.texts {
        if text.string().is_empty() {
            continue;
        }
        if let Some(renderable) = text.renderable() {
            commands.push(DrawCommand::Text {
                renderable: renderable.clone(),
                rect: Rect::from_origin_size(text.point().to_kurbo(), text.size().to_kurbo()),
            });
        }
    }

    for stroke in ctx.strokes {
        commands.push(DrawCommand::Stroke {
            path: stroke.to_path(),
            color: stroke.color().into(),
            style: stroke_style(stroke.width()),
        });
    }

    let guides = guide_path(ctx.surface_size, ctx.guide_mode)?;
    if !guides.elements().is_empty() {
        commands.push(DrawCommand::Guides {
            path: guides,
            color: ctx.guide_style.color,
            style: ctx.guide_style.stroke(),
        });
    }

    if let Some(cursor) = ctx.eraser_cursor {
        commands.push(DrawCommand::EraserCursor(cursor));
    }

    log::trace!("Built scene with {} commands", commands.len());
    Ok(Scene {
        background: ctx.board.background_color().into(),
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{ERASER_CURSOR_DIAMETER, RendererError};
    use inkboard_core::{
        Board, BoardImage, BoardText, CaptureConfig, CommitMode, GeometryError, GuideMode,
        ImageSource, Size, StrokeCapture, Theme,
    };
    use kurbo::{Circle, Vec2};

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl Painter for Recorder {
        fn clear(&mut self, _color: Color) {
            self.log.push("clear".into());
        }

        fn draw_image(&mut self, _renderable: &Renderable, center: Point) {
            self.log.push(format!("image {} {}", center.x, center.y));
        }

        fn draw_text(&mut self, renderable: &Renderable, _rect: Rect) {
            let label = renderable.downcast_ref::<&str>().copied().unwrap_or("?");
            self.log.push(format!("text {label}"));
        }

        fn stroke_path(&mut self, _path: &BezPath, _color: Color, style: &kurbo::Stroke) {
            self.log.push(format!("stroke {}", style.width));
        }

        fn fill_circle(&mut self, circle: Circle, _color: Color) {
            self.log.push(format!("circle {}", circle.radius));
        }
    }

    fn surface() -> Size {
        Size::new(300.0, 210.0)
    }

    fn board_with_content() -> Board {
        let mut board = Board::empty();
        board
            .append_image(
                BoardImage::new(
                    Some(ImageSource::Link("a".into())),
                    Point::new(10.0, 20.0),
                    Size::new(5.0, 5.0),
                )
                .with_renderable(Renderable::new(())),
            )
            .append_image(BoardImage::new(None, Point::ZERO, Size::new(1.0, 1.0)))
            .append_text(
                BoardText::new("hello", Point::new(1.0, 2.0), Size::new(30.0, 10.0))
                    .with_renderable(Renderable::new("hello")),
            )
            .append_text(
                BoardText::new("", Point::ZERO, Size::new(1.0, 1.0))
                    .with_renderable(Renderable::new("empty")),
            );
        board
    }

    #[test]
    fn test_skips_items_without_renderable_or_text() {
        let board = board_with_content();
        let scene = build_scene(&RenderContext::new(&board, surface())).unwrap();
        assert_eq!(scene.commands.len(), 2);
        match &scene.commands[1] {
            DrawCommand::Text { rect, .. } => {
                assert_eq!(*rect, Rect::new(1.0, 2.0, 31.0, 12.0));
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_paint_order() {
        let mut capture = StrokeCapture::new(
            CaptureConfig::new(CommitMode::RealTime).with_surface_size(surface()),
        );
        capture.load_board(board_with_content());
        capture.set_stroke_width(3.0);
        capture.on_gesture_sample(Point::new(0.0, 0.0), Vec2::ZERO);
        capture.on_gesture_sample(Point::new(4.0, 4.0), Vec2::new(4.0, 4.0));
        capture.set_tool(true);

        let ctx = RenderContext::from_capture(&capture).with_guides(GuideMode::Ruled(10));
        let mut recorder = Recorder::default();
        build_scene(&ctx).unwrap().replay(&mut recorder);

        assert_eq!(
            recorder.log,
            vec![
                "clear",
                "image 10 20",
                "text hello",
                "stroke 3",
                "stroke 0.5",
                "circle 15",
                "stroke 1.5",
            ]
        );
    }

    #[test]
    fn test_uncommitted_strokes_are_drawn() {
        let mut capture = StrokeCapture::new(CaptureConfig::new(CommitMode::Deferred));
        capture.on_gesture_sample(Point::new(1.0, 1.0), Vec2::ZERO);
        assert!(capture.board().lines().is_empty());

        let scene = build_scene(&RenderContext::from_capture(&capture)).unwrap();
        assert!(matches!(scene.commands[0], DrawCommand::Stroke { .. }));
    }

    #[test]
    fn test_eraser_cursor_uses_theme() {
        let mut capture = StrokeCapture::new(
            CaptureConfig::new(CommitMode::Deferred).with_theme(Theme::Dark),
        );
        capture.set_tool(true);
        capture.on_gesture_sample(Point::new(40.0, 50.0), Vec2::ZERO);

        let ctx = RenderContext::from_capture(&capture);
        let cursor = ctx.eraser_cursor.unwrap();
        assert_eq!(cursor.center, Point::new(40.0, 50.0));
        assert_eq!(cursor.fill, Color::from(inkboard_core::Color::BLACK));
        assert!((cursor.circle().radius * 2.0 - ERASER_CURSOR_DIAMETER).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_cursor_for_pen() {
        let mut capture = StrokeCapture::default();
        capture.on_gesture_sample(Point::new(1.0, 1.0), Vec2::ZERO);
        assert!(RenderContext::from_capture(&capture).eraser_cursor.is_none());
    }

    #[test]
    fn test_stroke_style_is_round() {
        let style = stroke_style(2.0);
        assert_eq!(style.start_cap, kurbo::Cap::Round);
        assert_eq!(style.join, kurbo::Join::Round);
    }

    #[test]
    fn test_guide_errors_propagate() {
        let board = Board::empty();
        let ctx = RenderContext::new(&board, Size::ZERO).with_guides(GuideMode::Grid(10));
        assert!(matches!(
            build_scene(&ctx),
            Err(RendererError::Guides(GeometryError::DegenerateSurface { .. }))
        ));
    }
}
