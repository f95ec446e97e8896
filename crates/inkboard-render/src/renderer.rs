//! Render context and the painter abstraction.

use inkboard_core::{Board, GeometryError, GuideMode, Point, Renderable, Size, Stroke, StrokeCapture};
use kurbo::{BezPath, Cap, Circle, Join, Rect};
use peniko::Color;
use thiserror::Error;

/// Diameter of the eraser cursor circle.
pub const ERASER_CURSOR_DIAMETER: f64 = 30.0;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Guide geometry failed: {0}")]
    Guides(#[from] GeometryError),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Presentation of guide lines: thin, light gray and dashed.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideStyle {
    pub color: Color,
    pub width: f64,
    pub dash_pattern: [f64; 2],
    pub dash_offset: f64,
}

impl Default for GuideStyle {
    fn default() -> Self {
        Self {
            color: inkboard_core::Color::gray(0.8).into(),
            width: 0.5,
            dash_pattern: [3.0, 5.0],
            dash_offset: 3.0,
        }
    }
}

impl GuideStyle {
    pub fn stroke(&self) -> kurbo::Stroke {
        kurbo::Stroke::new(self.width)
            .with_caps(Cap::Round)
            .with_dashes(self.dash_offset, self.dash_pattern)
    }
}

/// Round-capped, round-joined outline used for every freehand stroke.
pub fn stroke_style(width: f64) -> kurbo::Stroke {
    kurbo::Stroke::new(width)
        .with_caps(Cap::Round)
        .with_join(Join::Round)
        .with_miter_limit(0.0)
}

/// Circle following the pointer while the eraser is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraserCursor {
    pub center: Point,
    /// Erase color of the current theme.
    pub fill: Color,
    /// Ink color of the current theme.
    pub outline: Color,
}

impl EraserCursor {
    pub const OUTLINE_WIDTH: f64 = 1.5;

    pub fn circle(&self) -> Circle {
        Circle::new(self.center.to_kurbo(), ERASER_CURSOR_DIAMETER / 2.0)
    }
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Board supplying images, texts and background.
    pub board: &'a Board,
    /// Strokes to draw. Defaults to the board's committed lines.
    pub strokes: &'a [Stroke],
    /// Size of the drawing area.
    pub surface_size: Size,
    pub guide_mode: GuideMode,
    pub guide_style: GuideStyle,
    pub eraser_cursor: Option<EraserCursor>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(board: &'a Board, surface_size: Size) -> Self {
        Self {
            board,
            strokes: board.lines(),
            surface_size,
            guide_mode: GuideMode::Blank,
            guide_style: GuideStyle::default(),
            eraser_cursor: None,
        }
    }

    /// Frame for a live capture: its uncommitted strokes and, with the eraser
    /// selected, a cursor at the last pointer position.
    pub fn from_capture(capture: &'a StrokeCapture) -> Self {
        let theme = capture.theme();
        let cursor = capture
            .pointer_location()
            .filter(|_| capture.is_eraser())
            .map(|center| EraserCursor {
                center,
                fill: theme.erase_color().into(),
                outline: theme.ink_color().into(),
            });
        Self::new(capture.board(), capture.surface_size())
            .with_strokes(capture.strokes())
            .with_eraser_cursor(cursor)
    }

    pub fn with_strokes(mut self, strokes: &'a [Stroke]) -> Self {
        self.strokes = strokes;
        self
    }

    pub fn with_guides(mut self, mode: GuideMode) -> Self {
        self.guide_mode = mode;
        self
    }

    pub fn with_guide_style(mut self, style: GuideStyle) -> Self {
        self.guide_style = style;
        self
    }

    pub fn with_eraser_cursor(mut self, cursor: Option<EraserCursor>) -> Self {
        self.eraser_cursor = cursor;
        self
    }
}

/// Drawing backend supplied by the host.
///
/// Commands arrive in paint order; later commands cover earlier ones.
pub trait Painter {
    /// Clear the surface before a frame.
    fn clear(&mut self, _color: Color) {}

    /// Draw an image centered on `center`.
    fn draw_image(&mut self, renderable: &Renderable, center: Point);

    /// Draw laid-out text inside `rect`.
    fn draw_text(&mut self, renderable: &Renderable, rect: Rect);

    /// Stroke a path.
    fn stroke_path(&mut self, path: &BezPath, color: Color, style: &kurbo::Stroke);

    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color);
}
