//! Headless host driving the capture state machine.

use std::path::Path;

use inkboard_core::{
    Board, BoardImage, BoardText, CaptureConfig, CommitMode, DecodeError, EncodeError, GuideMode,
    ImageSource, Point, Renderable, RenderableFactory, Size, StrokeCapture, Theme,
};
use inkboard_render::{Painter, RenderContext, RendererError, build_scene};
use kurbo::{BezPath, Circle, Rect, Vec2};
use peniko::Color;
use thiserror::Error;

/// Host errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to encode board: {0}")]
    Encode(#[from] EncodeError),
    #[error("Failed to decode board: {0}")]
    Decode(#[from] DecodeError),
    #[error("Failed to render frame: {0}")]
    Render(#[from] RendererError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Host settings.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub surface: Size,
    pub mode: CommitMode,
    pub theme: Theme,
    pub guides: GuideMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            surface: Size::new(300.0, 210.0),
            mode: CommitMode::Deferred,
            theme: Theme::Light,
            guides: GuideMode::Ruled(12),
        }
    }
}

/// Builds text labels in place of real rasterized content.
pub struct LabelFactory;

impl RenderableFactory for LabelFactory {
    fn text(&self, text: &BoardText) -> Option<Renderable> {
        Some(Renderable::new(format!("text \"{}\"", text.string())))
    }

    fn image(&self, image: &BoardImage) -> Option<Renderable> {
        let label = match image.source()? {
            ImageSource::Data(data) => format!("image ({} bytes)", data.len()),
            ImageSource::Url(url) => format!("image {url}"),
            ImageSource::Link(link) => format!("image <{link}>"),
        };
        Some(Renderable::new(label))
    }
}

/// Painter that logs each command instead of drawing it.
#[derive(Debug, Default)]
pub struct LogPainter {
    pub commands: usize,
}

impl LogPainter {
    fn label(renderable: &Renderable) -> &str {
        renderable.downcast_ref::<String>().map_or("?", String::as_str)
    }
}

impl Painter for LogPainter {
    fn draw_image(&mut self, renderable: &Renderable, center: Point) {
        self.commands += 1;
        log::info!("{} at ({}, {})", Self::label(renderable), center.x, center.y);
    }

    fn draw_text(&mut self, renderable: &Renderable, rect: Rect) {
        self.commands += 1;
        log::info!("{} in {:?}", Self::label(renderable), rect);
    }

    fn stroke_path(&mut self, path: &BezPath, _color: Color, style: &kurbo::Stroke) {
        self.commands += 1;
        log::info!(
            "stroke {} path elements, width {}",
            path.elements().len(),
            style.width
        );
    }

    fn fill_circle(&mut self, circle: Circle, _color: Color) {
        self.commands += 1;
        log::info!("circle at {:?}, r = {}", circle.center, circle.radius);
    }
}

/// A host bound to a single board slot.
pub struct Host {
    config: AppConfig,
    capture: StrokeCapture,
    /// Snapshots received from the capture machine.
    pub published: usize,
}

impl Host {
    /// Create a host with an empty board.
    pub fn new(config: AppConfig) -> Self {
        let capture = StrokeCapture::new(
            CaptureConfig::new(config.mode)
                .with_theme(config.theme)
                .with_surface_size(config.surface),
        );
        Self {
            config,
            capture,
            published: 0,
        }
    }

    /// Load serialized bytes into the board slot.
    pub fn open(&mut self, bytes: &[u8]) -> Result<(), AppError> {
        let mut board = Board::decode(bytes)?;
        let missing = board.rehydrate(&LabelFactory);
        log::info!(
            "Opened board with {} lines, {} images, {} texts ({missing} without renderable)",
            board.lines().len(),
            board.images.len(),
            board.texts.len()
        );
        self.capture.load_board(board);
        Ok(())
    }

    /// Load a board file into the board slot.
    pub fn open_file(&mut self, path: &Path) -> Result<(), AppError> {
        let bytes = std::fs::read(path)?;
        self.open(&bytes)
    }

    /// Write the board slot to `path`.
    pub fn save_file(&self, path: &Path) -> Result<(), AppError> {
        std::fs::write(path, self.save()?)?;
        log::info!("Saved board to {}", path.display());
        Ok(())
    }

    /// Feed one gesture through the capture machine.
    pub fn replay_gesture(&mut self, points: &[Point]) {
        let Some(&start) = points.first() else {
            return;
        };
        for point in points {
            let translation = Vec2::new(point.x - start.x, point.y - start.y);
            let snapshot = self.capture.on_gesture_sample(*point, translation);
            self.receive(snapshot);
        }
        let ended = self.capture.on_gesture_end();
        self.receive(ended);
    }

    /// Switch between pen and eraser for the next gesture.
    pub fn set_eraser(&mut self, is_eraser: bool) {
        self.capture.set_tool(is_eraser);
    }

    /// Paint the current frame. Returns how many commands were issued.
    pub fn frame<P: Painter>(&self, painter: &mut P) -> Result<usize, AppError> {
        let ctx = RenderContext::from_capture(&self.capture).with_guides(self.config.guides);
        let scene = build_scene(&ctx)?;
        scene.replay(painter);
        Ok(scene.commands.len())
    }

    /// Serialize the board slot.
    pub fn save(&self) -> Result<Vec<u8>, AppError> {
        Ok(self.capture.board().encode()?)
    }

    /// The last published or opened board.
    pub fn board(&self) -> &Board {
        self.capture.board()
    }

    fn receive(&mut self, snapshot: Option<Board>) {
        if let Some(board) = snapshot {
            self.published += 1;
            log::debug!("Received board with {} lines", board.lines().len());
        }
    }
}

/// A small wave across the surface, used as the demo gesture.
pub fn demo_gesture(surface: Size) -> Vec<Point> {
    (0..=20)
        .map(|i| {
            let t = f64::from(i) / 20.0;
            Point::new(
                surface.width * (0.1 + 0.8 * t),
                surface.height * (0.5 + 0.2 * (t * std::f64::consts::TAU).sin()),
            )
        })
        .collect()
}
