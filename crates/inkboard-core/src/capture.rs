//! Stroke capture: turns pointer gestures into strokes and board snapshots.
//!
//! The host feeds one sample per pointer event. A sample whose cumulative
//! translation is zero starts a stroke; any other sample extends the stroke
//! being drawn. When a commit happens depends on the [`CommitMode`] picked at
//! construction: every change in real-time mode, or once per gesture in
//! deferred mode. Every event method returns the snapshot it published, if any.

use crate::board::Board;
use crate::color::Color;
use crate::content::Renderable;
use crate::geometry::{Point, Size};
use crate::stroke::{Stroke, StrokeKind};
use crate::theme::Theme;
use kurbo::Vec2;

/// Width of every eraser stroke.
pub const ERASER_WIDTH: f64 = 15.0;
/// Thinnest selectable pen width.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
/// Thickest selectable pen width.
pub const MAX_STROKE_WIDTH: f64 = 5.0;

/// When captured strokes are published to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommitMode {
    /// Publish after every change to the stroke list.
    RealTime,
    /// Publish once, when the gesture ends.
    #[default]
    Deferred,
}

/// Whether a stroke is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Active,
}

/// Host UI placed before and after the tool controls. Never inspected here.
#[derive(Debug, Clone, Default)]
pub struct ChromeSlots {
    pub leading: Option<Renderable>,
    pub trailing: Option<Renderable>,
}

/// Setup for a [`StrokeCapture`].
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub mode: CommitMode,
    pub theme: Theme,
    /// Initial pen color. `None` picks the theme's ink color.
    pub pen_color: Option<Color>,
    pub stroke_width: f64,
    pub eraser_width: f64,
    pub surface_size: Size,
    pub chrome: ChromeSlots,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            mode: CommitMode::default(),
            theme: Theme::default(),
            pen_color: None,
            stroke_width: MIN_STROKE_WIDTH,
            eraser_width: ERASER_WIDTH,
            surface_size: Size::ZERO,
            chrome: ChromeSlots::default(),
        }
    }
}

impl CaptureConfig {
    /// Default setup with the given commit mode.
    pub fn new(mode: CommitMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_pen_color(mut self, color: Color) -> Self {
        self.pen_color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_surface_size(mut self, size: Size) -> Self {
        self.surface_size = size;
        self
    }

    pub fn with_chrome(mut self, chrome: ChromeSlots) -> Self {
        self.chrome = chrome;
        self
    }
}

/// The stroke capture state machine.
#[derive(Debug, Clone)]
pub struct StrokeCapture {
    mode: CommitMode,
    eraser_width: f64,
    chrome: ChromeSlots,
    theme: Theme,
    pen_color: Color,
    stroke_width: f64,
    is_eraser: bool,
    surface_size: Size,
    state: CaptureState,
    /// Strokes being captured; the only copy the machine mutates.
    strokes: Vec<Stroke>,
    /// Last published (or host-loaded) board.
    board: Board,
    location: Option<Point>,
}

impl Default for StrokeCapture {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}

impl StrokeCapture {
    /// Create a machine from `config`.
    ///
    /// A non-positive eraser width falls back to [`ERASER_WIDTH`]. A pen color
    /// with a channel outside `[0, 1]` falls back to the theme's ink.
    pub fn new(config: CaptureConfig) -> Self {
        let eraser_width = if config.eraser_width.is_finite() && config.eraser_width > 0.0 {
            config.eraser_width
        } else {
            log::warn!("Invalid eraser width {}, using {ERASER_WIDTH}", config.eraser_width);
            ERASER_WIDTH
        };
        let mut capture = Self {
            mode: config.mode,
            eraser_width,
            chrome: config.chrome,
            theme: config.theme,
            pen_color: config.theme.ink_color(),
            stroke_width: MIN_STROKE_WIDTH,
            is_eraser: false,
            surface_size: config.surface_size,
            state: CaptureState::Idle,
            strokes: Vec::new(),
            board: Board::empty(),
            location: None,
        };
        if let Some(color) = config.pen_color {
            capture.set_pen_color(color);
        }
        capture.set_stroke_width(config.stroke_width);
        capture
    }

    /// Feed one pointer sample.
    ///
    /// `translation` is the offset from where the gesture started. Exactly zero
    /// starts a new stroke, even in the middle of a gesture.
    pub fn on_gesture_sample(
        &mut self,
        position: impl Into<Point>,
        translation: Vec2,
    ) -> Option<Board> {
        let position = position.into();
        self.location = Some(position);

        if translation == Vec2::ZERO {
            let stroke = self.start_stroke(position);
            log::debug!(
                "Starting {:?} stroke at ({}, {})",
                stroke.kind(),
                position.x,
                position.y
            );
            self.strokes.push(stroke);
            self.state = CaptureState::Active;
        } else {
            let stroke = match (self.state, self.strokes.last_mut()) {
                (CaptureState::Active, Some(stroke)) => stroke,
                _ => {
                    log::debug!("Ignoring drag sample with no stroke in progress");
                    return None;
                }
            };
            stroke.add_point(position);
            log::trace!("Stroke extended to {} points", stroke.len());
        }

        self.strokes_changed()
    }

    /// The pointer was lifted.
    pub fn on_gesture_end(&mut self) -> Option<Board> {
        if self.state == CaptureState::Idle {
            return None;
        }
        self.state = CaptureState::Idle;
        match self.mode {
            CommitMode::Deferred => {
                log::debug!("Gesture ended, committing {} strokes", self.strokes.len());
                Some(self.commit())
            }
            CommitMode::RealTime => None,
        }
    }

    /// Switch between pen and eraser.
    pub fn set_tool(&mut self, is_eraser: bool) {
        self.is_eraser = is_eraser;
    }

    /// Select the pen color. Colors with a channel outside `[0, 1]` are ignored.
    pub fn set_pen_color(&mut self, color: Color) {
        if !color.is_normalized() {
            log::warn!("Ignoring pen color outside the unit range: {color:?}");
            return;
        }
        self.pen_color = color;
    }

    /// Set the pen width, clamped to the selectable range.
    pub fn set_stroke_width(&mut self, width: f64) {
        if !width.is_finite() {
            log::warn!("Ignoring non-finite stroke width {width}");
            return;
        }
        let clamped = width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH);
        if clamped != width {
            log::warn!("Stroke width {width} clamped to {clamped}");
        }
        self.stroke_width = clamped;
    }

    /// The host resized the drawing area. Applies to the next snapshot.
    pub fn set_surface_size(&mut self, size: impl Into<Size>) {
        self.surface_size = size.into();
    }

    /// Follow a color scheme change.
    ///
    /// Eraser strokes are repainted with the new background. A pen still
    /// using the old theme's ink switches to the new one.
    pub fn on_theme_change(&mut self, theme: Theme) -> Option<Board> {
        if self.pen_color == self.theme.ink_color() {
            self.pen_color = theme.ink_color();
        }
        self.theme = theme;

        let erase = theme.erase_color();
        let mut changed = false;
        for stroke in self
            .strokes
            .iter_mut()
            .filter(|s| s.kind() == StrokeKind::Eraser && s.color() != erase)
        {
            stroke.set_color(erase);
            changed = true;
        }

        if changed {
            self.strokes_changed()
        } else {
            None
        }
    }

    /// Drop every stroke and switch back to the pen. Always publishes, so the
    /// result is never `None`.
    ///
    /// Images and texts of the current board are kept.
    pub fn on_clear(&mut self) -> Option<Board> {
        log::debug!("Clearing {} strokes", self.strokes.len());
        self.is_eraser = false;
        self.strokes.clear();
        self.state = CaptureState::Idle;
        Some(self.commit())
    }

    /// Bind a board the host built or decoded.
    ///
    /// Its strokes become the strokes being captured; later commits keep its
    /// images and texts. Any gesture in progress is abandoned.
    pub fn load_board(&mut self, board: Board) {
        self.strokes = board.lines.clone();
        self.board = board;
        self.state = CaptureState::Idle;
    }

    /// The last published or loaded board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Strokes including uncommitted ones.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get the capture state.
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Check if a stroke is being drawn.
    pub fn is_active(&self) -> bool {
        self.state == CaptureState::Active
    }

    /// Get the commit mode.
    pub fn mode(&self) -> CommitMode {
        self.mode
    }

    /// Get the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Check if the eraser is selected.
    pub fn is_eraser(&self) -> bool {
        self.is_eraser
    }

    /// Get the pen color.
    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    /// Get the pen width.
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Get the drawing area size.
    pub fn surface_size(&self) -> Size {
        self.surface_size
    }

    /// Position of the most recent sample.
    pub fn pointer_location(&self) -> Option<Point> {
        self.location
    }

    /// Host chrome handles.
    pub fn chrome(&self) -> &ChromeSlots {
        &self.chrome
    }

    fn start_stroke(&self, position: Point) -> Stroke {
        if self.is_eraser {
            Stroke::new(
                position,
                self.theme.erase_color(),
                self.eraser_width,
                StrokeKind::Eraser,
            )
        } else {
            Stroke::new(position, self.pen_color, self.stroke_width, StrokeKind::Pen)
        }
    }

    fn strokes_changed(&mut self) -> Option<Board> {
        match self.mode {
            CommitMode::RealTime => Some(self.commit()),
            CommitMode::Deferred => None,
        }
    }

    fn commit(&mut self) -> Board {
        let board = Board::snapshot(
            self.surface_size,
            self.theme.background_color(),
            self.strokes.clone(),
            &self.board,
        );
        self.board = board.clone();
        board
    }
}
