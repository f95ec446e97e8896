//! Inkboard Core Library
//!
//! Platform-agnostic document model, stroke capture and guide geometry for an
//! embeddable freehand drawing surface.

pub mod board;
pub mod capture;
pub mod color;
pub mod content;
pub mod error;
pub mod geometry;
pub mod guides;
pub mod stroke;
pub mod theme;

pub use board::Board;
pub use capture::{
    CaptureConfig, CaptureState, ChromeSlots, CommitMode, StrokeCapture, ERASER_WIDTH,
    MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
};
pub use color::{Color, ColorValues};
pub use content::{BoardImage, BoardText, ImageSource, Renderable, RenderableFactory};
pub use error::{DecodeError, EncodeError, GeometryError};
pub use geometry::{Point, Size};
pub use guides::{GuideMode, MAX_GRID_COLUMNS, guide_path, guide_segments};
pub use stroke::{Stroke, StrokeId, StrokeKind};
pub use theme::Theme;
