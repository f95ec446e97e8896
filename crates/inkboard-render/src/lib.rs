//! Inkboard Render Library
//!
//! Turns a board, its in-progress strokes and a guide mode into an ordered
//! display list. Producing pixels is left to a host-supplied [`Painter`].

mod renderer;
mod scene;

pub use renderer::{
    ERASER_CURSOR_DIAMETER, EraserCursor, GuideStyle, Painter, RenderContext, RenderResult,
    RendererError, stroke_style,
};
pub use scene::{DrawCommand, Scene, build_scene};
