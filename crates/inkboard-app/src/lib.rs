//! Inkboard Application
//!
//! Headless host wiring the capture state machine to the scene builder and
//! the board codec.

mod host;

pub use host::{AppConfig, AppError, Host, LabelFactory, LogPainter, demo_gesture};
