//! Error types for board serialization and guide geometry.

use thiserror::Error;

/// Failure to turn bytes back into a [`Board`](crate::Board).
///
/// Decoding is all-or-nothing: no partial board is ever returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed board document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Color channel `{channel}` out of range: {value}")]
    ColorOutOfRange { channel: &'static str, value: f64 },
    #[error("Invalid image data: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid image URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Image {index} has more than one source set")]
    ConflictingImageSource { index: usize },
    #[error("Line {index} has no points")]
    EmptyStroke { index: usize },
    #[error("Line {index} has invalid width {width}")]
    InvalidWidth { index: usize, width: f64 },
}

/// Failure to serialize a board.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// JSON cannot carry NaN or infinity; the named field held one.
    #[error("Non-finite number in `{0}`")]
    NonFinite(&'static str),
    #[error("Color channel `{channel}` of `{field}` out of range: {value}")]
    ColorOutOfRange {
        field: &'static str,
        channel: &'static str,
        value: f64,
    },
    #[error("Line {index} has invalid width {width}")]
    InvalidWidth { index: usize, width: f64 },
}

/// Invalid input to the guide geometry functions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Guide line count must be positive, got {0}")]
    InvalidLineCount(u32),
    #[error("Surface has no area: {width}x{height}")]
    DegenerateSurface { width: f64, height: f64 },
    /// Grid columns are spaced by height, so a very wide surface needs too many.
    #[error("Grid needs {columns} columns, more than {max}")]
    TooManyColumns { columns: f64, max: u32 },
}
