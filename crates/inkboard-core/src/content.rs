//! Text blocks and images placed on a board.
//!
//! Each placed item has persisted fields (what it is and where it sits) and
//! an optional [`Renderable`]: a host-built drawable that never leaves the
//! process. After a board is decoded every renderable is `None` until the
//! host calls [`Board::rehydrate`](crate::Board::rehydrate).

use crate::geometry::{Point, Size};
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Opaque drawable supplied by the host.
///
/// The board stores and clones the handle but never looks inside it. Clones
/// share the same underlying value.
#[derive(Clone)]
pub struct Renderable(Arc<dyn Any + Send + Sync>);

impl Renderable {
    /// Wrap a host value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Borrow the host value if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// True when both handles point at the same host value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Renderable(..)")
    }
}

/// Host hook that rebuilds renderables from persisted fields.
pub trait RenderableFactory {
    /// Build the drawable for a text block, or `None` if it cannot be shown.
    fn text(&self, text: &BoardText) -> Option<Renderable>;

    /// Build the drawable for an image, or `None` if its source is unavailable.
    fn image(&self, image: &BoardImage) -> Option<Renderable>;
}

/// Where an image's pixels come from. Exactly one source per image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Encoded image bytes stored inline.
    Data(Vec<u8>),
    /// Location the host fetches from.
    Url(Url),
    /// Host-defined reference (asset name, cache key, ...).
    Link(String),
}

/// A block of text placed at a point.
#[derive(Debug, Clone)]
pub struct BoardText {
    pub(crate) string: String,
    pub(crate) point: Point,
    pub(crate) size: Size,
    renderable: Option<Renderable>,
}

impl BoardText {
    /// Create a text block without a renderable.
    pub fn new(string: impl Into<String>, point: Point, size: Size) -> Self {
        Self {
            string: string.into(),
            point,
            size,
            renderable: None,
        }
    }

    /// Attach a renderable.
    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    /// Get the text.
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Top-left corner of the text's layout box.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Get the layout box size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the renderable, if the host built one.
    pub fn renderable(&self) -> Option<&Renderable> {
        self.renderable.as_ref()
    }

    /// Replace the renderable.
    pub fn set_renderable(&mut self, renderable: Option<Renderable>) {
        self.renderable = renderable;
    }

    /// Change the text. Drops the renderable, which showed the old string.
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.string = string.into();
        self.renderable = None;
    }

    /// Change the layout box size. Drops the renderable.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.renderable = None;
    }

    /// Move the block. The renderable stays valid; placement is applied at draw time.
    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    /// True when the host still has to build a renderable for this text.
    pub fn needs_rehydration(&self) -> bool {
        self.renderable.is_none()
    }
}

impl PartialEq for BoardText {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string && self.point == other.point && self.size == other.size
    }
}

/// A raster image placed on the board, centered on `point`.
#[derive(Debug, Clone)]
pub struct BoardImage {
    pub(crate) source: Option<ImageSource>,
    pub(crate) point: Point,
    pub(crate) size: Size,
    renderable: Option<Renderable>,
}

impl BoardImage {
    /// Create an image without a renderable.
    pub fn new(source: Option<ImageSource>, point: Point, size: Size) -> Self {
        Self {
            source,
            point,
            size,
            renderable: None,
        }
    }

    /// Attach a renderable.
    pub fn with_renderable(mut self, renderable: Renderable) -> Self {
        self.renderable = Some(renderable);
        self
    }

    /// Get the image source.
    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    /// Inline bytes, when the source is data.
    pub fn image_data(&self) -> Option<&[u8]> {
        match &self.source {
            Some(ImageSource::Data(data)) => Some(data),
            _ => None,
        }
    }

    /// Remote location, when the source is a URL.
    pub fn image_url(&self) -> Option<&Url> {
        match &self.source {
            Some(ImageSource::Url(url)) => Some(url),
            _ => None,
        }
    }

    /// Host reference, when the source is a link.
    pub fn image_link(&self) -> Option<&str> {
        match &self.source {
            Some(ImageSource::Link(link)) => Some(link),
            _ => None,
        }
    }

    /// Center of the image.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Get the image size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the renderable, if the host built one.
    pub fn renderable(&self) -> Option<&Renderable> {
        self.renderable.as_ref()
    }

    /// Replace the renderable.
    pub fn set_renderable(&mut self, renderable: Option<Renderable>) {
        self.renderable = renderable;
    }

    /// Replace the image source. Drops the renderable.
    pub fn set_source(&mut self, source: Option<ImageSource>) {
        self.source = source;
        self.renderable = None;
    }

    /// Resize the image. Drops the renderable.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.renderable = None;
    }

    /// Move the image. Keeps the renderable.
    pub fn set_point(&mut self, point: Point) {
        self.point = point;
    }

    /// True when the host still has to build a renderable for this image.
    pub fn needs_rehydration(&self) -> bool {
        self.renderable.is_none()
    }
}

impl PartialEq for BoardImage {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.point == other.point && self.size == other.size
    }
}
