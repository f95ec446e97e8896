//! The board document: surface size, background, strokes, images and texts.

mod wire;

use crate::color::Color;
use crate::content::{BoardImage, BoardText, RenderableFactory};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::Size;
use crate::stroke::Stroke;
use wire::BoardRecord;

/// A complete drawing document.
///
/// Boards are plain values. The capture state machine publishes a fresh
/// board at every commit and never touches one it already handed out.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub(crate) drawing_space_size: Size,
    pub(crate) background_color: Color,
    pub(crate) lines: Vec<Stroke>,
    /// Placed images, drawn in order below texts and strokes.
    pub images: Vec<BoardImage>,
    /// Placed text blocks, drawn in order above images.
    pub texts: Vec<BoardText>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Zero size, transparent background, no content.
    pub fn empty() -> Self {
        Self {
            drawing_space_size: Size::ZERO,
            background_color: Color::TRANSPARENT,
            lines: Vec::new(),
            images: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Build a commit snapshot, carrying images and texts over from `previous`.
    pub(crate) fn snapshot(
        drawing_space_size: Size,
        background_color: Color,
        lines: Vec<Stroke>,
        previous: &Board,
    ) -> Self {
        Self {
            drawing_space_size,
            background_color,
            lines,
            images: previous.images.clone(),
            texts: previous.texts.clone(),
        }
    }

    /// Get the surface size at commit time.
    pub fn drawing_space_size(&self) -> Size {
        self.drawing_space_size
    }

    /// Get the background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Committed strokes in drawing order.
    pub fn lines(&self) -> &[Stroke] {
        &self.lines
    }

    /// True when there are no strokes, images or texts.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.images.is_empty() && self.texts.is_empty()
    }

    /// Append an image on top of the existing ones.
    pub fn append_image(&mut self, image: BoardImage) -> &mut Self {
        self.images.push(image);
        self
    }

    /// Append a text block on top of the existing ones.
    pub fn append_text(&mut self, text: BoardText) -> &mut Self {
        self.texts.push(text);
        self
    }

    /// Serialize to the portable JSON form.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let record = BoardRecord::from_board(self)?;
        Ok(serde_json::to_vec(&record)?)
    }

    /// Parse the portable JSON form. Every renderable of the result is `None`.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let record: BoardRecord = serde_json::from_slice(bytes)?;
        record.into_board()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, EncodeError> {
        let record = BoardRecord::from_board(self)?;
        Ok(serde_json::to_string(&record)?)
    }

    /// Parse a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        Self::decode(json.as_bytes())
    }

    /// Ask the host to build every missing renderable.
    ///
    /// Items that already carry a renderable are left alone. Returns how many
    /// items still lack one afterwards.
    pub fn rehydrate<F: RenderableFactory + ?Sized>(&mut self, factory: &F) -> usize {
        let mut missing = 0;
        for image in self.images.iter_mut().filter(|i| i.needs_rehydration()) {
            let renderable = factory.image(image);
            image.set_renderable(renderable);
            missing += usize::from(image.needs_rehydration());
        }
        for text in self.texts.iter_mut().filter(|t| t.needs_rehydration()) {
            let renderable = factory.text(text);
            text.set_renderable(renderable);
            missing += usize::from(text.needs_rehydration());
        }
        if missing > 0 {
            log::debug!("{missing} board items still have no renderable after rehydration");
        }
        missing
    }

    /// True when any image or text is waiting for a renderable.
    pub fn needs_rehydration(&self) -> bool {
        self.images.iter().any(BoardImage::needs_rehydration)
            || self.texts.iter().any(BoardText::needs_rehydration)
    }

    /// Equal in every serialized field; stroke ids and renderables are ignored.
    pub fn same_persisted(&self, other: &Self) -> bool {
        self.drawing_space_size == other.drawing_space_size
            && self.background_color == other.background_color
            && self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .zip(&other.lines)
                .all(|(a, b)| a.same_persisted(b))
            && self.images == other.images
            && self.texts == other.texts
    }
}
