//! Portable JSON schema of a board and conversion to and from the model.
//!
//! Stroke ids and renderables have no place in the schema.

use super::Board;
use crate::color::{Color, ColorValues};
use crate::content::{BoardImage, BoardText, ImageSource};
use crate::error::{DecodeError, EncodeError};
use crate::geometry::{Point, Size};
use crate::stroke::{Stroke, StrokeKind};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BoardRecord {
    drawing_space_size: Size,
    background_color: ColorValues,
    lines: Vec<LineRecord>,
    images: Vec<ImageRecord>,
    texts: Vec<TextRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct LineRecord {
    points: Vec<Point>,
    color: ColorValues,
    width: f64,
    #[serde(rename = "type")]
    kind: StrokeKind,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_data: Option<String>,
    #[serde(rename = "imageURL", default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_link: Option<String>,
    point: Point,
    size: Size,
}

#[derive(Debug, Serialize, Deserialize)]
struct TextRecord {
    string: String,
    point: Point,
    size: Size,
}

impl BoardRecord {
    pub(super) fn from_board(board: &Board) -> Result<Self, EncodeError> {
        finite(board.drawing_space_size.is_finite(), "drawingSpaceSize")?;
        finite(board.background_color.is_finite(), "backgroundColor")?;
        normalized(board.background_color, "backgroundColor")?;

        let lines = board
            .lines
            .iter()
            .enumerate()
            .map(|(index, line)| -> Result<LineRecord, EncodeError> {
                finite(line.points.iter().all(Point::is_finite), "lines.points")?;
                finite(line.color.is_finite(), "lines.color")?;
                finite(line.width.is_finite(), "lines.width")?;
                normalized(line.color, "lines.color")?;
                if line.width <= 0.0 {
                    return Err(EncodeError::InvalidWidth {
                        index,
                        width: line.width,
                    });
                }
                Ok(LineRecord {
                    points: line.points.clone(),
                    color: line.color.to_values(),
                    width: line.width,
                    kind: line.kind,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let images = board
            .images
            .iter()
            .map(|image| -> Result<ImageRecord, EncodeError> {
                finite(image.point.is_finite(), "images.point")?;
                finite(image.size.is_finite(), "images.size")?;
                let mut record = ImageRecord {
                    image_data: None,
                    image_url: None,
                    image_link: None,
                    point: image.point,
                    size: image.size,
                };
                match &image.source {
                    Some(ImageSource::Data(data)) => record.image_data = Some(STANDARD.encode(data)),
                    Some(ImageSource::Url(url)) => record.image_url = Some(url.to_string()),
                    Some(ImageSource::Link(link)) => record.image_link = Some(link.clone()),
                    None => {}
                }
                Ok(record)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let texts = board
            .texts
            .iter()
            .map(|text| -> Result<TextRecord, EncodeError> {
                finite(text.point.is_finite(), "texts.point")?;
                finite(text.size.is_finite(), "texts.size")?;
                Ok(TextRecord {
                    string: text.string.clone(),
                    point: text.point,
                    size: text.size,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            drawing_space_size: board.drawing_space_size,
            background_color: board.background_color.to_values(),
            lines,
            images,
            texts,
        })
    }

    pub(super) fn into_board(self) -> Result<Board, DecodeError> {
        let lines = self
            .lines
            .into_iter()
            .enumerate()
            .map(|(index, line)| -> Result<Stroke, DecodeError> {
                if line.width.is_nan() || line.width <= 0.0 {
                    return Err(DecodeError::InvalidWidth {
                        index,
                        width: line.width,
                    });
                }
                let color = Color::from_values(line.color)?;
                Stroke::from_points(line.points, color, line.width, line.kind)
                    .ok_or(DecodeError::EmptyStroke { index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let images = self
            .images
            .into_iter()
            .enumerate()
            .map(|(index, image)| -> Result<BoardImage, DecodeError> {
                let source = match (image.image_data, image.image_url, image.image_link) {
                    (None, None, None) => None,
                    (Some(data), None, None) => Some(ImageSource::Data(STANDARD.decode(data)?)),
                    (None, Some(url), None) => Some(ImageSource::Url(Url::parse(&url)?)),
                    (None, None, Some(link)) => Some(ImageSource::Link(link)),
                    _ => return Err(DecodeError::ConflictingImageSource { index }),
                };
                Ok(BoardImage::new(source, image.point, image.size))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let texts = self
            .texts
            .into_iter()
            .map(|text| BoardText::new(text.string, text.point, text.size))
            .collect();

        Ok(Board {
            drawing_space_size: self.drawing_space_size,
            background_color: Color::from_values(self.background_color)?,
            lines,
            images,
            texts,
        })
    }
}

/// Channels must lie in `[0, 1]`, as on decode.
fn normalized(color: Color, field: &'static str) -> Result<(), EncodeError> {
    match color.out_of_range() {
        Some((channel, value)) => Err(EncodeError::ColorOutOfRange {
            field,
            channel,
            value,
        }),
        None => Ok(()),
    }
}

fn finite(ok: bool, field: &'static str) -> Result<(), EncodeError> {
    if ok {
        Ok(())
    } else {
        Err(EncodeError::NonFinite(field))
    }
}
