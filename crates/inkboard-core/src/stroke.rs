//! Freehand strokes.

use crate::color::Color;
use crate::geometry::Point;
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// What a stroke does when painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeKind {
    #[default]
    Pen,
    /// Paints over content with the theme's background color.
    Eraser,
}

/// A freehand path with its style.
///
/// Points are only appended while the stroke is being captured. A stroke
/// always holds at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub(crate) id: StrokeId,
    pub(crate) points: Vec<Point>,
    pub(crate) color: Color,
    pub(crate) width: f64,
    pub(crate) kind: StrokeKind,
}

impl Stroke {
    /// Start a stroke at a single point.
    ///
    /// Width and color are taken as given. A board holding a stroke with a
    /// non-positive width or an out-of-range color fails to encode.
    pub fn new(start: Point, color: Color, width: f64, kind: StrokeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![start],
            color,
            width,
            kind,
        }
    }

    /// Create from existing points. Returns `None` for an empty point list.
    pub fn from_points(
        points: Vec<Point>,
        color: Color,
        width: f64,
        kind: StrokeKind,
    ) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            points,
            color,
            width,
            kind,
        })
    }

    /// Get the stroke ID.
    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Get the points in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Get the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pen or eraser.
    pub fn kind(&self) -> StrokeKind {
        self.kind
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub(crate) fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Equal in everything that gets serialized (the id is not).
    pub fn same_persisted(&self, other: &Self) -> bool {
        self.points == other.points
            && self.color == other.color
            && self.width == other.width
            && self.kind == other.kind
    }

    /// Bounding box of the points, ignoring stroke width.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        let start = Rect::from_points(first.to_kurbo(), first.to_kurbo());
        self.points
            .iter()
            .skip(1)
            .fold(start, |rect, point| rect.union_pt(point.to_kurbo()))
    }

    /// Polyline through every point, in capture order.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        path.move_to(first.to_kurbo());
        for point in self.points.iter().skip(1) {
            path.line_to(point.to_kurbo());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_new_stroke_has_one_point() {
        let stroke = Stroke::new(Point::new(3.0, 4.0), Color::BLACK, 2.0, StrokeKind::Pen);
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points()[0], Point::new(3.0, 4.0));
    }

    #[test]
    fn test_from_points_rejects_empty() {
        assert!(Stroke::from_points(vec![], Color::BLACK, 1.0, StrokeKind::Pen).is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Stroke::new(Point::ZERO, Color::BLACK, 1.0, StrokeKind::Pen);
        let b = Stroke::new(Point::ZERO, Color::BLACK, 1.0, StrokeKind::Pen);
        assert_ne!(a.id(), b.id());
        assert!(a.same_persisted(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_bounds() {
        let stroke = Stroke::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
            ],
            Color::BLACK,
            1.0,
            StrokeKind::Pen,
        )
        .unwrap();

        let bounds = stroke.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_path_follows_points() {
        let stroke = Stroke::from_points(
            vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0)],
            Color::WHITE,
            15.0,
            StrokeKind::Eraser,
        )
        .unwrap();
        let elements: Vec<PathEl> = stroke.to_path().elements().to_vec();
        assert_eq!(
            elements,
            vec![
                PathEl::MoveTo(kurbo::Point::new(1.0, 1.0)),
                PathEl::LineTo(kurbo::Point::new(2.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(serde_json::to_value(StrokeKind::Pen).unwrap(), "pen");
        assert_eq!(serde_json::to_value(StrokeKind::Eraser).unwrap(), "eraser");
    }
}
