//! Point and size value types used by the board document.
//!
//! Both mirror `kurbo`'s `f64` types field for field, so converting to and from
//! the host's geometry never loses precision.

use serde::{Deserialize, Serialize};

/// A 2D position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert to the host geometry type.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<kurbo::Point> for Point {
    fn from(point: kurbo::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(point: Point) -> Self {
        point.to_kurbo()
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero area.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert to the host geometry type.
    pub fn to_kurbo(self) -> kurbo::Size {
        kurbo::Size::new(self.width, self.height)
    }

    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }

    /// True when either dimension is zero, negative or not a number.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0) || !self.is_finite()
    }
}

impl From<kurbo::Size> for Size {
    fn from(size: kurbo::Size) -> Self {
        Self::new(size.width, size.height)
    }
}

impl From<Size> for kurbo::Size {
    fn from(size: Size) -> Self {
        size.to_kurbo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_kurbo_conversion_is_exact() {
        let native = kurbo::Point::new(0.1 + 0.2, -1e-300);
        let point = Point::from(native);
        let back: kurbo::Point = point.into();
        assert_eq!(back, native);
    }

    #[test]
    fn test_size_kurbo_conversion_is_exact() {
        let native = kurbo::Size::new(1234.5678, 1.0 / 3.0);
        let back = Size::from(native).to_kurbo();
        assert_eq!(back, native);
    }

    #[test]
    fn test_degenerate_size() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(100.0, 0.0).is_degenerate());
        assert!(Size::new(-5.0, 10.0).is_degenerate());
        assert!(Size::new(f64::NAN, 10.0).is_degenerate());
        assert!(Size::new(f64::INFINITY, 10.0).is_degenerate());
        assert!(!Size::new(300.0, 210.0).is_degenerate());
    }

    #[test]
    fn test_point_wire_shape() {
        let json = serde_json::to_value(Point::new(1.5, 2.0)).unwrap();
        assert_eq!(json, serde_json::json!({ "x": 1.5, "y": 2.0 }));
    }
}
