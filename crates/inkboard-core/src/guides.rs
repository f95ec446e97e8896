//! Ruled and grid guide overlays.
//!
//! Guides are reference lines drawn over the surface. They are not part of
//! the document and depend only on the surface size and the selected mode.

use crate::error::GeometryError;
use crate::geometry::Size;
use kurbo::{BezPath, Line, Point};

/// Most vertical lines a grid may produce.
pub const MAX_GRID_COLUMNS: u32 = 4096;

/// Which overlay to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuideMode {
    /// No guides.
    #[default]
    Blank,
    /// Horizontal lines only, like notebook paper.
    Ruled(u32),
    /// Horizontal lines plus centered vertical lines.
    Grid(u32),
}

impl GuideMode {
    /// Line counts offered by typical host pickers. Any positive count works.
    pub const PRESET_COUNTS: [u32; 4] = [10, 12, 14, 16];

    /// The requested horizontal line count, if any.
    pub fn line_count(self) -> Option<u32> {
        match self {
            GuideMode::Blank => None,
            GuideMode::Ruled(count) | GuideMode::Grid(count) => Some(count),
        }
    }

    /// Distance between neighbouring lines on `surface`.
    ///
    /// Half a line of padding is reserved, so `count` lines never touch the
    /// bottom edge. Grid columns use the same spacing, derived from height.
    pub fn spacing(self, surface: Size) -> Option<f64> {
        self.line_count()
            .map(|count| surface.height / (f64::from(count) + 0.5))
    }
}

/// Line segments for `mode` on a surface of `surface` size.
///
/// [`GuideMode::Blank`] yields nothing for any surface. The other modes fail
/// with [`GeometryError`] for a zero line count or a surface without area.
/// A grid also fails when it would need more than [`MAX_GRID_COLUMNS`]
/// columns, which happens on extremely wide surfaces.
pub fn guide_segments(surface: Size, mode: GuideMode) -> Result<Vec<Line>, GeometryError> {
    let (count, spacing) = match (mode.line_count(), mode.spacing(surface)) {
        (Some(count), Some(spacing)) => (count, spacing),
        _ => return Ok(Vec::new()),
    };
    if count == 0 {
        return Err(GeometryError::InvalidLineCount(count));
    }
    if surface.is_degenerate() {
        return Err(GeometryError::DegenerateSurface {
            width: surface.width,
            height: surface.height,
        });
    }

    let mut segments = horizontal_segments(surface, count, spacing);
    if let GuideMode::Grid(_) = mode {
        let columns = (surface.width / spacing).floor();
        if columns >= f64::from(MAX_GRID_COLUMNS) {
            return Err(GeometryError::TooManyColumns {
                columns: columns + 1.0,
                max: MAX_GRID_COLUMNS,
            });
        }
        segments.extend(vertical_segments(surface, spacing, columns as u32));
    }
    Ok(segments)
}

/// The same segments as one path of move/line pairs.
pub fn guide_path(surface: Size, mode: GuideMode) -> Result<BezPath, GeometryError> {
    let mut path = BezPath::new();
    for segment in guide_segments(surface, mode)? {
        path.move_to(segment.p0);
        path.line_to(segment.p1);
    }
    Ok(path)
}

fn horizontal_segments(surface: Size, count: u32, spacing: f64) -> Vec<Line> {
    (1..=count)
        .map(|index| {
            let y = f64::from(index) * spacing;
            Line::new(Point::new(0.0, y), Point::new(surface.width, y))
        })
        .collect()
}

/// Columns centered horizontally. One more column than fits is emitted, so
/// the last one may land past the right edge.
fn vertical_segments(surface: Size, spacing: f64, columns: u32) -> Vec<Line> {
    let margin = (surface.width - (f64::from(columns) - 1.0) * spacing) * 0.5;
    (0..=columns)
        .map(|index| {
            let x = f64::from(index) * spacing + margin;
            Line::new(Point::new(x, 0.0), Point::new(x, surface.height))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_blank_has_no_segments() {
        assert!(guide_segments(Size::new(300.0, 210.0), GuideMode::Blank).unwrap().is_empty());
        assert!(guide_segments(Size::ZERO, GuideMode::Blank).unwrap().is_empty());
    }

    #[test]
    fn test_ruled_spacing_and_positions() {
        let surface = Size::new(300.0, 210.0);
        let mode = GuideMode::Ruled(10);
        assert!((mode.spacing(surface).unwrap() - 20.0).abs() < EPS);

        let segments = guide_segments(surface, mode).unwrap();
        assert_eq!(segments.len(), 10);
        for (i, segment) in segments.iter().enumerate() {
            let y = 20.0 * (i + 1) as f64;
            assert!((segment.p0.y - y).abs() < EPS);
            assert!((segment.p1.y - y).abs() < EPS);
            assert!(segment.p0.x.abs() < EPS);
            assert!((segment.p1.x - 300.0).abs() < EPS);
        }
        assert!((segments[9].p0.y - 200.0).abs() < EPS);
    }

    #[test]
    fn test_grid_vertical_lines_are_centered() {
        let surface = Size::new(300.0, 210.0);
        let segments = guide_segments(surface, GuideMode::Grid(10)).unwrap();

        // 10 horizontal, then floor(300 / 20) + 1 = 16 vertical.
        assert_eq!(segments.len(), 26);
        let vertical = &segments[10..];
        // margin = (300 - 14 * 20) / 2 = 10
        assert!((vertical[0].p0.x - 10.0).abs() < EPS);
        assert!((vertical[1].p0.x - 30.0).abs() < EPS);
        assert!((vertical[15].p0.x - 310.0).abs() < EPS);
        for segment in vertical {
            assert!((segment.p0.x - segment.p1.x).abs() < EPS);
            assert!(segment.p0.y.abs() < EPS);
            assert!((segment.p1.y - 210.0).abs() < EPS);
        }
    }

    #[test]
    fn test_grid_spacing_follows_height() {
        // A wide surface still spaces columns by height.
        let surface = Size::new(1000.0, 105.0);
        let segments = guide_segments(surface, GuideMode::Grid(10)).unwrap();
        let vertical = &segments[10..];
        assert!((vertical[1].p0.x - vertical[0].p0.x - 10.0).abs() < EPS);
        assert_eq!(vertical.len(), 101);
    }

    #[test]
    fn test_narrow_surface_single_column() {
        // Narrower than one spacing: zero columns fit, one is centered past the middle.
        let surface = Size::new(10.0, 210.0);
        let segments = guide_segments(surface, GuideMode::Grid(10)).unwrap();
        let vertical = &segments[10..];
        assert_eq!(vertical.len(), 1);
        assert!((vertical[0].p0.x - 15.0).abs() < EPS);
    }

    #[test]
    fn test_zero_count_rejected() {
        let surface = Size::new(300.0, 210.0);
        assert_eq!(
            guide_segments(surface, GuideMode::Ruled(0)),
            Err(GeometryError::InvalidLineCount(0))
        );
        assert_eq!(
            guide_segments(surface, GuideMode::Grid(0)),
            Err(GeometryError::InvalidLineCount(0))
        );
    }

    #[test]
    fn test_degenerate_surface_rejected() {
        assert!(matches!(
            guide_segments(Size::new(300.0, 0.0), GuideMode::Ruled(10)),
            Err(GeometryError::DegenerateSurface { .. })
        ));
        assert!(matches!(
            guide_segments(Size::new(0.0, 210.0), GuideMode::Grid(12)),
            Err(GeometryError::DegenerateSurface { .. })
        ));
    }

    #[test]
    fn test_extreme_aspect_ratio_rejected() {
        assert!(matches!(
            guide_segments(Size::new(1e12, 1.0), GuideMode::Grid(10)),
            Err(GeometryError::TooManyColumns { max: MAX_GRID_COLUMNS, .. })
        ));
        // Ruled guides have no columns, so the same surface is fine.
        assert_eq!(guide_segments(Size::new(1e12, 1.0), GuideMode::Ruled(10)).unwrap().len(), 10);
    }

    #[test]
    fn test_guide_path_has_move_line_pairs() {
        let path = guide_path(Size::new(300.0, 210.0), GuideMode::Ruled(10)).unwrap();
        assert_eq!(path.elements().len(), 20);
    }
}
