use crate::geometry::Edges;
use crate::selection::location::Location;
use crate::types::{Float, Point, Rect};

/// Distance from a side within which a point counts as being on that side.
pub const DEFAULT_TOLERANCE: Float = 20.0;

/// Hit-tests points against a selection rectangle with a fixed tolerance band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionClassifier {
    tolerance: Float,
}

impl Default for RegionClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl RegionClassifier {
    pub fn new(tolerance: Float) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Float {
        self.tolerance
    }

    pub fn classify(&self, rect: &Rect, point: Point) -> Location {
        classify(rect, point, self.tolerance)
    }
}

/// Classifies `point` against `rect`.
///
/// Zones are tested in a fixed order and the first match wins:
///
/// 1. corner squares of side `2 * tolerance` centered on the vertices, in the
///    order top-left, top-right, bottom-left, bottom-right
/// 2. edge bands of thickness `2 * tolerance` centered on the sides, reaching
///    `tolerance` past both ends, in the order top, bottom, left, right
/// 3. the open interior
///
/// Anything else is [`Location::Outside`]. Zone borders are inclusive. The
/// rectangle may be degenerate or carry a negative size; a negative tolerance
/// is treated as zero.
pub fn classify(rect: &Rect, point: Point, tolerance: Float) -> Location {
    let tolerance = if tolerance > 0.0 { tolerance } else { 0.0 };
    let edges = Edges::from_rect(rect);
    let near = |value: Float, line: Float| (value - line).abs() <= tolerance;

    let corners = [
        (edges.left, edges.top, Location::OnTopLeftCorner),
        (edges.right, edges.top, Location::OnTopRightCorner),
        (edges.left, edges.bottom, Location::OnBottomLeftCorner),
        (edges.right, edges.bottom, Location::OnBottomRightCorner),
    ];
    for (x, y, location) in corners {
        if near(point.x, x) && near(point.y, y) {
            return location;
        }
    }

    let within_horizontal_span =
        point.x >= edges.left - tolerance && point.x <= edges.right + tolerance;
    let within_vertical_span =
        point.y >= edges.top - tolerance && point.y <= edges.bottom + tolerance;
    if within_horizontal_span && near(point.y, edges.top) {
        return Location::OnTopEdge;
    }
    if within_horizontal_span && near(point.y, edges.bottom) {
        return Location::OnBottomEdge;
    }
    if within_vertical_span && near(point.x, edges.left) {
        return Location::OnLeftEdge;
    }
    if within_vertical_span && near(point.x, edges.right) {
        return Location::OnRightEdge;
    }

    if edges.left < point.x && point.x < edges.right && edges.top < point.y && point.y < edges.bottom
    {
        return Location::Inside;
    }
    Location::Outside
}
