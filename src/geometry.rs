use crate::types::{Float, Point, Rect, Size};

/// A rectangle described by the coordinates of its four sides.
///
/// Drag math works on sides rather than origin and size, since a resize moves
/// one side while the opposite one stays put.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edges {
    pub left: Float,
    pub top: Float,
    pub right: Float,
    pub bottom: Float,
}

impl Edges {
    /// Sides of `rect`, ordered so that `left <= right` and `top <= bottom`
    /// even when the rectangle carries a negative width or height.
    pub fn from_rect(rect: &Rect) -> Self {
        let x1 = rect.origin.x;
        let x2 = rect.origin.x + rect.size.width;
        let y1 = rect.origin.y;
        let y2 = rect.origin.y + rect.size.height;
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    pub fn width(&self) -> Float {
        self.right - self.left
    }

    pub fn height(&self) -> Float {
        self.bottom - self.top
    }

    pub fn is_flipped_horizontally(&self) -> bool {
        self.right < self.left
    }

    pub fn is_flipped_vertically(&self) -> bool {
        self.bottom < self.top
    }

    /// Swaps crossed sides back into order.
    pub fn normalized(self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(
            Point::new(self.left, self.top),
            Size::new(self.width(), self.height()),
        )
    }
}

/// Returns `rect` with a non-negative width and height covering the same area.
pub fn normalize_rect(rect: &Rect) -> Rect {
    Edges::from_rect(rect).to_rect()
}
