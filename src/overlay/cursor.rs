use crate::selection::Location;

/// Pointer cursor to show while hovering or dragging over the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Default,
    Pointer,
    Grab,
    Grabbing,
    ResizingHorizontally,
    ResizingVertically,
    ResizingDiagonallyDown,
    ResizingDiagonallyUp,
}

pub fn cursor_for_location(location: Location, is_dragging: bool) -> CursorShape {
    match location {
        Location::Outside => CursorShape::Default,
        Location::Inside if is_dragging => CursorShape::Grabbing,
        Location::Inside => CursorShape::Grab,
        // Top-left and bottom-right share the falling diagonal.
        corner if corner.is_corner() => {
            if corner.moves_left() == corner.moves_top() {
                CursorShape::ResizingDiagonallyDown
            } else {
                CursorShape::ResizingDiagonallyUp
            }
        }
        Location::OnTopEdge | Location::OnBottomEdge => CursorShape::ResizingVertically,
        _ => CursorShape::ResizingHorizontally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors() {
        assert_eq!(cursor_for_location(Location::Inside, false), CursorShape::Grab);
        assert_eq!(cursor_for_location(Location::Inside, true), CursorShape::Grabbing);
        assert_eq!(
            cursor_for_location(Location::OnBottomLeftCorner, false),
            CursorShape::ResizingDiagonallyUp
        );
        assert_eq!(
            cursor_for_location(Location::OnLeftEdge, true),
            CursorShape::ResizingHorizontally
        );
        assert_eq!(cursor_for_location(Location::Outside, true), CursorShape::Default);
    }

    #[test]
    fn corner_diagonals() {
        let shapes: Vec<CursorShape> = Location::ALL
            .into_iter()
            .filter(|location| location.is_corner())
            .map(|location| cursor_for_location(location, false))
            .collect();
        assert_eq!(
            shapes,
            vec![
                CursorShape::ResizingDiagonallyDown,
                CursorShape::ResizingDiagonallyUp,
                CursorShape::ResizingDiagonallyUp,
                CursorShape::ResizingDiagonallyDown,
            ]
        );
        assert_eq!(
            cursor_for_location(Location::OnBottomEdge, true),
            CursorShape::ResizingVertically
        );
    }
}
