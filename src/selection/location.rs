/// Where a point lies relative to the selection rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Outside,
    Inside,
    OnTopEdge,
    OnBottomEdge,
    OnLeftEdge,
    OnRightEdge,
    OnTopLeftCorner,
    OnTopRightCorner,
    OnBottomLeftCorner,
    OnBottomRightCorner,
}

impl Location {
    pub const ALL: [Location; 10] = [
        Location::Outside,
        Location::Inside,
        Location::OnTopEdge,
        Location::OnBottomEdge,
        Location::OnLeftEdge,
        Location::OnRightEdge,
        Location::OnTopLeftCorner,
        Location::OnTopRightCorner,
        Location::OnBottomLeftCorner,
        Location::OnBottomRightCorner,
    ];

    /// True for every edge and corner.
    pub fn is_on_border(self) -> bool {
        !matches!(self, Location::Outside | Location::Inside)
    }

    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Location::OnTopLeftCorner
                | Location::OnTopRightCorner
                | Location::OnBottomLeftCorner
                | Location::OnBottomRightCorner
        )
    }

    /// Whether a drag from here moves the left side of the rectangle.
    pub fn moves_left(self) -> bool {
        matches!(
            self,
            Location::OnLeftEdge | Location::OnTopLeftCorner | Location::OnBottomLeftCorner
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            Location::OnRightEdge | Location::OnTopRightCorner | Location::OnBottomRightCorner
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            Location::OnTopEdge | Location::OnTopLeftCorner | Location::OnTopRightCorner
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            Location::OnBottomEdge | Location::OnBottomLeftCorner | Location::OnBottomRightCorner
        )
    }

    /// The location seen in a mirror along the vertical axis (left <-> right).
    pub fn mirrored_horizontally(self) -> Self {
        match self {
            Location::OnLeftEdge => Location::OnRightEdge,
            Location::OnRightEdge => Location::OnLeftEdge,
            Location::OnTopLeftCorner => Location::OnTopRightCorner,
            Location::OnTopRightCorner => Location::OnTopLeftCorner,
            Location::OnBottomLeftCorner => Location::OnBottomRightCorner,
            Location::OnBottomRightCorner => Location::OnBottomLeftCorner,
            other => other,
        }
    }

    /// The location seen in a mirror along the horizontal axis (top <-> bottom).
    pub fn mirrored_vertically(self) -> Self {
        match self {
            Location::OnTopEdge => Location::OnBottomEdge,
            Location::OnBottomEdge => Location::OnTopEdge,
            Location::OnTopLeftCorner => Location::OnBottomLeftCorner,
            Location::OnBottomLeftCorner => Location::OnTopLeftCorner,
            Location::OnTopRightCorner => Location::OnBottomRightCorner,
            Location::OnBottomRightCorner => Location::OnTopRightCorner,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn border_predicate() {
        let on_border: Vec<_> = Location::ALL
            .iter()
            .copied()
            .filter(|location| location.is_on_border())
            .collect();
        assert_eq!(on_border.len(), 8);
        assert!(!Location::Inside.is_on_border());
        assert!(!Location::Outside.is_on_border());
    }

    #[test]
    fn mirroring_is_an_involution() {
        for location in Location::ALL {
            assert_eq!(location.mirrored_horizontally().mirrored_horizontally(), location);
            assert_eq!(location.mirrored_vertically().mirrored_vertically(), location);
        }
        assert_eq!(
            Location::OnTopLeftCorner.mirrored_horizontally(),
            Location::OnTopRightCorner
        );
        assert_eq!(
            Location::OnTopLeftCorner.mirrored_vertically(),
            Location::OnBottomLeftCorner
        );
        assert_eq!(Location::Inside.mirrored_vertically(), Location::Inside);
    }

    #[test]
    fn sides_moved_by_corners() {
        assert!(Location::OnBottomRightCorner.moves_bottom());
        assert!(Location::OnBottomRightCorner.moves_right());
        assert!(!Location::OnBottomRightCorner.moves_left());
        assert!(!Location::Inside.moves_top());
    }
}
