use crate::config::ButtonConfig;
use crate::geometry::Edges;
use crate::types::{Float, Point, Rect, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayButton {
    Cancel,
    FullScreen,
    Share,
}

impl OverlayButton {
    pub fn label(self, config: &ButtonConfig) -> &str {
        match self {
            OverlayButton::Cancel => &config.cancel_label,
            OverlayButton::FullScreen => &config.full_screen_label,
            OverlayButton::Share => &config.share_label,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedButton {
    pub button: OverlayButton,
    pub rect: Rect,
}

/// Where the buttons sit for one particular selection.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonLayout {
    buttons: Vec<PlacedButton>,
}

impl ButtonLayout {
    pub fn buttons(&self) -> &[PlacedButton] {
        &self.buttons
    }

    pub fn rect_of(&self, button: OverlayButton) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|placed| placed.button == button)
            .map(|placed| placed.rect)
    }

    /// The button under `point`; earlier buttons win where they overlap.
    pub fn hit(&self, point: Point) -> Option<OverlayButton> {
        self.buttons
            .iter()
            .find(|placed| {
                let edges = Edges::from_rect(&placed.rect);
                edges.left <= point.x
                    && point.x <= edges.right
                    && edges.top <= point.y
                    && point.y <= edges.bottom
            })
            .map(|placed| placed.button)
    }
}

/// Lays out the button row for `selection` inside `bounds`.
///
/// The row goes below the selection, or above it when there is no room
/// below, or just inside its bottom side when neither fits. Cancel lines up
/// with the left side, Share with the right side, FullScreen is centered.
pub fn layout_buttons(selection: &Rect, bounds: &Rect, config: &ButtonConfig) -> ButtonLayout {
    let selection = Edges::from_rect(selection);
    let bounds = Edges::from_rect(bounds);
    let size = Size::new(config.width, config.height);

    let below = selection.bottom + config.margin;
    let above = selection.top - config.margin - size.height;
    let row_top = if below + size.height <= bounds.bottom {
        below
    } else if above >= bounds.top {
        above
    } else {
        selection.bottom - config.margin - size.height
    };
    let row_top = clamp_start(row_top, size.height, bounds.top, bounds.bottom);

    let center_x = (selection.left + selection.right) / 2.0;
    let columns = [
        (OverlayButton::Cancel, selection.left),
        (OverlayButton::FullScreen, center_x - size.width / 2.0),
        (OverlayButton::Share, selection.right - size.width),
    ];
    let buttons = columns
        .into_iter()
        .map(|(button, left)| PlacedButton {
            button,
            rect: Rect::new(
                Point::new(
                    clamp_start(left, size.width, bounds.left, bounds.right),
                    row_top,
                ),
                size,
            ),
        })
        .collect();
    ButtonLayout { buttons }
}

/// Moves a span of `length` starting at `start` inside `min..max`, preferring
/// `min` when the span does not fit at all.
fn clamp_start(start: Float, length: Float, min: Float, max: Float) -> Float {
    start.min(max - length).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    fn config() -> ButtonConfig {
        ButtonConfig {
            width: 60.0,
            height: 20.0,
            margin: 5.0,
            ..ButtonConfig::default()
        }
    }

    #[test]
    fn row_below_selection() {
        let layout = layout_buttons(
            &rect(100.0, 100.0, 200.0, 100.0),
            &rect(0.0, 0.0, 400.0, 400.0),
            &config(),
        );
        assert_eq!(
            layout.rect_of(OverlayButton::Cancel),
            Some(rect(100.0, 205.0, 60.0, 20.0))
        );
        assert_eq!(
            layout.rect_of(OverlayButton::FullScreen),
            Some(rect(170.0, 205.0, 60.0, 20.0))
        );
        assert_eq!(
            layout.rect_of(OverlayButton::Share),
            Some(rect(240.0, 205.0, 60.0, 20.0))
        );
    }

    #[test]
    fn row_moves_above_when_no_room_below() {
        let layout = layout_buttons(
            &rect(100.0, 100.0, 200.0, 290.0),
            &rect(0.0, 0.0, 400.0, 400.0),
            &config(),
        );
        assert_eq!(
            layout.rect_of(OverlayButton::Cancel),
            Some(rect(100.0, 75.0, 60.0, 20.0))
        );
    }

    #[test]
    fn row_moves_inside_for_full_screen_selection() {
        let layout = layout_buttons(
            &rect(0.0, 0.0, 400.0, 400.0),
            &rect(0.0, 0.0, 400.0, 400.0),
            &config(),
        );
        assert_eq!(
            layout.rect_of(OverlayButton::Share),
            Some(rect(340.0, 375.0, 60.0, 20.0))
        );
    }

    #[test]
    fn buttons_stay_inside_bounds() {
        let layout = layout_buttons(
            &rect(-30.0, 10.0, 20.0, 20.0),
            &rect(0.0, 0.0, 400.0, 400.0),
            &config(),
        );
        for placed in layout.buttons() {
            assert!(placed.rect.origin.x >= 0.0, "{:?}", placed);
            assert!(placed.rect.max_x() <= 400.0, "{:?}", placed);
        }
    }

    #[test]
    fn hit_testing() {
        let layout = layout_buttons(
            &rect(100.0, 100.0, 200.0, 100.0),
            &rect(0.0, 0.0, 400.0, 400.0),
            &config(),
        );
        assert_eq!(layout.hit(Point::new(100.0, 205.0)), Some(OverlayButton::Cancel));
        assert_eq!(layout.hit(Point::new(200.0, 215.0)), Some(OverlayButton::FullScreen));
        assert_eq!(layout.hit(Point::new(300.0, 225.0)), Some(OverlayButton::Share));
        assert_eq!(layout.hit(Point::new(165.0, 215.0)), None);
        assert_eq!(layout.hit(Point::new(200.0, 150.0)), None);
    }

    #[test]
    fn labels_come_from_config() {
        let config = ButtonConfig::default();
        assert_eq!(OverlayButton::Cancel.label(&config), "Cancel");
        assert_eq!(OverlayButton::FullScreen.label(&config), "FullScreen");
        assert_eq!(OverlayButton::Share.label(&config), "Share");
    }
}
