use crate::types::Point;

/// A pointer event in overlay coordinates, as consumed by the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    phase: GesturePhase,
    point: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

impl PointerEvent {
    pub fn new(phase: GesturePhase, point: Point) -> Self {
        Self { phase, point }
    }
    pub fn began(point: Point) -> Self {
        Self::new(GesturePhase::Began, point)
    }
    pub fn moved(point: Point) -> Self {
        Self::new(GesturePhase::Moved, point)
    }
    pub fn ended(point: Point) -> Self {
        Self::new(GesturePhase::Ended, point)
    }
    pub fn cancelled(point: Point) -> Self {
        Self::new(GesturePhase::Cancelled, point)
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn point(&self) -> Point {
        self.point
    }
}

/// Raw input as delivered by a windowing backend.
#[derive(Debug)]
pub struct UiEvent {
    pub kind: UiEventKind,
}

#[derive(Debug)]
pub enum UiEventKind {
    MouseMoved(Point),
    MouseInput(MouseInput),
    FocusLost,
}

#[derive(Debug)]
pub struct MouseInput {
    pub mouse_event_kind: MouseEventKind,
}

#[derive(Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    Pressed,
    Released,
}

impl UiEvent {
    pub fn mouse_move(position: Point) -> Self {
        Self {
            kind: UiEventKind::MouseMoved(position),
        }
    }
    pub fn mouse_input(mouse_event_kind: MouseEventKind) -> Self {
        Self {
            kind: UiEventKind::MouseInput(MouseInput { mouse_event_kind }),
        }
    }
    pub fn focus_lost() -> Self {
        Self {
            kind: UiEventKind::FocusLost,
        }
    }
}

/// Turns backend mouse input into gesture phases.
///
/// Backends report button changes without a position, so the last cursor
/// position is remembered. Moves without a pressed button are hover only.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Point,
    is_pressed: bool,
}

impl PointerTracker {
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    pub fn translate(&mut self, event: &UiEvent) -> Option<PointerEvent> {
        match &event.kind {
            UiEventKind::MouseMoved(position) => {
                self.position = *position;
                self.is_pressed.then(|| PointerEvent::moved(*position))
            }
            UiEventKind::MouseInput(MouseInput { mouse_event_kind }) => {
                match mouse_event_kind {
                    MouseEventKind::Pressed if !self.is_pressed => {
                        self.is_pressed = true;
                        Some(PointerEvent::began(self.position))
                    }
                    MouseEventKind::Released if self.is_pressed => {
                        self.is_pressed = false;
                        Some(PointerEvent::ended(self.position))
                    }
                    _ => None,
                }
            }
            UiEventKind::FocusLost => {
                if self.is_pressed {
                    self.is_pressed = false;
                    Some(PointerEvent::cancelled(self.position))
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.translate(&UiEvent::mouse_move(Point::new(5.0, 6.0))), None);
        assert_eq!(
            tracker.translate(&UiEvent::mouse_input(MouseEventKind::Pressed)),
            Some(PointerEvent::began(Point::new(5.0, 6.0)))
        );
        assert_eq!(
            tracker.translate(&UiEvent::mouse_move(Point::new(9.0, 6.0))),
            Some(PointerEvent::moved(Point::new(9.0, 6.0)))
        );
        assert_eq!(
            tracker.translate(&UiEvent::mouse_input(MouseEventKind::Released)),
            Some(PointerEvent::ended(Point::new(9.0, 6.0)))
        );
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn duplicate_buttons_are_ignored() {
        let mut tracker = PointerTracker::default();
        assert_eq!(
            tracker.translate(&UiEvent::mouse_input(MouseEventKind::Released)),
            None
        );
        tracker.translate(&UiEvent::mouse_input(MouseEventKind::Pressed));
        assert_eq!(
            tracker.translate(&UiEvent::mouse_input(MouseEventKind::Pressed)),
            None
        );
    }

    #[test]
    fn focus_loss_cancels_a_press() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.translate(&UiEvent::focus_lost()), None);
        tracker.translate(&UiEvent::mouse_input(MouseEventKind::Pressed));
        assert_eq!(
            tracker.translate(&UiEvent::focus_lost()),
            Some(PointerEvent::cancelled(Point::origin()))
        );
    }
}
