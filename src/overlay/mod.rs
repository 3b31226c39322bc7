//! The snapshot overlay: a dimming mask with an adjustable selection and a
//! row of buttons to cancel, share or select the whole screen.

pub mod buttons;
pub mod cursor;

use crate::capture::ImageCapture;
use crate::config::OverlayConfig;
use crate::geometry::Edges;
use crate::nodes::events::{GesturePhase, PointerEvent};
use crate::nodes::tree::Orientation;
use crate::render::command::RenderCommand;
use crate::render::mask::render_overlay;
use crate::result::{SnapError, SnapErrorKind, SnapResult};
use crate::selection::{DragController, DragState, Location, RegionClassifier};
use crate::types::{Float, Point, Rect, Size};
use buttons::{layout_buttons, ButtonLayout, OverlayButton};
use cursor::{cursor_for_location, CursorShape};
use image::RgbaImage;
use tracing::{debug, info};

/// What a pointer event did to the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverlayResponse {
    /// Nothing visible changed.
    Ignored,
    DragStarted(Location),
    SelectionChanged(Rect),
    /// A button was pressed; it fires if the pointer is released over it.
    ButtonArmed(OverlayButton),
    /// The user cancelled. The host should hide the overlay.
    Closed,
    /// The user wants to share the given selection.
    Confirmed(Rect),
}

pub struct SnapshotOverlay {
    config: OverlayConfig,
    bounds: Rect,
    orientation: Orientation,
    selection: Rect,
    controller: DragController,
    selection_at_gesture_start: Option<Rect>,
    /// Where the pointer alone would have put the selection, before fitting
    /// it into the bounds.
    dragged_selection: Option<Rect>,
    pressed_button: Option<OverlayButton>,
    controls_visible: bool,
}

impl SnapshotOverlay {
    /// Creates an overlay covering `bounds` with a square selection centered
    /// in it.
    pub fn new(bounds: Rect, config: OverlayConfig) -> Self {
        let center = bounds.center();
        let half = config.default_half_length;
        let initial = Rect::new(
            Point::new(center.x - half, center.y - half),
            Size::new(half * 2.0, half * 2.0),
        );
        let selection = constrain_to_bounds(&initial, &bounds, 0.0, false);
        let controller = DragController::new(RegionClassifier::new(config.edge_tolerance));
        Self {
            orientation: Orientation::for_size(bounds.size),
            config,
            bounds,
            selection,
            controller,
            selection_at_gesture_start: None,
            dragged_selection: None,
            pressed_button: None,
            controls_visible: true,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn selection(&self) -> Rect {
        self.selection
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.state()
    }

    pub fn pressed_button(&self) -> Option<OverlayButton> {
        self.pressed_button
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Hides or shows the border, corner dots and buttons, e.g. to keep them
    /// out of a capture. The next touch shows them again.
    pub fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    pub fn button_layout(&self) -> ButtonLayout {
        layout_buttons(&self.selection, &self.bounds, &self.config.buttons)
    }

    /// Selects the whole overlay.
    pub fn full_screen(&mut self) -> Rect {
        self.selection = self.bounds;
        self.selection
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> SnapResult<OverlayResponse> {
        let point = event.point();
        match event.phase() {
            GesturePhase::Began => self.begin(point),
            GesturePhase::Moved => {
                if self.pressed_button.is_some() {
                    return Ok(OverlayResponse::Ignored);
                }
                self.drag_to(point)
            }
            GesturePhase::Ended => self.end(point),
            GesturePhase::Cancelled => self.cancel(),
        }
    }

    fn begin(&mut self, point: Point) -> SnapResult<OverlayResponse> {
        if self.controller.is_active() || self.pressed_button.is_some() {
            return Err(SnapError::new(SnapErrorKind::GestureInProgress));
        }
        let buttons_were_visible = self.controls_visible;
        self.controls_visible = true;
        if buttons_were_visible {
            if let Some(button) = self.button_layout().hit(point) {
                debug!("Button {:?} armed", button);
                self.pressed_button = Some(button);
                return Ok(OverlayResponse::ButtonArmed(button));
            }
        }
        let session = self.controller.gesture_start(&self.selection, point)?;
        self.selection_at_gesture_start = Some(self.selection);
        self.dragged_selection = Some(self.selection);
        Ok(OverlayResponse::DragStarted(session.location()))
    }

    fn drag_to(&mut self, point: Point) -> SnapResult<OverlayResponse> {
        let dragged = self.dragged_selection.unwrap_or(self.selection);
        let moved = self.controller.gesture_move(&dragged, point)?;
        self.dragged_selection = Some(moved);
        let keep_size = self.controller.state() == DragState::Active(Location::Inside);
        let constrained = constrain_to_bounds(&moved, &self.bounds, self.config.edge_snap, keep_size);
        if constrained == self.selection {
            return Ok(OverlayResponse::Ignored);
        }
        self.selection = constrained;
        Ok(OverlayResponse::SelectionChanged(constrained))
    }

    fn end(&mut self, point: Point) -> SnapResult<OverlayResponse> {
        if let Some(button) = self.pressed_button.take() {
            if self.button_layout().hit(point) == Some(button) {
                return Ok(self.press(button));
            }
            debug!("Button {:?} released elsewhere", button);
            return Ok(OverlayResponse::Ignored);
        }
        let response = self.drag_to(point)?;
        self.controller.gesture_end()?;
        self.selection_at_gesture_start = None;
        self.dragged_selection = None;
        Ok(response)
    }

    fn cancel(&mut self) -> SnapResult<OverlayResponse> {
        if self.pressed_button.take().is_some() {
            return Ok(OverlayResponse::Ignored);
        }
        self.controller.gesture_cancel()?;
        self.dragged_selection = None;
        match self.selection_at_gesture_start.take() {
            Some(previous) if previous != self.selection => {
                self.selection = previous;
                Ok(OverlayResponse::SelectionChanged(previous))
            }
            _ => Ok(OverlayResponse::Ignored),
        }
    }

    /// Fires `button` as if it had been tapped.
    pub fn press(&mut self, button: OverlayButton) -> OverlayResponse {
        info!("Button {:?} pressed", button);
        match button {
            OverlayButton::Cancel => OverlayResponse::Closed,
            OverlayButton::FullScreen => OverlayResponse::SelectionChanged(self.full_screen()),
            OverlayButton::Share => OverlayResponse::Confirmed(self.selection),
        }
    }

    /// Cursor to show for a pointer hovering at `point`.
    pub fn cursor_at(&self, point: Point) -> CursorShape {
        if let Some(session) = self.controller.session() {
            return cursor_for_location(session.location(), true);
        }
        if self.controls_visible && self.button_layout().hit(point).is_some() {
            return CursorShape::Pointer;
        }
        cursor_for_location(self.controller.classifier().classify(&self.selection, point), false)
    }

    /// Called after the device rotated. Any running gesture is rolled back;
    /// switching between portrait and landscape swaps the bounds and maps the
    /// selection into them.
    pub fn orientation_changed(&mut self, orientation: Orientation) {
        self.abort_gesture();
        if orientation.is_landscape() != self.orientation.is_landscape() {
            let size = self.bounds.size;
            self.resize(Rect::new(self.bounds.origin, Size::new(size.height, size.width)));
        }
        self.orientation = orientation;
    }

    /// Moves the overlay to new bounds, keeping the selection at the same
    /// relative position and size.
    pub fn resize(&mut self, bounds: Rect) {
        self.abort_gesture();
        let mapped = map_between(&self.selection, &self.bounds, &bounds);
        debug!("Overlay resized to {:?}, selection {:?}", bounds, mapped);
        self.selection = constrain_to_bounds(&mapped, &bounds, self.config.edge_snap, false);
        self.bounds = bounds;
    }

    fn abort_gesture(&mut self) {
        self.pressed_button = None;
        self.dragged_selection = None;
        if self.controller.gesture_cancel().is_ok() {
            if let Some(previous) = self.selection_at_gesture_start.take() {
                self.selection = previous;
            }
        }
    }

    pub fn render(&self) -> Vec<RenderCommand> {
        render_overlay(self)
    }

    /// Captures the pixels under the current selection.
    pub fn capture(&self, capture: &dyn ImageCapture) -> SnapResult<RgbaImage> {
        capture.capture_rect(&self.selection)
    }
}

/// Keeps `rect` inside `bounds`.
///
/// With `keep_size` the rectangle is shifted back inside; otherwise the parts
/// sticking out are cut off. Sides closer than `snap` to a side of the bounds
/// end up on it.
pub fn constrain_to_bounds(rect: &Rect, bounds: &Rect, snap: Float, keep_size: bool) -> Rect {
    let limits = Edges::from_rect(bounds);
    let edges = Edges::from_rect(rect);
    if keep_size {
        let width = edges.width().min(limits.width());
        let height = edges.height().min(limits.height());
        let left = snap_start(edges.left, width, limits.left, limits.right, snap);
        let top = snap_start(edges.top, height, limits.top, limits.bottom, snap);
        return Rect::new(Point::new(left, top), Size::new(width, height));
    }
    let left = if edges.left - limits.left > snap {
        edges.left.min(limits.right)
    } else {
        limits.left
    };
    let top = if edges.top - limits.top > snap {
        edges.top.min(limits.bottom)
    } else {
        limits.top
    };
    let right = if limits.right - edges.right > snap {
        edges.right.max(left)
    } else {
        limits.right
    };
    let bottom = if limits.bottom - edges.bottom > snap {
        edges.bottom.max(top)
    } else {
        limits.bottom
    };
    Edges {
        left,
        top,
        right,
        bottom,
    }
    .to_rect()
}

fn snap_start(start: Float, length: Float, min: Float, max: Float, snap: Float) -> Float {
    if start - min <= snap {
        min
    } else if max - (start + length) <= snap {
        max - length
    } else {
        start
    }
}

/// Maps `rect` from the coordinate frame `from` into `to`, proportionally.
fn map_between(rect: &Rect, from: &Rect, to: &Rect) -> Rect {
    let scale_x = if from.size.width > 0.0 {
        to.size.width / from.size.width
    } else {
        1.0
    };
    let scale_y = if from.size.height > 0.0 {
        to.size.height / from.size.height
    } else {
        1.0
    };
    Rect::new(
        Point::new(
            to.origin.x + (rect.origin.x - from.origin.x) * scale_x,
            to.origin.y + (rect.origin.y - from.origin.y) * scale_y,
        ),
        Size::new(rect.size.width * scale_x, rect.size.height * scale_y),
    )
}
