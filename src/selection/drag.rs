use crate::geometry::Edges;
use crate::result::{SnapError, SnapErrorKind, SnapResult};
use crate::selection::classifier::RegionClassifier;
use crate::selection::location::Location;
use crate::types::{Point, Rect};
use tracing::debug;

/// State of one drag gesture, from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    location: Location,
    previous_point: Point,
}

impl DragSession {
    fn new(location: Location, point: Point) -> Self {
        Self {
            location,
            previous_point: point,
        }
    }

    /// The part of the rectangle being dragged. Changes when a resize pushes
    /// one side across the opposite one.
    pub fn location(&self) -> Location {
        self.location
    }

    pub fn previous_point(&self) -> Point {
        self.previous_point
    }

    /// Gestures starting outside the rectangle never change it.
    pub fn is_inert(&self) -> bool {
        self.location == Location::Outside
    }

    fn apply(&mut self, rect: &Rect, point: Point) -> Rect {
        let delta = point - self.previous_point;
        self.previous_point = point;
        match self.location {
            Location::Outside => *rect,
            Location::Inside => Edges::from_rect(rect).to_rect().translate(delta),
            location => {
                let mut edges = Edges::from_rect(rect);
                if location.moves_left() {
                    edges.left += delta.x;
                }
                if location.moves_right() {
                    edges.right += delta.x;
                }
                if location.moves_top() {
                    edges.top += delta.y;
                }
                if location.moves_bottom() {
                    edges.bottom += delta.y;
                }
                if edges.is_flipped_horizontally() {
                    self.location = self.location.mirrored_horizontally();
                }
                if edges.is_flipped_vertically() {
                    self.location = self.location.mirrored_vertically();
                }
                edges.normalized().to_rect()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Active(Location),
}

/// Returned when a gesture finishes so the caller decides what happens next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The pointer was released. `location` is the part that was dragged.
    Finished { location: Location },
    /// The gesture was aborted by the host; any rollback is up to the caller.
    Cancelled { location: Location },
}

/// Turns pointer gestures into moves and resizes of a rectangle.
///
/// The controller never owns the rectangle: every move takes the current
/// rectangle and returns the updated one.
#[derive(Debug, Default)]
pub struct DragController {
    classifier: RegionClassifier,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(classifier: RegionClassifier) -> Self {
        Self {
            classifier,
            session: None,
        }
    }

    pub fn classifier(&self) -> &RegionClassifier {
        &self.classifier
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn state(&self) -> DragState {
        match &self.session {
            None => DragState::Idle,
            Some(session) => DragState::Active(session.location),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn gesture_start(&mut self, rect: &Rect, point: Point) -> SnapResult<DragSession> {
        if self.session.is_some() {
            return Err(SnapError::new(SnapErrorKind::GestureInProgress));
        }
        let location = self.classifier.classify(rect, point);
        debug!("Drag started at {:?} on {:?}", point, location);
        let session = DragSession::new(location, point);
        self.session = Some(session);
        Ok(session)
    }

    pub fn gesture_move(&mut self, rect: &Rect, point: Point) -> SnapResult<Rect> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| SnapError::new(SnapErrorKind::NoActiveGesture))?;
        Ok(session.apply(rect, point))
    }

    pub fn gesture_end(&mut self) -> SnapResult<GestureOutcome> {
        let session = self.take_session()?;
        debug!("Drag finished on {:?}", session.location);
        Ok(GestureOutcome::Finished {
            location: session.location,
        })
    }

    pub fn gesture_cancel(&mut self) -> SnapResult<GestureOutcome> {
        let session = self.take_session()?;
        debug!("Drag cancelled on {:?}", session.location);
        Ok(GestureOutcome::Cancelled {
            location: session.location,
        })
    }

    fn take_session(&mut self) -> SnapResult<DragSession> {
        self.session
            .take()
            .ok_or_else(|| SnapError::new(SnapErrorKind::NoActiveGesture))
    }
}
