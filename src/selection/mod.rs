//! Hit-testing and drag handling for the selection rectangle.

pub mod classifier;
pub mod drag;
pub mod location;

pub use classifier::{classify, RegionClassifier, DEFAULT_TOLERANCE};
pub use drag::{DragController, DragSession, DragState, GestureOutcome};
pub use location::Location;
