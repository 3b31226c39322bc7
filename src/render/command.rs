use crate::types::{Color, Float, Point, Rect};

/// Backend independent drawing instructions.
///
/// Colors, stroke width and dash pattern apply to everything drawn after
/// them until the matching `Restore`.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetStrokeWidth(Float),
    /// Alternating dash and gap lengths. Empty means a solid line.
    SetLineDash(Vec<Float>),
    SetFontSize(Float),
    FillRect { rect: Rect },
    /// Fills `outer` except for `hole`.
    FillRectWithHole { outer: Rect, hole: Rect },
    FillRoundRect { rect: Rect, radius: Float },
    StrokeRect { rect: Rect },
    FillCircle { center: Point, radius: Float },
    Translate { x: Float, y: Float },
    /// Draws `text` centered on `position`.
    DrawText { position: Point, text: String },
}
