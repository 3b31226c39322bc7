use rgb::RGBA8;
use serde::Deserialize;

pub struct ScreenSpace;
pub type Float = f32;
pub type Rect = euclid::Rect<Float, ScreenSpace>;
pub type Point = euclid::Point2D<Float, ScreenSpace>;
pub type Size = euclid::Size2D<Float, ScreenSpace>;

/// An 8-bit RGBA color, deserialized from a `[r, g, b, a]` array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 4]")]
pub struct Color {
    pub rgba: RGBA8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgba: RGBA8 { r, g, b, a },
        }
    }

    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value, 255)
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::new(self.rgba.r, self.rgba.g, self.rgba.b, alpha)
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn opacity(&self) -> Float {
        Float::from(self.rgba.a) / 255.0
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
