use crate::types::{Color, Float};
use serde::Deserialize;

/// Colors and text metrics used to paint the overlay.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaskStyling {
    // Mask
    pub mask_color: Color,
    pub border_color: Color,
    pub handle_color: Color,

    // Buttons
    pub button_color: Color,
    pub button_pressed_color: Color,
    pub button_text_color: Color,

    // Text style
    pub text_size: Float,
}

impl Default for MaskStyling {
    fn default() -> Self {
        Self::dark()
    }
}

impl MaskStyling {
    pub fn dark() -> Self {
        MaskStyling {
            mask_color: Color::BLACK.with_alpha(153),
            border_color: Color::WHITE,
            handle_color: Color::WHITE,
            button_color: Color::GRAY.with_alpha(128),
            button_pressed_color: Color::gray(80).with_alpha(200),
            button_text_color: Color::WHITE,
            text_size: 14.0,
        }
    }

    pub fn light() -> Self {
        MaskStyling {
            mask_color: Color::WHITE.with_alpha(153),
            border_color: Color::gray(40),
            handle_color: Color::gray(40),
            button_color: Color::gray(210).with_alpha(200),
            button_pressed_color: Color::gray(240),
            button_text_color: Color::BLACK,
            text_size: 14.0,
        }
    }
}
