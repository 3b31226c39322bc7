use crate::infrastructure::styling::MaskStyling;
use crate::result::{SnapError, SnapErrorKind, SnapResult};
use crate::selection::DEFAULT_TOLERANCE;
use crate::types::Float;
use crate::context;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Tunables of the snapshot overlay. Every field has a default, so a
/// configuration file only needs to list what it changes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    /// How close to a side or corner a press must land to grab it.
    pub edge_tolerance: Float,
    /// Half the side length of the square selection shown initially.
    pub default_half_length: Float,
    pub corner_dot_diameter: Float,
    /// Sides closer than this to the overlay bounds snap onto them.
    pub edge_snap: Float,
    pub border_width: Float,
    /// Dash and gap lengths of the selection border.
    pub border_dash: Vec<Float>,
    pub buttons: ButtonConfig,
    pub styling: MaskStyling,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ButtonConfig {
    pub width: Float,
    pub height: Float,
    /// Gap between the selection and the button row.
    pub margin: Float,
    pub corner_radius: Float,
    pub cancel_label: String,
    pub share_label: String,
    pub full_screen_label: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: DEFAULT_TOLERANCE,
            default_half_length: 80.0,
            corner_dot_diameter: 6.0,
            edge_snap: 5.0,
            border_width: 1.0,
            border_dash: vec![8.0, 5.0],
            buttons: ButtonConfig::default(),
            styling: MaskStyling::default(),
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            width: 88.0,
            height: 32.0,
            margin: 5.0,
            corner_radius: 4.0,
            cancel_label: "Cancel".to_string(),
            share_label: "Share".to_string(),
            full_screen_label: "FullScreen".to_string(),
        }
    }
}

impl OverlayConfig {
    pub fn from_yaml_str(source: &str) -> SnapResult<Self> {
        let config: Self = serde_yml::from_str(source)?;
        config.validate()
    }

    pub fn from_ron_str(source: &str) -> SnapResult<Self> {
        let config: Self = ron::from_str(source)?;
        config.validate()
    }

    /// Loads a `.yaml`/`.yml` or `.ron` file.
    pub fn load(path: impl AsRef<Path>) -> SnapResult<Self> {
        let path = path.as_ref();
        context!("load overlay configuration from '{}'", path.display() => {
            Self::load_file(path)
        })
    }

    fn load_file(path: &Path) -> SnapResult<Self> {
        info!("Loading overlay configuration: '{}'", path.display());
        let source = std::fs::read_to_string(path)?;
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            Some("ron") => Self::from_ron_str(&source),
            other => Err(config_error(format!(
                "unsupported configuration format {:?}",
                other.unwrap_or("")
            ))),
        }
    }

    fn validate(self) -> SnapResult<Self> {
        if !(self.edge_tolerance >= 0.0) {
            return Err(config_error(format!(
                "edge_tolerance must not be negative, got {}",
                self.edge_tolerance
            )));
        }
        if !(self.default_half_length > 0.0) {
            return Err(config_error(format!(
                "default_half_length must be positive, got {}",
                self.default_half_length
            )));
        }
        if self.border_dash.iter().any(|length| !(*length >= 0.0)) {
            return Err(config_error("border_dash lengths must not be negative"));
        }
        if !(self.buttons.width > 0.0 && self.buttons.height > 0.0) {
            return Err(config_error("button size must be positive"));
        }
        Ok(self)
    }
}

fn config_error(message: impl Into<String>) -> SnapError {
    SnapError::new(SnapErrorKind::Config(message.into()))
}
