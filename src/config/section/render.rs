//! `[render]` section configuration.
//!
//! Preview settings for the `render` command.
//!
//! # Example
//!
//! ```toml
//! [render]
//! viewport_width = 1200   # Omit to render headless (empty placeholder)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::hero::{FixedViewport, Headless, Viewport};

/// Widths above this are almost certainly a typo.
const MAX_PLAUSIBLE_WIDTH: u32 = 16_384;

/// Render preview settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Simulated viewport width in CSS pixels.
    /// - absent (default): no viewport, nothing is rendered
    pub viewport_width: Option<u32>,
}

pub struct RenderConfigFields {
    pub viewport_width: FieldPath,
}

impl RenderConfig {
    pub const FIELDS: RenderConfigFields = RenderConfigFields {
        viewport_width: FieldPath::new("render.viewport_width"),
    };

    /// Viewport capability matching these settings.
    pub fn viewport(&self) -> Box<dyn Viewport> {
        match self.viewport_width {
            Some(width) => Box::new(FixedViewport(width)),
            None => Box::new(Headless),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match self.viewport_width {
            None => diag.warn(
                Self::FIELDS.viewport_width,
                "not set, `render` will produce an empty placeholder",
            ),
            Some(0) => diag.error(Self::FIELDS.viewport_width, "must be greater than 0"),
            Some(width) if width > MAX_PLAUSIBLE_WIDTH => diag.warn(
                Self::FIELDS.viewport_width,
                format!("{width}px is unusually wide"),
            ),
            Some(_) => {}
        }
    }
}
