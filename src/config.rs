//! Engine configuration
//!
//! Tunable geometry parameters for docking and layout. The defaults
//! reproduce the shell's stock behavior; embedders can adjust an instance
//! before handing it to [`crate::PanelArea`].

use serde::{Deserialize, Serialize};

use crate::model::Size;

/// Docking and layout tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockConfig {
    /// Share of a directional split kept by the pre-existing content
    #[serde(default = "default_dock_ratio")]
    pub dock_ratio: f32,

    /// Distance of edge anchors from the panel border, in layout units
    #[serde(default = "default_anchor_inset")]
    pub anchor_inset: f32,

    /// Margin kept between floating panels and the viewport edges
    #[serde(default = "default_float_margin")]
    pub float_margin: f32,

    /// Initial size given to newly created floating panels
    #[serde(default = "default_floating_size")]
    pub preferred_floating_size: Size,

    /// Allowed range for interactive split ratios (min, max)
    #[serde(default = "default_ratio_clamp")]
    pub ratio_clamp: (f32, f32),
}

fn default_dock_ratio() -> f32 {
    0.75
}

fn default_anchor_inset() -> f32 {
    10.0
}

fn default_float_margin() -> f32 {
    10.0
}

fn default_floating_size() -> Size {
    Size::new(300.0, 250.0)
}

fn default_ratio_clamp() -> (f32, f32) {
    (0.05, 0.95)
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            dock_ratio: default_dock_ratio(),
            anchor_inset: default_anchor_inset(),
            float_margin: default_float_margin(),
            preferred_floating_size: default_floating_size(),
            ratio_clamp: default_ratio_clamp(),
        }
    }
}
