use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::keyframes::{Rgba, Timing};
use crate::util::easing::EasingFunction;

/// Durations, curves and colours of the lightbox transitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
pub struct MotionOptions {
    /// Duration of the thumbnail ↔ lightbox zoom, in milliseconds.
    #[schemars(title = "Zoom Duration", range(min = 0, max = 2000), extend("step" = 10))]
    pub zoom_ms: u32,
    /// Curve of the zoom geometry.
    #[schemars(title = "Zoom Easing")]
    pub zoom_easing: EasingFunction,
    /// Duration of the backdrop dimming on open, in milliseconds.
    #[schemars(title = "Dim In Duration", range(min = 0, max = 2000), extend("step" = 10))]
    pub dim_in_ms: u32,
    /// Duration of the backdrop clearing on close, in milliseconds.
    #[schemars(title = "Dim Out Duration", range(min = 0, max = 2000), extend("step" = 10))]
    pub dim_out_ms: u32,
    /// Curve of the backdrop dimming.
    #[schemars(skip)]
    pub dim_in_easing: EasingFunction,
    /// Curve of the backdrop clearing.
    #[schemars(skip)]
    pub dim_out_easing: EasingFunction,
    /// Backdrop colour once fully dimmed.
    #[schemars(skip)]
    pub dim_color: Rgba,
    /// Corner radius of grid thumbnails, px.
    #[schemars(title = "Thumbnail Radius", range(min = 0.0, max = 48.0), extend("step" = 1.0))]
    pub thumb_radius: f64,
    /// Corner radius of the lightbox image, px.
    #[schemars(title = "Lightbox Radius", range(min = 0.0, max = 48.0), extend("step" = 1.0))]
    pub lightbox_radius: f64,
    /// Animation frames spent waiting for the lightbox image to report a
    /// usable size before the zoom is skipped. Counts the first
    /// layout-settle frame.
    #[schemars(title = "Measure Frames", range(min = 1, max = 30))]
    pub measure_frames: u32,
}

impl MotionOptions {
    /// Timing of the wireframe zoom.
    #[must_use]
    pub fn zoom_timing(&self) -> Timing {
        Timing::from_millis(self.zoom_ms, self.zoom_easing)
    }

    /// Timing of the backdrop dimming (`dim_in`) or clearing.
    #[must_use]
    pub fn dim_timing(&self, dim_in: bool) -> Timing {
        if dim_in {
            Timing::from_millis(self.dim_in_ms, self.dim_in_easing)
        } else {
            Timing::from_millis(self.dim_out_ms, self.dim_out_easing)
        }
    }

    /// Measurement budget, never below one frame.
    #[must_use]
    pub fn measure_budget(&self) -> u32 {
        self.measure_frames.max(1)
    }
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            zoom_ms: 380,
            zoom_easing: EasingFunction::ZOOM,
            dim_in_ms: 280,
            dim_out_ms: 240,
            dim_in_easing: EasingFunction::DIM_IN,
            dim_out_easing: EasingFunction::DIM_OUT,
            dim_color: Rgba::new(0, 0, 0, 0.8),
            thumb_radius: 6.0,
            lightbox_radius: 0.0,
            measure_frames: 3,
        }
    }
}
