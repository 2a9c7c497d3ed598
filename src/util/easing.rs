//! Easing curves for lightbox transitions.
//!
//! Curves are handed to the surface's animation primitive, so each variant
//! maps onto a CSS `<easing-function>`. Custom curves use the
//! `cubic-bezier()` form with control points clamped to the range CSS
//! accepts on the x axis.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// CSS `ease`.
    Ease,
    /// CSS `ease-in` (slow start, fast end).
    EaseIn,
    /// CSS `ease-out` (fast start, slow end).
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Cubic Bézier with control points (x1, y1) and (x2, y2).
    /// x1 and x2 must lie in [0, 1].
    CubicBezier {
        /// First control point, x.
        x1: f32,
        /// First control point, y.
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
}

impl EasingFunction {
    /// Emphasized decelerate curve used for the zoom geometry.
    pub const ZOOM: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.2,
        y1: 0.0,
        x2: 0.0,
        y2: 1.0,
    };

    /// Backdrop dimming when the lightbox opens.
    pub const DIM_IN: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// Backdrop clearing when the lightbox closes.
    pub const DIM_OUT: EasingFunction = EasingFunction::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    /// CSS serialization, e.g. `cubic-bezier(0.2, 0, 0, 1)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        match *self {
            EasingFunction::Linear => "linear".to_owned(),
            EasingFunction::Ease => "ease".to_owned(),
            EasingFunction::EaseIn => "ease-in".to_owned(),
            EasingFunction::EaseOut => "ease-out".to_owned(),
            EasingFunction::EaseInOut => "ease-in-out".to_owned(),
            EasingFunction::CubicBezier { x1, y1, x2, y2 } => {
                // x outside [0, 1] makes Element.animate throw
                let x1 = x1.clamp(0.0, 1.0);
                let x2 = x2.clamp(0.0, 1.0);
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_curves() {
        assert_eq!(EasingFunction::Linear.to_css(), "linear");
        assert_eq!(EasingFunction::EaseIn.to_css(), "ease-in");
        assert_eq!(EasingFunction::EaseInOut.to_css(), "ease-in-out");
    }

    #[test]
    fn test_cubic_bezier_serialization() {
        assert_eq!(EasingFunction::ZOOM.to_css(), "cubic-bezier(0.2, 0, 0, 1)");
        assert_eq!(
            EasingFunction::DIM_OUT.to_css(),
            "cubic-bezier(0.4, 0, 1, 1)"
        );
    }

    #[test]
    fn test_x_control_points_are_clamped() {
        let wild = EasingFunction::CubicBezier {
            x1: -0.5,
            y1: 1.6,
            x2: 1.5,
            y2: -0.3,
        };
        assert_eq!(wild.to_css(), "cubic-bezier(0, 1.6, 1, -0.3)");
    }

    #[test]
    fn test_dim_curves_differ() {
        assert_ne!(EasingFunction::DIM_IN, EasingFunction::DIM_OUT);
    }

    #[test]
    fn test_default_is_zoom() {
        assert_eq!(EasingFunction::default(), EasingFunction::ZOOM);
    }
}
