//! Keyframe and timing descriptions handed to the animation primitive.
//!
//! The animator only ever plays two-keyframe animations (start → end).
//! [`Keyframes`] describes them in typed form; surfaces that drive CSS
//! animations call [`Keyframes::to_css`] to get property/value pairs.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::util::easing::EasingFunction;

/// An sRGB colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in [0, 1].
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0.0);

    /// Colour from channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS serialization, e.g. `rgba(0, 0, 0, 0.8)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let a = self.a.clamp(0.0, 1.0);
        format!("rgba({}, {}, {}, {a})", self.r, self.g, self.b)
    }
}

/// How the proxy image fills the wireframe overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFit {
    /// Crop to fill (what grid thumbnails use).
    Cover,
    /// Letterbox to fit (what the lightbox uses).
    Contain,
}

impl ObjectFit {
    /// CSS keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
        }
    }
}

/// Which way a wireframe transition runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Thumbnail → lightbox.
    Open,
    /// Lightbox → thumbnail.
    Close,
}

impl Direction {
    /// Fit mode at the start and end of the transition.
    #[must_use]
    pub fn fit_modes(self) -> (ObjectFit, ObjectFit) {
        match self {
            Direction::Open => (ObjectFit::Cover, ObjectFit::Contain),
            Direction::Close => (ObjectFit::Contain, ObjectFit::Cover),
        }
    }

    /// Lowercase name for logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Open => "open",
            Direction::Close => "close",
        }
    }
}

/// One CSS keyframe: property/value pairs in camelCase (Web Animations
/// API naming).
pub type CssKeyframe = Vec<(&'static str, String)>;

/// A two-keyframe animation.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyframes {
    /// Position, size and corner rounding.
    Geometry {
        /// Start geometry.
        from: Rect,
        /// End geometry.
        to: Rect,
        /// Start corner radius, px.
        from_radius: f64,
        /// End corner radius, px.
        to_radius: f64,
    },
    /// Background colour of the backdrop.
    BackgroundColor {
        /// Start colour.
        from: Rgba,
        /// End colour.
        to: Rgba,
    },
    /// Discrete `object-fit` flip. Discrete properties switch at the
    /// halfway point, which is where the fit change belongs.
    ObjectFit {
        /// Fit before the midpoint.
        from: ObjectFit,
        /// Fit after the midpoint.
        to: ObjectFit,
    },
}

impl Keyframes {
    /// Geometry keyframes between two rects.
    #[must_use]
    pub fn geometry(from: Rect, to: Rect, from_radius: f64, to_radius: f64) -> Self {
        Self::Geometry {
            from,
            to,
            from_radius,
            to_radius,
        }
    }

    /// Start and end keyframes as CSS property/value pairs.
    #[must_use]
    pub fn to_css(&self) -> [CssKeyframe; 2] {
        match self {
            Keyframes::Geometry {
                from,
                to,
                from_radius,
                to_radius,
            } => [
                geometry_frame(from, *from_radius),
                geometry_frame(to, *to_radius),
            ],
            Keyframes::BackgroundColor { from, to } => [
                vec![("backgroundColor", from.to_css())],
                vec![("backgroundColor", to.to_css())],
            ],
            Keyframes::ObjectFit { from, to } => [
                vec![("objectFit", from.as_css().to_owned())],
                vec![("objectFit", to.as_css().to_owned())],
            ],
        }
    }
}

fn geometry_frame(rect: &Rect, radius: f64) -> CssKeyframe {
    vec![
        ("left", px(rect.left)),
        ("top", px(rect.top)),
        ("width", px(rect.width)),
        ("height", px(rect.height)),
        ("borderRadius", px(radius)),
    ]
}

/// CSS pixel length.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Duration and curve of one animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Total duration.
    pub duration: Duration,
    /// Easing applied over the whole duration.
    pub easing: EasingFunction,
}

impl Timing {
    /// Timing from a millisecond duration.
    #[must_use]
    pub fn from_millis(millis: u32, easing: EasingFunction) -> Self {
        Self {
            duration: Duration::from_millis(u64::from(millis)),
            easing,
        }
    }

    /// Duration in (fractional) milliseconds, as the Web Animations API
    /// expects.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}
