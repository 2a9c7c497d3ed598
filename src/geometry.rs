//! On-screen geometry snapshots.

use serde::{Deserialize, Serialize};

/// Snapshot of an element's viewport geometry, in CSS pixels.
///
/// A rect is only meaningful for the layout pass it was read in. Rects are
/// never cached across open/close cycles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Width of the border box.
    pub width: f64,
    /// Height of the border box.
    pub height: f64,
}

impl Rect {
    /// Zero-sized rect at the origin. What a detached or undecoded element
    /// reports.
    pub const ZERO: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Rect from position and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the rect can take part in a geometry transition.
    ///
    /// Position is irrelevant; only a strictly positive width and height
    /// count. NaN dimensions are invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Whether both endpoints of a transition are usable.
#[must_use]
pub fn both_valid(from: &Rect, to: &Rect) -> bool {
    from.is_valid() && to.is_valid()
}
