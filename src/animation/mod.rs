//! Transition building blocks shared by the open and close sequences.
//!
//! - [`keyframes`]: typed keyframe/timing descriptions
//! - [`backdrop`]: backdrop dim/clear helper
//! - [`wireframe`]: the reusable overlay and its geometry transition
//! - [`measure`]: bounded wait for a valid layout measurement

pub mod backdrop;
pub mod keyframes;
pub mod measure;
pub mod wireframe;

pub use backdrop::{fade_backdrop, BackdropFade, Dim};
pub use keyframes::{Direction, Keyframes, ObjectFit, Rgba, Timing};
pub use measure::settle_rect;
pub use wireframe::Wireframe;
