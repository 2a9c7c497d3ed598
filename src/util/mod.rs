//! Shared utilities: CSS easing curves and selector escaping.

pub mod easing;
pub mod selector;
