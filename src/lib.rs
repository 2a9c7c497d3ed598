// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Zoom transitions for the Fringe Matrix gallery lightbox.
//!
//! Clicking a grid thumbnail opens the lightbox with a proxy "wireframe"
//! box that grows from the thumbnail's rect to the lightbox image's rect
//! while the backdrop dims; closing plays the reverse. The controller keeps
//! the open/closed state consistent under rapid, overlapping or interrupted
//! interaction, and degrades to a plain fade when layout measurements are
//! unusable.
//!
//! # Key entry points
//!
//! - [`LightboxAnimator`] - open/close sequencing and effect handling
//! - [`Surface`] - the rendering surface the animator measures and animates
//! - [`GalleryState`] - the state owner the animator reads and mutates
//! - [`LightboxOptions`] - timings, curves and DOM hooks, loadable from TOML
//!
//! # Architecture
//!
//! Everything runs on the UI thread. The animator never owns an executor:
//! [`LightboxAnimator::commit`] hands mount effects back to the host, which
//! spawns them on its local executor. Suspension only happens at animation
//! frame boundaries and while waiting on an animation's finished signal.
//! A generation counter, bumped by every open, keeps late cleanup from an
//! older cycle away from the refs a newer cycle set.
//!
//! With the `web` feature, [`web::DomSurface`] implements [`Surface`] on
//! top of `web-sys`.

pub mod animation;
pub mod controller;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod options;
pub mod surface;
pub mod util;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::LightboxAnimator;
pub use error::LightboxError;
pub use gallery::{GalleryImage, GalleryState};
pub use geometry::Rect;
pub use options::LightboxOptions;
pub use surface::Surface;
