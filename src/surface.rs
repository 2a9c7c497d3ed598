//! The rendering surface the animator measures and animates.
//!
//! [`Surface`] is the DOM/layout collaborator: it exposes element geometry,
//! class and style mutation, the keyframe animation primitive and the
//! animation-frame clock. The `web` feature provides a `web-sys`
//! implementation; tests use an in-memory one.

use futures::future::LocalBoxFuture;

use crate::animation::keyframes::{Keyframes, Timing};
use crate::error::LightboxError;
use crate::geometry::Rect;

/// Resolves when an animation finishes, or with the error that stopped it.
pub type AnimationFinished = LocalBoxFuture<'static, Result<(), LightboxError>>;

/// Resolves on the next animation frame. Dropping it before then cancels
/// the frame request.
pub type NextFrame = LocalBoxFuture<'static, ()>;

/// The two nodes making up the wireframe overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayNodes<E> {
    /// The positioned box that is animated between rects.
    pub frame: E,
    /// The proxy image inside the box.
    pub image: E,
}

/// DOM/layout provider.
///
/// Mutating methods are best-effort: they return an error instead of
/// panicking when the node is detached or the call is unsupported, and
/// callers decide whether to care.
pub trait Surface: 'static {
    /// Handle to a node. Cheap to clone; equality is node identity.
    type Element: Clone + PartialEq + 'static;

    /// The lightbox's large image node, if mounted.
    fn lightbox_image(&self) -> Option<Self::Element>;

    /// The lightbox's backdrop container, if mounted.
    fn backdrop(&self) -> Option<Self::Element>;

    /// Grid thumbnail whose `src` attribute equals `src`.
    fn find_thumbnail(&self, src: &str) -> Option<Self::Element>;

    /// Every element currently carrying `class`.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Element>;

    /// Image URL of `element`: its own `src` when it is an image, otherwise
    /// the `src` of its first descendant image.
    fn image_source(&self, element: &Self::Element) -> Option<String>;

    /// Current viewport geometry. Detached nodes report [`Rect::ZERO`].
    fn rect(&self, element: &Self::Element) -> Rect;

    /// Whether `element` is still attached to the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    /// Add or remove a class.
    fn set_class(
        &self,
        element: &Self::Element,
        class: &str,
        enabled: bool,
    ) -> Result<(), LightboxError>;

    /// Set an inline style property (kebab-case name).
    fn set_style(
        &self,
        element: &Self::Element,
        property: &str,
        value: &str,
    ) -> Result<(), LightboxError>;

    /// Point an image node at a new URL.
    fn set_image_source(
        &self,
        element: &Self::Element,
        src: &str,
    ) -> Result<(), LightboxError>;

    /// Create the overlay nodes, attached to the document and hidden.
    fn create_overlay(
        &self,
        class: &str,
    ) -> Result<OverlayNodes<Self::Element>, LightboxError>;

    /// Start a keyframe animation on `element`.
    ///
    /// Returns an error when the primitive is unavailable or refuses the
    /// keyframes; otherwise a future for the animation's finished signal.
    fn animate(
        &self,
        element: &Self::Element,
        keyframes: &Keyframes,
        timing: &Timing,
    ) -> Result<AnimationFinished, LightboxError>;

    /// Cancel every running animation on `element`.
    fn cancel_animations(
        &self,
        element: &Self::Element,
    ) -> Result<(), LightboxError>;

    /// Detach `element` from the document.
    fn remove(&self, element: &Self::Element) -> Result<(), LightboxError>;

    /// Wait for the next animation frame.
    fn next_frame(&self) -> NextFrame;
}
