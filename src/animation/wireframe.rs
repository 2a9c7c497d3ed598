//! The wireframe overlay: a fixed-position box carrying a proxy image,
//! animated between a thumbnail's rect and the lightbox image's rect.
//!
//! One overlay is created lazily on first use and reused by every open and
//! close until [`Wireframe::destroy`]. Between transitions it is hidden.

use std::cell::RefCell;

use futures::future;

use crate::animation::keyframes::{px, Direction, Keyframes, Timing};
use crate::geometry::Rect;
use crate::options::MotionOptions;
use crate::surface::{OverlayNodes, Surface};
use crate::util::easing::EasingFunction;

/// Owner of the reusable overlay nodes.
pub struct Wireframe<S: Surface> {
    class: String,
    nodes: RefCell<Option<OverlayNodes<S::Element>>>,
}

impl<S: Surface> Wireframe<S> {
    /// Overlay that will be created with `class` on first use.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            nodes: RefCell::new(None),
        }
    }

    /// Current overlay nodes, if created and not destroyed.
    pub fn nodes(&self) -> Option<OverlayNodes<S::Element>> {
        self.nodes.borrow().clone()
    }

    /// Reuse the overlay, or create it when missing or detached.
    fn ensure(&self, surface: &S) -> Option<OverlayNodes<S::Element>> {
        if let Some(nodes) = self.nodes() {
            if surface.is_connected(&nodes.frame) {
                return Some(nodes);
            }
            log::debug!("wireframe overlay was detached, recreating");
        }
        match surface.create_overlay(&self.class) {
            Ok(nodes) => {
                *self.nodes.borrow_mut() = Some(nodes.clone());
                Some(nodes)
            }
            Err(e) => {
                log::debug!("failed to create wireframe overlay: {e}");
                None
            }
        }
    }

    /// Animate the overlay from `from` to `to`.
    ///
    /// Both rects must already be valid; this does not re-check them.
    /// `src` is shown inside the box when given. Resolves once the
    /// geometry animation finishes, or right away if it cannot start. The
    /// overlay is hidden again in every case.
    pub async fn play(
        &self,
        surface: &S,
        motion: &MotionOptions,
        from: Rect,
        to: Rect,
        src: Option<&str>,
        direction: Direction,
    ) {
        let Some(nodes) = self.ensure(surface) else {
            return;
        };
        let _hide = HideOnDrop {
            surface,
            nodes: &nodes,
        };
        let (fit_from, fit_to) = direction.fit_modes();
        let (radius_from, radius_to) = match direction {
            Direction::Open => (motion.thumb_radius, motion.lightbox_radius),
            Direction::Close => (motion.lightbox_radius, motion.thumb_radius),
        };

        place(surface, &nodes.frame, &from, radius_from);
        if let Some(src) = src {
            if let Err(e) = surface.set_image_source(&nodes.image, src) {
                log::debug!("failed to load proxy image: {e}");
            }
            style(surface, &nodes.image, "object-fit", fit_from.as_css());
            style(surface, &nodes.image, "display", "block");
        } else {
            style(surface, &nodes.image, "display", "none");
        }
        style(surface, &nodes.frame, "display", "block");

        let timing = motion.zoom_timing();
        let geometry = Keyframes::geometry(from, to, radius_from, radius_to);
        match surface.animate(&nodes.frame, &geometry, &timing) {
            Ok(finished) => {
                // object-fit is discrete; linear timing flips it at the
                // halfway point of the duration
                let fit = src.and_then(|_| {
                    let flip = Keyframes::ObjectFit {
                        from: fit_from,
                        to: fit_to,
                    };
                    let linear = Timing {
                        easing: EasingFunction::Linear,
                        ..timing
                    };
                    surface.animate(&nodes.image, &flip, &linear).ok()
                });
                let result = match fit {
                    Some(fit) => future::join(finished, fit).await.0,
                    None => finished.await,
                };
                match result {
                    Ok(()) => place(surface, &nodes.frame, &to, radius_to),
                    Err(e) => log::debug!(
                        "wireframe {} transition failed: {e}",
                        direction.name()
                    ),
                }
            }
            Err(e) => log::debug!(
                "wireframe {} transition unavailable: {e}",
                direction.name()
            ),
        }
    }

    /// Cancel running animations and detach the overlay. Safe to call
    /// repeatedly and when the overlay was never created.
    pub fn destroy(&self, surface: &S) {
        let Some(nodes) = self.nodes.borrow_mut().take() else {
            return;
        };
        for node in [&nodes.frame, &nodes.image] {
            if let Err(e) = surface.cancel_animations(node) {
                log::debug!("failed to cancel overlay animations: {e}");
            }
        }
        if let Err(e) = surface.remove(&nodes.frame) {
            log::debug!("failed to remove wireframe overlay: {e}");
        }
    }
}

/// Hides the overlay when a transition ends, including when its future is
/// dropped part-way.
struct HideOnDrop<'a, S: Surface> {
    surface: &'a S,
    nodes: &'a OverlayNodes<S::Element>,
}

impl<S: Surface> Drop for HideOnDrop<'_, S> {
    fn drop(&mut self) {
        hide(self.surface, self.nodes);
    }
}

fn place<S: Surface>(surface: &S, element: &S::Element, rect: &Rect, radius: f64) {
    style(surface, element, "left", &px(rect.left));
    style(surface, element, "top", &px(rect.top));
    style(surface, element, "width", &px(rect.width));
    style(surface, element, "height", &px(rect.height));
    style(surface, element, "border-radius", &px(radius));
}

fn hide<S: Surface>(surface: &S, nodes: &OverlayNodes<S::Element>) {
    style(surface, &nodes.image, "display", "none");
    style(surface, &nodes.frame, "display", "none");
}

fn style<S: Surface>(surface: &S, element: &S::Element, property: &str, value: &str) {
    if let Err(e) = surface.set_style(element, property, value) {
        log::debug!("failed to set overlay {property}: {e}");
    }
}
