//! Backdrop dimming.

use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::animation::keyframes::{Keyframes, Rgba};
use crate::options::MotionOptions;
use crate::surface::Surface;

/// Whether the backdrop dims (lightbox opening) or clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dim {
    /// Transparent → dim colour.
    In,
    /// Dim colour → transparent.
    Out,
}

impl Dim {
    fn colors(self, dim: Rgba) -> (Rgba, Rgba) {
        match self {
            Dim::In => (Rgba::TRANSPARENT, dim),
            Dim::Out => (dim, Rgba::TRANSPARENT),
        }
    }
}

/// A started backdrop fade.
///
/// [`finished`](Self::finished) never fails and never hangs past the
/// animation: when the primitive errors, the final colour is assigned
/// directly and the signal resolves.
#[must_use = "await `finished` or drop it to let the fade run unobserved"]
pub struct BackdropFade {
    finished: LocalBoxFuture<'static, ()>,
}

impl BackdropFade {
    /// A fade that has already settled.
    pub fn resolved() -> Self {
        Self {
            finished: future::ready(()).boxed_local(),
        }
    }

    /// Signal resolving once the backdrop holds its final colour.
    pub fn finished(self) -> LocalBoxFuture<'static, ()> {
        self.finished
    }
}

/// Start fading the lightbox backdrop in or out.
pub fn fade_backdrop<S: Surface>(
    surface: &Rc<S>,
    motion: &MotionOptions,
    dim: Dim,
) -> BackdropFade {
    let Some(backdrop) = surface.backdrop() else {
        log::debug!("no backdrop mounted, skipping {dim:?} fade");
        return BackdropFade::resolved();
    };
    let (from, to) = dim.colors(motion.dim_color);
    let final_color = to.to_css();
    let keyframes = Keyframes::BackgroundColor { from, to };
    let timing = motion.dim_timing(dim == Dim::In);

    match surface.animate(&backdrop, &keyframes, &timing) {
        Ok(finished) => {
            let surface = Rc::clone(surface);
            BackdropFade {
                finished: async move {
                    if let Err(e) = finished.await {
                        log::debug!("backdrop fade interrupted: {e}");
                    }
                    commit_color(&*surface, &backdrop, &final_color);
                }
                .boxed_local(),
            }
        }
        Err(e) => {
            log::debug!("backdrop fade unavailable: {e}");
            commit_color(&**surface, &backdrop, &final_color);
            BackdropFade::resolved()
        }
    }
}

fn commit_color<S: Surface>(surface: &S, backdrop: &S::Element, color: &str) {
    if let Err(e) = surface.set_style(backdrop, "background-color", color) {
        log::debug!("failed to set backdrop colour: {e}");
    }
}
