//! The lightbox animator: drives the zoom between a grid thumbnail and the
//! lightbox image while keeping open/closed state consistent under rapid
//! or interrupted interaction.
//!
//! - `session`: generation counter and the refs a cycle shares
//! - `open`: `open_lightbox` and the mount effect that plays the zoom in
//! - `close`: `close_lightbox`
//! - `sync`: active-thumbnail bookkeeping while open and after close
//!
//! The host calls [`LightboxAnimator::commit`] after every state commit,
//! the way a UI framework runs effects: the animator diffs what it saw last
//! time, cancels the previous mount effect and returns any new one for the
//! host to spawn on its local executor.

mod close;
mod open;
mod session;
mod sync;


use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{AbortHandle, LocalBoxFuture};

use crate::animation::wireframe::Wireframe;
use crate::gallery::GalleryState;
use crate::options::LightboxOptions;
use crate::surface::Surface;
use session::Session;

/// What the effects last ran against: open flag, index, generation.
type EffectDeps = (bool, usize, u64);

pub(crate) struct Inner<S: Surface, G: GalleryState> {
    surface: Rc<S>,
    gallery: G,
    options: LightboxOptions,
    session: Session<S::Element>,
    wireframe: Wireframe<S>,
    last_deps: Cell<Option<EffectDeps>>,
    /// Cancels the pending measurement of the running mount effect.
    mount_abort: RefCell<Option<AbortHandle>>,
}

/// Lightbox open/close transition controller.
///
/// Cheap to clone; clones share state. All methods must be called from the
/// UI thread.
pub struct LightboxAnimator<S: Surface, G: GalleryState> {
    inner: Rc<Inner<S, G>>,
}

impl<S: Surface, G: GalleryState> Clone for LightboxAnimator<S, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: Surface, G: GalleryState> LightboxAnimator<S, G> {
    /// Animator over `surface`, reading and mutating `gallery`.
    pub fn new(surface: S, gallery: G, options: LightboxOptions) -> Self {
        let wireframe = Wireframe::new(options.dom.wireframe_class.clone());
        Self {
            inner: Rc::new(Inner {
                surface: Rc::new(surface),
                gallery,
                options,
                session: Session::new(),
                wireframe,
                last_deps: Cell::new(None),
                mount_abort: RefCell::new(None),
            }),
        }
    }

    /// The surface being animated.
    pub fn surface(&self) -> &S {
        &self.inner.surface
    }

    /// The gallery state owner.
    pub fn gallery(&self) -> &G {
        &self.inner.gallery
    }

    /// Options in effect.
    pub fn options(&self) -> &LightboxOptions {
        &self.inner.options
    }

    /// Generation of the most recent open. Starts at zero.
    pub fn generation(&self) -> u64 {
        self.inner.session.generation()
    }

    /// Whether an open is still waiting for its mount effect to consume
    /// the captured thumbnail rect.
    pub fn has_pending_capture(&self) -> bool {
        self.inner.session.has_capture()
    }

    /// Thumbnail the current cycle was opened from, if still remembered.
    pub fn remembered_thumbnail(&self) -> Option<S::Element> {
        self.inner.session.opened_thumb()
    }

    /// Thumbnail currently marked active.
    pub fn active_thumbnail(&self) -> Option<S::Element> {
        self.inner.session.active_thumb()
    }

    /// Whether the backdrop is dimmed or dimming.
    pub fn is_backdrop_dimmed(&self) -> bool {
        self.inner.session.backdrop_dimmed()
    }

    /// Run the effects for the gallery's current state.
    ///
    /// Call after every state commit. Does nothing when the open flag,
    /// index and generation are unchanged since the previous call.
    /// Otherwise the previous mount effect is cancelled (if it is still
    /// waiting on a frame), the active thumbnail is re-synced while open or
    /// swept after close, and, while open, the mount effect is returned for
    /// the host to spawn.
    #[must_use = "spawn the returned effect on the local executor"]
    pub fn commit(&self) -> Option<LocalBoxFuture<'static, ()>> {
        let inner = &self.inner;
        let open = inner.gallery.is_lightbox_open();
        let index = inner.gallery.lightbox_index();
        let deps = (open, index, inner.session.generation());
        let previous = inner.last_deps.replace(Some(deps));
        if previous == Some(deps) {
            return None;
        }

        inner.cancel_mount_effect();
        let was_open = previous.is_some_and(|(open, _, _)| open);
        if open {
            inner.sync_active_thumbnail(index);
            Rc::clone(inner).mount_effect()
        } else {
            if was_open {
                inner.sweep_active_markers();
            }
            None
        }
    }

    /// Restore every thumbnail still marked active and forget the active
    /// ref. Idempotent; never fails.
    pub fn sweep_active_markers(&self) {
        self.inner.sweep_active_markers();
    }

    /// Tear the animator down: cancel the pending mount effect, stop any
    /// overlay animation and detach the overlay. Never fails.
    pub fn teardown(&self) {
        self.inner.cancel_mount_effect();
        self.inner.wireframe.destroy(&self.inner.surface);
    }
}

impl<S: Surface, G: GalleryState> Inner<S, G> {
    fn cancel_mount_effect(&self) {
        if let Some(handle) = self.mount_abort.borrow_mut().take() {
            handle.abort();
        }
    }

    /// Add or remove the active marker on a thumbnail. Best-effort.
    fn mark_active(&self, thumb: &S::Element, active: bool) {
        let class = &self.options.dom.active_class;
        if let Err(e) = self.surface.set_class(thumb, class, active) {
            log::debug!("failed to toggle {class}: {e}");
        }
    }
}

impl<S: Surface, G: GalleryState> Drop for Inner<S, G> {
    fn drop(&mut self) {
        self.wireframe.destroy(&self.surface);
    }
}
