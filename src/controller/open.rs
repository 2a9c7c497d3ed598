//! Opening: capture the clicked thumbnail, then zoom into the lightbox
//! once it has mounted and laid out.

use std::rc::Rc;

use futures::future::{self, AbortHandle, Abortable, FutureExt, LocalBoxFuture};

use super::session::Capture;
use super::{Inner, LightboxAnimator};
use crate::animation::backdrop::{fade_backdrop, BackdropFade, Dim};
use crate::animation::keyframes::Direction;
use crate::animation::measure::settle_rect;
use crate::gallery::GalleryState;
use crate::geometry::{both_valid, Rect};
use crate::surface::Surface;

impl<S: Surface, G: GalleryState> LightboxAnimator<S, G> {
    /// Open the lightbox at `index`, zooming from `source` when given.
    ///
    /// `source` is the clicked thumbnail: an image, or a container whose
    /// first descendant image is the thumbnail. Its rect and URL are
    /// captured now; the zoom itself runs from the mount effect returned by
    /// the next [`commit`](Self::commit), once the lightbox image exists.
    ///
    /// Safe to call again before a previous transition settles: each call
    /// starts a new generation, and stale cleanup leaves the newer cycle's
    /// refs untouched.
    pub fn open_lightbox(&self, index: usize, source: Option<&S::Element>) {
        let inner = &self.inner;
        let generation = inner.session.begin();
        log::trace!("open #{generation} at index {index}");
        if index >= inner.gallery.image_count() {
            log::debug!("opening lightbox at out-of-range index {index}");
        }

        if inner.gallery.reduce_motion() {
            inner.session.set_capture(None);
            inner.gallery.set_lightbox_index(index);
            inner.gallery.set_lightbox_open(true);
            inner.gallery.set_hide_lightbox_image(false);
            return;
        }

        match source {
            Some(thumb) => {
                let rect = inner.surface.rect(thumb);
                let src = inner.surface.image_source(thumb);
                inner.session.set_capture(Some(Capture { rect, src }));
                inner.gallery.set_hide_lightbox_image(true);
                if let Some(previous) = inner.session.active_thumb() {
                    if previous != *thumb {
                        inner.mark_active(&previous, false);
                    }
                }
                inner.mark_active(thumb, true);
                inner.session.set_opened_thumb(Some(thumb.clone()));
                inner.session.set_active_thumb(Some(thumb.clone()));
            }
            None => {
                inner.session.set_capture(None);
                inner.gallery.set_hide_lightbox_image(false);
            }
        }
        inner.gallery.set_lightbox_index(index);
        inner.gallery.set_lightbox_open(true);
    }
}

impl<S: Surface, G: GalleryState> Inner<S, G> {
    /// Mount effect, run by `commit` whenever the lightbox is open and the
    /// open flag, index or generation changed.
    pub(super) fn mount_effect(self: Rc<Self>) -> Option<LocalBoxFuture<'static, ()>> {
        if self.gallery.reduce_motion() {
            self.session.set_backdrop_dimmed(true);
            self.session.set_capture(None);
            return None;
        }

        if !self.session.has_capture() {
            // Opened without a source element, or the zoom already ran
            // for this cycle.
            if self.session.backdrop_dimmed() {
                return None;
            }
            return Some(self.dim_backdrop().finished());
        }

        let generation = self.session.generation();
        let (handle, registration) = AbortHandle::new_pair();
        *self.mount_abort.borrow_mut() = Some(handle);

        Some(
            async move {
                let budget = self.options.motion.measure_budget();
                let measured = Abortable::new(
                    settle_rect(&*self.surface, budget, || self.lightbox_rect()),
                    registration,
                )
                .await;
                let Ok(end) = measured else {
                    log::trace!("open #{generation} cancelled before layout settled");
                    return;
                };
                self.zoom_in(generation, end).await;
            }
            .boxed_local(),
        )
    }

    async fn zoom_in(&self, generation: u64, end: Rect) {
        if !self.session.is_current(generation) {
            log::trace!("open #{generation} superseded");
            return;
        }
        let Some(Capture { rect: start, src }) = self.session.take_capture() else {
            return;
        };

        if !both_valid(&start, &end) {
            log::debug!(
                "skipping open zoom, unusable geometry: {start:?} -> {end:?}"
            );
            self.gallery.set_hide_lightbox_image(false);
            self.dim_backdrop().finished().await;
            return;
        }

        self.gallery.set_hide_lightbox_image(true);
        let dim = self.dim_backdrop();
        let zoom = self.wireframe.play(
            &self.surface,
            &self.options.motion,
            start,
            end,
            src.as_deref(),
            Direction::Open,
        );
        let _ = future::join(dim.finished(), zoom).await;

        if self.session.is_current(generation) {
            self.gallery.set_hide_lightbox_image(false);
        }
    }

    /// Dim the backdrop unless it already is (or is dimming).
    fn dim_backdrop(&self) -> BackdropFade {
        if self.session.backdrop_dimmed() {
            return BackdropFade::resolved();
        }
        self.session.set_backdrop_dimmed(true);
        fade_backdrop(&self.surface, &self.options.motion, Dim::In)
    }

    /// Current rect of the lightbox image, zero while it is not mounted.
    pub(super) fn lightbox_rect(&self) -> Rect {
        self.surface
            .lightbox_image()
            .map_or(Rect::ZERO, |image| self.surface.rect(&image))
    }
}
