//! Closing: zoom the lightbox image back onto its grid thumbnail.

use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use web_time::Instant;

use super::{Inner, LightboxAnimator};
use crate::animation::backdrop::{fade_backdrop, Dim};
use crate::animation::keyframes::Direction;
use crate::gallery::GalleryState;
use crate::geometry::both_valid;
use crate::surface::Surface;

impl<S: Surface, G: GalleryState> LightboxAnimator<S, G> {
    /// Close the lightbox.
    ///
    /// The returned future resolves once the close transition has settled
    /// and never fails. With reduced motion the state is cleared before
    /// this returns and the future is already complete. Otherwise the
    /// settle step (open flag, hide flag, active markers, remembered
    /// thumbnail) runs when the transition ends, and also if the future is
    /// dropped early. An open whose mount effect is still waiting on
    /// layout is cancelled and never zooms in.
    pub fn close_lightbox(&self) -> LocalBoxFuture<'static, ()> {
        let inner = &self.inner;
        let generation = inner.session.generation();
        // An open still waiting on layout must not zoom in under the close.
        inner.cancel_mount_effect();
        inner.session.set_capture(None);

        if inner.gallery.reduce_motion() {
            inner.settle_close(generation);
            return future::ready(()).boxed_local();
        }

        // The backdrop clears from here on; a newer open dims it again.
        inner.session.set_backdrop_dimmed(false);
        let settle = SettleOnDrop {
            inner: Rc::clone(inner),
            generation,
        };
        async move {
            let started = Instant::now();
            settle.inner.zoom_out().await;
            log::trace!(
                "close #{generation} settled after {:?}",
                started.elapsed()
            );
            drop(settle);
        }
        .boxed_local()
    }
}

/// Runs the close settle step exactly once, when the close future
/// completes or is dropped.
struct SettleOnDrop<S: Surface, G: GalleryState> {
    inner: Rc<Inner<S, G>>,
    generation: u64,
}

impl<S: Surface, G: GalleryState> Drop for SettleOnDrop<S, G> {
    fn drop(&mut self) {
        self.inner.settle_close(self.generation);
    }
}

impl<S: Surface, G: GalleryState> Inner<S, G> {
    async fn zoom_out(&self) {
        let index = self.gallery.lightbox_index();
        let image = self.gallery.image(index);
        let lightbox_image = self.surface.lightbox_image();
        let (Some(image), Some(lightbox_image)) = (image, lightbox_image) else {
            log::debug!("nothing displayed at index {index}, fading backdrop only");
            self.clear_backdrop().await;
            return;
        };

        let from = self.surface.rect(&lightbox_image);
        let thumb = image
            .src
            .as_deref()
            .and_then(|src| self.surface.find_thumbnail(src))
            .or_else(|| self.session.active_thumb())
            .or_else(|| self.session.opened_thumb());
        let Some(thumb) = thumb else {
            log::debug!("no thumbnail to close onto, fading backdrop only");
            self.clear_backdrop().await;
            return;
        };

        let to = self.surface.rect(&thumb);
        if !both_valid(&from, &to) {
            log::debug!("skipping close zoom, unusable geometry: {from:?} -> {to:?}");
            self.clear_backdrop().await;
            return;
        }

        self.gallery.set_hide_lightbox_image(true);
        let fade = fade_backdrop(&self.surface, &self.options.motion, Dim::Out);
        let zoom = self.wireframe.play(
            &self.surface,
            &self.options.motion,
            from,
            to,
            image.src.as_deref(),
            Direction::Close,
        );
        let _ = future::join(fade.finished(), zoom).await;
    }

    async fn clear_backdrop(&self) {
        fade_backdrop(&self.surface, &self.options.motion, Dim::Out)
            .finished()
            .await;
    }

    /// Terminal state of every close, animated or not.
    fn settle_close(&self, generation: u64) {
        self.gallery.set_lightbox_open(false);
        self.gallery.set_hide_lightbox_image(false);

        let opened = self.session.opened_thumb();
        let active = self.session.active_thumb();
        if let Some(thumb) = &opened {
            self.mark_active(thumb, false);
        }
        if let Some(thumb) = active.filter(|a| opened.as_ref() != Some(a)) {
            self.mark_active(&thumb, false);
        }

        if self.session.is_current(generation) {
            self.session.set_capture(None);
            self.session.set_opened_thumb(None);
            self.session.set_backdrop_dimmed(false);
        } else {
            log::trace!("close #{generation} superseded, keeping newer refs");
        }
    }
}
