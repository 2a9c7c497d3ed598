//! Active-thumbnail bookkeeping.
//!
//! The grid thumbnail showing the same image as the lightbox carries the
//! active class so the host can suppress it. The marker follows the index
//! while the lightbox is open and is swept away once it closes.

use super::Inner;
use crate::gallery::GalleryState;
use crate::surface::Surface;

impl<S: Surface, G: GalleryState> Inner<S, G> {
    /// Move the active marker to the thumbnail of the image at `index`.
    pub(super) fn sync_active_thumbnail(&self, index: usize) {
        let thumb = self
            .gallery
            .image(index)
            .and_then(|image| image.src)
            .and_then(|src| self.surface.find_thumbnail(&src));

        if let Some(previous) = self.session.active_thumb() {
            if thumb.as_ref() != Some(&previous) && self.surface.is_connected(&previous) {
                self.mark_active(&previous, false);
            }
        }

        match thumb {
            Some(thumb) => {
                self.mark_active(&thumb, true);
                self.session.set_active_thumb(Some(thumb));
            }
            None => {
                log::trace!("no grid thumbnail for index {index}");
                self.session.set_active_thumb(None);
            }
        }
    }

    /// Restore the active thumbnail and any stray marked ones.
    pub(super) fn sweep_active_markers(&self) {
        if let Some(thumb) = self.session.take_active_thumb() {
            self.mark_active(&thumb, false);
        }
        for stray in self.surface.elements_with_class(&self.options.dom.active_class) {
            self.mark_active(&stray, false);
        }
    }
}
