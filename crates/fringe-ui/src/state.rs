//! Gallery state held in Dioxus signals.

use dioxus::prelude::*;
use fringe_lightbox::{GalleryImage, GalleryState};

/// The gallery's reactive state. Copy, like the signals it wraps.
///
/// Reads go through `read`, so an effect that calls into the animator
/// re-runs when the open flag or index changes.
#[derive(Clone, Copy, PartialEq)]
pub struct GallerySignals {
    /// Images of the current campaign.
    pub images: Signal<Vec<GalleryImage>>,
    /// Whether the lightbox is mounted.
    pub open: Signal<bool>,
    /// Index shown in the lightbox.
    pub index: Signal<usize>,
    /// Hide the lightbox image while the overlay stands in for it.
    pub hide_image: Signal<bool>,
    /// User prefers reduced motion.
    pub reduce_motion: Signal<bool>,
}

impl GallerySignals {
    /// Fresh state owned by the calling component.
    pub fn use_new() -> Self {
        Self {
            images: use_signal(Vec::new),
            open: use_signal(|| false),
            index: use_signal(|| 0),
            hide_image: use_signal(|| false),
            reduce_motion: use_signal(|| false),
        }
    }

    /// Index after (or before) the current one, wrapping around.
    pub fn step(&self, forward: bool) -> Option<usize> {
        let count = self.images.read().len();
        if count == 0 {
            return None;
        }
        let index = *self.index.read() % count;
        Some(if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        })
    }
}

impl GalleryState for GallerySignals {
    fn image(&self, index: usize) -> Option<GalleryImage> {
        self.images.read().get(index).cloned()
    }

    fn image_count(&self) -> usize {
        self.images.read().len()
    }

    fn is_lightbox_open(&self) -> bool {
        *self.open.read()
    }

    fn lightbox_index(&self) -> usize {
        *self.index.read()
    }

    fn reduce_motion(&self) -> bool {
        *self.reduce_motion.read()
    }

    fn set_lightbox_index(&self, index: usize) {
        let mut signal = self.index;
        signal.set(index);
    }

    fn set_lightbox_open(&self, open: bool) {
        let mut signal = self.open;
        signal.set(open);
    }

    fn set_hide_lightbox_image(&self, hide: bool) {
        let mut signal = self.hide_image;
        signal.set(hide);
    }
}
