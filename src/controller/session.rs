//! Per-cycle bookkeeping shared by the open and close sequences.

use std::cell::{Cell, RefCell};

use crate::geometry::Rect;

/// What `open_lightbox` captured from the clicked thumbnail, waiting for
/// the mount effect to consume it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Capture {
    pub(crate) rect: Rect,
    pub(crate) src: Option<String>,
}

/// Refs held across an open/close cycle.
///
/// The generation counter is bumped by every open. Cleanup that runs late
/// compares the generation it captured against the current one and leaves
/// the shared thumbnail refs alone when a newer open has taken over.
pub(crate) struct Session<E> {
    generation: Cell<u64>,
    capture: RefCell<Option<Capture>>,
    /// Thumbnail the current cycle was opened from.
    opened_thumb: RefCell<Option<E>>,
    /// Thumbnail currently marked active (matches the lightbox image).
    active_thumb: RefCell<Option<E>>,
    backdrop_dimmed: Cell<bool>,
}

impl<E: Clone> Session<E> {
    pub(crate) fn new() -> Self {
        Self {
            generation: Cell::new(0),
            capture: RefCell::new(None),
            opened_thumb: RefCell::new(None),
            active_thumb: RefCell::new(None),
            backdrop_dimmed: Cell::new(false),
        }
    }

    /// Start a new cycle. Returns its generation.
    pub(crate) fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation.get()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }

    pub(crate) fn set_capture(&self, capture: Option<Capture>) {
        *self.capture.borrow_mut() = capture;
    }

    pub(crate) fn has_capture(&self) -> bool {
        self.capture.borrow().is_some()
    }

    pub(crate) fn take_capture(&self) -> Option<Capture> {
        self.capture.borrow_mut().take()
    }

    pub(crate) fn opened_thumb(&self) -> Option<E> {
        self.opened_thumb.borrow().clone()
    }

    pub(crate) fn set_opened_thumb(&self, thumb: Option<E>) {
        *self.opened_thumb.borrow_mut() = thumb;
    }

    pub(crate) fn active_thumb(&self) -> Option<E> {
        self.active_thumb.borrow().clone()
    }

    pub(crate) fn set_active_thumb(&self, thumb: Option<E>) {
        *self.active_thumb.borrow_mut() = thumb;
    }

    pub(crate) fn take_active_thumb(&self) -> Option<E> {
        self.active_thumb.borrow_mut().take()
    }

    pub(crate) fn backdrop_dimmed(&self) -> bool {
        self.backdrop_dimmed.get()
    }

    pub(crate) fn set_backdrop_dimmed(&self, dimmed: bool) {
        self.backdrop_dimmed.set(dimmed);
    }
}
