//! Bounded wait for a usable layout measurement.
//!
//! Right after the lightbox mounts, or after the tab was hidden and the
//! browser evicted decoded image data, the lightbox image can report a zero
//! size for a frame or two. The animator re-reads it once per animation
//! frame, for at most a fixed number of frames, and then takes whatever it
//! got.

use crate::geometry::Rect;
use crate::surface::Surface;

/// Read `measure` once per animation frame until it reports a valid rect
/// or `budget` frames have passed.
///
/// Every read happens after a frame boundary, the first one included, so
/// `budget` is both the number of frames waited and the number of reads.
/// A budget of zero is treated as one. Always terminates; the returned rect
/// may be invalid.
pub async fn settle_rect<S, F>(surface: &S, budget: u32, mut measure: F) -> Rect
where
    S: Surface + ?Sized,
    F: FnMut() -> Rect,
{
    let budget = budget.max(1);
    let mut rect = Rect::ZERO;
    for frame in 1..=budget {
        surface.next_frame().await;
        rect = measure();
        if rect.is_valid() {
            break;
        }
        log::trace!("measurement {frame}/{budget} not ready: {rect:?}");
    }
    rect
}
