//! The two capability seams around the area core.
//!
//! [`AreaHandler`] is implemented by the embedding application and supplies
//! surface content and mouse-event semantics. [`RepaintRequest`] is
//! implemented by the platform adapter that owns the native view. Both run
//! synchronously on the UI thread; neither may block.

use drawarea_input::MouseEvent;

use crate::geometry::Rect;
use crate::pixels::PixelBuffer;

/// The embedding application's callbacks for one surface.
pub trait AreaHandler {
    /// Produces pixel content covering at least `region`.
    ///
    /// Called from the paint path with a region already clipped to the
    /// surface bounds. The returned buffer carries its own rectangle and
    /// stride; it may cover more than `region` but never less.
    fn paint(&mut self, region: Rect) -> PixelBuffer;

    /// Processes a canonical mouse event.
    ///
    /// Returns true if the event changed what should be on screen; the
    /// core then requests a full-surface repaint from the adapter.
    fn mouse(&mut self, event: MouseEvent) -> bool;
}

/// Full-surface invalidation, provided by the platform adapter.
///
/// Fire-and-forget: the adapter schedules a repaint with the native
/// toolkit and returns immediately. The core debounces, so an adapter
/// receives at most one call per paint cycle even if several mouse events
/// request a repaint before the next draw callback arrives.
pub trait RepaintRequest {
    fn request_repaint(&mut self);
}

impl<F: FnMut()> RepaintRequest for F {
    fn request_repaint(&mut self) {
        self()
    }
}
