//! The per-surface dispatch object tying bounds, handler, and repaint
//! state together.
//!
//! One [`Area`] exists per native view. The platform adapter calls
//! [`Area::mouse_event`] from its mouse callbacks, [`Area::draw`] from its
//! draw callback, and [`Area::set_bounds`] when the native frame changes.
//! All calls happen on the UI thread; `Area` does not synchronize.

use drawarea_input::MouseEvent;
use tracing::trace;

use crate::geometry::Size;
use crate::handler::{AreaHandler, RepaintRequest};
use crate::mouse::{normalize, RawMouseEvent};
use crate::paint::{clip_dirty, Blit, DirtyRect};

/// A drawable surface: current pixel bounds plus the embedding
/// application's handler.
///
/// `Area` owns neither the native view nor the application state behind
/// the handler; it owns only the handler value itself (typically a small
/// struct borrowing or ref-counting the real state) and the repaint
/// debounce flag.
#[derive(Debug)]
pub struct Area<H> {
    bounds: Size,
    handler: H,
    /// Set when a repaint has been requested and not yet serviced by a
    /// draw callback. Further requests are absorbed until then.
    repaint_pending: bool,
}

impl<H: AreaHandler> Area<H> {
    /// Creates a surface with the given handler and initial bounds.
    pub fn new(handler: H, bounds: Size) -> Self {
        Self {
            bounds,
            handler,
            repaint_pending: false,
        }
    }

    /// Current surface bounds in pixels.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Updates the bounds after the native frame changed.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Access to the handler, for the embedding application.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Normalizes a raw native mouse record, dispatches it to the handler,
    /// and requests a full-surface repaint if the handler asks for one.
    ///
    /// Exactly one handler call per raw event; at most one repaint request
    /// per call, and none if a repaint is already pending (the adapter's
    /// invalidation is idempotent, so the debounce only saves the call).
    pub fn mouse_event(&mut self, raw: RawMouseEvent, repaint: &mut dyn RepaintRequest) {
        let event = normalize(&raw);
        trace!(?event, "dispatching mouse event");
        if self.handler.mouse(event) {
            self.request_repaint(repaint);
        }
    }

    /// Requests a full-surface repaint through the adapter, debounced.
    ///
    /// Calling this any number of times between draw callbacks forwards at
    /// most one invalidation to the adapter.
    pub fn request_repaint(&mut self, repaint: &mut dyn RepaintRequest) {
        if self.repaint_pending {
            trace!("repaint already pending, request absorbed");
            return;
        }
        self.repaint_pending = true;
        trace!("requesting full-surface repaint");
        repaint.request_repaint();
    }

    /// Services a native draw callback.
    ///
    /// Clips `dirty` against the current bounds; on an empty intersection
    /// returns `None` without touching the handler. Otherwise asks the
    /// handler to paint the clipped region and returns the blit for the
    /// adapter's native draw primitive.
    ///
    /// The pending-repaint flag is cleared before clipping so that a
    /// repaint requested from inside `handler.paint` is not lost.
    pub fn draw(&mut self, dirty: DirtyRect) -> Option<Blit> {
        self.repaint_pending = false;
        let clip = match clip_dirty(dirty, self.bounds) {
            Some(clip) => clip,
            None => {
                trace!(?dirty, "dirty rect outside surface, nothing to paint");
                return None;
            }
        };
        let buffer = self.handler.paint(clip);
        debug_assert!(buffer.is_well_formed(), "handler returned malformed buffer");
        debug_assert!(
            buffer.rect.contains_rect(&clip),
            "handler buffer does not cover the requested region"
        );
        Some(Blit {
            buffer,
            dest: clip.min,
        })
    }
}

impl<H> Area<H> {
    /// Consumes the surface, returning the handler. Used by adapters when
    /// the native view is released.
    pub fn into_handler(self) -> H {
        self.handler
    }
}
