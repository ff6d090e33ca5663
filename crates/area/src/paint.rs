//! Paint clipping: native dirty rectangles → clipped handler requests.
//!
//! The native toolkit reports the region needing repaint in origin/size
//! form. [`clip_dirty`] converts it to corner form and intersects it with
//! the surface bounds; an empty intersection means the draw callback does
//! nothing at all (no handler call). The draw path itself lives on
//! [`Area::draw`](crate::surface::Area::draw).

use crate::geometry::{Point, Rect, Size};
use crate::pixels::PixelBuffer;

/// A dirty rectangle as the native toolkit reports it: origin plus size,
/// in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl DirtyRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The output of a draw callback: pixels plus where to put them.
///
/// The core hands this to the platform adapter, whose native blit
/// primitive draws `buffer.rect.width() × buffer.rect.height()` pixels
/// from the buffer with their top-left corner at `dest` (the clipped
/// region's minimum corner). `buffer.rect` may exceed the clipped region;
/// the adapter does not re-clip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blit {
    /// Pixels supplied by the handler; carries its own rect and stride.
    pub buffer: PixelBuffer,
    /// Destination for the blit: the clipped region's minimum corner.
    pub dest: Point,
}

/// Converts a native dirty rect to corner form and clips it to the surface
/// bounds.
///
/// Returns `None` when nothing inside the surface needs repainting, which
/// is a normal outcome (stale invalidations after a resize, scroll-view
/// overdraw), not an error.
pub fn clip_dirty(dirty: DirtyRect, bounds: Size) -> Option<Rect> {
    let dirty = Rect::from_origin_size(dirty.x, dirty.y, dirty.width, dirty.height);
    Rect::from_size(bounds).intersect(&dirty)
}
