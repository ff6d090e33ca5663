//! Pixel buffers returned by the application's paint handler.

use crate::geometry::Rect;

/// A block of RGBA pixels covering a rectangle of the surface.
///
/// The handler that produces a buffer decides its rectangle: it must cover
/// at least the requested region but may cover more (e.g. a handler that
/// keeps a whole-surface backing store returns that store untouched). The
/// consumer must therefore index through `rect` and `stride` rather than
/// assume the buffer starts at the requested region's corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// The surface region this buffer covers.
    pub rect: Rect,
    /// Bytes per row. At least `rect.width() * 4`; rows may be padded.
    pub stride: usize,
    /// RGBA bytes, row-major, `rect.height()` rows of `stride` bytes.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocates a zeroed buffer exactly covering `rect`, with the minimal
    /// stride.
    pub fn for_rect(rect: Rect) -> Self {
        let stride = rect.width() as usize * 4;
        let pixels = vec![0; stride * rect.height() as usize];
        Self {
            rect,
            stride,
            pixels,
        }
    }

    /// Returns true if the buffer's dimensions and byte length agree.
    pub fn is_well_formed(&self) -> bool {
        self.stride >= self.rect.width() as usize * 4
            && self.pixels.len() >= self.stride * self.rect.height() as usize
    }
}
