//! drawarea: the toolkit-agnostic core of an "Area" widget backend.
//!
//! An Area is a drawable surface that receives mouse events. A platform
//! adapter (one per native toolkit) owns the native view, translates its
//! callbacks into the raw records defined here, and calls into this crate;
//! this crate normalizes raw input into canonical [`MouseEvent`]s, clips
//! native dirty rectangles against the surface bounds, and drives the
//! embedding application's [`AreaHandler`].
//!
//! Two capabilities flow back out:
//!
//! - [`AreaHandler::paint`] supplies pixel content for a clipped region.
//! - [`RepaintRequest::request_repaint`] asks the adapter to invalidate the
//!   whole surface (issued when the handler reports that a mouse event
//!   changed what should be on screen).
//!
//! # Threading
//!
//! Everything here assumes the native toolkit's single UI event-dispatch
//! thread: each mouse or paint callback runs to completion before the next
//! is delivered, so no type in this crate synchronizes. Embedders on a
//! multi-threaded toolkit must marshal all calls onto one thread.
//!
//! # Coordinates
//!
//! Surface-local pixels with the origin at the top-left and y increasing
//! downward (the flipped system the adapter establishes on the native
//! view). Dirty rectangles arrive in origin/size form and are converted to
//! min/max-corner form before any arithmetic; see [`geometry`].

pub mod geometry;
pub mod handler;
pub mod mouse;
pub mod paint;
pub mod pixels;
pub mod setup;
pub mod surface;

pub use drawarea_input::{Modifiers, MouseEvent, MousePhase};
pub use geometry::{Point, Rect, Size};
pub use handler::{AreaHandler, RepaintRequest};
pub use mouse::RawMouseEvent;
pub use paint::{Blit, DirtyRect};
pub use pixels::PixelBuffer;
pub use setup::SetupError;
pub use surface::Area;
