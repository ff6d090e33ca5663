//! Event normalization: raw native mouse records → canonical events.
//!
//! The platform adapter translates each native mouse callback into a
//! [`RawMouseEvent`] (position already converted to surface-local
//! coordinates) and a [`MousePhase`], then hands both to
//! [`Area::mouse_event`](crate::surface::Area::mouse_event), which runs the
//! normalization in this module.
//!
//! Two pieces of bit-twiddling here are load-bearing for compatibility with
//! the native toolkit's button ordering and must not be "cleaned up":
//!
//! - [`canonical_button`] applies the fixed middle/right swap.
//! - [`held_buttons`] unpacks the held-button mask, whose low bits are laid
//!   out button1, button3, button2 (the same swap, baked into the mask).

use drawarea_input::{Modifiers, MouseEvent, MousePhase};

use crate::geometry::Point;

/// Raw per-event data captured from the native toolkit.
///
/// All fields are passed through from the native event object unchanged
/// except `pos`, which the adapter translates into surface-local
/// coordinates before constructing the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMouseEvent {
    /// Pointer position in surface-local pixels (top-left origin).
    pub pos: Point,
    /// Native 0-based button number (`buttonNumber` on AppKit).
    pub button_number: u32,
    /// Native consecutive-click count (`clickCount`). Meaningful only for
    /// a `Down` phase.
    pub click_count: u32,
    /// Native modifier-flags bitmask (`modifierFlags`).
    pub modifier_flags: u64,
    /// Native held-buttons bitmask (`pressedMouseButtons`); layout
    /// documented on [`held_buttons`].
    pub held_mask: u64,
    /// Which native callback fired.
    pub phase: MousePhase,
}

// AppKit NSEventModifierFlags bit positions.
const SHIFT_KEY_MASK: u64 = 1 << 17;
const CONTROL_KEY_MASK: u64 = 1 << 18;
const ALTERNATE_KEY_MASK: u64 = 1 << 19;
const COMMAND_KEY_MASK: u64 = 1 << 20;

/// Decodes the native modifier bitmask into a canonical modifier set.
///
/// Command maps to [`Modifiers::CTRL`] (the canonical model has no separate
/// Command modifier). The Control key is tested but deliberately mapped to
/// nothing; the upstream backend never assigned it a meaning, and inventing
/// one here would change behavior for existing handlers. Pinned by
/// `test_control_key_is_discarded`.
pub fn decode_modifiers(flags: u64) -> Modifiers {
    let mut m = Modifiers::empty();
    if flags & SHIFT_KEY_MASK != 0 {
        m |= Modifiers::SHIFT;
    }
    if flags & CONTROL_KEY_MASK != 0 {
        // Intentionally unmapped; see doc comment.
    }
    if flags & ALTERNATE_KEY_MASK != 0 {
        m |= Modifiers::ALT;
    }
    if flags & COMMAND_KEY_MASK != 0 {
        m |= Modifiers::CTRL;
    }
    m
}

/// Maps a native 0-based button number to a canonical 1-based id.
///
/// Canonical id = number + 1, then middle and right are swapped: the native
/// toolkit reports right as its second button and middle as its third,
/// while the canonical model numbers left=1, middle=2, right=3. The swap is
/// a fixed permutation and its own inverse on {2, 3}; ids 4 and above pass
/// through unchanged.
pub fn canonical_button(button_number: u32) -> u32 {
    match button_number.wrapping_add(1) {
        3 => 2,
        2 => 3,
        other => other,
    }
}

/// Reconstructs the held-button set from the native bitmask.
///
/// Mask layout: bit 0 = button 1, bit 1 = button 3, bit 2 = button 2 (the
/// middle/right swap again), bits 3.. = buttons 4.. sequentially. The
/// result is in ascending canonical-id order and excludes `transitioning`
/// (pass 0 for a movement event, where no button is excluded).
pub fn held_buttons(mut mask: u64, transitioning: u32) -> Vec<u32> {
    let mut held = Vec::new();
    if transitioning != 1 && mask & 0b001 != 0 {
        held.push(1);
    }
    if transitioning != 2 && mask & 0b100 != 0 {
        // mind the swap: button 2 lives in bit 2
        held.push(2);
    }
    if transitioning != 3 && mask & 0b010 != 0 {
        held.push(3);
    }
    mask >>= 3;
    let mut id = 4u32;
    while mask != 0 {
        if transitioning != id && mask & 1 != 0 {
            held.push(id);
        }
        mask >>= 1;
        id += 1;
    }
    held
}

/// Normalizes a raw native mouse record into a canonical [`MouseEvent`].
///
/// Pure: dispatch to the handler and the repaint decision live in
/// [`Area`](crate::surface::Area), which calls this.
pub fn normalize(raw: &RawMouseEvent) -> MouseEvent {
    let modifiers = decode_modifiers(raw.modifier_flags);
    let mut which = canonical_button(raw.button_number);
    let mut down = 0;
    let mut up = 0;
    let mut count = 0;
    match raw.phase {
        MousePhase::Up => {
            debug_assert!(which != 0, "button release with degenerate button number");
            up = which;
        }
        MousePhase::Down => {
            debug_assert!(which != 0, "button press with degenerate button number");
            down = which;
            count = raw.click_count;
        }
        MousePhase::Moved => {
            // No transitioning button: id 0 is the sentinel for the held-set
            // exclusion below, so nothing is excluded on pure movement.
            which = 0;
        }
    }
    let held = held_buttons(raw.held_mask, which);
    MouseEvent {
        pos: (raw.pos.x, raw.pos.y),
        modifiers,
        down,
        up,
        count,
        held,
    }
}
