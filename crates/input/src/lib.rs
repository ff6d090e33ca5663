//! Canonical mouse event types for drawarea.
//!
//! These types abstract over native toolkit event details (NSEvent on macOS,
//! XCB events elsewhere) and provide a platform-independent representation of
//! a mouse interaction with a drawable surface. The area core produces them;
//! the embedding application's handler consumes them.
//!
//! Button identity is a 1-based canonical id: 1 = left, 2 = middle,
//! 3 = right, 4.. = extended buttons. The translation from native button
//! numbering (including the middle/right swap some toolkits need) happens in
//! the area core before an event is constructed, so a `MouseEvent` always
//! carries canonical ids.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a mouse event.
    ///
    /// Decoded statelessly from the native modifier bitmask on every event.
    /// Note that there is no variant for the Control key: the native Control
    /// bit is currently read and discarded by the decoder (see
    /// `drawarea::mouse::decode_modifiers`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// Shift key
        const SHIFT = 1 << 0;
        /// Control-equivalent key (Command/⌘ on macOS)
        const CTRL = 1 << 1;
        /// Alt key (Option/⌥ on macOS)
        const ALT = 1 << 2;
    }
}

/// Phase of a raw mouse interaction, as reported by the native callback that
/// fired.
///
/// `Moved` covers both free movement and drags; whether a button is held
/// during movement is visible through [`MouseEvent::held`], not through the
/// phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MousePhase {
    /// The pointer moved with no button transition.
    Moved,
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
}

/// A canonical mouse event.
///
/// At most one of `down`/`up` is non-zero per event; `held` never contains
/// the button identified by `down` or `up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    /// Position in surface-local coordinates (pixels from top-left,
    /// y increasing downward).
    pub pos: (i32, i32),
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Canonical id of the button that was pressed, or 0 if none.
    pub down: u32,
    /// Canonical id of the button that was released, or 0 if none.
    pub up: u32,
    /// Number of consecutive clicks (1 for single, 2 for double, ...).
    /// Only meaningful when `down` is non-zero.
    pub count: u32,
    /// Canonical ids of the buttons currently held, in ascending order,
    /// excluding the button transitioning in this event.
    pub held: Vec<u32>,
}

impl MouseEvent {
    /// Returns true if this event is pure movement (no button transition).
    pub fn is_movement(&self) -> bool {
        self.down == 0 && self.up == 0
    }

    /// Returns the canonical id of the transitioning button, or 0 for a
    /// movement event.
    pub fn transitioning(&self) -> u32 {
        if self.down != 0 {
            self.down
        } else {
            self.up
        }
    }

    /// Returns true if the given canonical button id is currently held.
    ///
    /// The transitioning button is never part of the held set, so for a
    /// down event this returns false for the button just pressed.
    pub fn is_held(&self, button: u32) -> bool {
        self.held.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement_at(x: i32, y: i32) -> MouseEvent {
        MouseEvent {
            pos: (x, y),
            modifiers: Modifiers::empty(),
            down: 0,
            up: 0,
            count: 0,
            held: Vec::new(),
        }
    }

    #[test]
    fn test_movement_has_no_transition() {
        let event = movement_at(10, 20);
        assert!(event.is_movement());
        assert_eq!(event.transitioning(), 0);
    }

    #[test]
    fn test_transitioning_prefers_down() {
        let mut event = movement_at(0, 0);
        event.down = 3;
        assert_eq!(event.transitioning(), 3);
        assert!(!event.is_movement());
    }

    #[test]
    fn test_transitioning_up() {
        let mut event = movement_at(0, 0);
        event.up = 1;
        assert_eq!(event.transitioning(), 1);
    }

    #[test]
    fn test_is_held() {
        let mut event = movement_at(0, 0);
        event.down = 1;
        event.held = vec![2, 4];
        assert!(event.is_held(2));
        assert!(event.is_held(4));
        assert!(!event.is_held(1)); // the transitioning button is excluded
    }

    #[test]
    fn test_modifiers_are_a_set() {
        let mods = Modifiers::SHIFT | Modifiers::ALT;
        assert!(mods.contains(Modifiers::SHIFT));
        assert!(!mods.contains(Modifiers::CTRL));
        assert!(Modifiers::default().is_empty());
    }
}
