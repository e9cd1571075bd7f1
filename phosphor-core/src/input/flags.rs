//! Sticky event flags between interrupt handlers and the UI loop

use portable_atomic::{AtomicBool, Ordering};

use super::Rotation;

/// Interrupt-to-UI event handoff.
///
/// The interrupt side sets flags, the UI loop consumes them with an
/// atomic swap so every event is delivered at most once. Repeated
/// events between consumptions coalesce into a single delivery.
///
/// The button is special: its handler mirrors the debounce-raw button
/// state. Pressing arms the sticky press, releasing cancels a press
/// that has not been consumed yet, and the mirrored state lets the UI
/// loop re-check the line after its debounce wait.
pub struct EncoderFlags {
    left: AtomicBool,
    right: AtomicBool,
    press: AtomicBool,
    held: AtomicBool,
}

impl EncoderFlags {
    pub const fn new() -> Self {
        Self {
            left: AtomicBool::new(false),
            right: AtomicBool::new(false),
            press: AtomicBool::new(false),
            held: AtomicBool::new(false),
        }
    }

    /// Record a completed rotation step.
    pub fn set_rotation(&self, rotation: Rotation) {
        match rotation {
            Rotation::Left => self.left.store(true, Ordering::Relaxed),
            Rotation::Right => self.right.store(true, Ordering::Relaxed),
        }
    }

    /// Mirror the button state from its edge handler. `pressed` is the
    /// electrical line level folded to "button is down".
    pub fn set_button_level(&self, pressed: bool) {
        self.held.store(pressed, Ordering::Relaxed);
        self.press.store(pressed, Ordering::Relaxed);
    }

    /// Take a pending left rotation.
    pub fn take_left(&self) -> bool {
        self.left.swap(false, Ordering::Relaxed)
    }

    /// Take a pending right rotation.
    pub fn take_right(&self) -> bool {
        self.right.swap(false, Ordering::Relaxed)
    }

    /// Take a pending press. The caller still debounces against
    /// [`EncoderFlags::held`] before dispatching.
    pub fn take_press(&self) -> bool {
        self.press.swap(false, Ordering::Relaxed)
    }

    /// Current mirrored button state.
    pub fn held(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
}

impl Default for EncoderFlags {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_coalesce() {
        let flags = EncoderFlags::new();
        for _ in 0..3 {
            flags.set_rotation(Rotation::Right);
        }
        assert!(flags.take_right());
        assert!(!flags.take_right());
        assert!(!flags.take_left());
    }

    #[test]
    fn test_directions_are_independent() {
        let flags = EncoderFlags::new();
        flags.set_rotation(Rotation::Left);
        flags.set_rotation(Rotation::Right);
        assert!(flags.take_left());
        assert!(flags.take_right());
    }

    #[test]
    fn test_press_set_and_consumed_once() {
        let flags = EncoderFlags::new();
        flags.set_button_level(true);
        assert!(flags.held());
        assert!(flags.take_press());
        assert!(!flags.take_press());
        // Level mirror survives consumption
        assert!(flags.held());
    }

    #[test]
    fn test_release_cancels_pending_press() {
        let flags = EncoderFlags::new();
        flags.set_button_level(true);
        flags.set_button_level(false);
        assert!(!flags.take_press());
        assert!(!flags.held());
    }
}
