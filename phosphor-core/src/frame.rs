//! Display frames and the shared frame buffer
//!
//! A [`Frame`] is the value type activities render into. The
//! [`FrameBuffer`] is the lock-free handoff that carries the most
//! recent frame from the UI task to the scan task.

use portable_atomic::{AtomicU8, Ordering};

use crate::symbol::Symbol;

/// Number of tubes in the display chain.
pub const TUBE_COUNT: usize = 5;

/// One complete display image. Slot 0 is the leftmost tube in reading
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    slots: [Symbol; TUBE_COUNT],
}

impl Frame {
    pub const fn new(slots: [Symbol; TUBE_COUNT]) -> Self {
        Self { slots }
    }

    /// Set one slot. Out-of-range positions are ignored.
    pub fn set(&mut self, position: usize, symbol: Symbol) {
        if let Some(slot) = self.slots.get_mut(position) {
            *slot = symbol;
        }
    }

    /// Read one slot. Out-of-range positions read as blank.
    pub fn get(&self, position: usize) -> Symbol {
        self.slots
            .get(position)
            .copied()
            .unwrap_or(Symbol::Blank)
    }

    /// Shift every symbol one slot toward position 0, blanking the
    /// rightmost slot. One step of the clock's scroll-out animation.
    pub fn shift_left(&mut self) {
        self.slots.rotate_left(1);
        self.slots[TUBE_COUNT - 1] = Symbol::Blank;
    }
}

impl Default for Frame {
    /// All-blank frame.
    fn default() -> Self {
        Self::new([Symbol::Blank; TUBE_COUNT])
    }
}

/// Shared slot array between the UI writer and the scan reader.
///
/// Atomicity is per slot, never per frame: a scan pass that interleaves
/// with a store may mix symbols from the old and new frame across
/// slots, but a single slot is never torn. The clock has exactly one
/// writer (the UI task) and one reader (the scan task), so nothing
/// stronger is needed and the scan path stays lock-free.
pub struct FrameBuffer {
    slots: [AtomicU8; TUBE_COUNT],
}

impl FrameBuffer {
    /// All-blank buffer.
    pub const fn new() -> Self {
        const BLANK: AtomicU8 = AtomicU8::new(Symbol::Blank as u8);
        Self {
            slots: [BLANK; TUBE_COUNT],
        }
    }

    /// Publish a frame, slot by slot.
    pub fn store(&self, frame: &Frame) {
        for (position, slot) in self.slots.iter().enumerate() {
            slot.store(frame.get(position).as_u8(), Ordering::Relaxed);
        }
    }

    /// Read one slot back. Out-of-range positions read as blank.
    pub fn load(&self, position: usize) -> Symbol {
        self.slots
            .get(position)
            .map(|slot| slot.load(Ordering::Relaxed))
            .and_then(Symbol::from_u8)
            .unwrap_or(Symbol::Blank)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_blank() {
        let frame = Frame::default();
        for position in 0..TUBE_COUNT {
            assert_eq!(frame.get(position), Symbol::Blank);
        }
    }

    #[test]
    fn test_set_get() {
        let mut frame = Frame::default();
        frame.set(0, Symbol::D7);
        frame.set(4, Symbol::Degree);
        assert_eq!(frame.get(0), Symbol::D7);
        assert_eq!(frame.get(4), Symbol::Degree);
        assert_eq!(frame.get(2), Symbol::Blank);
    }

    #[test]
    fn test_out_of_range_access() {
        let mut frame = Frame::default();
        frame.set(TUBE_COUNT, Symbol::D1);
        assert_eq!(frame.get(TUBE_COUNT), Symbol::Blank);
    }

    #[test]
    fn test_shift_left_blanks_from_right() {
        let mut frame = Frame::new([
            Symbol::D1,
            Symbol::D2,
            Symbol::Minus,
            Symbol::D3,
            Symbol::D4,
        ]);
        frame.shift_left();
        assert_eq!(
            frame,
            Frame::new([
                Symbol::D2,
                Symbol::Minus,
                Symbol::D3,
                Symbol::D4,
                Symbol::Blank,
            ])
        );

        // Five shifts empty the display
        for _ in 0..4 {
            frame.shift_left();
        }
        assert_eq!(frame, Frame::default());
    }

    #[test]
    fn test_buffer_starts_blank() {
        let buffer = FrameBuffer::new();
        for position in 0..TUBE_COUNT {
            assert_eq!(buffer.load(position), Symbol::Blank);
        }
    }

    #[test]
    fn test_buffer_store_load() {
        let buffer = FrameBuffer::new();
        let mut frame = Frame::default();
        frame.set(1, Symbol::D9);
        frame.set(3, Symbol::C);

        buffer.store(&frame);
        for position in 0..TUBE_COUNT {
            assert_eq!(buffer.load(position), frame.get(position));
        }
    }
}
