//! Tube multiplexing
//!
//! Only one tube is energized at a time. The scanner walks the grid
//! positions on a fixed tick and emits the byte pair for the two
//! daisy-chained shift registers.

use crate::frame::{FrameBuffer, TUBE_COUNT};

/// Wire bytes for one scan tick: segment byte then grid byte, both
/// already inverted for the active-low register outputs.
pub type ScanStep = [u8; 2];

/// Walks grid positions 0..[`TUBE_COUNT`], one position per tick.
///
/// Grid position `p` shows frame slot `TUBE_COUNT - 1 - p`: the
/// register chain enumerates grids right to left while frame slots
/// read left to right. The cursor is owned here and touched nowhere
/// else.
pub struct Scanner {
    cursor: usize,
}

impl Scanner {
    pub const fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Produce the wire bytes for the current grid position, then
    /// advance the cursor.
    pub fn tick(&mut self, frame: &FrameBuffer) -> ScanStep {
        let slot = TUBE_COUNT - 1 - self.cursor;
        let [segments, grid] = frame.load(slot).encode(self.cursor as u8);

        self.cursor += 1;
        if self.cursor == TUBE_COUNT {
            self.cursor = 0;
        }

        [!segments, !grid]
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
