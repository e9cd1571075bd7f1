//! Quadrature decoding for the rotary encoder
//!
//! The decoder is fed from edge interrupts on channel A, with channel B
//! sampled at each edge. A detent must complete a full quadrature cycle
//! before an event is emitted, so contact bounce and half-turns are
//! filtered without any timers.

/// Direction of one completed detent step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    /// A fell while B was high; a left step is half complete
    ArmedLeft,
    /// A fell while B was low; a right step is half complete
    ArmedRight,
}

/// Edge-driven decoder state machine.
#[derive(Debug)]
pub struct QuadratureDecoder {
    state: State,
}

impl QuadratureDecoder {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Feed one channel-A edge with the line levels sampled at the
    /// edge. Returns a rotation when a full cycle completes.
    pub fn edge(&mut self, a_high: bool, b_high: bool) -> Option<Rotation> {
        if !a_high {
            // Falling edge arms a direction from B's phase
            self.state = if b_high {
                State::ArmedLeft
            } else {
                State::ArmedRight
            };
            return None;
        }

        // Rising edge completes the cycle only if B has flipped; a
        // bounce or reversal leaves the armed state untouched
        match (self.state, b_high) {
            (State::ArmedLeft, false) => {
                self.state = State::Idle;
                Some(Rotation::Left)
            }
            (State::ArmedRight, true) => {
                self.state = State::Idle;
                Some(Rotation::Right)
            }
            _ => None,
        }
    }
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}
