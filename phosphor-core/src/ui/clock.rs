//! The clock face
//!
//! Shows the time with a blinking separator, and every so often scrolls
//! it out to flash the room temperature before coming back.

use crate::frame::{Frame, TUBE_COUNT};
use crate::input::Rotation;
use crate::symbol::Symbol;

use super::{Activity, ActivityId, PressOutcome, UiEffect, UiInputs};

/// How long the time face holds before scrolling out.
pub const TIME_DWELL_MS: u32 = 20_000;

/// How long the temperature face holds before returning.
pub const TEMPERATURE_DWELL_MS: u32 = 3_000;

/// Interval between scroll-out steps.
pub const SCROLL_STEP_MS: u32 = 150;

/// Self-heating correction subtracted from the sensor reading.
pub const TEMPERATURE_OFFSET_C: i16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Time,
    Scroll,
    Temperature,
}

/// The resting screen.
pub struct Clock {
    mode: Mode,
    /// When the current time or temperature face was entered
    entered_ms: u32,
    scroll_frame: Frame,
    last_step_ms: u32,
    steps_done: u8,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            mode: Mode::Time,
            entered_ms: 0,
            scroll_frame: Frame::default(),
            last_step_ms: 0,
            steps_done: 0,
        }
    }

    fn begin_scroll(&mut self, inputs: &UiInputs) {
        // The separator is forced on so the scrolling frame reads as a
        // time regardless of blink phase
        self.scroll_frame = time_frame(inputs.hour, inputs.minute, true);
        self.mode = Mode::Scroll;
        self.steps_done = 0;
        self.last_step_ms = inputs.now_ms;
    }

    fn step_scroll(&mut self, inputs: &UiInputs) -> Frame {
        if inputs.now_ms.wrapping_sub(self.last_step_ms) >= SCROLL_STEP_MS {
            self.scroll_frame.shift_left();
            self.steps_done += 1;
            self.last_step_ms = inputs.now_ms;

            if usize::from(self.steps_done) >= TUBE_COUNT {
                self.mode = Mode::Temperature;
                self.entered_ms = inputs.now_ms;
            }
        }
        self.scroll_frame
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Activity for Clock {
    fn init(&mut self, inputs: &UiInputs) {
        self.mode = Mode::Time;
        self.entered_ms = inputs.now_ms;
    }

    fn rotate(&mut self, _rotation: Rotation, _inputs: &UiInputs) -> Option<UiEffect> {
        None
    }

    fn press(&mut self, _inputs: &UiInputs) -> PressOutcome {
        PressOutcome::switch(ActivityId::MainMenu)
    }

    fn render(&mut self, inputs: &UiInputs) -> Frame {
        match self.mode {
            Mode::Time => {
                if inputs.now_ms.wrapping_sub(self.entered_ms) >= TIME_DWELL_MS {
                    self.begin_scroll(inputs);
                    self.scroll_frame
                } else {
                    time_frame(inputs.hour, inputs.minute, inputs.sqw_high)
                }
            }
            Mode::Scroll => self.step_scroll(inputs),
            Mode::Temperature => {
                if inputs.now_ms.wrapping_sub(self.entered_ms) >= TEMPERATURE_DWELL_MS {
                    self.mode = Mode::Time;
                    self.entered_ms = inputs.now_ms;
                    time_frame(inputs.hour, inputs.minute, inputs.sqw_high)
                } else {
                    temperature_frame(inputs.temperature_x10)
                }
            }
        }
    }
}

fn time_frame(hour: u8, minute: u8, separator_on: bool) -> Frame {
    let mut frame = Frame::default();
    frame.set(0, Symbol::digit(hour / 10));
    frame.set(1, Symbol::digit(hour % 10));
    frame.set(
        2,
        if separator_on {
            Symbol::Minus
        } else {
            Symbol::Blank
        },
    );
    frame.set(3, Symbol::digit(minute / 10));
    frame.set(4, Symbol::digit(minute % 10));
    frame
}

fn temperature_frame(temperature_x10: i16) -> Frame {
    let celsius = (temperature_x10 / 10 - TEMPERATURE_OFFSET_C).clamp(0, 99) as u8;
    let mut frame = Frame::default();
    frame.set(2, Symbol::digit(celsius / 10));
    frame.set(3, Symbol::digit(celsius % 10));
    frame.set(4, Symbol::Degree);
    frame
}
