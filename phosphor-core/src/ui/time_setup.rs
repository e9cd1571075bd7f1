//! Time setup screen
//!
//! Edits the hour, then the minute, then writes the result to the RTC
//! and returns to the clock. Two fields mean two presses; there is no
//! third state to fall through.

use crate::frame::Frame;
use crate::input::Rotation;
use crate::symbol::Symbol;

use super::{wrap_step, Activity, ActivityId, PressOutcome, UiEffect, UiInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Hour,
    Minute,
}

/// Hour/minute editor.
pub struct TimeSetup {
    field: Field,
    hour: u8,
    minute: u8,
    back: ActivityId,
}

impl TimeSetup {
    pub fn new(back: ActivityId) -> Self {
        Self {
            field: Field::Hour,
            hour: 0,
            minute: 0,
            back,
        }
    }
}

impl Activity for TimeSetup {
    /// Snapshot the current time into the edit copies.
    fn init(&mut self, inputs: &UiInputs) {
        self.field = Field::Hour;
        self.hour = inputs.hour;
        self.minute = inputs.minute;
    }

    fn rotate(&mut self, rotation: Rotation, _inputs: &UiInputs) -> Option<UiEffect> {
        match self.field {
            Field::Hour => self.hour = wrap_step(self.hour, 23, rotation),
            Field::Minute => self.minute = wrap_step(self.minute, 59, rotation),
        }
        None
    }

    fn press(&mut self, _inputs: &UiInputs) -> PressOutcome {
        match self.field {
            Field::Hour => {
                self.field = Field::Minute;
                PressOutcome::none()
            }
            Field::Minute => PressOutcome {
                switch_to: Some(self.back),
                effect: Some(UiEffect::SetTime {
                    hour: self.hour,
                    minute: self.minute,
                }),
            },
        }
    }

    fn render(&mut self, _inputs: &UiInputs) -> Frame {
        let value = match self.field {
            Field::Hour => self.hour,
            Field::Minute => self.minute,
        };

        let mut frame = Frame::default();
        frame.set(0, Symbol::Ch);
        frame.set(3, Symbol::digit(value / 10));
        frame.set(4, Symbol::digit(value % 10));
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AccentConfig;

    fn inputs(hour: u8, minute: u8) -> UiInputs {
        UiInputs {
            hour,
            minute,
            sqw_high: false,
            temperature_x10: 0,
            accent: AccentConfig::default(),
            now_ms: 0,
        }
    }

    fn editor(hour: u8, minute: u8) -> TimeSetup {
        let mut setup = TimeSetup::new(ActivityId::Clock);
        setup.init(&inputs(hour, minute));
        setup
    }

    #[test]
    fn test_init_snapshots_time() {
        let mut setup = editor(18, 42);
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(0), Symbol::Ch);
        assert_eq!(frame.get(3), Symbol::D1);
        assert_eq!(frame.get(4), Symbol::D8);
    }

    #[test]
    fn test_hour_wraps() {
        let mut setup = editor(23, 0);
        setup.rotate(Rotation::Right, &inputs(0, 0));
        assert_eq!(setup.render(&inputs(0, 0)).get(4), Symbol::D0);

        setup.rotate(Rotation::Left, &inputs(0, 0));
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(3), Symbol::D2);
        assert_eq!(frame.get(4), Symbol::D3);
    }

    #[test]
    fn test_minute_wraps() {
        let mut setup = editor(0, 59);
        setup.press(&inputs(0, 0));
        setup.rotate(Rotation::Right, &inputs(0, 0));
        assert_eq!(setup.render(&inputs(0, 0)).get(4), Symbol::D0);

        setup.rotate(Rotation::Left, &inputs(0, 0));
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(3), Symbol::D5);
        assert_eq!(frame.get(4), Symbol::D9);
    }

    #[test]
    fn test_render_switches_to_edited_field() {
        let mut setup = editor(7, 31);
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(3), Symbol::D0);
        assert_eq!(frame.get(4), Symbol::D7);

        setup.press(&inputs(0, 0));
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(3), Symbol::D3);
        assert_eq!(frame.get(4), Symbol::D1);
    }

    #[test]
    fn test_two_presses_commit() {
        let mut setup = editor(7, 31);
        setup.rotate(Rotation::Left, &inputs(0, 0)); // hour 6

        let first = setup.press(&inputs(0, 0));
        assert_eq!(first.switch_to, None);
        assert_eq!(first.effect, None);

        setup.rotate(Rotation::Right, &inputs(0, 0)); // minute 32
        let second = setup.press(&inputs(0, 0));
        assert_eq!(second.switch_to, Some(ActivityId::Clock));
        assert_eq!(
            second.effect,
            Some(UiEffect::SetTime {
                hour: 6,
                minute: 32
            })
        );
    }

    #[test]
    fn test_reinit_restarts_at_hour() {
        let mut setup = editor(7, 31);
        setup.press(&inputs(0, 0));
        setup.press(&inputs(0, 0));

        setup.init(&inputs(8, 15));
        let frame = setup.render(&inputs(0, 0));
        assert_eq!(frame.get(3), Symbol::D0);
        assert_eq!(frame.get(4), Symbol::D8);
    }
}
