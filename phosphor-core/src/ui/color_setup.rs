//! Accent color setup screen
//!
//! Edits the palette index, then the brightness step. Every rotation
//! returns a preview effect so the strip shows the candidate live; only
//! the final press commits.

use crate::color::{
    brightness_from_index, brightness_index, palette_hue, palette_index, BRIGHTNESS_STEPS, PALETTE,
};
use crate::frame::Frame;
use crate::input::Rotation;
use crate::symbol::Symbol;

use super::{wrap_step, Activity, ActivityId, PressOutcome, UiEffect, UiInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Color,
    Brightness,
}

/// Accent hue and brightness editor.
pub struct ColorSetup {
    field: Field,
    color_index: u8,
    brightness_index: u8,
    back: ActivityId,
}

impl ColorSetup {
    pub fn new(back: ActivityId) -> Self {
        Self {
            field: Field::Color,
            color_index: 0,
            brightness_index: 0,
            back,
        }
    }

    /// Working values mapped through the palette and brightness tables.
    fn working_accent(&self) -> UiEffect {
        UiEffect::ApplyAccent {
            hue: palette_hue(self.color_index),
            brightness: brightness_from_index(self.brightness_index),
        }
    }
}

impl Activity for ColorSetup {
    /// Reverse-map the committed settings into edit indices.
    fn init(&mut self, inputs: &UiInputs) {
        self.field = Field::Color;
        self.color_index = palette_index(inputs.accent.hue);
        self.brightness_index = brightness_index(inputs.accent.brightness);
    }

    fn rotate(&mut self, rotation: Rotation, _inputs: &UiInputs) -> Option<UiEffect> {
        match self.field {
            Field::Color => {
                self.color_index = wrap_step(self.color_index, PALETTE.len() as u8 - 1, rotation);
            }
            Field::Brightness => {
                self.brightness_index =
                    wrap_step(self.brightness_index, BRIGHTNESS_STEPS - 1, rotation);
            }
        }
        // Live preview; not persisted until the commit press
        Some(self.working_accent())
    }

    fn press(&mut self, _inputs: &UiInputs) -> PressOutcome {
        match self.field {
            Field::Color => {
                self.field = Field::Brightness;
                PressOutcome::none()
            }
            Field::Brightness => PressOutcome {
                switch_to: Some(self.back),
                effect: Some(self.working_accent()),
            },
        }
    }

    fn render(&mut self, _inputs: &UiInputs) -> Frame {
        let index = match self.field {
            Field::Color => self.color_index,
            Field::Brightness => self.brightness_index,
        };

        let mut frame = Frame::default();
        frame.set(0, Symbol::C);
        frame.set(4, Symbol::digit(index));
        frame
    }
}
