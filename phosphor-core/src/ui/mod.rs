//! Activities and the UI state machine
//!
//! Every screen is an activity. Input events and render passes go to
//! the single current activity; switching runs the target's `init`
//! hook so a screen always starts from a known state. Activities never
//! touch hardware: they return [`UiEffect`]s for the firmware to apply.

mod clock;
mod color_setup;
mod menu;
mod time_setup;

pub use clock::Clock;
pub use color_setup::ColorSetup;
pub use menu::{MainMenu, Menu, MenuAction, MenuItem, MENU_CAPACITY};
pub use time_setup::TimeSetup;

use crate::color::AccentConfig;
use crate::frame::Frame;
use crate::input::Rotation;
use crate::symbol::Symbol;

/// Registry handle naming one of the four activities.
///
/// Activities refer to each other through these handles (menu targets,
/// back references) instead of owning pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActivityId {
    Clock,
    MainMenu,
    TimeSetup,
    ColorSetup,
}

/// Read-only snapshot handed to activities on init, input, and render.
#[derive(Debug, Clone, Copy)]
pub struct UiInputs {
    /// Hour of day, 0..=23
    pub hour: u8,
    /// Minute, 0..=59
    pub minute: u8,
    /// RTC square-wave line level, the 1 Hz blink source
    pub sqw_high: bool,
    /// Last climate reading in 0.1 degC units
    pub temperature_x10: i16,
    /// Committed accent settings
    pub accent: AccentConfig,
    /// Wrapping millisecond timestamp
    pub now_ms: u32,
}

/// Side effect requested by an activity, applied by the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiEffect {
    /// Write the edited time to the RTC with seconds reset to zero
    SetTime { hour: u8, minute: u8 },
    /// Drive the accent LEDs with these settings
    ApplyAccent { hue: u8, brightness: u8 },
}

/// What the manager should do after a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOutcome {
    /// Switch to this activity, running its init hook
    pub switch_to: Option<ActivityId>,
    /// Effect for the firmware to apply
    pub effect: Option<UiEffect>,
}

impl PressOutcome {
    pub const fn none() -> Self {
        Self {
            switch_to: None,
            effect: None,
        }
    }

    pub const fn switch(target: ActivityId) -> Self {
        Self {
            switch_to: Some(target),
            effect: None,
        }
    }
}

/// Common surface the manager dispatches to.
pub trait Activity {
    /// Prepare the screen. Runs every time the activity becomes
    /// current, before it renders or receives input.
    fn init(&mut self, inputs: &UiInputs);

    /// Handle one encoder detent.
    fn rotate(&mut self, rotation: Rotation, inputs: &UiInputs) -> Option<UiEffect>;

    /// Handle a debounced button press.
    fn press(&mut self, inputs: &UiInputs) -> PressOutcome;

    /// Produce the complete frame for this screen. Every slot is
    /// written; nothing from the previous activity leaks through.
    fn render(&mut self, inputs: &UiInputs) -> Frame;
}

/// Step a value one position around the circular range `0..=max`.
pub fn wrap_step(value: u8, max: u8, rotation: Rotation) -> u8 {
    match rotation {
        Rotation::Right => {
            if value >= max {
                0
            } else {
                value + 1
            }
        }
        Rotation::Left => {
            if value == 0 {
                max
            } else {
                value - 1
            }
        }
    }
}

/// Owns the four activities and dispatches to the current one.
pub struct Ui {
    clock: Clock,
    main_menu: MainMenu,
    time_setup: TimeSetup,
    color_setup: ColorSetup,
    current: ActivityId,
}

impl Ui {
    /// Build the standard activity set: the clock face plus a menu of
    /// color setup, time setup, and a back-to-clock entry. Starts on
    /// the clock.
    pub fn new() -> Self {
        let mut menu = Menu::new();
        let _ = menu.push(MenuItem::open(Symbol::C, ActivityId::ColorSetup));
        let _ = menu.push(MenuItem::open(Symbol::Ch, ActivityId::TimeSetup));
        let _ = menu.push(MenuItem::open(Symbol::Minus, ActivityId::Clock));

        Self {
            clock: Clock::new(),
            main_menu: MainMenu::new(menu),
            time_setup: TimeSetup::new(ActivityId::Clock),
            color_setup: ColorSetup::new(ActivityId::Clock),
            current: ActivityId::Clock,
        }
    }

    /// Handle of the current activity.
    pub fn current(&self) -> ActivityId {
        self.current
    }

    /// Make `target` current, running its init hook.
    pub fn switch_to(&mut self, target: ActivityId, inputs: &UiInputs) {
        match target {
            ActivityId::Clock => self.clock.init(inputs),
            ActivityId::MainMenu => self.main_menu.init(inputs),
            ActivityId::TimeSetup => self.time_setup.init(inputs),
            ActivityId::ColorSetup => self.color_setup.init(inputs),
        }
        self.current = target;
    }

    /// Dispatch one rotation to the current activity.
    pub fn rotate(&mut self, rotation: Rotation, inputs: &UiInputs) -> Option<UiEffect> {
        match self.current {
            ActivityId::Clock => self.clock.rotate(rotation, inputs),
            ActivityId::MainMenu => self.main_menu.rotate(rotation, inputs),
            ActivityId::TimeSetup => self.time_setup.rotate(rotation, inputs),
            ActivityId::ColorSetup => self.color_setup.rotate(rotation, inputs),
        }
    }

    /// Dispatch one press to the current activity, performing any
    /// requested activity switch. The effect is handed back for the
    /// firmware to apply.
    pub fn press(&mut self, inputs: &UiInputs) -> Option<UiEffect> {
        let outcome = match self.current {
            ActivityId::Clock => self.clock.press(inputs),
            ActivityId::MainMenu => self.main_menu.press(inputs),
            ActivityId::TimeSetup => self.time_setup.press(inputs),
            ActivityId::ColorSetup => self.color_setup.press(inputs),
        };

        if let Some(target) = outcome.switch_to {
            self.switch_to(target, inputs);
        }
        outcome.effect
    }

    /// Render the current activity.
    pub fn render(&mut self, inputs: &UiInputs) -> Frame {
        match self.current {
            ActivityId::Clock => self.clock.render(inputs),
            ActivityId::MainMenu => self.main_menu.render(inputs),
            ActivityId::TimeSetup => self.time_setup.render(inputs),
            ActivityId::ColorSetup => self.color_setup.render(inputs),
        }
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}
