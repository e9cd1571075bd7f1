//! Menu screens
//!
//! A menu is a fixed list of single-glyph entries, built once at
//! startup. Selecting an entry either opens another activity or runs a
//! bare callback; an entry never does both.

use heapless::Vec;

use crate::frame::Frame;
use crate::input::Rotation;
use crate::symbol::Symbol;

use super::{wrap_step, Activity, ActivityId, PressOutcome, UiEffect, UiInputs};

/// Most entries a menu can hold.
pub const MENU_CAPACITY: usize = 10;

/// What selecting a menu entry does.
#[derive(Debug, Clone, Copy)]
pub enum MenuAction {
    /// Switch to another activity
    Open(ActivityId),
    /// Run a callback
    Invoke(fn()),
}

/// One selectable entry: a title glyph plus its action.
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    title: Symbol,
    action: MenuAction,
}

impl MenuItem {
    /// Entry that opens another activity.
    pub const fn open(title: Symbol, target: ActivityId) -> Self {
        Self {
            title,
            action: MenuAction::Open(target),
        }
    }

    /// Entry that runs a callback.
    pub const fn invoke(title: Symbol, callback: fn()) -> Self {
        Self {
            title,
            action: MenuAction::Invoke(callback),
        }
    }

    pub fn title(&self) -> Symbol {
        self.title
    }

    pub fn action(&self) -> MenuAction {
        self.action
    }
}

/// Fixed list of menu entries.
#[derive(Debug, Default)]
pub struct Menu {
    items: Vec<MenuItem, MENU_CAPACITY>,
}

impl Menu {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an entry; hands it back if the menu is full.
    pub fn push(&mut self, item: MenuItem) -> Result<(), MenuItem> {
        self.items.push(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<&MenuItem> {
        self.items.get(usize::from(index))
    }
}

/// The top-level menu screen.
pub struct MainMenu {
    menu: Menu,
    index: u8,
}

impl MainMenu {
    pub fn new(menu: Menu) -> Self {
        Self { menu, index: 0 }
    }
}

impl Activity for MainMenu {
    fn init(&mut self, _inputs: &UiInputs) {
        self.index = 0;
    }

    fn rotate(&mut self, rotation: Rotation, _inputs: &UiInputs) -> Option<UiEffect> {
        if let Some(last) = self.menu.len().checked_sub(1) {
            self.index = wrap_step(self.index, last as u8, rotation);
        }
        None
    }

    fn press(&mut self, _inputs: &UiInputs) -> PressOutcome {
        match self.menu.get(self.index).map(MenuItem::action) {
            Some(MenuAction::Open(target)) => PressOutcome::switch(target),
            Some(MenuAction::Invoke(callback)) => {
                callback();
                PressOutcome::none()
            }
            None => PressOutcome::none(),
        }
    }

    fn render(&mut self, _inputs: &UiInputs) -> Frame {
        let title = self
            .menu
            .get(self.index)
            .map(MenuItem::title)
            .unwrap_or(Symbol::Blank);

        let mut frame = Frame::default();
        frame.set(0, Symbol::P);
        frame.set(4, title);
        frame
    }
}
