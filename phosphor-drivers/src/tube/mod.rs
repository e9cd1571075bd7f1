//! Tube drive chain

pub mod shift595;

pub use shift595::Shift595;
