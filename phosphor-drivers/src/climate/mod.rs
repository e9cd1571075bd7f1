//! Climate sensor drivers

pub mod dht12;

pub use dht12::{Dht12, Reading};
