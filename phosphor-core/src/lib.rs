//! Board-agnostic core logic for the Phosphor tube clock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Tube symbols and their seven-segment glyphs
//! - Display frames and the shared frame buffer
//! - The multiplex scanner that walks the tube grids
//! - Quadrature decoding and sticky input flags
//! - The activity state machine (clock face, menu, setup screens)
//! - Accent color palette and persisted settings
//! - Ambient light monitoring

#![no_std]
#![deny(unsafe_code)]

pub mod ambient;
pub mod color;
pub mod frame;
pub mod input;
pub mod scan;
pub mod symbol;
pub mod ui;
