//! Rotary encoder input handling

pub mod flags;
pub mod quadrature;

pub use flags::EncoderFlags;
pub use quadrature::{QuadratureDecoder, Rotation};
