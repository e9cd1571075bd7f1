//! Hardware drivers for the Phosphor tube clock
//!
//! Concrete drivers for the board peripherals, generic over
//! embedded-hal 1.0 traits so they can run against mock buses
//! and pins on the host:
//!
//! - DS3231 real-time clock (I2C)
//! - DHT12 temperature/humidity sensor (I2C)
//! - Dual 74HC595 shift registers feeding the tube anodes and grids

#![no_std]
#![deny(unsafe_code)]

pub mod climate;
pub mod rtc;
pub mod tube;
