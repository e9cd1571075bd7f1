//! Embassy async tasks
//!
//! Each task owns its hardware and communicates over the statics in
//! [`crate::channels`].

pub mod accent;
pub mod climate;
pub mod encoder;
pub mod persist;
pub mod scan;
pub mod ui;

pub use accent::accent_task;
pub use climate::climate_task;
pub use encoder::{encoder_button_task, encoder_rotation_task};
pub use persist::persist_task;
pub use scan::scan_task;
pub use ui::ui_task;

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embedded_hal_bus::i2c::AtomicDevice;

/// Shared handle to the single I2C bus (RTC and climate sensor).
pub type SharedI2c = AtomicDevice<'static, I2c<'static, I2C0, Blocking>>;
