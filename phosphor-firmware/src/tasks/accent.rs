//! Accent LED task
//!
//! Drives the WS2812 strip under the tubes. The whole strip shows one
//! color; hue and value arrive resolved from the UI task.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use smart_leds::hsv::{hsv2rgb, Hsv};

use crate::channels::ACCENT_CMD;

/// One LED per tube.
pub const ACCENT_LED_COUNT: usize = 5;

#[embassy_executor::task]
pub async fn accent_task(mut strip: PioWs2812<'static, PIO0, 0, ACCENT_LED_COUNT>) {
    info!("Accent task started");

    loop {
        let cmd = ACCENT_CMD.wait().await;
        debug!("Accent update: hue={} value={}", cmd.hue, cmd.value);

        let color = hsv2rgb(Hsv {
            hue: cmd.hue,
            sat: 255,
            val: cmd.value,
        });
        strip.write(&[color; ACCENT_LED_COUNT]).await;
    }
}
