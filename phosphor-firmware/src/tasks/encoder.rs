//! Rotary encoder tasks
//!
//! Two small edge-driven tasks feed the sticky flags in
//! [`crate::channels::ENCODER_FLAGS`]; the UI task consumes them on its
//! own schedule.

use defmt::*;
use embassy_rp::gpio::Input;

use phosphor_core::input::QuadratureDecoder;

use crate::channels::ENCODER_FLAGS;

#[embassy_executor::task]
pub async fn encoder_rotation_task(mut channel_a: Input<'static>, channel_b: Input<'static>) {
    info!("Encoder rotation task started");

    let mut decoder = QuadratureDecoder::new();

    loop {
        channel_a.wait_for_any_edge().await;
        if let Some(rotation) = decoder.edge(channel_a.is_high(), channel_b.is_high()) {
            debug!("Encoder detent: {}", rotation);
            ENCODER_FLAGS.set_rotation(rotation);
        }
    }
}

#[embassy_executor::task]
pub async fn encoder_button_task(mut button: Input<'static>) {
    info!("Encoder button task started");

    loop {
        button.wait_for_any_edge().await;
        // The switch shorts the line to ground when pressed.
        let pressed = button.is_low();
        debug!("Encoder button: pressed={}", pressed);
        ENCODER_FLAGS.set_button_level(pressed);
    }
}
