//! UI task
//!
//! Owns the RTC, the light sensor, and the activity state machine.
//! Polls the encoder flags every 10 ms, re-renders the tube frame every
//! 100 ms, and applies whatever effects the activities request.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker, Timer};

use phosphor_core::ambient::{AmbientMonitor, LightLevel};
use phosphor_core::color::{AccentConfig, DIMMED_VALUE};
use phosphor_core::input::Rotation;
use phosphor_core::ui::{Ui, UiEffect, UiInputs};
use phosphor_drivers::rtc::Ds3231;

use crate::channels::{
    AccentCommand, ACCENT_CMD, CLIMATE_READING, ENCODER_FLAGS, FRAME, SETTINGS_SAVE,
};
use crate::tasks::SharedI2c;

/// Encoder flag poll cadence.
pub const UI_POLL_MS: u64 = 10;

/// Re-render (and re-read the RTC and LDR) every this many polls.
const RENDER_EVERY_POLLS: u32 = 10;

/// How long after the press edge the line is re-checked before the
/// press counts.
const PRESS_DEBOUNCE_MS: u64 = 5;

/// Accent value for an ambient level: the configured brightness in a
/// lit room, a fixed dim floor in the dark.
fn accent_value(light: LightLevel, brightness: u8) -> u8 {
    match light {
        LightLevel::High => brightness,
        LightLevel::Low => DIMMED_VALUE,
    }
}

/// Rotations only ever preview; nothing is staged until a commit press.
fn preview(effect: Option<UiEffect>, light: LightLevel) {
    if let Some(UiEffect::ApplyAccent { hue, brightness }) = effect {
        debug!("Accent preview: hue={} brightness={}", hue, brightness);
        ACCENT_CMD.signal(AccentCommand {
            hue,
            value: accent_value(light, brightness),
        });
    }
}

#[embassy_executor::task]
pub async fn ui_task(
    mut rtc: Ds3231<SharedI2c>,
    sqw: Input<'static>,
    mut adc: Adc<'static, Async>,
    mut ldr: Channel<'static>,
    initial_accent: AccentConfig,
) {
    info!("UI task started");

    let mut ui = Ui::new();
    let mut ambient = AmbientMonitor::new();
    let mut accent = initial_accent;

    // Last good snapshot; stale values stay on display when a read fails.
    let mut hour = 0u8;
    let mut minute = 0u8;
    let mut temperature_x10 = 0i16;

    let boot = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(UI_POLL_MS));
    let mut polls_since_render = 0u32;

    loop {
        match select(ticker.next(), CLIMATE_READING.wait()).await {
            Either::First(()) => {}
            Either::Second(Some(reading)) => {
                temperature_x10 = reading.temperature_x10;
                continue;
            }
            Either::Second(None) => {
                // Failed poll; keep showing the previous reading.
                continue;
            }
        }

        let now_ms = boot.elapsed().as_millis() as u32;
        let inputs = UiInputs {
            hour,
            minute,
            sqw_high: sqw.is_high(),
            temperature_x10,
            accent,
            now_ms,
        };

        // One event of each kind per poll; right before left, press last.
        if ENCODER_FLAGS.take_right() {
            preview(ui.rotate(Rotation::Right, &inputs), ambient.level());
        }
        if ENCODER_FLAGS.take_left() {
            preview(ui.rotate(Rotation::Left, &inputs), ambient.level());
        }
        if ENCODER_FLAGS.take_press() {
            // Re-check the line after the debounce window; a bounce that
            // released in between is dropped.
            Timer::after_millis(PRESS_DEBOUNCE_MS).await;
            if ENCODER_FLAGS.held() {
                let effect = ui.press(&inputs);
                debug!("Press handled, now in {}", ui.current());
                match effect {
                    Some(UiEffect::SetTime {
                        hour: new_hour,
                        minute: new_minute,
                    }) => {
                        info!("Setting time to {}:{}", new_hour, new_minute);
                        if rtc.set_time(new_hour, new_minute, 0).is_err() {
                            warn!("RTC time write failed");
                        }
                        hour = new_hour;
                        minute = new_minute;
                    }
                    Some(UiEffect::ApplyAccent { hue, brightness }) => {
                        accent = AccentConfig { hue, brightness };
                        info!("Accent committed: hue={} brightness={}", hue, brightness);
                        ACCENT_CMD.signal(AccentCommand {
                            hue,
                            value: accent_value(ambient.level(), brightness),
                        });
                        SETTINGS_SAVE.signal(accent);
                    }
                    None => {}
                }
            }
        }

        polls_since_render += 1;
        if polls_since_render >= RENDER_EVERY_POLLS {
            polls_since_render = 0;

            match rtc.hour() {
                Ok(reading) => hour = reading.to_24h(),
                Err(_) => warn!("RTC hour read failed"),
            }
            match rtc.minute() {
                Ok(value) => minute = value,
                Err(_) => warn!("RTC minute read failed"),
            }

            match adc.read(&mut ldr).await {
                Ok(raw) => {
                    trace!("LDR sample: {}", raw);
                    if let Some(level) = ambient.sample(raw, now_ms) {
                        info!("Ambient light now {}", level);
                        ACCENT_CMD.signal(AccentCommand {
                            hue: accent.hue,
                            value: accent_value(level, accent.brightness),
                        });
                    }
                }
                Err(_) => warn!("LDR read failed"),
            }

            let inputs = UiInputs {
                hour,
                minute,
                sqw_high: sqw.is_high(),
                temperature_x10,
                accent,
                now_ms,
            };
            FRAME.store(&ui.render(&inputs));
        }
    }
}
