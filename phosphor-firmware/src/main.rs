//! Phosphor IV-6 tube clock firmware
//!
//! Five IV-6 tubes behind a pair of 74HC595 shift registers, a DS3231
//! keeping time, a DHT12 for the room climate, a rotary encoder for
//! input, and a WS2812 strip for accent lighting. An RP2040 runs one
//! Embassy task per concern.
//!
//! GPIO map (Pico-style board):
//! - GP4 / GP5   I2C0 SDA / SCL (DS3231 + DHT12)
//! - GP10-GP12   74HC595 data / clock / latch
//! - GP13        encoder push button (active low)
//! - GP14 / GP15 encoder channels A / B
//! - GP16        DS3231 SQW, the 1 Hz blink source
//! - GP18        WS2812 accent strip (PIO0)
//! - GP26        LDR divider (ADC0)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{
    Adc, Channel as AdcChannel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler,
};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, PIO0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_time::Timer;
use embedded_hal_bus::i2c::AtomicDevice;
use embedded_hal_bus::util::AtomicCell;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use phosphor_core::color::AccentConfig;
use phosphor_drivers::climate::Dht12;
use phosphor_drivers::rtc::Ds3231;
use phosphor_drivers::tube::Shift595;

use crate::channels::{AccentCommand, ACCENT_CMD};
use crate::flash::SettingsStore;

mod channels;
mod flash;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// The blocking I2C bus is shared between the UI task (RTC) and the
// climate task (DHT12).
static I2C_BUS: StaticCell<AtomicCell<I2c<'static, I2C0, i2c::Blocking>>> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Phosphor firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Stored settings, with defaults on first boot
    let mut settings = SettingsStore::new(p.FLASH, p.DMA_CH1);
    let accent = match settings.load_accent().await {
        Ok(config) => {
            info!(
                "Loaded accent settings: hue={} brightness={}",
                config.hue, config.brightness
            );
            config
        }
        Err(e) => {
            info!("No usable accent settings ({}), using defaults", e);
            AccentConfig::default()
        }
    };

    // Shared I2C bus: DS3231 at 0x68, DHT12 at 0x5C
    let bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let bus = I2C_BUS.init(AtomicCell::new(bus));

    let mut rtc = Ds3231::new(AtomicDevice::new(bus));
    if rtc.set_24h_mode().is_err() {
        warn!("RTC 24-hour mode setup failed");
    }
    if rtc.enable_square_wave_1hz().is_err() {
        warn!("RTC square wave setup failed");
    }
    let sqw = Input::new(p.PIN_16, Pull::Up);

    let climate = Dht12::new(AtomicDevice::new(bus));
    info!("I2C devices initialized");

    // Tube drive chain
    let tube_driver = Shift595::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );

    // Rotary encoder
    let encoder_a = Input::new(p.PIN_14, Pull::Up);
    let encoder_b = Input::new(p.PIN_15, Pull::Up);
    let encoder_button = Input::new(p.PIN_13, Pull::Up);

    // Accent strip on PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_18, &program);

    // Light sensor
    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let ldr = AdcChannel::new_pin(p.PIN_26, Pull::None);
    info!("Display, encoder, and sensors initialized");

    spawner.spawn(tasks::scan_task(tube_driver)).unwrap();
    spawner
        .spawn(tasks::encoder_rotation_task(encoder_a, encoder_b))
        .unwrap();
    spawner
        .spawn(tasks::encoder_button_task(encoder_button))
        .unwrap();
    spawner
        .spawn(tasks::ui_task(rtc, sqw, adc, ldr, accent))
        .unwrap();
    spawner.spawn(tasks::climate_task(climate)).unwrap();
    spawner.spawn(tasks::accent_task(strip)).unwrap();
    spawner.spawn(tasks::persist_task(settings)).unwrap();
    info!("All tasks spawned, firmware running");

    // The ambient monitor starts in the bright state; its first settled
    // sample re-dims if the room is dark.
    ACCENT_CMD.signal(AccentCommand {
        hue: accent.hue,
        value: accent.brightness,
    });

    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
