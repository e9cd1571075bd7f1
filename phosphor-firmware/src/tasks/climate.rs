//! Climate poll task

use defmt::*;
use embassy_time::{Duration, Ticker};

use phosphor_drivers::climate::Dht12;

use crate::channels::CLIMATE_READING;
use crate::tasks::SharedI2c;

/// Poll cadence; the DHT12 only refreshes its measurement about every
/// two seconds anyway.
pub const CLIMATE_POLL_SECS: u64 = 10;

#[embassy_executor::task]
pub async fn climate_task(mut sensor: Dht12<SharedI2c>) {
    info!("Climate task started");

    let mut ticker = Ticker::every(Duration::from_secs(CLIMATE_POLL_SECS));

    // Poll before the first tick so the clock face gets a temperature
    // early in the boot.
    loop {
        match sensor.read() {
            Ok(reading) => {
                trace!(
                    "Climate: temperature={} humidity={}",
                    reading.temperature_x10,
                    reading.humidity_x10
                );
                CLIMATE_READING.signal(Some(reading));
            }
            Err(e) => {
                warn!("Climate poll failed: {}", e);
                CLIMATE_READING.signal(None);
            }
        }
        ticker.next().await;
    }
}
