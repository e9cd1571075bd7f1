//! Tube scan task
//!
//! Steps the multiplex scanner on a fixed tick and pushes each step out
//! through the shift register chain. Nothing else touches the 595 pins.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use phosphor_core::scan::Scanner;
use phosphor_drivers::tube::Shift595;

use crate::channels::FRAME;

/// One grid per tick; a full five-tube sweep takes 10 ms.
pub const SCAN_TICK_MS: u64 = 2;

/// Shift register chain behind the tubes.
pub type TubeDriver = Shift595<Output<'static>, Output<'static>, Output<'static>>;

#[embassy_executor::task]
pub async fn scan_task(mut tube: TubeDriver) {
    info!("Scan task started");

    let mut scanner = Scanner::new();
    let mut ticker = Ticker::every(Duration::from_millis(SCAN_TICK_MS));

    loop {
        ticker.next().await;
        let step = scanner.tick(&FRAME);
        // RP2040 GPIO writes are infallible.
        let _ = tube.latch_frame(step);
    }
}
