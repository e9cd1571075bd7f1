//! Settings persist task
//!
//! Waits for queued settings writes and lands them in flash, keeping
//! erase stalls off the UI task.

use defmt::*;

use crate::channels::SETTINGS_SAVE;
use crate::flash::SettingsStore;

#[embassy_executor::task]
pub async fn persist_task(mut store: SettingsStore<'static>) {
    info!("Persist task started");

    loop {
        let config = SETTINGS_SAVE.wait().await;
        match store.save_accent(&config).await {
            Ok(()) => debug!(
                "Accent settings saved: hue={} brightness={}",
                config.hue, config.brightness
            ),
            Err(e) => warn!("Accent settings save failed: {}", e),
        }
    }
}
