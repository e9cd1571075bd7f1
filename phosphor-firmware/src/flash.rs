//! Settings persistence
//!
//! A `sequential-storage` map in the last 64 KiB of the on-board flash,
//! with postcard-encoded values. One record so far: the accent settings.

use embassy_rp::dma::Channel;
use embassy_rp::flash::{Async, Flash};
use embassy_rp::peripherals::FLASH;
use embassy_rp::Peri;
use sequential_storage::cache::NoCache;
use sequential_storage::map;

use phosphor_core::color::AccentConfig;

/// Total on-board flash.
pub const FLASH_SIZE: usize = 2 * 1024 * 1024;

/// Settings partition at the top of flash, clear of the firmware image.
const SETTINGS_PARTITION_SIZE: u32 = 64 * 1024;
const SETTINGS_RANGE: core::ops::Range<u32> =
    (FLASH_SIZE as u32 - SETTINGS_PARTITION_SIZE)..(FLASH_SIZE as u32);

/// Keys for records in the settings map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Accent hue and brightness, postcard-encoded `AccentConfig`.
    AccentSettings = 0,
}

impl StorageKey {
    fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(StorageKey::AccentSettings),
            _ => None,
        }
    }
}

impl map::Key for StorageKey {
    fn serialize_into(&self, buffer: &mut [u8]) -> Result<usize, map::SerializationError> {
        if buffer.is_empty() {
            return Err(map::SerializationError::BufferTooSmall);
        }
        buffer[0] = *self as u8;
        Ok(1)
    }

    fn deserialize_from(buffer: &[u8]) -> Result<(Self, usize), map::SerializationError> {
        if buffer.is_empty() {
            return Err(map::SerializationError::BufferTooSmall);
        }
        match StorageKey::from_u8(buffer[0]) {
            Some(key) => Ok((key, 1)),
            None => Err(map::SerializationError::InvalidFormat),
        }
    }
}

/// Why a settings load or save came back empty-handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Nothing stored under the key yet.
    Missing,
    /// A record exists but its payload does not decode.
    Corrupt,
    /// Flash or map layer failure.
    Storage,
}

/// Wear-leveled settings store over the on-chip flash.
pub struct SettingsStore<'d> {
    flash: Flash<'d, FLASH, Async, FLASH_SIZE>,
}

impl<'d> SettingsStore<'d> {
    pub fn new(flash: Peri<'d, FLASH>, dma: Peri<'d, impl Channel>) -> Self {
        Self {
            flash: Flash::new(flash, dma),
        }
    }

    /// Fetch the stored accent settings.
    pub async fn load_accent(&mut self) -> Result<AccentConfig, SettingsError> {
        let mut data_buffer = [0u8; 128];

        let record = map::fetch_item::<StorageKey, &[u8], _>(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &StorageKey::AccentSettings,
        )
        .await
        .map_err(|_| SettingsError::Storage)?
        .ok_or(SettingsError::Missing)?;

        postcard::from_bytes(record).map_err(|_| SettingsError::Corrupt)
    }

    /// Store the accent settings, replacing any previous record.
    pub async fn save_accent(&mut self, config: &AccentConfig) -> Result<(), SettingsError> {
        let mut payload = [0u8; 8];
        let payload = postcard::to_slice(config, &mut payload).map_err(|_| SettingsError::Corrupt)?;
        let payload: &[u8] = payload;

        let mut data_buffer = [0u8; 128];
        map::store_item(
            &mut self.flash,
            SETTINGS_RANGE,
            &mut NoCache::new(),
            &mut data_buffer,
            &StorageKey::AccentSettings,
            &payload,
        )
        .await
        .map_err(|_| SettingsError::Storage)
    }
}
