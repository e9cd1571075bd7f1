//! Accent LED palette and persisted settings
//!
//! The strip under the tubes shows one solid color, picked from a small
//! palette of hue wheel positions. Brightness is edited in ten coarse
//! steps but stored as the raw value byte.

/// Selectable accent hues, in setup screen order.
pub const PALETTE: [u8; 7] = [
    128, // aqua
    160, // blue
    96,  // green
    32,  // orange
    64,  // yellow
    224, // pink
    0,   // red
];

/// Number of brightness steps in the setup screen.
pub const BRIGHTNESS_STEPS: u8 = 10;

/// Accent value used while ambient light is low.
pub const DIMMED_VALUE: u8 = 100;

/// Hue for a palette index. Indices wrap around the palette.
pub fn palette_hue(index: u8) -> u8 {
    PALETTE[usize::from(index) % PALETTE.len()]
}

/// Palette index showing the given hue, falling back to the first
/// entry for hues outside the palette.
pub fn palette_index(hue: u8) -> u8 {
    PALETTE.iter().position(|&h| h == hue).unwrap_or(0) as u8
}

/// Brightness byte for a setup index 0..=9.
pub fn brightness_from_index(index: u8) -> u8 {
    (u16::from(index.min(BRIGHTNESS_STEPS - 1)) * 255 / 9) as u8
}

/// Setup index 0..=9 for a brightness byte.
pub fn brightness_index(brightness: u8) -> u8 {
    (u16::from(brightness) * 9 / 255) as u8
}

/// Persisted accent LED settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccentConfig {
    /// Hue wheel position; saturation is always full
    pub hue: u8,
    /// Value byte used while ambient light is high
    pub brightness: u8,
}

impl Default for AccentConfig {
    /// Aqua at full brightness.
    fn default() -> Self {
        Self {
            hue: PALETTE[0],
            brightness: 255,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_map_endpoints() {
        assert_eq!(brightness_from_index(0), 0);
        assert_eq!(brightness_from_index(9), 255);
    }

    #[test]
    fn test_brightness_map_monotonic() {
        for index in 1..BRIGHTNESS_STEPS {
            assert!(brightness_from_index(index) > brightness_from_index(index - 1));
        }
    }

    #[test]
    fn test_brightness_index_bounds() {
        assert_eq!(brightness_index(0), 0);
        assert_eq!(brightness_index(255), 9);
        for brightness in 0..=255u16 {
            assert!(brightness_index(brightness as u8) < BRIGHTNESS_STEPS);
        }
    }

    #[test]
    fn test_palette_index_matches() {
        for (index, &hue) in PALETTE.iter().enumerate() {
            assert_eq!(palette_index(hue), index as u8);
        }
    }

    #[test]
    fn test_unknown_hue_falls_back_to_first() {
        assert_eq!(palette_index(1), 0);
        assert_eq!(palette_index(200), 0);
    }

    #[test]
    fn test_palette_hue_wraps() {
        assert_eq!(palette_hue(0), 128);
        assert_eq!(palette_hue(6), 0);
        assert_eq!(palette_hue(7), 128);
    }

    #[test]
    fn test_default_config() {
        let config = AccentConfig::default();
        assert_eq!(config.hue, 128);
        assert_eq!(config.brightness, 255);
    }
}
