//! Ambient light monitoring
//!
//! An LDR divider on the ADC decides whether the room is lit. Two
//! thresholds give hysteresis, and a crossing must hold for the settle
//! time before a change is reported, so headlights sweeping the room at
//! night do not flicker the accent LEDs.

/// Reported light level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightLevel {
    Low,
    High,
}

/// Raw ADC value below which the room counts as dark.
pub const DARK_THRESHOLD: u16 = 3200;

/// Raw ADC value above which the room counts as bright.
pub const BRIGHT_THRESHOLD: u16 = 3600;

/// How long a crossing must hold before it is reported.
pub const SETTLE_MS: u32 = 5000;

/// Two-threshold hysteresis with a settle timer.
///
/// A crossing arms the settle timer; the level flips only if the
/// reading is still across the threshold once the timer expires. A
/// reading that has crossed back by then discards the pending change.
pub struct AmbientMonitor {
    level: LightLevel,
    pending_since_ms: Option<u32>,
}

impl AmbientMonitor {
    /// Starts at [`LightLevel::High`].
    pub const fn new() -> Self {
        Self {
            level: LightLevel::High,
            pending_since_ms: None,
        }
    }

    /// Current settled level.
    pub fn level(&self) -> LightLevel {
        self.level
    }

    /// Feed one raw ADC sample. Returns the new level exactly once per
    /// accepted transition.
    pub fn sample(&mut self, raw: u16, now_ms: u32) -> Option<LightLevel> {
        match self.pending_since_ms {
            None => {
                if self.crosses(raw) {
                    self.pending_since_ms = Some(now_ms);
                }
                None
            }
            Some(started_ms) => {
                if now_ms.wrapping_sub(started_ms) < SETTLE_MS {
                    return None;
                }
                self.pending_since_ms = None;
                if self.crosses(raw) {
                    self.level = match self.level {
                        LightLevel::High => LightLevel::Low,
                        LightLevel::Low => LightLevel::High,
                    };
                    Some(self.level)
                } else {
                    None
                }
            }
        }
    }

    /// Whether `raw` is across the threshold away from the current
    /// level. Readings in the hysteresis band never cross.
    fn crosses(&self, raw: u16) -> bool {
        match self.level {
            LightLevel::High => raw < DARK_THRESHOLD,
            LightLevel::Low => raw > BRIGHT_THRESHOLD,
        }
    }
}

impl Default for AmbientMonitor {
    fn default() -> Self {
        Self::new()
    }
}
