//! Inter-task communication
//!
//! Static channels and lock-free state shared between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use phosphor_core::color::AccentConfig;
use phosphor_core::frame::FrameBuffer;
use phosphor_core::input::EncoderFlags;
use phosphor_drivers::climate::Reading;

/// Resolved accent LED output: palette hue plus whatever value is left
/// after ambient dimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentCommand {
    pub hue: u8,
    pub value: u8,
}

/// Symbols currently on the tubes. The UI task stores whole frames,
/// the scan task reads one slot per tick.
pub static FRAME: FrameBuffer = FrameBuffer::new();

/// Sticky encoder events, set by the edge tasks, consumed by the UI task.
pub static ENCODER_FLAGS: EncoderFlags = EncoderFlags::new();

/// Latest climate sample; `None` marks a failed poll.
pub static CLIMATE_READING: Signal<CriticalSectionRawMutex, Option<Reading>> = Signal::new();

/// Accent LED output requested by the UI task (previews, commits, and
/// ambient light changes all land here).
pub static ACCENT_CMD: Signal<CriticalSectionRawMutex, AccentCommand> = Signal::new();

/// Settings write queued for the persist task.
pub static SETTINGS_SAVE: Signal<CriticalSectionRawMutex, AccentConfig> = Signal::new();
