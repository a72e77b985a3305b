//! Jiggle cadence configuration.
//!
//! The values are fixed defaults; they live on a struct so the engine
//! receives them explicitly instead of reading globals.

use std::time::Duration;

use crate::error::ConfigError;

/// Whether the corner fail-safe is armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailSafeMode {
    /// Disabled on macOS, enabled everywhere else.
    #[default]
    Platform,
    Enabled,
    Disabled,
}

impl FailSafeMode {
    /// Resolve the mode for an OS name as reported by `std::env::consts::OS`.
    pub fn resolve(self, os: &str) -> bool {
        match self {
            FailSafeMode::Platform => os != "macos",
            FailSafeMode::Enabled => true,
            FailSafeMode::Disabled => false,
        }
    }
}

/// Timing and displacement for one jiggle cycle.
#[derive(Debug, Clone)]
pub struct JiggleConfig {
    /// Sleep between cycles, in seconds.
    pub interval_secs: u64,
    /// Horizontal displacement in pixels; the cursor moves by this and back.
    pub offset_px: i32,
    /// How long each displacement takes.
    pub move_duration_ms: u64,
    /// Pause between the displacement and the restore.
    pub pause_ms: u64,
    pub fail_safe: FailSafeMode,
}

fn default_interval_secs() -> u64 {
    15
}
fn default_offset_px() -> i32 {
    1
}
fn default_move_duration_ms() -> u64 {
    100
}
fn default_pause_ms() -> u64 {
    100
}

impl Default for JiggleConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            offset_px: default_offset_px(),
            move_duration_ms: default_move_duration_ms(),
            pause_ms: default_pause_ms(),
            fail_safe: FailSafeMode::default(),
        }
    }
}

impl JiggleConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn move_duration(&self) -> Duration {
        Duration::from_millis(self.move_duration_ms)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Reject values that would turn the loop into a busy spin or a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "interval_secs".into(),
                message: "must be at least 1 second".into(),
            });
        }
        if self.offset_px == 0 {
            return Err(ConfigError::InvalidValue {
                key: "offset_px".into(),
                message: "must not be zero".into(),
            });
        }
        Ok(())
    }
}
