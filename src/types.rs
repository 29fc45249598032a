//! Core constants, the temperature schedule value and state errors.

/// Number of RGBW output channels held by a [`State`](crate::State).
pub const COLOR_COUNT: usize = 12;

/// Minutes in one day; clock times are in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Converts a wall clock time to minutes since midnight.
///
/// Returns `None` unless `hours < 24` and `minutes < 60`, so the result is
/// always in `0..MINUTES_PER_DAY`.
#[inline]
pub const fn clock_minutes(hours: u32, minutes: u32) -> Option<u32> {
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

pub const DEFAULT_TYPE: usize = 0;
pub const DEFAULT_DAY_TEMP: u32 = 550;
pub const DEFAULT_NIGHT_TEMP: u32 = 200;
pub const DEFAULT_DAY_TIME: u32 = 7 * 60 + 30;
pub const DEFAULT_NIGHT_TIME: u32 = 22 * 60;
pub const DEFAULT_TRANS_TIME: u32 = 60;
pub const DEFAULT_ANIM_DELAY_MS: u32 = 5000;
pub const DEFAULT_GAMMA_CORRECT: bool = false;

/// Day/night color temperature schedule.
///
/// The runtime ramps between `night_temp` and `day_temp` over `trans_time`
/// minutes around the `day_time` and `night_time` anchors. No ordering is
/// enforced between the two anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DynTemp {
    /// Color temperature target during the day.
    pub day_temp: u32,

    /// Color temperature target during the night.
    pub night_temp: u32,

    /// Minutes since midnight at which the day target is reached.
    pub day_time: u32,

    /// Minutes since midnight at which the night target is reached.
    pub night_time: u32,

    /// Width of the transition ramp in minutes.
    pub trans_time: u32,
}

impl DynTemp {
    /// Creates a schedule from its five fields.
    #[inline]
    pub const fn new(
        day_temp: u32,
        night_temp: u32,
        day_time: u32,
        night_time: u32,
        trans_time: u32,
    ) -> Self {
        Self {
            day_temp,
            night_temp,
            day_time,
            night_time,
            trans_time,
        }
    }
}

impl Default for DynTemp {
    fn default() -> Self {
        Self::new(
            DEFAULT_DAY_TEMP,
            DEFAULT_NIGHT_TEMP,
            DEFAULT_DAY_TIME,
            DEFAULT_NIGHT_TIME,
            DEFAULT_TRANS_TIME,
        )
    }
}

/// Configuration state errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateError {
    /// Channel index is not below the channel count.
    ColorIndexOutOfRange {
        /// The requested channel index
        index: usize,
        /// Number of channels available
        count: usize,
    },
}

impl core::fmt::Display for StateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StateError::ColorIndexOutOfRange { index, count } => {
                write!(
                    f,
                    "color index {} out of range (state has {} channels)",
                    index, count
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}
