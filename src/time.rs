//! Time abstraction for reading the animation delay in the runtime's own units.

/// Trait abstraction for duration types.
///
/// Implement this for the duration type of your timer (e.g.
/// `embassy_time::Duration`) to read [`State::animation_delay_as`] without
/// manual unit conversion.
///
/// [`State::animation_delay_as`]: crate::State::animation_delay_as
pub trait TimeDuration: Copy + PartialEq {
    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

impl TimeDuration for core::time::Duration {
    fn from_millis(millis: u64) -> Self {
        core::time::Duration::from_millis(millis)
    }
}
