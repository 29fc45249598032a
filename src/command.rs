//! Command-based configuration updates.

use crate::colors::RgbwColor;
use crate::types::DynTemp;

/// One configuration update, as produced by a settings surface or a state loader.
///
/// Apply with [`State::apply`](crate::State::apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateCommand {
    /// Select animation type.
    SetType(usize),
    /// Set one channel color.
    SetColor { index: usize, color: RgbwColor },
    /// Replace the temperature schedule.
    SetDynTemp(DynTemp),
    /// Set animation delay in milliseconds.
    SetAnimationDelay(u32),
    /// Enable or disable gamma correction.
    SetGammaCorrect(bool),
}
