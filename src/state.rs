//! Fixture configuration state.
//!
//! Provides [`State`], the single in-memory record of what the fixture shows:
//! the active animation type, the per-channel colors, the day/night color
//! temperature schedule, the animation step delay and the gamma flag.

use crate::colors::RgbwColor;
use crate::command::StateCommand;
use crate::time::TimeDuration;
use crate::types::{
    COLOR_COUNT, DEFAULT_ANIM_DELAY_MS, DEFAULT_DAY_TEMP, DEFAULT_DAY_TIME, DEFAULT_GAMMA_CORRECT,
    DEFAULT_NIGHT_TEMP, DEFAULT_NIGHT_TIME, DEFAULT_TRANS_TIME, DEFAULT_TYPE, DynTemp, StateError,
};

/// The fixture's current display configuration.
///
/// One instance is created at startup with defaults and then mutated in place
/// by its owner. Setters overwrite their field(s) without cross-field
/// validation; only channel indices are checked.
///
/// Single writer: wrap in a mutex if a settings thread and an animation
/// thread share it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State {
    type_index: usize,
    colors: [RgbwColor; COLOR_COUNT],
    dyn_temp: DynTemp,
    anim_delay: u32,
    gamma_correct: bool,
}

impl State {
    /// Creates a state with default values and all channels off.
    pub const fn new() -> Self {
        Self {
            type_index: DEFAULT_TYPE,
            colors: [RgbwColor::OFF; COLOR_COUNT],
            dyn_temp: DynTemp::new(
                DEFAULT_DAY_TEMP,
                DEFAULT_NIGHT_TEMP,
                DEFAULT_DAY_TIME,
                DEFAULT_NIGHT_TIME,
                DEFAULT_TRANS_TIME,
            ),
            anim_delay: DEFAULT_ANIM_DELAY_MS,
            gamma_correct: DEFAULT_GAMMA_CORRECT,
        }
    }

    /// Applies a configuration command by dispatching to the matching setter.
    ///
    /// # Errors
    /// * `ColorIndexOutOfRange` - `SetColor` with an index past the last channel
    pub fn apply(&mut self, command: StateCommand) -> Result<(), StateError> {
        match command {
            StateCommand::SetType(index) => self.set_type(index),
            StateCommand::SetColor { index, color } => self.set_color(index, color)?,
            StateCommand::SetDynTemp(dyn_temp) => self.set_dyn_temp_schedule(dyn_temp),
            StateCommand::SetAnimationDelay(delay) => self.set_animation_delay(delay),
            StateCommand::SetGammaCorrect(flag) => self.set_gamma_correct(flag),
        }
        Ok(())
    }

    /// Selects the active animation type.
    ///
    /// Not checked against any registry; the runtime resolves the index.
    pub fn set_type(&mut self, index: usize) {
        self.type_index = index;
    }

    /// Sets the color of one channel.
    ///
    /// # Errors
    /// Returns `ColorIndexOutOfRange` if `index >= COLOR_COUNT`. The state is
    /// left unchanged.
    pub fn set_color(&mut self, index: usize, color: RgbwColor) -> Result<(), StateError> {
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(StateError::ColorIndexOutOfRange {
                index,
                count: COLOR_COUNT,
            })?;
        *slot = color;
        Ok(())
    }

    /// Sets every channel to the same color.
    pub fn set_all_colors(&mut self, color: RgbwColor) {
        self.colors = [color; COLOR_COUNT];
    }

    /// Replaces the whole temperature schedule in one assignment.
    pub fn set_dyn_temp(
        &mut self,
        day_temp: u32,
        night_temp: u32,
        day_time: u32,
        night_time: u32,
        trans_time: u32,
    ) {
        self.set_dyn_temp_schedule(DynTemp::new(
            day_temp, night_temp, day_time, night_time, trans_time,
        ));
    }

    /// Replaces the whole temperature schedule from a prepared value.
    pub fn set_dyn_temp_schedule(&mut self, dyn_temp: DynTemp) {
        self.dyn_temp = dyn_temp;
    }

    /// Sets the minimum interval between animation steps, in milliseconds.
    ///
    /// Zero is accepted and means the runtime steps on every tick.
    pub fn set_animation_delay(&mut self, delay: u32) {
        self.anim_delay = delay;
    }

    pub fn set_gamma_correct(&mut self, flag: bool) {
        self.gamma_correct = flag;
    }

    /// Returns the active animation type index.
    pub fn type_index(&self) -> usize {
        self.type_index
    }

    /// Returns the color of one channel.
    ///
    /// # Errors
    /// Returns `ColorIndexOutOfRange` if `index >= COLOR_COUNT`.
    pub fn color(&self, index: usize) -> Result<RgbwColor, StateError> {
        self.colors
            .get(index)
            .copied()
            .ok_or(StateError::ColorIndexOutOfRange {
                index,
                count: COLOR_COUNT,
            })
    }

    /// Returns all channel colors in channel order.
    pub fn colors(&self) -> &[RgbwColor; COLOR_COUNT] {
        &self.colors
    }

    /// Returns the full temperature schedule.
    pub fn dyn_temp(&self) -> DynTemp {
        self.dyn_temp
    }

    pub fn day_temp(&self) -> u32 {
        self.dyn_temp.day_temp
    }

    pub fn night_temp(&self) -> u32 {
        self.dyn_temp.night_temp
    }

    pub fn day_time(&self) -> u32 {
        self.dyn_temp.day_time
    }

    pub fn night_time(&self) -> u32 {
        self.dyn_temp.night_time
    }

    pub fn trans_time(&self) -> u32 {
        self.dyn_temp.trans_time
    }

    /// Returns the animation delay in milliseconds.
    pub fn animation_delay(&self) -> u32 {
        self.anim_delay
    }

    /// Returns the animation delay converted to the caller's duration type.
    pub fn animation_delay_as<D: TimeDuration>(&self) -> D {
        D::from_millis(u64::from(self.anim_delay))
    }

    pub fn gamma_correct(&self) -> bool {
        self.gamma_correct
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
