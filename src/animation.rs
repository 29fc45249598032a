//! Animation type descriptors.
//!
//! An [`AnimationType`] is one entry of the type registry: the routine the
//! runtime calls on every animation tick, the name shown in a type picker,
//! and an HTML fragment for editing the type's parameters. The routine is
//! optional so a default-constructed entry is valid but reports
//! [`TypeError::NotConfigured`] instead of being called.

use heapless::String;

/// Default capacity of a type description, in bytes.
pub const DEFAULT_DESC_CAPACITY: usize = 32;

/// Default capacity of a settings fragment, in bytes.
pub const DEFAULT_SETTINGS_CAPACITY: usize = 512;

/// Phase of an animation reported to its update routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    /// First tick of the animation.
    Started,
    /// Any tick between the first and the last.
    Progress,
    /// Last tick; progress is 1.0.
    Completed,
}

/// Per-tick context handed to an update routine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationParam {
    /// Animation slot being updated.
    pub index: u16,

    /// Position within the animation, 0.0-1.0.
    pub progress: f32,

    pub state: AnimationState,
}

impl AnimationParam {
    /// Creates a context, clamping `progress` into 0.0-1.0.
    #[inline]
    pub fn new(index: u16, progress: f32, state: AnimationState) -> Self {
        Self {
            index,
            progress: progress.clamp(0.0, 1.0),
            state,
        }
    }
}

/// Update routine invoked once per animation tick.
pub type AnimUpdateFn<C> = fn(&C);

/// Animation type errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TypeError {
    /// No update routine has been set.
    NotConfigured,

    /// Description exceeds its capacity.
    DescriptionTooLong,

    /// Settings fragment exceeds its capacity.
    SettingsTooLong,
}

impl core::fmt::Display for TypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TypeError::NotConfigured => {
                write!(f, "animation type has no update routine")
            }
            TypeError::DescriptionTooLong => {
                write!(f, "description exceeds capacity")
            }
            TypeError::SettingsTooLong => {
                write!(f, "settings fragment exceeds capacity")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TypeError {}

/// One selectable animation type.
///
/// # Type Parameters
/// * `C` - Per-tick context passed to the update routine
/// * `DESC` - Capacity of the description in bytes
/// * `HTML` - Capacity of the settings fragment in bytes
#[derive(Debug, Clone)]
pub struct AnimationType<C, const DESC: usize, const HTML: usize> {
    function: Option<AnimUpdateFn<C>>,
    desc: String<DESC>,
    settings_html: String<HTML>,
}

/// Animation type with the default context and capacities.
pub type DefaultAnimationType =
    AnimationType<AnimationParam, DEFAULT_DESC_CAPACITY, DEFAULT_SETTINGS_CAPACITY>;

impl<C, const DESC: usize, const HTML: usize> AnimationType<C, DESC, HTML> {
    /// Creates an unconfigured type with empty description and settings.
    pub fn new() -> Self {
        Self {
            function: None,
            desc: String::new(),
            settings_html: String::new(),
        }
    }

    /// Creates a type with an update routine and description.
    ///
    /// # Errors
    /// * `DescriptionTooLong` - `desc` does not fit in `DESC` bytes
    pub fn with_function(function: AnimUpdateFn<C>, desc: &str) -> Result<Self, TypeError> {
        let mut anim_type = Self::new();
        anim_type.set_function(function);
        anim_type.set_desc(desc)?;
        Ok(anim_type)
    }

    pub fn set_function(&mut self, function: AnimUpdateFn<C>) {
        self.function = Some(function);
    }

    /// Removes the update routine, returning the type to the unconfigured state.
    pub fn clear_function(&mut self) {
        self.function = None;
    }

    /// Replaces the description.
    ///
    /// # Errors
    /// * `DescriptionTooLong` - the previous description is kept
    pub fn set_desc(&mut self, desc: &str) -> Result<(), TypeError> {
        self.desc = copy_str(desc).ok_or(TypeError::DescriptionTooLong)?;
        Ok(())
    }

    /// Replaces the settings fragment.
    ///
    /// # Errors
    /// * `SettingsTooLong` - the previous fragment is kept
    pub fn set_settings_html(&mut self, settings_html: &str) -> Result<(), TypeError> {
        self.settings_html = copy_str(settings_html).ok_or(TypeError::SettingsTooLong)?;
        Ok(())
    }

    /// Returns the update routine, or `None` if not configured.
    pub fn function(&self) -> Option<AnimUpdateFn<C>> {
        self.function
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn settings_html(&self) -> &str {
        &self.settings_html
    }

    /// Returns true if an update routine is set.
    pub fn is_configured(&self) -> bool {
        self.function.is_some()
    }

    /// Calls the update routine with the given context.
    ///
    /// # Errors
    /// * `NotConfigured` - no routine set; nothing is called
    pub fn invoke(&self, context: &C) -> Result<(), TypeError> {
        let function = self.function.ok_or(TypeError::NotConfigured)?;
        function(context);
        Ok(())
    }
}

impl<C, const DESC: usize, const HTML: usize> Default for AnimationType<C, DESC, HTML> {
    fn default() -> Self {
        Self::new()
    }
}

fn copy_str<const N: usize>(text: &str) -> Option<String<N>> {
    let mut copy = String::new();
    copy.push_str(text).ok()?;
    Some(copy)
}
