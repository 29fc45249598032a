#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`State`**: The fixture's display configuration: active type, channel colors, temperature schedule, animation delay, gamma flag
//! - **`RgbwColor`**: An 8-bit red/green/blue/white channel color
//! - **`DynTemp`**: Day/night color temperature targets, anchor times and ramp width
//! - **`StateCommand`**: One configuration update, applied with `State::apply`
//! - **`AnimationType`**: One selectable animation: update routine, description, settings fragment
//! - **`TypeRegistry`**: Ordered table of animation types indexed by `State::type_index`
//! - **`TimeDuration`**: Trait to implement for your timer's duration type
//!
//! The crate holds configuration only. Stepping animations, interpolating the
//! temperature schedule, applying gamma correction and driving the LEDs are
//! left to the runtime that owns the `State`.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animation;
pub mod colors;
pub mod command;
pub mod registry;
pub mod state;
pub mod time;
pub mod types;

pub use animation::{
    AnimUpdateFn, AnimationParam, AnimationState, AnimationType, DefaultAnimationType, TypeError,
};
pub use colors::RgbwColor;
pub use command::StateCommand;
pub use registry::{RegistryError, TypeRegistry};
pub use state::State;
pub use time::TimeDuration;
pub use types::{COLOR_COUNT, DynTemp, MINUTES_PER_DAY, StateError, clock_minutes};

pub const COLOR_OFF: RgbwColor = RgbwColor::OFF;
