//! Integration tests for State

mod common;
use common::*;

use room_light_state::{
    COLOR_COUNT, DynTemp, RgbwColor, State, StateCommand, StateError, clock_minutes,
};

#[test]
fn new_state_has_documented_defaults() {
    let state = State::new();

    assert_eq!(state.type_index(), 0);
    assert_eq!(state.day_temp(), 550);
    assert_eq!(state.night_temp(), 200);
    assert_eq!(state.day_time(), 450);
    assert_eq!(state.night_time(), 1320);
    assert_eq!(state.trans_time(), 60);
    assert_eq!(state.animation_delay(), 5000);
    assert!(!state.gamma_correct());
    assert!(state.colors().iter().all(RgbwColor::is_off));
}

#[test]
fn default_matches_new() {
    assert_eq!(State::default(), State::new());
}

#[test]
fn set_color_touches_only_target_channel() {
    for index in 0..COLOR_COUNT {
        let mut state = State::new();
        let color = RgbwColor::new(index as u8, 1, 2, 3);

        state.set_color(index, color).unwrap();

        for other in 0..COLOR_COUNT {
            let expected = if other == index { color } else { RgbwColor::OFF };
            assert_eq!(state.color(other), Ok(expected));
        }
    }
}

#[test]
fn red_on_channel_five_leaves_channel_four_off() {
    let mut state = State::new();

    state.set_color(5, RgbwColor::from((255, 0, 0, 0))).unwrap();

    assert_eq!(state.color(5), Ok(RED));
    assert_eq!(state.color(4), Ok(RgbwColor::new(0, 0, 0, 0)));
}

#[test]
fn channel_index_past_last_is_rejected() {
    let mut state = State::new();

    assert_eq!(
        state.set_color(COLOR_COUNT, RED),
        Err(StateError::ColorIndexOutOfRange {
            index: COLOR_COUNT,
            count: COLOR_COUNT,
        })
    );
    assert!(matches!(
        state.color(COLOR_COUNT),
        Err(StateError::ColorIndexOutOfRange { .. })
    ));
    assert!(state.colors().iter().all(RgbwColor::is_off));
}

#[test]
fn set_dyn_temp_replaces_all_schedule_fields() {
    let mut state = State::new();

    let day_time = clock_minutes(6, 45).unwrap();
    let night_time = clock_minutes(23, 15).unwrap();

    state.set_dyn_temp(400, 150, day_time, night_time, 90);

    assert_eq!(state.day_temp(), 400);
    assert_eq!(state.night_temp(), 150);
    assert_eq!(state.day_time(), 405);
    assert_eq!(state.night_time(), 1395);
    assert_eq!(state.trans_time(), 90);
    assert_eq!(state.dyn_temp(), DynTemp::new(400, 150, 405, 1395, 90));
}

#[test]
fn set_dyn_temp_does_not_enforce_anchor_order() {
    let mut state = State::new();

    state.set_dyn_temp(550, 200, 1320, 450, 0);

    assert_eq!(state.day_time(), 1320);
    assert_eq!(state.night_time(), 450);
    assert_eq!(state.trans_time(), 0);
}

#[test]
fn zero_animation_delay_is_accepted() {
    let mut state = State::new();

    state.set_animation_delay(0);

    assert_eq!(state.animation_delay(), 0);
    assert_eq!(state.animation_delay_as::<TestDuration>(), TestDuration(0));
}

#[test]
fn animation_delay_converts_to_duration_types() {
    let mut state = State::new();
    assert_eq!(state.animation_delay_as::<TestDuration>(), TestDuration(5000));

    state.set_animation_delay(250);
    assert_eq!(
        state.animation_delay_as::<core::time::Duration>(),
        core::time::Duration::from_millis(250)
    );
}

#[test]
fn set_type_is_not_bounds_checked() {
    let mut state = State::new();

    state.set_type(42);

    assert_eq!(state.type_index(), 42);
}

#[test]
fn gamma_correct_toggles() {
    let mut state = State::new();

    state.set_gamma_correct(true);
    assert!(state.gamma_correct());

    state.set_gamma_correct(false);
    assert!(!state.gamma_correct());
}

#[test]
fn apply_dispatches_each_command() {
    let mut state = State::new();
    let schedule = DynTemp::new(500, 250, 420, 1260, 30);

    state.apply(StateCommand::SetType(2)).unwrap();
    state
        .apply(StateCommand::SetColor {
            index: 11,
            color: WARM_WHITE,
        })
        .unwrap();
    state.apply(StateCommand::SetDynTemp(schedule)).unwrap();
    state.apply(StateCommand::SetAnimationDelay(100)).unwrap();
    state.apply(StateCommand::SetGammaCorrect(true)).unwrap();

    assert_eq!(state.type_index(), 2);
    assert_eq!(state.color(11), Ok(WARM_WHITE));
    assert_eq!(state.dyn_temp(), schedule);
    assert_eq!(state.animation_delay(), 100);
    assert!(state.gamma_correct());
}

#[test]
fn failed_command_leaves_state_unchanged() {
    let mut state = State::new();
    let before = state.clone();

    let result = state.apply(StateCommand::SetColor {
        index: COLOR_COUNT + 3,
        color: RED,
    });

    assert!(result.is_err());
    assert_eq!(state, before);
}

#[test]
fn state_error_display() {
    let err = StateError::ColorIndexOutOfRange {
        index: 12,
        count: 12,
    };
    assert_eq!(
        format!("{}", err),
        "color index 12 out of range (state has 12 channels)"
    );
}
