//! Shared test infrastructure for room-light-state integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use room_light_state::{AnimationType, RgbwColor, TimeDuration, TypeRegistry};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

// ============================================================================
// Mock Animation Context
// ============================================================================

/// Per-tick context that records which update routine ran and how often
pub struct RecordingContext {
    calls: Cell<u32>,
    last_routine: Cell<Option<&'static str>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
            last_routine: Cell::new(None),
        }
    }

    pub fn record(&self, routine: &'static str) {
        self.calls.set(self.calls.get() + 1);
        self.last_routine.set(Some(routine));
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }

    pub fn last_routine(&self) -> Option<&'static str> {
        self.last_routine.get()
    }
}

pub fn solid_update(context: &RecordingContext) {
    context.record("solid");
}

pub fn rainbow_update(context: &RecordingContext) {
    context.record("rainbow");
}

pub type TestType = AnimationType<RecordingContext, 32, 128>;
pub type TestRegistry = TypeRegistry<RecordingContext, 32, 128, 4>;

// ============================================================================
// Test Colors
// ============================================================================

pub const RED: RgbwColor = RgbwColor::new(255, 0, 0, 0);
pub const WARM_WHITE: RgbwColor = RgbwColor::new(0, 0, 0, 255);
