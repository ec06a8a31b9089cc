//! Shared test infrastructure for debounced-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use debounced_button::{InputLine, Level, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input Line
// ============================================================================

/// Mock input line whose level is set from the test while the button holds a
/// shared reference to it. Records every sample taken.
pub struct MockLine {
    high: Cell<bool>,
    configure_calls: Cell<u32>,
    sample_history: RefCell<heapless::Vec<Level, 64>>,
}

impl MockLine {
    /// Creates an idle line (high, as with a pull-up)
    pub fn new() -> Self {
        Self::with_level(Level::High)
    }

    pub fn with_level(level: Level) -> Self {
        Self {
            high: Cell::new(level.is_high()),
            configure_calls: Cell::new(0),
            sample_history: RefCell::new(heapless::Vec::new()),
        }
    }

    pub fn set_level(&self, level: Level) {
        self.high.set(level.is_high());
    }

    pub fn configure_calls(&self) -> u32 {
        self.configure_calls.get()
    }

    pub fn sample_count(&self) -> usize {
        self.sample_history.borrow().len()
    }

    pub fn sample_history(&self) -> heapless::Vec<Level, 64> {
        self.sample_history.borrow().clone()
    }
}

impl InputLine for &MockLine {
    fn is_high(&mut self) -> bool {
        let high = self.high.get();
        let _ = self.sample_history.borrow_mut().push(Level::from(high));
        high
    }

    fn configure_as_input(&mut self) {
        self.configure_calls.set(self.configure_calls.get() + 1);
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Sets the line level and clock, then polls once
pub fn poll_at<L: InputLine>(
    button: &mut debounced_button::DebouncedButton<'_, TestInstant, L, MockTimeSource>,
    line: &MockLine,
    timer: &MockTimeSource,
    time_ms: u64,
    level: Level,
) -> Option<debounced_button::ButtonEvent> {
    line.set_level(level);
    timer.set_time(TestInstant(time_ms));
    button.update()
}
