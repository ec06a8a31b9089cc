//! Core types: electrical levels, polarity, logical state and configuration.

use crate::time::TimeDuration;

/// Default settle time a new level must hold before it is accepted.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// High voltage.
    High,
    /// Low voltage.
    Low,
}

impl Level {
    /// Returns `true` for [`Level::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// Returns `true` for [`Level::Low`].
    #[inline]
    pub fn is_low(self) -> bool {
        self == Level::Low
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }
}

/// Which electrical level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pressed pulls the line low (button to ground with pull-up).
    #[default]
    ActiveLow,

    /// Pressed drives the line high (button to supply with pull-down).
    ActiveHigh,
}

impl Polarity {
    /// Level that corresponds to [`ButtonState::Pressed`].
    #[inline]
    pub fn active_level(self) -> Level {
        match self {
            Polarity::ActiveLow => Level::Low,
            Polarity::ActiveHigh => Level::High,
        }
    }

    /// Level that corresponds to [`ButtonState::Released`].
    #[inline]
    pub fn inactive_level(self) -> Level {
        !self.active_level()
    }

    /// Maps an electrical level to the logical button state.
    #[inline]
    pub fn state_for(self, level: Level) -> ButtonState {
        if level == self.active_level() {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        }
    }
}

/// Debounced logical state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Edge committed by a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button has just become pressed.
    Pressed,
    /// The button has just become released.
    Released,
}

impl From<ButtonState> for ButtonEvent {
    fn from(state: ButtonState) -> Self {
        match state {
            ButtonState::Pressed => ButtonEvent::Pressed,
            ButtonState::Released => ButtonEvent::Released,
        }
    }
}

/// Debounce configuration for a button.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig<D: TimeDuration> {
    /// Minimum time the raw level must hold before it is accepted.
    pub debounce_delay: D,

    /// Electrical convention of the wiring.
    pub polarity: Polarity,
}

impl<D: TimeDuration> ButtonConfig<D> {
    /// Creates a configuration with a 50 ms window and active-low polarity.
    pub fn new() -> Self {
        Self {
            debounce_delay: D::from_millis(DEFAULT_DEBOUNCE_MS),
            polarity: Polarity::ActiveLow,
        }
    }

    /// Replaces the debounce window. Zero disables debouncing.
    pub fn with_debounce_delay(mut self, debounce_delay: D) -> Self {
        self.debounce_delay = debounce_delay;
        self
    }

    /// Replaces the polarity.
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }
}

impl<D: TimeDuration> Default for ButtonConfig<D> {
    fn default() -> Self {
        Self::new()
    }
}
