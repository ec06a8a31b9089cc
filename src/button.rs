//! Polled push-button debouncer.
//!
//! Provides [`DebouncedButton`], which samples an [`InputLine`] once per
//! [`update`](DebouncedButton::update) call and only accepts a new level after
//! it has held steady for the configured debounce window. Contact bounce keeps
//! restarting the settle timer, so the stable state commits once the line has
//! been quiet for the full window.

use crate::line::InputLine;
use crate::log;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{ButtonConfig, ButtonEvent, ButtonState, Level, Polarity};

/// Debounces a single push-button wired to a digital input.
///
/// Call [`update`](Self::update) from your polling loop at a period well below
/// the debounce window (about 10 ms or less for the default 50 ms), then read
/// the state with the query methods. Queries are pure and return the same value
/// until the next `update`.
///
/// Not synchronized: drive it from a single context, or serialize access
/// externally.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `L` - Input line implementation type
/// * `T` - Time source implementation type
pub struct DebouncedButton<'t, I: TimeInstant, L: InputLine, T: TimeSource<I>> {
    line: L,
    time_source: &'t T,
    config: ButtonConfig<I::Duration>,
    raw_level: Level,
    stable_level: Level,
    last_transition: Option<I>,
    changed: bool,
}

impl<'t, I: TimeInstant, L: InputLine, T: TimeSource<I>> DebouncedButton<'t, I, L, T> {
    /// Creates a released button with a 50 ms window and active-low polarity.
    ///
    /// Configures the line as an input.
    pub fn new(line: L, time_source: &'t T) -> Self {
        Self::with_config(line, time_source, ButtonConfig::new())
    }

    /// Creates a released button with the given configuration.
    ///
    /// Configures the line as an input. Both the raw and stable levels start at
    /// the polarity's inactive level.
    pub fn with_config(mut line: L, time_source: &'t T, config: ButtonConfig<I::Duration>) -> Self {
        line.configure_as_input();

        let idle = config.polarity.inactive_level();
        Self {
            line,
            time_source,
            config,
            raw_level: idle,
            stable_level: idle,
            last_transition: None,
            changed: false,
        }
    }

    /// Samples the line and advances the debounce state machine.
    ///
    /// Must be called once per polling cycle. Returns the edge committed by
    /// this call, if any; the same information is available afterwards through
    /// [`is_pressed_edge`](Self::is_pressed_edge) and
    /// [`is_released_edge`](Self::is_released_edge).
    pub fn update(&mut self) -> Option<ButtonEvent> {
        let reading = Level::from(self.line.is_high());
        let now = self.time_source.now();
        self.changed = false;

        if reading != self.raw_level {
            log::trace!("raw level changed to {}, settle timer restarted", reading);
            self.last_transition = Some(now);
        }

        if let Some(since) = self.last_transition {
            let settled = now.duration_since(since) >= self.config.debounce_delay;
            if settled && reading != self.stable_level {
                self.stable_level = reading;
                self.changed = true;
                log::debug!("button {}", self.state());
            }
        }

        self.raw_level = reading;
        self.event()
    }

    /// Returns `true` if the debounced state is pressed.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.state() == ButtonState::Pressed
    }

    /// Returns `true` if the debounced state is released.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.state() == ButtonState::Released
    }

    /// Returns `true` only for the `update` call that committed a press.
    #[inline]
    pub fn is_pressed_edge(&self) -> bool {
        self.is_pressed() && self.changed
    }

    /// Returns `true` only for the `update` call that committed a release.
    #[inline]
    pub fn is_released_edge(&self) -> bool {
        self.is_released() && self.changed
    }

    /// Returns the debounced logical state.
    #[inline]
    pub fn state(&self) -> ButtonState {
        self.config.polarity.state_for(self.stable_level)
    }

    /// Returns the edge committed by the most recent `update`, if any.
    #[inline]
    pub fn event(&self) -> Option<ButtonEvent> {
        self.changed.then(|| self.state().into())
    }

    /// Returns `true` if the most recent `update` flipped the stable state.
    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Returns the debounced electrical level.
    #[inline]
    pub fn stable_level(&self) -> Level {
        self.stable_level
    }

    /// Returns the level sampled by the most recent `update`.
    #[inline]
    pub fn raw_level(&self) -> Level {
        self.raw_level
    }

    /// Returns the debounce window.
    #[inline]
    pub fn debounce_delay(&self) -> I::Duration {
        self.config.debounce_delay
    }

    /// Returns the configured polarity.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.config.polarity
    }

    /// Returns a reference to the underlying line.
    #[inline]
    pub fn line(&self) -> &L {
        &self.line
    }

    /// Consumes the button and returns the underlying line.
    pub fn release(self) -> L {
        self.line
    }
}
