#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DebouncedButton`**: Debounces one push-button and reports its stable state and edges
//! - **`InputLine`**: Trait to implement for your GPIO input pin
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`Millis`**: Ready-made wrapping 32-bit millisecond instant
//! - **`ButtonConfig`**: Debounce window and polarity
//! - **`Polarity`**: Which electrical level means "pressed" (`ActiveLow` by default)
//! - **`ButtonState`** / **`ButtonEvent`**: Debounced level and the edge committed by a poll
//!
//! The button is polled: call `update()` from your main loop or a periodic task,
//! at a period well below the debounce window.

mod log;

pub mod time;
pub mod line;
pub mod types;
pub mod button;

pub use button::DebouncedButton;
pub use line::InputLine;
pub use time::{Millis, MillisDuration, TimeDuration, TimeInstant, TimeSource};
pub use types::{ButtonConfig, ButtonEvent, ButtonState, DEFAULT_DEBOUNCE_MS, Level, Polarity};
