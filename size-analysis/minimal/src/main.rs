#![no_std]
#![no_main]

use core::cell::Cell;
use cortex_m_rt::entry;
use debounced_button::{
    ButtonConfig, DebouncedButton, InputLine, Millis, MillisDuration, Polarity, TimeSource,
};
use panic_halt as _;

// ============================================================================
// Minimal Line Implementation
// ============================================================================

/// Zero-size line implementation for measuring library overhead
pub struct MinimalLine;

impl InputLine for MinimalLine {
    fn is_high(&mut self) -> bool {
        core::hint::black_box(true)
    }
}

// ============================================================================
// Minimal TimeSource Implementation
// ============================================================================

/// Clock that advances one millisecond per read
pub struct MinimalTimeSource {
    ticks: Cell<u32>,
}

impl TimeSource<Millis> for MinimalTimeSource {
    fn now(&self) -> Millis {
        let now = self.ticks.get();
        self.ticks.set(now.wrapping_add(1));
        Millis(now)
    }
}

// ============================================================================
// Polling
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn poll_buttons() {
    let time_source = MinimalTimeSource {
        ticks: Cell::new(0),
    };

    let mut default_button = DebouncedButton::<Millis, _, _>::new(MinimalLine, &time_source);

    let config = ButtonConfig::new()
        .with_debounce_delay(MillisDuration(20))
        .with_polarity(Polarity::ActiveHigh);
    let mut custom_button = DebouncedButton::<Millis, _, _>::with_config(MinimalLine, &time_source, config);

    for _ in 0..100 {
        let _ = default_button.update();
        let _ = custom_button.update();
        core::hint::black_box(default_button.is_pressed_edge());
        core::hint::black_box(custom_button.is_released_edge());
    }

    core::hint::black_box(default_button);
    core::hint::black_box(custom_button);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    poll_buttons();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
