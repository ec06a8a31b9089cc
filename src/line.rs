//! Digital input line abstraction.

/// Trait for abstracting a digital input pin.
///
/// Implement this for your GPIO hardware so a [`DebouncedButton`](crate::DebouncedButton)
/// can sample it. The button takes ownership of the line, so the line value is
/// the identity of the physical pin.
pub trait InputLine {
    /// Samples the current electrical level; `true` means high.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn is_high(&mut self) -> bool;

    /// Puts the pin into digital input mode.
    ///
    /// Called exactly once when the button is constructed. The default does
    /// nothing, for HALs whose pin types are already configured by type.
    fn configure_as_input(&mut self) {}
}

impl<L: InputLine + ?Sized> InputLine for &mut L {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }

    fn configure_as_input(&mut self) {
        (**self).configure_as_input()
    }
}
