use embedded_hal::digital::OutputPin;

/// Optional lighting hardware of the board.
///
/// Every method defaults to doing nothing, so a board without backlight, RGB
/// or indicator LED only needs [`NoIndicator`].
pub trait Indicator {
    /// Step the backlight to its next level
    fn backlight_step(&mut self) {}

    /// Step the RGB underglow to its next mode
    fn rgblight_step(&mut self) {}

    /// Turn the indicator LED on or off
    fn set_indicator(&mut self, _on: bool) {}
}

/// Board without any lighting hardware
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIndicator;

impl Indicator for NoIndicator {}

/// Indicator LED wired to a GPIO pin.
///
/// It wraps the low-active and high-active pins, the Preonic's LED on E6 is low-active.
pub struct PinIndicator<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> PinIndicator<P> {
    /// Create a new PinIndicator instance
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }
}

impl<P: OutputPin> Indicator for PinIndicator<P> {
    fn set_indicator(&mut self, on: bool) {
        if on == self.low_active {
            self.pin.set_low().ok();
        } else {
            self.pin.set_high().ok();
        }
    }
}
