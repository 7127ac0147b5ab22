//! GPIO output implementation over embassy-rp

use embassy_rp::gpio::Output;

/// RP2040 output pin implementing [`lumen_hal::OutputPin`]
pub struct RpOutputPin<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    /// Wrap an already-configured embassy output pin
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl lumen_hal::OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
