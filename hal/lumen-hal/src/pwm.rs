//! PWM output abstractions
//!
//! Provides a trait for a single PWM channel with a 16-bit comparator,
//! as used for backlight intensity control.

/// PWM duty-cycle output
///
/// The channel is assumed to be free-running with a 16-bit wrap value, so
/// `duty` maps directly onto the hardware comparator: 0 is fully off,
/// 65535 is (almost) fully on.
pub trait PwmOut {
    /// Set the comparator value for this channel
    fn set_duty(&mut self, duty: u16);

    /// Get the last comparator value written
    fn duty(&self) -> u16;
}
