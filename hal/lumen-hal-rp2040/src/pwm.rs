//! PWM output implementation over embassy-rp
//!
//! The RP2040 PWM slices are free-running 16-bit counters; the backlight
//! channel runs with a full 0xFFFF wrap so the comparator value maps
//! directly onto the `lumen_hal::PwmOut` duty range.

use embassy_rp::pwm::{Config, Pwm};
use fixed::traits::ToFixed;

/// Which comparator of a PWM slice the output pin is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SliceChannel {
    /// Channel A (even GPIO of the slice pair)
    A,
    /// Channel B (odd GPIO of the slice pair)
    B,
}

/// RP2040 PWM channel implementing [`lumen_hal::PwmOut`]
pub struct RpPwmOut<'d> {
    pwm: Pwm<'d>,
    config: Config,
    channel: SliceChannel,
}

impl<'d> RpPwmOut<'d> {
    /// Wrap a configured PWM slice
    ///
    /// `config` must be the configuration the slice was created with, so
    /// duty updates do not disturb the divider or wrap value.
    pub fn new(pwm: Pwm<'d>, config: Config, channel: SliceChannel) -> Self {
        Self {
            pwm,
            config,
            channel,
        }
    }
}

impl lumen_hal::PwmOut for RpPwmOut<'_> {
    fn set_duty(&mut self, duty: u16) {
        match self.channel {
            SliceChannel::A => self.config.compare_a = duty,
            SliceChannel::B => self.config.compare_b = duty,
        }
        self.pwm.set_config(&self.config);
    }

    fn duty(&self) -> u16 {
        match self.channel {
            SliceChannel::A => self.config.compare_a,
            SliceChannel::B => self.config.compare_b,
        }
    }
}

/// Slice configuration for the backlight channel
///
/// Full 16-bit wrap with a /4 input divider, matching the panel module's
/// reference design (flicker-free at any system clock the firmware runs).
pub fn backlight_config() -> Config {
    let mut config = Config::default();
    config.divider = 4u8.to_fixed();
    config.top = 0xFFFF;
    config
}
