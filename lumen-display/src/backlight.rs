//! Backlight intensity control
//!
//! The backlight LED sits behind a PWM channel. Requested levels are
//! perceived-linear; the driver squares them onto the 16-bit duty range,
//! which tracks the eye's response closely enough to skip a gamma lookup
//! table. 255 squared is 65025, so the mapping fits the comparator
//! without overflow at the top of the range.

use lumen_hal::PwmOut;

/// Backlight driver over one PWM channel
pub struct Backlight<P> {
    pwm: P,
    level: u8,
}

impl<P: PwmOut> Backlight<P> {
    /// Take ownership of the PWM channel, starting dark
    pub fn new(mut pwm: P) -> Self {
        pwm.set_duty(0);
        Self { pwm, level: 0 }
    }

    /// Set intensity: 0 is off, 255 is maximum
    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.pwm.set_duty(level as u16 * level as u16);
    }

    /// Last level requested
    pub fn level(&self) -> u8 {
        self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct MockPwm {
        duty: u16,
    }

    impl PwmOut for MockPwm {
        fn set_duty(&mut self, duty: u16) {
            self.duty = duty;
        }

        fn duty(&self) -> u16 {
            self.duty
        }
    }

    #[test]
    fn test_starts_dark() {
        let bl = Backlight::new(MockPwm { duty: 0x1234 });
        assert_eq!(bl.pwm.duty(), 0);
        assert_eq!(bl.level(), 0);
    }

    #[test]
    fn test_endpoints() {
        let mut bl = Backlight::new(MockPwm::default());

        bl.set_level(0);
        assert_eq!(bl.pwm.duty(), 0);

        bl.set_level(255);
        assert_eq!(bl.pwm.duty(), 65025);
    }

    #[test]
    fn test_default_brightness() {
        let mut bl = Backlight::new(MockPwm::default());
        bl.set_level(128);
        assert_eq!(bl.pwm.duty(), 16384);
        assert_eq!(bl.level(), 128);
    }

    proptest! {
        #[test]
        fn prop_duty_is_square_of_level(level: u8) {
            let mut bl = Backlight::new(MockPwm::default());
            bl.set_level(level);
            prop_assert_eq!(bl.pwm.duty(), level as u16 * level as u16);
        }

        #[test]
        fn prop_mapping_is_monotonic(level in 0u8..255) {
            let mut bl = Backlight::new(MockPwm::default());
            bl.set_level(level);
            let lower = bl.pwm.duty();
            bl.set_level(level + 1);
            prop_assert!(bl.pwm.duty() > lower);
        }
    }
}
