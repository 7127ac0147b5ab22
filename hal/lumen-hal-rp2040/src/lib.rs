//! RP2040-specific HAL for the Lumen display firmware
//!
//! This crate provides RP2040 (embassy-rp) implementations of the shared
//! `lumen-hal` traits:
//!
//! - GPIO output pins (chip-select, data/command, panel reset)
//! - Blocking TX-only SPI for the panel link
//! - PWM duty output for the backlight
//! - Busy-wait millisecond delay

#![no_std]

pub mod delay;
pub mod gpio;
pub mod pwm;
pub mod spi;

// Re-export shared traits from lumen-hal for convenience
pub use lumen_hal::{DelayMs, OutputPin, PwmOut, SpiBus};
