//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the display driver
//! is written against, so the same driver code can run on different chips
//! (or against mocks on the host). Chip-specific crates implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Driver / firmware (lumen-display, ...) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal-rp2040 (embassy-rp backend)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (chip-select, data/command, reset)
//! - [`spi::SpiBus`] - Write-only SPI master
//! - [`pwm::PwmOut`] - PWM duty-cycle output (backlight)
//! - [`delay::DelayMs`] - Blocking millisecond delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;
pub mod pwm;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::DelayMs;
pub use gpio::OutputPin;
pub use pwm::PwmOut;
pub use spi::{SpiBus, SpiConfig};
