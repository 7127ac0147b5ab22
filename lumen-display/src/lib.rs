//! ST7735S TFT panel driver
//!
//! Drives the SPI-connected ST7735S controller on the 1.44" 128x128
//! "MD144" module: bring-up from reset, register command encoding, the
//! addressing-window/flush pipeline, and the PWM backlight mapping.
//!
//! The driver is generic over the `lumen-hal` traits, so the same code
//! runs on any chip with a blocking SPI and three output pins - and
//! against mocks in the unit tests on the host.
//!
//! # Bus protocol
//!
//! The controller speaks a one-directional SPI dialect with a
//! data/command side channel: a register access is the opcode byte alone
//! with D/C low, then any parameter bytes with D/C high. Pixel data for
//! a previously-programmed address window is a plain data-mode stream.
//! There is no acknowledgement path; correctness rests on sending the
//! right bytes with the right timing.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod backlight;
pub mod bus;
pub mod command;
pub mod config;
pub mod error;
mod init;
pub mod panel;
pub mod window;

// Re-export the driver surface at crate root
pub use backlight::Backlight;
pub use bus::{BusMode, PanelBus, SpiPanelBus};
pub use command::{Command, MAX_PARAM_BYTES};
pub use config::{PanelConfig, BYTES_PER_PIXEL};
pub use error::DisplayError;
pub use panel::Panel;
pub use window::Rect;
