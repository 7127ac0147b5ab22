//! Blocking SPI implementation over embassy-rp
//!
//! The panel link is TX-only; construct the underlying bus with
//! `Spi::new_blocking_txonly` and wrap it here.

use embassy_rp::spi::{Blocking, Error, Instance, Phase, Polarity, Spi};

/// RP2040 blocking SPI bus implementing [`lumen_hal::SpiBus`]
pub struct RpSpiBus<'d, T: Instance> {
    spi: Spi<'d, T, Blocking>,
}

impl<'d, T: Instance> RpSpiBus<'d, T> {
    /// Wrap an already-configured blocking SPI instance
    pub fn new(spi: Spi<'d, T, Blocking>) -> Self {
        Self { spi }
    }
}

impl<T: Instance> lumen_hal::SpiBus for RpSpiBus<'_, T> {
    type Error = Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.spi.blocking_write(data)
    }
}

/// Map a [`lumen_hal::SpiConfig`] onto the embassy-rp SPI config
pub fn spi_config(cfg: &lumen_hal::SpiConfig) -> embassy_rp::spi::Config {
    let mut out = embassy_rp::spi::Config::default();
    out.frequency = cfg.frequency;
    out.polarity = match cfg.polarity {
        lumen_hal::spi::Polarity::IdleLow => Polarity::IdleLow,
        lumen_hal::spi::Polarity::IdleHigh => Polarity::IdleHigh,
    };
    out.phase = match cfg.phase {
        lumen_hal::spi::Phase::CaptureOnFirstTransition => Phase::CaptureOnFirstTransition,
        lumen_hal::spi::Phase::CaptureOnSecondTransition => Phase::CaptureOnSecondTransition,
    };
    out
}
