//! Panel driver: bring-up, addressing, flush
//!
//! All display I/O runs on one logical thread of execution; the driver
//! owns the bus and the reset line for the process lifetime and blocks
//! the caller for the duration of each operation.

use lumen_hal::{DelayMs, OutputPin};

use crate::bus::{BusMode, PanelBus};
use crate::command::{opcode, Command};
use crate::config::{PanelConfig, BYTES_PER_PIXEL};
use crate::error::DisplayError;
use crate::init::CONFIG_REGISTERS;
use crate::window::{encode_bounds, Rect};

/// Extra attempts for one flush before the frame is dropped
///
/// The window-plus-write sequence is idempotent per rectangle, so a
/// repeated flush cannot corrupt panel memory.
const FLUSH_RETRIES: u8 = 2;

/// ST7735S panel driver
///
/// Generic over the bus transport, the reset line, and a delay source so
/// it can run against hardware or against mocks.
pub struct Panel<B, RST, D> {
    bus: B,
    reset: RST,
    delay: D,
    config: PanelConfig,
}

impl<B, RST, D> Panel<B, RST, D>
where
    B: PanelBus,
    RST: OutputPin,
    D: DelayMs,
{
    /// Take ownership of the bus and reset line
    ///
    /// The panel is not usable until [`Panel::init`] has run.
    pub fn new(bus: B, reset: RST, delay: D, config: PanelConfig) -> Self {
        Self {
            bus,
            reset,
            delay,
            config,
        }
    }

    /// The configuration this driver was built with
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Send one register write
    ///
    /// Opcode alone in command mode; parameters, if any, as a single
    /// data-mode transfer.
    pub fn write_register(&mut self, op: u8, params: &[u8]) -> Result<(), DisplayError> {
        Command::new(op, params)?.send(&mut self.bus)
    }

    /// Hardware reset pulse: high, low, high, with a settle delay after
    /// each edge
    fn reset_pulse(&mut self) {
        self.reset.set_high();
        self.delay.delay_ms(self.config.reset_settle_ms);
        self.reset.set_low();
        self.delay.delay_ms(self.config.reset_settle_ms);
        self.reset.set_high();
        self.delay.delay_ms(self.config.reset_settle_ms);
    }

    /// Bring the controller from reset to an active, drawable state
    ///
    /// Runs exactly once at start-up: reset pulse, sleep-out plus its
    /// power-up wait, the module register loads, then display-on. Frame
    /// memory is undefined until the first flush. A transport fault here
    /// leaves the controller half-configured; the only recovery is
    /// calling `init` again from the top.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.reset_pulse();

        self.write_register(opcode::SLPOUT, &[])?;
        self.delay.delay_ms(self.config.wake_delay_ms);

        for &(op, params) in CONFIG_REGISTERS {
            self.write_register(op, params)?;
        }

        self.write_register(opcode::DISPON, &[])
    }

    fn check_window(&self, rect: &Rect) -> Result<(), DisplayError> {
        if rect.x1 > rect.x2 || rect.y1 > rect.y2 {
            return Err(DisplayError::InvalidWindow);
        }
        if rect.x2 >= self.config.hor_res || rect.y2 >= self.config.ver_res {
            return Err(DisplayError::InvalidWindow);
        }
        Ok(())
    }

    /// Program the address window for `rect` and issue write-start; the
    /// next data transfer lands in that window
    fn set_window(&mut self, rect: &Rect) -> Result<(), DisplayError> {
        let cols = encode_bounds(
            rect.x1 + self.config.col_offset,
            rect.x2 + self.config.col_offset,
        );
        self.write_register(opcode::CASET, &cols)?;

        // The visible region starts row_offset rows into frame memory
        let rows = encode_bounds(
            rect.y1 + self.config.row_offset,
            rect.y2 + self.config.row_offset,
        );
        self.write_register(opcode::RASET, &rows)?;

        self.write_register(opcode::RAMWR, &[])
    }

    /// Copy one rectangle of RGB565 pixels into panel memory
    ///
    /// `pixels` must be scanline-major and exactly the rectangle's byte
    /// size. The pixel stream continues the write-start transaction as a
    /// single data-mode transfer with no opcode framing. On a transport
    /// fault the whole rectangle is retried a bounded number of times;
    /// past the budget the frame is dropped and the error returned - the
    /// caller may simply flush again later.
    pub fn flush(&mut self, rect: &Rect, pixels: &[u8]) -> Result<(), DisplayError> {
        self.check_window(rect)?;
        if pixels.len() != rect.pixel_count() * BYTES_PER_PIXEL {
            return Err(DisplayError::SizeMismatch);
        }

        let mut result = Ok(());
        for _ in 0..=FLUSH_RETRIES {
            result = self.try_flush(rect, pixels);
            if result.is_ok() {
                return Ok(());
            }
        }
        result
    }

    fn try_flush(&mut self, rect: &Rect, pixels: &[u8]) -> Result<(), DisplayError> {
        self.set_window(rect)?;
        self.bus.write(pixels, BusMode::Data)
    }
}
