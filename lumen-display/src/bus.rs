//! Panel bus transport
//!
//! One transport call is one chip-select frame: the data/command line is
//! set for the whole transfer, chip-select drops, the bytes are clocked
//! out, chip-select rises again. Calls may follow each other back-to-back
//! with no inter-call gap requirement.

use lumen_hal::{OutputPin, SpiBus};

use crate::error::DisplayError;

/// Whether a transfer carries an opcode or parameter/pixel data
///
/// Drives the controller's data/command select line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusMode {
    /// D/C low: the byte is a register opcode
    Command,
    /// D/C high: the bytes are parameters or pixel data
    Data,
}

/// Byte transport to the panel controller
///
/// Implementations must gate each transfer with chip-select and hold the
/// data/command line at `mode` for its whole duration.
pub trait PanelBus {
    /// Blocking transfer of `bytes` in the given mode
    ///
    /// A failed transfer surfaces as [`DisplayError::Transport`]; the
    /// panel gives no acknowledgement, so this only covers faults the
    /// bus peripheral itself can detect.
    fn write(&mut self, bytes: &[u8], mode: BusMode) -> Result<(), DisplayError>;
}

/// SPI implementation of [`PanelBus`]
///
/// Owns the data/command and chip-select lines alongside the bus for the
/// process lifetime; nothing else may drive them.
pub struct SpiPanelBus<SPI, DC, CS> {
    spi: SPI,
    dc: DC,
    cs: CS,
}

impl<SPI, DC, CS> SpiPanelBus<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Take ownership of the bus and its select lines
    ///
    /// Chip-select is parked high (deselected) immediately.
    pub fn new(spi: SPI, dc: DC, mut cs: CS) -> Self {
        cs.set_high();
        Self { spi, dc, cs }
    }
}

impl<SPI, DC, CS> PanelBus for SpiPanelBus<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn write(&mut self, bytes: &[u8], mode: BusMode) -> Result<(), DisplayError> {
        self.dc.set_state(matches!(mode, BusMode::Data));

        self.cs.set_low();
        let result = self.spi.write(bytes);
        // Deselect even on a failed transfer so the next frame starts clean
        self.cs.set_high();

        result.map_err(|_| DisplayError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    struct MockSpi {
        written: Vec<Vec<u8>>,
        fail: bool,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.written.push(data.to_vec());
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockPin {
        high: bool,
        edges: usize,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    fn bus(fail: bool) -> SpiPanelBus<MockSpi, MockPin, MockPin> {
        SpiPanelBus::new(
            MockSpi {
                written: Vec::new(),
                fail,
            },
            MockPin::default(),
            MockPin::default(),
        )
    }

    #[test]
    fn test_command_mode_drives_dc_low() {
        let mut b = bus(false);
        b.write(&[0x11], BusMode::Command).unwrap();
        assert!(b.dc.is_set_low());
        assert_eq!(b.spi.written, vec![vec![0x11]]);
    }

    #[test]
    fn test_data_mode_drives_dc_high() {
        let mut b = bus(false);
        b.write(&[1, 2, 3], BusMode::Data).unwrap();
        assert!(b.dc.is_set_high());
        assert_eq!(b.spi.written, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_chip_select_released_between_frames() {
        let mut b = bus(false);
        assert!(b.cs.is_set_high()); // parked deselected
        b.write(&[0x2C], BusMode::Command).unwrap();
        b.write(&[0xAB], BusMode::Data).unwrap();
        assert!(b.cs.is_set_high());
        // construction park + (low, high) per transfer
        assert_eq!(b.cs.edges, 5);
    }

    #[test]
    fn test_fault_maps_to_transport_and_deselects() {
        let mut b = bus(true);
        let result = b.write(&[0x2C], BusMode::Command);
        assert_eq!(result, Err(DisplayError::Transport));
        assert!(b.cs.is_set_high());
    }
}
