//! Register command encoding
//!
//! An ST7735S register access is a one-byte opcode followed by zero or
//! more parameter bytes. The opcode always goes out alone in a
//! command-mode transfer; parameters follow as one data-mode transfer.
//! The two phases are never coalesced because the data/command line has
//! to change between them.

use heapless::Vec;

use crate::bus::{BusMode, PanelBus};
use crate::error::DisplayError;

/// Maximum parameter bytes per command
///
/// Sized well past the largest register load in the bring-up script
/// (the 16-byte gamma tables); exceeding it is a caller bug surfaced as
/// [`DisplayError::CommandOverflow`] rather than a silent truncation.
pub const MAX_PARAM_BYTES: usize = 64;

/// ST7735S register opcodes
pub mod opcode {
    /// Sleep out
    pub const SLPOUT: u8 = 0x11;
    /// Display on
    pub const DISPON: u8 = 0x29;
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Row address set
    pub const RASET: u8 = 0x2B;
    /// Memory write
    pub const RAMWR: u8 = 0x2C;
    /// Memory data access control
    pub const MADCTL: u8 = 0x36;
    /// Interface pixel format
    pub const COLMOD: u8 = 0x3A;
    /// Frame rate control, normal mode
    pub const FRMCTR1: u8 = 0xB1;
    /// Frame rate control, idle mode
    pub const FRMCTR2: u8 = 0xB2;
    /// Frame rate control, partial mode
    pub const FRMCTR3: u8 = 0xB3;
    /// Display inversion control
    pub const INVCTR: u8 = 0xB4;
    /// Power control 1
    pub const PWCTR1: u8 = 0xC0;
    /// Power control 2
    pub const PWCTR2: u8 = 0xC1;
    /// Power control 3
    pub const PWCTR3: u8 = 0xC2;
    /// Power control 4
    pub const PWCTR4: u8 = 0xC3;
    /// Power control 5
    pub const PWCTR5: u8 = 0xC4;
    /// VCOM control 1
    pub const VMCTR1: u8 = 0xC5;
    /// Positive gamma correction
    pub const GMCTRP1: u8 = 0xE0;
    /// Negative gamma correction
    pub const GMCTRN1: u8 = 0xE1;
    /// Gate pump clock frequency (vendor register, module init uses it)
    pub const GCV: u8 = 0xFC;
}

/// A register command: opcode plus a bounded parameter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    opcode: u8,
    params: Vec<u8, MAX_PARAM_BYTES>,
}

impl Command {
    /// Build a command, checking the parameter list against the buffer bound
    pub fn new(opcode: u8, params: &[u8]) -> Result<Self, DisplayError> {
        let mut buf = Vec::new();
        buf.extend_from_slice(params)
            .map_err(|_| DisplayError::CommandOverflow)?;
        Ok(Self {
            opcode,
            params: buf,
        })
    }

    /// Opcode-only command
    pub fn bare(opcode: u8) -> Self {
        Self {
            opcode,
            params: Vec::new(),
        }
    }

    /// The register opcode
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// The parameter bytes
    pub fn params(&self) -> &[u8] {
        &self.params
    }

    /// Send this command over the bus
    ///
    /// A command without parameters is exactly one transfer; with
    /// parameters it is exactly two.
    pub fn send<B: PanelBus>(&self, bus: &mut B) -> Result<(), DisplayError> {
        bus.write(&[self.opcode], BusMode::Command)?;

        if self.params.is_empty() {
            return Ok(());
        }

        bus.write(&self.params, BusMode::Data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingBus {
        transfers: std::vec::Vec<(BusMode, std::vec::Vec<u8>)>,
    }

    impl PanelBus for RecordingBus {
        fn write(&mut self, bytes: &[u8], mode: BusMode) -> Result<(), DisplayError> {
            self.transfers.push((mode, bytes.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_bare_command_is_single_transfer() {
        let mut bus = RecordingBus::default();
        Command::bare(opcode::RAMWR).send(&mut bus).unwrap();

        assert_eq!(bus.transfers, vec![(BusMode::Command, vec![0x2C])]);
    }

    #[test]
    fn test_parameters_follow_in_data_mode() {
        let mut bus = RecordingBus::default();
        let cmd = Command::new(opcode::FRMCTR1, &[0x05, 0x3A, 0x3A]).unwrap();
        cmd.send(&mut bus).unwrap();

        assert_eq!(
            bus.transfers,
            vec![
                (BusMode::Command, vec![0xB1]),
                (BusMode::Data, vec![0x05, 0x3A, 0x3A]),
            ]
        );
    }

    #[test]
    fn test_opcode_transfer_is_one_byte() {
        let mut bus = RecordingBus::default();
        let cmd = Command::new(opcode::GMCTRP1, &[0u8; 16]).unwrap();
        cmd.send(&mut bus).unwrap();

        assert_eq!(bus.transfers[0].1.len(), 1);
        assert_eq!(bus.transfers[1].1.len(), 16);
    }

    #[test]
    fn test_params_over_capacity_rejected() {
        let too_long = [0u8; MAX_PARAM_BYTES + 1];
        assert_eq!(
            Command::new(opcode::GMCTRP1, &too_long),
            Err(DisplayError::CommandOverflow)
        );

        // At capacity is still fine
        let at_cap = [0u8; MAX_PARAM_BYTES];
        assert!(Command::new(opcode::GMCTRP1, &at_cap).is_ok());
    }
}
