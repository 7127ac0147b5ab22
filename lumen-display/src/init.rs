//! Panel bring-up register loads
//!
//! These are module-specific constants from the MD144 reference init
//! code and must go out byte-for-byte for this panel revision. The
//! script is straight-line with no branching or retry - the bus has no
//! acknowledgement path in this mode, so a wrong byte is
//! indistinguishable from success until the image looks wrong.

use crate::command::opcode;

/// Register loads between sleep-out and display-on, in issue order
pub(crate) const CONFIG_REGISTERS: &[(u8, &[u8])] = &[
    // Frame rate: normal / idle / partial mode
    (opcode::FRMCTR1, &[0x05, 0x3A, 0x3A]),
    (opcode::FRMCTR2, &[0x05, 0x3A, 0x3A]),
    (opcode::FRMCTR3, &[0x05, 0x3A, 0x3A, 0x05, 0x3A, 0x3A]),
    // Dot inversion in all modes
    (opcode::INVCTR, &[0x03]),
    // Power rails
    (opcode::PWCTR1, &[0x62, 0x02, 0x04]),
    (opcode::PWCTR2, &[0xC0]),
    (opcode::PWCTR3, &[0x0D, 0x00]),
    (opcode::PWCTR4, &[0x8D, 0x6A]),
    (opcode::PWCTR5, &[0x8D, 0xEE]),
    // VCOM
    (opcode::VMCTR1, &[0x12]),
    // Gamma curves, positive then negative polarity
    (
        opcode::GMCTRP1,
        &[
            0x03, 0x1B, 0x12, 0x11, 0x3F, 0x3A, 0x32, 0x34, 0x2F, 0x2B, 0x30, 0x3A, 0x00, 0x01,
            0x02, 0x05,
        ],
    ),
    (
        opcode::GMCTRN1,
        &[
            0x03, 0x1B, 0x12, 0x11, 0x32, 0x2F, 0x2A, 0x2F, 0x2E, 0x2C, 0x35, 0x3F, 0x00, 0x00,
            0x01, 0x05,
        ],
    ),
    // Gate pump clock
    (opcode::GCV, &[0x8C]),
    // 16-bit RGB565 pixels
    (opcode::COLMOD, &[0x05]),
    // Scan order: flip rows and columns, BGR color filter
    (opcode::MADCTL, &[0xC8]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MAX_PARAM_BYTES;
    use crate::config::BYTES_PER_PIXEL;

    #[test]
    fn test_every_load_fits_the_command_buffer() {
        for (op, params) in CONFIG_REGISTERS {
            assert!(
                params.len() <= MAX_PARAM_BYTES,
                "register {:#04x} overflows the command buffer",
                op
            );
        }
    }

    #[test]
    fn test_gamma_tables_are_full_length() {
        for (op, params) in CONFIG_REGISTERS {
            if *op == opcode::GMCTRP1 || *op == opcode::GMCTRN1 {
                assert_eq!(params.len(), 16);
            }
        }
    }

    #[test]
    fn test_colmod_matches_bytes_per_pixel() {
        let colmod = CONFIG_REGISTERS
            .iter()
            .find(|(op, _)| *op == opcode::COLMOD)
            .expect("script must program the pixel format");
        // 0x05 selects 16 bits/pixel
        assert_eq!(colmod.1, &[0x05]);
        assert_eq!(BYTES_PER_PIXEL, 2);
    }

    #[test]
    fn test_no_addressing_or_power_state_opcodes_in_table() {
        // Sleep-out, display-on and the window/write commands are issued
        // by the driver itself, with their delays; the table is register
        // loads only.
        for (op, _) in CONFIG_REGISTERS {
            assert!(*op != opcode::SLPOUT && *op != opcode::DISPON);
            assert!(*op != opcode::CASET && *op != opcode::RASET && *op != opcode::RAMWR);
        }
    }
}
