//! Panel configuration
//!
//! Geometry and timing constants for a specific panel module. Decided
//! once at start-up and handed to the driver constructor; there is no
//! runtime reconfiguration surface.

/// Bytes per pixel in the panel's native format
///
/// The bring-up script programs COLMOD for 16-bit RGB565; flush buffer
/// lengths are validated against this.
pub const BYTES_PER_PIXEL: usize = 2;

/// Panel geometry and timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Horizontal resolution in pixels
    pub hor_res: u16,
    /// Vertical resolution in pixels
    pub ver_res: u16,
    /// First visible column in controller memory
    pub col_offset: u16,
    /// First visible row in controller memory
    pub row_offset: u16,
    /// Settle time after each edge of the reset pulse, in ms
    ///
    /// Datasheet minimum for the ST7735S is 10 ms; shorter risks an
    /// unresponsive controller.
    pub reset_settle_ms: u32,
    /// Wait after sleep-out before the next command, in ms
    ///
    /// The controller powers up internally during this window; commands
    /// issued earlier have undefined effect. Datasheet minimum 120 ms.
    pub wake_delay_ms: u32,
}

impl PanelConfig {
    /// 1.44" 128x128 MD144 module
    ///
    /// The visible area sits 32 rows into the controller's 132x162 frame
    /// memory; columns are not offset on this module.
    pub const fn md144() -> Self {
        Self {
            hor_res: 128,
            ver_res: 128,
            col_offset: 0,
            row_offset: 32,
            reset_settle_ms: 10,
            wake_delay_ms: 120,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::md144()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md144_geometry() {
        let cfg = PanelConfig::default();
        assert_eq!((cfg.hor_res, cfg.ver_res), (128, 128));
        assert_eq!((cfg.col_offset, cfg.row_offset), (0, 32));
        // Datasheet minimums are carried, not shortened
        assert!(cfg.reset_settle_ms >= 10);
        assert!(cfg.wake_delay_ms >= 120);
    }
}
