//! Display driver errors

/// Errors that can occur while driving the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer failed
    ///
    /// Fatal during bring-up (the controller is left half-configured);
    /// during a flush the frame is dropped and the next flush retried.
    Transport,
    /// Command parameter list exceeds the transmit buffer
    CommandOverflow,
    /// Rectangle inverted or outside the panel resolution
    InvalidWindow,
    /// Pixel buffer length does not match the rectangle
    SizeMismatch,
}
