//! Busy-wait delay implementation over embassy-time

use embassy_time::{block_for, Duration};

/// Millisecond busy-wait implementing [`lumen_hal::DelayMs`]
///
/// The panel bring-up runs before the executor has anything else to do,
/// so a blocking wait is fine there; do not use this from latency-critical
/// tasks.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpDelay;

impl lumen_hal::DelayMs for RpDelay {
    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
