//! Blocking delay abstractions
//!
//! The panel bring-up sequence needs millisecond-granularity settle delays
//! (reset pulse, sleep-out). Implemented by chip-specific HALs; mocked in
//! driver tests to assert the delays were requested.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Busy-wait for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}
