//! UI clock tick task
//!
//! The graphics library keeps time in milliseconds; this task advances
//! that clock by one unit every millisecond. It does no display I/O and
//! runs in bounded time, so it can never race a flush in progress.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::{AtomicU32, Ordering};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1;

/// Milliseconds elapsed since the tick task started
static UI_CLOCK_MS: AtomicU32 = AtomicU32::new(0);

/// Current value of the UI clock
pub fn ui_now_ms() -> u32 {
    UI_CLOCK_MS.load(Ordering::Relaxed)
}

/// Tick task - advances the UI clock one unit per interval
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;
        UI_CLOCK_MS.fetch_add(1, Ordering::Relaxed);
    }
}
