//! Graphics-library glue
//!
//! The graphics library hands the firmware one dirty rectangle and one
//! pixel buffer per redraw and expects a "flush done" notification
//! before it reuses or frees that buffer. [`UiDisplay`] is that bridge:
//! it owns the panel driver, pushes each redraw through the flush
//! pipeline, and fires [`FLUSH_DONE`].
//!
//! The contract is cooperative and non-reentrant: the library issues one
//! redraw at a time and waits for completion, so at most one flush is
//! ever in flight and the blocking transport cannot be re-entered.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use lumen_display::{DisplayError, Panel, PanelBus, Rect};
use lumen_hal::{DelayMs, OutputPin};

pub mod demo;

/// Horizontal resolution registered with the graphics library
pub const HOR_RES: u16 = 128;

/// Vertical resolution registered with the graphics library
pub const VER_RES: u16 = 128;

/// Raised when a redraw has been copied out and the caller's pixel
/// buffer may be reused
pub static FLUSH_DONE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Redraw sink handed to the graphics library
pub struct UiDisplay<B, RST, D> {
    panel: Panel<B, RST, D>,
    dropped_frames: u32,
}

impl<B, RST, D> UiDisplay<B, RST, D>
where
    B: PanelBus,
    RST: OutputPin,
    D: DelayMs,
{
    /// Wrap an initialized panel
    pub fn new(panel: Panel<B, RST, D>) -> Self {
        Self {
            panel,
            dropped_frames: 0,
        }
    }

    /// Redraw callback: push one dirty rectangle to the panel
    ///
    /// The transport is blocking, so completion is signalled right on
    /// return and the library may reuse `pixels` immediately. A frame
    /// lost to a transport fault is logged and skipped - the rectangle
    /// write is idempotent and the next redraw covers it. Other errors
    /// are contract bugs in the caller (wrong buffer size, bad area) and
    /// are logged the same way rather than wedging the render loop.
    pub fn flush(&mut self, area: Rect, pixels: &[u8]) {
        match self.panel.flush(&area, pixels) {
            Ok(()) => {
                trace!("flushed ({},{})..({},{})", area.x1, area.y1, area.x2, area.y2);
            }
            Err(DisplayError::Transport) => {
                self.dropped_frames += 1;
                warn!("frame dropped on transport fault ({} so far)", self.dropped_frames);
            }
            Err(e) => {
                warn!("redraw rejected: {:?}", e);
            }
        }

        // The buffer is ours no longer past this point
        FLUSH_DONE.signal(());
    }

    /// Frames lost to transport faults since start-up
    pub fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }
}
