//! Demo render loop
//!
//! Stand-in for a real graphics library: paints full-screen RGB565
//! fills from a small palette, one redraw per frame, through the same
//! flush callback a library would use.

use lumen_display::{Rect, BYTES_PER_PIXEL};

use super::{HOR_RES, VER_RES};

/// Bytes in one full-screen frame
pub const FRAME_BYTES: usize = HOR_RES as usize * VER_RES as usize * BYTES_PER_PIXEL;

/// RGB565 fill colors cycled by the demo: red, green, blue, white
const PALETTE: [u16; 4] = [0xF800, 0x07E0, 0x001F, 0xFFFF];

/// Full-screen color-cycle renderer
pub struct Demo {
    frame: usize,
}

impl Demo {
    /// Start at the first palette entry
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Paint the next frame into `buffer`, returning the dirty rectangle
    ///
    /// Pixels go out big-endian, high color byte first, as the panel
    /// expects them on the wire.
    pub fn render(&mut self, buffer: &mut [u8]) -> Rect {
        let color = PALETTE[self.frame % PALETTE.len()];
        self.frame = self.frame.wrapping_add(1);

        let [hi, lo] = color.to_be_bytes();
        for px in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            px[0] = hi;
            px[1] = lo;
        }

        Rect::new(0, 0, HOR_RES - 1, VER_RES - 1)
    }
}
