//! Lumen - SPI TFT panel firmware
//!
//! Main firmware binary for RP2040 boards carrying the 1.44" 128x128
//! "MD144" (ST7735S) module. Brings the panel out of reset, turns the
//! backlight on, and runs a demo render loop through the same flush
//! path a graphics library would use.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::pwm::Pwm;
use embassy_rp::spi::Spi;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_display::{Backlight, Panel, PanelConfig, SpiPanelBus};
use lumen_hal::SpiConfig;
use lumen_hal_rp2040::delay::RpDelay;
use lumen_hal_rp2040::gpio::RpOutputPin;
use lumen_hal_rp2040::pwm::{backlight_config, RpPwmOut, SliceChannel};
use lumen_hal_rp2040::spi::{spi_config, RpSpiBus};

use crate::display::demo::{Demo, FRAME_BYTES};
use crate::display::UiDisplay;

mod display;
mod tasks;

// Panel wiring, fixed at compile time (module FPC pinout):
//   SPI0  SCK gpio18, MOSI gpio19 (TX-only; the panel has no SDO)
//   CS    gpio17
//   DC    gpio20
//   RST   gpio21
//   BLK   gpio16 (PWM slice 0, channel A)

/// Panel SPI clock
const SPI_FREQUENCY_HZ: u32 = 62_500_000;

/// Backlight level applied at start-up
const DEFAULT_BACKLIGHT: u8 = 128;

/// Demo frame interval
const FRAME_INTERVAL_MS: u64 = 500;

// Full-screen RGB565 frame buffer (must live forever)
static FRAME_BUF: StaticCell<[u8; FRAME_BYTES]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Panel link on SPI0
    let bus_cfg = SpiConfig {
        frequency: SPI_FREQUENCY_HZ,
        ..Default::default()
    };
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config(&bus_cfg));
    info!("spi0 initialized at {} Hz", SPI_FREQUENCY_HZ);

    // Select lines park inactive; reset is held high until the pulse
    let cs = RpOutputPin::new(Output::new(p.PIN_17, Level::High));
    let dc = RpOutputPin::new(Output::new(p.PIN_20, Level::Low));
    let rst = RpOutputPin::new(Output::new(p.PIN_21, Level::High));

    let bus = SpiPanelBus::new(RpSpiBus::new(spi), dc, cs);
    let mut panel = Panel::new(bus, rst, RpDelay, PanelConfig::md144());

    // Bring-up is all-or-nothing: a transport fault here leaves the
    // controller in an unknown state and the screen cannot work
    panel.init().unwrap();
    info!("Panel initialized");

    // Backlight PWM
    let pwm_cfg = backlight_config();
    let pwm = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_cfg.clone());
    let mut backlight = Backlight::new(RpPwmOut::new(pwm, pwm_cfg, SliceChannel::A));
    backlight.set_level(DEFAULT_BACKLIGHT);
    info!("Backlight at level {}", DEFAULT_BACKLIGHT);

    let mut ui = UiDisplay::new(panel);

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    info!("All tasks spawned, firmware running");

    // Demo render loop: one full-screen redraw per frame interval,
    // waiting for flush-done before touching the buffer again - the
    // same dance a real graphics library does
    let frame = FRAME_BUF.init([0u8; FRAME_BYTES]);
    let mut demo = Demo::new();
    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        let area = demo.render(frame);
        ui.flush(area, frame);
        display::FLUSH_DONE.wait().await;

        trace!(
            "frame done at t={} ms, {} dropped",
            tasks::tick::ui_now_ms(),
            ui.dropped_frames()
        );
        ticker.next().await;
    }
}
