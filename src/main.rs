//! Compass watch firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Drives a GC9A01 240x240 round display with the compass, image viewer and
//! logs pages.
//!
//! # Architecture
//!
//! - Demo sensor task: publishes heading + temperature samples through a `Watch`
//! - Main task: polls buttons, applies the latest sample, renders the current
//!   page into a RAM framebuffer and pushes the frame to the panel
//!
//! # Button Controls
//!
//! - **Y**: Cycle through pages (Compass → Image viewer → Logs → Compass)
//! - **A**: Advance the image rotation by 10 degrees (Image viewer only)
//! - **B**: Reset the image rotation (Image viewer only)
//!
//! # Hardware Variant
//!
//! Build with `--features firmware,breadboard` for the breadboard prototype,
//! whose north marker turns the other way.

#![no_std]
#![no_main]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
mod display;

use compass_watch::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use compass_watch::demo::{SensorSample, demo_sample};
use compass_watch::input::{ButtonLevels, Buttons, process_buttons};
use compass_watch::log_buffer::set_log_clock_ms;
use compass_watch::{WatchApp, WatchConfig, log_info, log_warn};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::Spi;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::watch::Watch;
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::framebuffer::{Framebuffer, buffer_size};
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::{BigEndian, RawU16};
use embedded_graphics::prelude::*;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::display::{display_spi_config, init_display};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"compass-watch"),
    embassy_rp::binary_info::rp_program_description!(c"Compass and image viewer on a GC9A01 round display"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Full-screen RGB565 framebuffer, big-endian as the panel expects.
type WatchFramebuffer = Framebuffer<
    Rgb565,
    RawU16,
    BigEndian,
    { SCREEN_WIDTH as usize },
    { SCREEN_HEIGHT as usize },
    { buffer_size::<Rgb565>(SCREEN_WIDTH as usize, SCREEN_HEIGHT as usize) },
>;

/// Target frame period (~30 FPS). The spin animation is time-based, so a
/// slower frame only drops intermediate angles.
const FRAME_PERIOD: Duration = Duration::from_millis(33);

/// Sensor sample period.
const SAMPLE_PERIOD: Duration = Duration::from_millis(100);

// =============================================================================
// Demo Sensor Samples (generated by separate async task)
// =============================================================================

/// Watch channel carrying the latest sensor sample.
/// The demo task writes, the render task reads.
static SENSOR_SAMPLES: Watch<CriticalSectionRawMutex, SensorSample, 1> = Watch::new();

/// Demo sensor task - stands in for the magnetometer and temperature sensor.
#[embassy_executor::task]
async fn demo_sensor_task(
    sender: embassy_sync::watch::DynSender<'static, SensorSample>,
    start_time: Instant,
) {
    info!("Demo sensor task started");

    loop {
        let elapsed_ms = start_time.elapsed().as_millis() as u32;
        // Overwrites the previous sample if the render loop has not read it
        sender.send(demo_sample(elapsed_ms));
        Timer::after(SAMPLE_PERIOD).await;
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Compass watch starting...");

    let p = embassy_rp::init(Default::default());

    // Initialize display pins
    let cs = Output::new(p.PIN_9, Level::High);
    let dc = Output::new(p.PIN_8, Level::Low);
    let rst = Output::new(p.PIN_12, Level::High);
    let mut _backlight = Output::new(p.PIN_25, Level::High); // Turn on backlight

    // Blocking TX-only SPI, the panel has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, display_spi_config());

    static SPI_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();
    let mut display = init_display(spi, cs, dc, rst, SPI_BUFFER.init([0; 512]));
    log_info!("Display initialized");

    static FRAMEBUFFER: StaticCell<WatchFramebuffer> = StaticCell::new();
    let framebuffer = FRAMEBUFFER.init_with(Framebuffer::new);

    // Initialize buttons (active-low with internal pull-up)
    let btn_a = Input::new(p.PIN_2, Pull::Up);
    let btn_b = Input::new(p.PIN_3, Pull::Up);
    let btn_y = Input::new(p.PIN_4, Pull::Up);
    let mut buttons = Buttons::default();
    info!("Buttons initialized!");

    let config = WatchConfig::from_features();
    info!("Hardware platform: {}", config.platform);
    let mut app = WatchApp::new(config);
    if app.start().is_err() {
        log_warn!("Initial page failed to show");
    }

    let start_time = Instant::now();
    let mut sample_receiver = SENSOR_SAMPLES.dyn_receiver().expect("sample receiver");
    spawner
        .spawn(demo_sensor_task(SENSOR_SAMPLES.dyn_sender(), start_time))
        .expect("spawn demo sensor task");

    log_info!("Main loop starting");

    loop {
        let frame_start = Instant::now();
        let now_ms = start_time.elapsed().as_millis() as u32;
        set_log_clock_ms(now_ms);

        let levels = ButtonLevels {
            a: btn_a.is_low(),
            b: btn_b.is_low(),
            y: btn_y.is_low(),
        };
        let input = process_buttons(&mut buttons, levels, app.page(), now_ms);
        if let Err(e) = app.apply(&input) {
            log_warn!("Page input failed: {}", e);
        }

        if let Some(sample) = sample_receiver.try_changed() {
            app.on_sample(sample);
        }
        app.tick(now_ms);

        app.draw(framebuffer);
        Image::new(&framebuffer.as_image(), Point::zero())
            .draw(&mut display)
            .ok();

        Timer::at(frame_start + FRAME_PERIOD).await;
    }
}
