//! Compass watch simulator for desktop platforms.
//!
//! Runs the watch library's pages in an embedded-graphics-simulator window.
//!
//! # Controls
//!
//! - **Y** / **Tab**: Cycle through pages (Compass → Image viewer → Logs)
//! - **A** / **Space**: Advance the image rotation (Image viewer only)
//! - **B** / **R**: Reset the image rotation (Image viewer only)
//! - **Left** / **Right**: Turn the heading by hand (stops the demo heading)
//! - **D**: Resume the demo heading
//! - Mouse click on the emblem or the round button: advance the image rotation

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod timing;

use std::thread;
use std::time::Instant;

use clap::Parser;
use compass_watch::colors::BLACK;
use compass_watch::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use compass_watch::demo::{SensorSample, demo_sample};
use compass_watch::geometry::normalize_heading;
use compass_watch::input::InputResult;
use compass_watch::log_buffer::set_log_clock_ms;
use compass_watch::{HardwarePlatform, Page, WatchApp, WatchConfig, log_info, log_warn};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};

use crate::timing::{FRAME_TIME, HEADING_NUDGE, SAMPLE_PERIOD};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Simulate the breadboard prototype (north marker turns clockwise)
    #[arg(short, long)]
    breadboard: bool,

    /// Window pixel scale
    #[arg(short, long, default_value_t = 2)]
    scale: u32,
}

fn main() {
    let args = Args::parse();
    let platform = if args.breadboard { HardwarePlatform::Breadboard } else { HardwarePlatform::Pcb };

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Compass Watch Sim", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    let mut app = WatchApp::new(WatchConfig::new(platform));
    log_info!("Simulator on {}", platform.name());
    if app.start().is_err() {
        log_warn!("Initial page failed to show");
    }

    let start = Instant::now();
    let mut last_sample: Option<Instant> = None;
    // Hand-set heading; None follows the demo sensor
    let mut manual_heading: Option<i32> = None;

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u32;
        set_log_clock_ms(now_ms);

        let mut input = InputResult::default();
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Y | Keycode::Tab => input.new_page = Some(app.page().toggle()),
                        Keycode::A | Keycode::Space if app.page() == Page::ImageViewer => {
                            input.advance_requested = true;
                        }
                        Keycode::B | Keycode::R if app.page() == Page::ImageViewer => {
                            input.reset_requested = true;
                        }
                        Keycode::Left | Keycode::Right => {
                            let step = if keycode == Keycode::Left { -HEADING_NUDGE } else { HEADING_NUDGE };
                            let base = manual_heading.unwrap_or_else(|| demo_sample(now_ms).heading);
                            manual_heading = Some(normalize_heading(base + step));
                            last_sample = None;
                        }
                        Keycode::D => {
                            manual_heading = None;
                            last_sample = None;
                            log_info!("Demo heading resumed");
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    app.on_press(point);
                }
                _ => {}
            }
        }
        if let Err(e) = app.apply(&input) {
            log_warn!("Page input failed: {}", e);
        }

        if last_sample.is_none_or(|t| t.elapsed() >= SAMPLE_PERIOD) {
            let demo = demo_sample(now_ms);
            app.on_sample(SensorSample {
                heading: manual_heading.unwrap_or(demo.heading),
                temperature_c: demo.temperature_c,
            });
            last_sample = Some(Instant::now());
        }
        app.tick(now_ms);

        app.draw(&mut display);
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
    }
}
