//! Watch screens library - testable modules for the round smartwatch display.
//!
//! This library contains the screen logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code,
//! and the desktop simulator (`simulator/`) drives the same screens in a window.
//!
//! # Screens
//!
//! - [`screens::compass`]: rotating cardinal labels, north marker, azimuth and
//!   temperature readout
//! - [`screens::image_viewer`]: spinning emblem with a press-to-rotate button
//! - [`screens::logs`]: on-device log viewer
//!
//! The heading math lives in [`geometry`] and knows nothing about drawing.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Logging macros are used by every module below, declare first
#[macro_use]
pub mod log_buffer;

// Configuration
pub mod config;

// Pure logic
pub mod demo;
pub mod geometry;
pub mod input;
pub mod pages;
pub mod scene;

// Rendering
pub mod app;
pub mod colors;
pub mod screens;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_canvas;

// Re-export at top level for existing imports
pub use app::WatchApp;
pub use config::{HardwarePlatform, MarkerRotation, WatchConfig};
pub use geometry::{CardinalLabel, CompassPoint, CompassReading};
pub use pages::Page;
pub use scene::{SceneError, ScreenSlot};

/// Crates referenced from the exported logging macros.
#[doc(hidden)]
pub mod __private {
    pub use heapless;
}
