//! Color constants for the watch screens.
//!
//! Standard colors come from the `RgbColor` trait constants. The watch theme
//! colors below are converted from their 24-bit design values at compile time.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This is the native format of the GC9A01 panel and of the framebuffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black. Cardinal labels, readouts and the fixed top marker.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Compass background, emblem and button glyph.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green. Info log level.
pub const GREEN: Rgb565 = Rgb565::GREEN;

// =============================================================================
// Theme Colors
// =============================================================================

/// Material red (#F44336). North cardinal label and north marker.
pub const RED: Rgb565 = rgb888(0xF4, 0x43, 0x36);

/// Material blue (#2196F3). Compass rings and the image viewer button.
pub const ACCENT: Rgb565 = rgb888(0x21, 0x96, 0xF3);

/// Orange warning color. Warn log level.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);

/// Dark gray. Debug log level and footers.
pub const GRAY: Rgb565 = Rgb565::new(12, 24, 12);

/// Image viewer page background (#49936E).
pub const VIEWER_BACKGROUND: Rgb565 = rgb888(0x49, 0x93, 0x6E);

/// Emblem shadow on the image viewer.
pub const EMBLEM_SHADE: Rgb565 = rgb888(0x1F, 0x4D, 0x36);

/// Convert a 24-bit design color to Rgb565 by dropping the low bits.
const fn rgb888(
    r: u8,
    g: u8,
    b: u8,
) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}
