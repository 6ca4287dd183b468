//! Pre-computed static text styles to avoid per-frame object construction.
//!
//! # Optimization: Static Style Constants
//!
//! Styles are `const`, so they live in read-only data and the draw functions
//! reference them directly instead of building a `MonoTextStyle` every frame.
//!
//! # Fonts
//!
//! - Cardinal labels use `ProFont` 24pt, ASCII only.
//! - Azimuth and temperature readouts need the degree sign, so they use the
//!   ISO 8859-1 variant of the 10x20 font.
//! - The logs page uses the small 6x10 font.

use embedded_graphics::{
    mono_font::{
        MonoFont, MonoTextStyle,
        ascii::FONT_6X10,
        iso_8859_1::FONT_10X20,
    },
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::colors::{BLACK, GREEN, WHITE};

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Text centered horizontally and vertically on its position.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Top-left anchored text. Used for the cardinal labels, whose placement is
/// their top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Cardinal label font (`ProFont` 24pt).
pub const CARDINAL_FONT: &MonoFont = &PROFONT_24_POINT;

/// Small label font (6x10 pixels).
/// Usage: `MonoTextStyle::new(LABEL_FONT, dynamic_color)`
pub const LABEL_FONT: &MonoFont = &FONT_6X10;

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Azimuth and temperature readouts on the white dial.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, BLACK);

/// Small white text for log messages.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small green text for the logs header and footer.
pub const LABEL_STYLE_GREEN: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, GREEN);
