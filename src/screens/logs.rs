//! Logs page for on-device log viewing.
//!
//! Displays recent log entries with color-coded levels and timestamps,
//! inset to stay inside the round panel.
//!
//! # Layout
//!
//! ```text
//!            LOGS                 (header)
//!   [I] 01234 Compass shown       (entries, up to LOG_ENTRIES)
//!   [D] 01240 Image rotation 100
//!   [E] 01250 compass screen ...
//!         Y: Compass              (footer)
//! ```

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::colors::BLACK;
use crate::config::layout::CENTER_X;
use crate::log_buffer::{LogEntry, snapshot_logs};
use crate::styles::{CENTERED, LABEL_FONT, LABEL_STYLE_GREEN, LABEL_STYLE_WHITE};

/// Left edge of the entry column.
const ENTRY_X: i32 = 24;
/// Message column, after the "[L] TTTTT " prefix (10 chars at 6 px).
const MESSAGE_X: i32 = ENTRY_X + 60;
/// Characters that fit between the message column and the right bezel.
const MESSAGE_CHARS: usize = 22;
const FIRST_ENTRY_Y: i32 = 56;
const LINE_HEIGHT: i32 = 14;

/// Draw the logs page with recent log entries.
pub fn draw_logs_page<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style("LOGS", Point::new(CENTER_X, 36), LABEL_STYLE_GREEN, CENTERED)
        .draw(display)
        .ok();

    let entries = snapshot_logs();
    if entries.is_empty() {
        Text::with_text_style("No log entries", Point::new(CENTER_X, 120), LABEL_STYLE_WHITE, CENTERED)
            .draw(display)
            .ok();
    }

    let mut y = FIRST_ENTRY_Y;
    for entry in &entries {
        draw_log_entry(display, entry, y);
        y += LINE_HEIGHT;
    }

    Text::with_text_style("Y: Compass", Point::new(CENTER_X, 212), LABEL_STYLE_GREEN, CENTERED)
        .draw(display)
        .ok();
}

/// Draw a single log entry.
fn draw_log_entry<D>(
    display: &mut D,
    entry: &LogEntry,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let level_style = MonoTextStyle::new(LABEL_FONT, entry.level.color());

    // Format: [L] TTTTT message, timestamp mod 100000 for 5 digits
    let mut prefix: String<16> = String::new();
    let _ = write!(prefix, "[{}] {:05}", entry.level.prefix(), entry.timestamp_ms % 100_000);

    Text::new(&prefix, Point::new(ENTRY_X, y), level_style).draw(display).ok();
    Text::new(fit(entry.message.as_str(), MESSAGE_CHARS), Point::new(MESSAGE_X, y), LABEL_STYLE_WHITE)
        .draw(display)
        .ok();
}

/// Longest prefix of `text` with at most `max_chars` characters.
fn fit(
    text: &str,
    max_chars: usize,
) -> &str {
    text.char_indices().nth(max_chars).map_or(text, |(i, _)| &text[..i])
}
