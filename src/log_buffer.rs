//! Log buffer with levels and timestamps for on-device log viewing.
//!
//! Provides a circular buffer of log entries displayed on the Logs page.
//! Each entry has a log level, message, and timestamp.
//!
//! # Log Levels
//!
//! - `Debug`: Gray - debugging information
//! - `Info`: Green - normal operation
//! - `Warn`: Orange - warnings
//! - `Error`: Red - errors, including screen lifecycle violations
//!
//! # Usage
//!
//! ```ignore
//! log_info!("Compass shown");
//! log_warn!("Heading sample dropped: {}", heading);
//! log_error!("{} screen removed while absent", name);
//! ```
//!
//! Every macro writes the entry into the global ring and, on the ARM target,
//! forwards the same format string to `defmt`.
//!
//! # Timestamps
//!
//! The library has no clock of its own. The render loop advances the log clock
//! with [`set_log_clock_ms`] once per frame; entries are stamped with the last
//! value written.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::{String, Vec};

use crate::colors::{GRAY, GREEN, ORANGE, RED};

/// Maximum number of log entries to keep.
/// Sized for the visible area of the round display.
pub const LOG_ENTRIES: usize = 10;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 40;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum LogLevel {
    /// Debug information (gray)
    Debug = 0,
    /// Normal operation (green)
    #[default]
    Info = 1,
    /// Warnings (orange)
    Warn = 2,
    /// Errors (red)
    Error = 3,
}

impl LogLevel {
    /// Get the display color for this log level.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Debug => GRAY,
            Self::Info => GREEN,
            Self::Warn => ORANGE,
            Self::Error => RED,
        }
    }

    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

/// A single log entry with level, message, and timestamp.
#[derive(Clone, Debug)]
pub struct LogEntry {
    /// Log severity level.
    pub level: LogLevel,
    /// Log message (truncated to LOG_MSG_LEN).
    pub message: String<LOG_MSG_LEN>,
    /// Log clock value when the entry was pushed, in milliseconds.
    pub timestamp_ms: u32,
}

impl LogEntry {
    const EMPTY: Self = Self {
        level: LogLevel::Info,
        message: String::new(),
        timestamp_ms: 0,
    };

    /// Create a new log entry, truncating the message to fit.
    pub fn new(
        level: LogLevel,
        message: &str,
        timestamp_ms: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            timestamp_ms,
        }
    }
}

impl Default for LogEntry {
    fn default() -> Self { Self::EMPTY }
}

/// Circular buffer of log entries.
pub struct LogBuffer {
    entries: [LogEntry; LOG_ENTRIES],
    head: usize, // Next write position
    count: usize,
}

impl LogBuffer {
    /// Create a new empty log buffer.
    pub const fn new() -> Self {
        Self {
            entries: [const { LogEntry::EMPTY }; LOG_ENTRIES],
            head: 0,
            count: 0,
        }
    }

    /// Push a new log entry. Oldest entry is dropped if buffer is full.
    pub fn push(
        &mut self,
        entry: LogEntry,
    ) {
        self.entries[self.head] = entry;
        self.head = (self.head + 1) % LOG_ENTRIES;
        if self.count < LOG_ENTRIES {
            self.count += 1;
        }
    }

    /// Get the number of entries in the buffer.
    #[inline]
    pub const fn len(&self) -> usize { self.count }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    /// Iterate over entries from oldest to newest.
    pub fn iter(&self) -> LogBufferIter<'_> {
        let start = if self.count < LOG_ENTRIES { 0 } else { self.head };
        LogBufferIter {
            buffer: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self { Self::new() }
}

/// Iterator over log buffer entries (oldest to newest).
pub struct LogBufferIter<'a> {
    buffer: &'a LogBuffer,
    pos: usize,
    remaining: usize,
}

impl<'a> Iterator for LogBufferIter<'a> {
    type Item = &'a LogEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = &self.buffer.entries[self.pos];
        self.pos = (self.pos + 1) % LOG_ENTRIES;
        self.remaining -= 1;
        Some(entry)
    }
}

// =============================================================================
// Global Log Buffer
// =============================================================================

/// Global log buffer, shared between the render loop and any task that logs.
static LOG_BUFFER: Mutex<RefCell<LogBuffer>> = Mutex::new(RefCell::new(LogBuffer::new()));

/// Log clock in milliseconds, advanced by the render loop.
static LOG_CLOCK_MS: AtomicU32 = AtomicU32::new(0);

/// Set the timestamp applied to subsequent log entries.
#[inline]
pub fn set_log_clock_ms(now_ms: u32) { LOG_CLOCK_MS.store(now_ms, Ordering::Relaxed); }

/// Current log clock value in milliseconds.
#[inline]
pub fn log_clock_ms() -> u32 { LOG_CLOCK_MS.load(Ordering::Relaxed) }

/// Push a log entry to the global buffer.
pub fn push_log(
    level: LogLevel,
    message: &str,
) {
    let entry = LogEntry::new(level, message, log_clock_ms());
    critical_section::with(|cs| LOG_BUFFER.borrow_ref_mut(cs).push(entry));
}

/// Copy of the global log entries, oldest first.
///
/// Only the copy runs inside the critical section, so callers can draw the
/// entries without masking interrupts.
pub fn snapshot_logs() -> Vec<LogEntry, LOG_ENTRIES> {
    critical_section::with(|cs| LOG_BUFFER.borrow_ref(cs).iter().cloned().collect())
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut buf: $crate::__private::heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> =
            $crate::__private::heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::log_buffer::push_log($crate::log_buffer::LogLevel::Info, buf.as_str());
        #[cfg(target_arch = "arm")]
        defmt::info!($($arg)*);
    }};
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut buf: $crate::__private::heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> =
            $crate::__private::heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::log_buffer::push_log($crate::log_buffer::LogLevel::Warn, buf.as_str());
        #[cfg(target_arch = "arm")]
        defmt::warn!($($arg)*);
    }};
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut buf: $crate::__private::heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> =
            $crate::__private::heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::log_buffer::push_log($crate::log_buffer::LogLevel::Error, buf.as_str());
        #[cfg(target_arch = "arm")]
        defmt::error!($($arg)*);
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        use core::fmt::Write as _;
        let mut buf: $crate::__private::heapless::String<{ $crate::log_buffer::LOG_MSG_LEN }> =
            $crate::__private::heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $crate::log_buffer::push_log($crate::log_buffer::LogLevel::Debug, buf.as_str());
        #[cfg(target_arch = "arm")]
        defmt::debug!($($arg)*);
    }};
}

// =============================================================================
// Unit Tests
// =============================================================================
