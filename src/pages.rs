//! Page navigation for the watch.
//!
//! Supports switching between pages with the `Y` button.
//!
//! # Pages
//!
//! - [`Page::Compass`]: Orbiting cardinals, north marker, azimuth and temperature
//! - [`Page::ImageViewer`]: Spinning emblem with a press-to-rotate button
//! - [`Page::Logs`]: On-device log viewer with color-coded levels

/// Available pages in the watch application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Page {
    /// Compass dial driven by heading and temperature samples.
    #[default]
    Compass,

    /// Image viewer. A advances the rotation, B resets it.
    ImageViewer,

    /// Log viewer page with color-coded log entries.
    Logs,
}

impl Page {
    /// Toggle to the next page (cycles: Compass → ImageViewer → Logs → Compass).
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Compass => Self::ImageViewer,
            Self::ImageViewer => Self::Logs,
            Self::Logs => Self::Compass,
        }
    }

    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compass => "compass",
            Self::ImageViewer => "image viewer",
            Self::Logs => "logs",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
