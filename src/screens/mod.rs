//! Screens for the watch.
//!
//! The compass and image viewer pages are owned through their `*App` types,
//! which hold the show/remove lifecycle. The logs page is stateless.

pub mod compass;
pub mod image_viewer;
mod logs;

pub use compass::{CompassApp, CompassScreen};
pub use image_viewer::{ImageViewerApp, ImageViewerScreen};
pub use logs::draw_logs_page;
