//! Application configuration.
//!
//! - `layout`: Display dimensions and pre-computed layout constants
//! - `platform`: Hardware variant and the runtime [`WatchConfig`]

pub mod layout;
pub mod platform;

// Re-export layout constants at config level for convenience
pub use layout::{
    CARDINAL_RADIUS,
    CENTER,
    CENTER_X,
    CENTER_Y,
    EAST_ANCHOR,
    NORTH_ANCHOR,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    SOUTH_ANCHOR,
    WEST_ANCHOR,
};
pub use platform::{HardwarePlatform, MarkerRotation, WatchConfig};
