//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in `no_std`
//! environments, so they are defined here rather than in the watch library.

use std::time::Duration;

/// Target frame time (~30 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Interval between demo sensor samples, matching the firmware's sensor task.
pub const SAMPLE_PERIOD: Duration = Duration::from_millis(100);

/// Heading change per Left/Right key press, in degrees.
pub const HEADING_NUDGE: i32 = 5;
