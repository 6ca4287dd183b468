//! Hardware variant selection.
//!
//! The breadboard prototype and the watch PCB mount the panel differently, so
//! the north marker has to turn the opposite way on each. The variant is a
//! runtime value handed to the compass screen, picked once at startup:
//! the firmware reads the `breadboard` cargo feature, the simulator a CLI flag.

/// Watch hardware revision.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum HardwarePlatform {
    /// Breadboard prototype.
    Breadboard,
    /// Production watch PCB.
    #[default]
    Pcb,
}

impl HardwarePlatform {
    /// Platform selected by cargo features for this build.
    pub const fn from_features() -> Self {
        if cfg!(feature = "breadboard") { Self::Breadboard } else { Self::Pcb }
    }

    /// Direction the north marker turns as the heading increases.
    pub const fn marker_rotation(self) -> MarkerRotation {
        match self {
            Self::Breadboard => MarkerRotation::Clockwise,
            Self::Pcb => MarkerRotation::CounterClockwise,
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breadboard => "breadboard",
            Self::Pcb => "pcb",
        }
    }
}

/// Screen-space turning direction of the north marker for increasing heading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum MarkerRotation {
    /// Marker angle = +heading.
    Clockwise,
    /// Marker angle = -heading, same direction the cardinal labels orbit.
    CounterClockwise,
}

impl MarkerRotation {
    /// Sign applied to the heading: +1 or -1.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Clockwise => 1,
            Self::CounterClockwise => -1,
        }
    }
}

/// Runtime configuration for the watch screens.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct WatchConfig {
    /// Hardware revision the firmware runs on.
    pub platform: HardwarePlatform,
}

impl WatchConfig {
    /// Configuration for the given platform.
    pub const fn new(platform: HardwarePlatform) -> Self { Self { platform } }

    /// Configuration selected by cargo features.
    pub const fn from_features() -> Self { Self::new(HardwarePlatform::from_features()) }
}
