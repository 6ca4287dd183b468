//! Simulated sensor samples for the firmware and the simulator.
//!
//! The heading sweeps once around the dial every 18 seconds with a small
//! sine wobble on top, the temperature drifts slowly around room temperature.

use crate::geometry::normalize_heading;

/// Milliseconds per degree of the steady heading sweep.
const SWEEP_MS_PER_DEGREE: u32 = 50;

/// One heading + temperature sample.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct SensorSample {
    /// Heading in degrees, `0..360`.
    pub heading: i32,
    /// Temperature in degrees Celsius.
    pub temperature_c: f32,
}

/// Demo sample at `elapsed_ms` since start, generated with micromath sine waves.
pub fn demo_sample(elapsed_ms: u32) -> SensorSample {
    let t = elapsed_ms as f32 / 1000.0;
    let sweep = (elapsed_ms / SWEEP_MS_PER_DEGREE % 360) as i32;
    let wobble = (12.0 * micromath::F32(t * 0.7).sin().0) as i32;

    SensorSample {
        heading: normalize_heading(sweep + wobble),
        temperature_c: 21.5 + 3.0 * micromath::F32(t * 0.1).sin().0,
    }
}
