//! Disk temperature → display color.
//!
//! Gray at road temperatures, blending linearly to red across 50–500 °C, with
//! an emissive glow ramping in over the upper half of that range. Clients use
//! this to tint the disk material without re-deriving the thresholds.

use serde::Serialize;

use crate::brake_thermal::telemetry::KELVIN_OFFSET;

/// Color response starts here (°C).
pub const MIN_TEMP_FOR_COLOR: f64 = 50.0;
/// Fully red at and beyond this point (°C).
pub const MAX_TEMP_FOR_COLOR: f64 = 500.0;

const BASE_GRAY: [f32; 3] = [0.8, 0.8, 0.8];
const FULL_RED: [f32; 3] = [1.0, 0.0, 0.0];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiskColor {
    pub rgb: [f32; 3],
    pub emissive_intensity: f32,
}

/// How far into the color range the disk is, 0..1.
pub fn heat_fraction(temp_kelvin: f64) -> f64 {
    let celsius = temp_kelvin - KELVIN_OFFSET;
    if celsius <= MIN_TEMP_FOR_COLOR {
        return 0.0;
    }
    ((celsius - MIN_TEMP_FOR_COLOR) / (MAX_TEMP_FOR_COLOR - MIN_TEMP_FOR_COLOR)).min(1.0)
}

pub fn disk_color(temp_kelvin: f64) -> DiskColor {
    let frac = heat_fraction(temp_kelvin) as f32;

    let rgb = [
        BASE_GRAY[0] + (FULL_RED[0] - BASE_GRAY[0]) * frac,
        BASE_GRAY[1] + (FULL_RED[1] - BASE_GRAY[1]) * frac,
        BASE_GRAY[2] + (FULL_RED[2] - BASE_GRAY[2]) * frac,
    ];

    // Glow only over the upper half of the heat range.
    let emissive_intensity = if frac > 0.5 { (frac - 0.5) * 2.0 } else { 0.0 };

    DiskColor {
        rgb,
        emissive_intensity,
    }
}
