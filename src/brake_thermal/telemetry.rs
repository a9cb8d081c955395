//! Display-ready telemetry, rounded the way the readout panel shows it.

use serde::Serialize;

use crate::brake_thermal::state::SimulationState;

pub const KELVIN_OFFSET: f64 = 273.15;
const MS_TO_KMH: f64 = 3.6;

/// One tick's worth of readout values, every field rounded to two decimals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TelemetrySnapshot {
    pub speed_kmh: f64,
    pub temp_celsius: f64,
    pub kinetic_energy_j: f64,
    pub heat_loss_w: f64,
    pub normal_force_front_n: f64,
    pub normal_force_rear_n: f64,
    pub acceleration_ms2: f64,
    pub energy_shed_front_j: f64,
}

#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

impl TelemetrySnapshot {
    pub fn from_state(s: &SimulationState) -> Self {
        Self {
            speed_kmh: round2(s.vehicle_speed * MS_TO_KMH),
            temp_celsius: round2(s.disk_temperature - KELVIN_OFFSET),
            kinetic_energy_j: round2(s.kinetic_energy),
            heat_loss_w: round2(s.radiation_heat_loss),
            normal_force_front_n: round2(s.normal_force_front),
            normal_force_rear_n: round2(s.normal_force_rear),
            acceleration_ms2: round2(s.acceleration),
            energy_shed_front_j: round2(s.energy_shed_front),
        }
    }
}
