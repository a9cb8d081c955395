use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedSender;

use crate::brake_thermal::color::{disk_color, DiskColor};
use crate::brake_thermal::control;
use crate::brake_thermal::state::SimulationState;
use crate::brake_thermal::step::update_simulation;
use crate::brake_thermal::telemetry::TelemetrySnapshot;
use crate::brake_thermal::types::SimParams;

/// Raw values for the visual collaborators: disk rotation follows speed,
/// pad displacement follows acceleration, material tint follows temperature.
#[derive(Serialize)]
pub struct VisualState {
    pub vehicle_speed: f64,    // m/s
    pub acceleration: f64,     // m/s²
    pub disk_temperature: f64, // K
}

#[derive(Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub telemetry: TelemetrySnapshot,
    pub visual: VisualState,
    pub disk_color: DiskColor,
}

/// Everything the tick loop and the connection handlers share: the owned
/// simulation state, its parameters, and the connected clients.
pub struct SharedSimState {
    pub tick: u64,
    pub params: SimParams,
    pub sim: SimulationState,
    pub clients: HashMap<String, UnboundedSender<String>>,
}

impl SharedSimState {
    pub fn new(params: SimParams) -> Self {
        Self {
            tick: 0,
            params,
            sim: SimulationState::new(&params),
            clients: HashMap::new(),
        }
    }

    pub fn register_client(&mut self, id: String, tx: UnboundedSender<String>) {
        self.clients.insert(id, tx);
    }

    pub fn remove_client(&mut self, id: &str) {
        self.clients.remove(id);
    }

    /// One 100 ms frame, in order: control ramp, then the physics step.
    /// Running both under one lock removes the race of having ramps and
    /// physics on independent timers.
    pub fn advance_tick(&mut self) {
        control::ramp_step(&mut self.sim, &self.params);
        update_simulation(&mut self.sim, &self.params);
        self.tick += 1;
    }

    /// Build and send the current snapshot to all clients.
    pub fn broadcast_snapshot(&self) {
        let json = serde_json::to_string(&Snapshot {
            tick: self.tick,
            telemetry: TelemetrySnapshot::from_state(&self.sim),
            visual: VisualState {
                vehicle_speed: self.sim.vehicle_speed,
                acceleration: self.sim.acceleration,
                disk_temperature: self.sim.disk_temperature,
            },
            disk_color: disk_color(self.sim.disk_temperature),
        })
        .unwrap();

        for tx in self.clients.values() {
            let _ = tx.send(json.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_applies_ramp_before_physics() {
        let mut shared = SharedSimState::new(SimParams::default());
        let params = shared.params;
        control::set_control_deceleration(&mut shared.sim, &params, 9.8);
        control::trigger_brake(&mut shared.sim);

        shared.advance_tick();

        // The same frame sees the ramp's speed cut: the car slowed and the
        // kinetic loss opened the heating gate.
        assert!(shared.sim.vehicle_speed < 30.0);
        assert!(shared.sim.disk_temperature > 300.0);
        assert_eq!(shared.tick, 1);
    }

    #[test]
    fn snapshot_serializes() {
        let mut shared = SharedSimState::new(SimParams::default());
        shared.advance_tick();

        let snap = Snapshot {
            tick: shared.tick,
            telemetry: TelemetrySnapshot::from_state(&shared.sim),
            visual: VisualState {
                vehicle_speed: shared.sim.vehicle_speed,
                acceleration: shared.sim.acceleration,
                disk_temperature: shared.sim.disk_temperature,
            },
            disk_color: disk_color(shared.sim.disk_temperature),
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"telemetry\""));
        assert!(json.contains("\"speed_kmh\":108.0"));
    }
}
