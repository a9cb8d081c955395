use crate::brake_thermal::types::SimParams;

/// Which bounded speed ramp is currently armed.
///
/// Distinct from the `is_braking` / `is_accelerating` flags: a slider can set
/// a flag without arming a ramp; only the brake/accelerate triggers arm one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RampMode {
    Idle,
    Braking,
    Accelerating,
}

/// All mutable physical quantities, one record. Owned by the coordinator and
/// passed by reference to the stepper, the control actions, and telemetry.
#[derive(Debug, Clone)]
pub struct SimulationState {
    pub vehicle_speed: f64,          // m/s, clamped to [0, max_speed] by every writer
    pub previous_vehicle_speed: f64, // m/s
    pub acceleration: f64,           // m/s², derived per tick

    pub disk_temperature: f64,          // K
    pub previous_disk_temperature: f64, // K

    pub kinetic_energy: f64,          // J
    pub previous_kinetic_energy: f64, // J

    pub normal_force_front: f64, // N
    pub normal_force_rear: f64,  // N

    pub control_acceleration: f64, // m/s², >= 0, exclusive with deceleration
    pub control_deceleration: f64, // m/s², >= 0
    pub is_braking: bool,
    pub is_accelerating: bool,
    pub ramp: RampMode,

    // Per-tick outputs carried for telemetry.
    pub energy_shed_front: f64,   // J, last braking tick's front-disk share
    pub radiation_heat_loss: f64, // W
    pub convection_heat_loss: f64, // W
}

impl SimulationState {
    /// Fresh state: rolling at the initial speed with the disk at ambient.
    /// All `previous_*` fields match their current counterparts, so the first
    /// tick derives zero acceleration and no spurious heating.
    pub fn new(params: &SimParams) -> Self {
        let v = params.initial_speed;
        let kinetic = 0.5 * params.vehicle.mass * v * v;
        let psi_sum = params.vehicle.front_psi + params.vehicle.rear_psi;
        let static_load = params.vehicle.mass * params.env.gravity;

        Self {
            vehicle_speed: v,
            previous_vehicle_speed: v,
            acceleration: 0.0,
            disk_temperature: params.env.ambient_temp,
            previous_disk_temperature: params.env.ambient_temp,
            kinetic_energy: kinetic,
            previous_kinetic_energy: kinetic,
            normal_force_front: static_load * params.vehicle.front_psi / psi_sum,
            normal_force_rear: static_load * params.vehicle.rear_psi / psi_sum,
            control_acceleration: 0.0,
            control_deceleration: 0.0,
            is_braking: false,
            is_accelerating: false,
            ramp: RampMode::Idle,
            energy_shed_front: 0.0,
            radiation_heat_loss: 0.0,
            convection_heat_loss: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_consistent() {
        let p = SimParams::default();
        let s = SimulationState::new(&p);

        assert_eq!(s.vehicle_speed, 30.0);
        assert_eq!(s.previous_vehicle_speed, s.vehicle_speed);
        assert_eq!(s.disk_temperature, 300.0);
        assert_eq!(s.previous_disk_temperature, s.disk_temperature);
        assert_eq!(s.previous_kinetic_energy, s.kinetic_energy);
        assert_eq!(s.kinetic_energy, 0.5 * 800.0 * 30.0 * 30.0);
        assert_eq!(s.ramp, RampMode::Idle);
        assert!(!s.is_braking && !s.is_accelerating);
    }

    #[test]
    fn fresh_normal_forces_carry_full_weight() {
        let p = SimParams::default();
        let s = SimulationState::new(&p);
        let total = s.normal_force_front + s.normal_force_rear;
        assert!((total - 800.0 * 9.81).abs() < 1e-9);
        // 36/32 psi split biases the front axle
        assert!(s.normal_force_front > s.normal_force_rear);
    }
}
