// ==============================================================================
// step.rs — BRAKE DISK THERMODYNAMICS STEP (Fixed Timestep)
// ==============================================================================
// One invocation per tick (dt = 0.1 s). Stages run in order, each feeding the
// next within the same tick:
// 1) Longitudinal acceleration from the speed delta
// 2) Axle normal forces: static pressure split + acceleration-scaled transfer
// 3) Kinetic energy, tick travel distance, aerodynamic drag force
// 4) Heating gate: kinetic energy lost beyond what drag alone explains is
//    attributed to braking; half of it, front-load-weighted, heats the disk
// 5) Cooling every tick: Stefan-Boltzmann radiation + forced convection.
//    Convection is dt-scaled, radiation is not. The asymmetry is part of the
//    model being reproduced; do not "correct" it.
// 6) Roll previous_* values
//
// Speed must be non-negative on entry (every writer clamps at 0); the
// convection term takes sqrt(v).
// ==============================================================================

use crate::brake_thermal::state::SimulationState;
use crate::brake_thermal::types::SimParams;

/// Empirical forced-convection coefficient. Scales with sqrt(speed).
const CONVECTION_COEFF: f64 = 5.78;

pub fn update_simulation(s: &mut SimulationState, p: &SimParams) {
    debug_assert!(
        s.vehicle_speed >= 0.0,
        "speed writer failed to clamp: {}",
        s.vehicle_speed
    );
    let v = s.vehicle_speed.max(0.0);
    let dt = p.dt;

    // -------------------------
    // KINEMATICS + AXLE LOADS
    // -------------------------
    s.acceleration = (v - s.previous_vehicle_speed) / dt;

    let psi_sum = p.vehicle.front_psi + p.vehicle.rear_psi;
    let static_load = p.vehicle.mass * p.env.gravity;
    let transfer = (p.vehicle.h_cog * s.acceleration) / p.vehicle.wheelbase;
    s.normal_force_front = static_load * p.vehicle.front_psi / psi_sum + transfer;
    s.normal_force_rear = static_load * p.vehicle.rear_psi / psi_sum - transfer;

    // -------------------------
    // ENERGY BUDGET
    // -------------------------
    s.kinetic_energy = 0.5 * p.vehicle.mass * v * v;
    let travel_distance = v * dt;
    let drag_force = 0.5 * p.env.air_density * p.vehicle.cda * v * v;

    // Heating gate: energy lost this tick beyond drag's share means the
    // brakes are working. Half the loss goes to braking, split to the front
    // discs by normal-force fraction. When the gate is closed the temperature
    // simply carries over (and energy_shed_front keeps its last value).
    let energy_lost = s.previous_kinetic_energy - s.kinetic_energy;
    if energy_lost > drag_force * travel_distance {
        let front_share =
            s.normal_force_front / (s.normal_force_front + s.normal_force_rear);
        s.energy_shed_front = (energy_lost / 2.0) * front_share;
        s.disk_temperature =
            s.previous_disk_temperature + s.energy_shed_front / p.heat_capacity();
    }

    // -------------------------
    // COOLING (every tick)
    // -------------------------
    let t_disk = s.disk_temperature;
    let t_env = p.env.ambient_temp;

    s.radiation_heat_loss = p.disk.emissivity
        * p.env.stefan_boltzmann
        * p.disk.surface_area
        * (t_disk.powi(4) - t_env.powi(4));
    s.convection_heat_loss =
        CONVECTION_COEFF * v.sqrt() * p.disk.surface_area * (t_disk - t_env);

    let delta_t =
        (s.radiation_heat_loss + s.convection_heat_loss * dt) / p.heat_capacity();
    s.disk_temperature -= delta_t;

    // -------------------------
    // ROLL
    // -------------------------
    s.previous_vehicle_speed = v;
    s.previous_disk_temperature = s.disk_temperature;
    s.previous_kinetic_energy = s.kinetic_energy;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brake_thermal::state::SimulationState;

    fn fresh() -> (SimulationState, SimParams) {
        let p = SimParams::default();
        (SimulationState::new(&p), p)
    }

    #[test]
    fn steady_speed_does_not_heat() {
        let (mut s, p) = fresh();
        for _ in 0..50 {
            update_simulation(&mut s, &p);
        }
        // No speed change, disk at ambient: both loss terms are zero.
        assert!((s.disk_temperature - 300.0).abs() < 1e-12);
        assert_eq!(s.energy_shed_front, 0.0);
    }

    #[test]
    fn hard_speed_drop_heats_the_disk() {
        let (mut s, p) = fresh();
        // 30 -> 25 m/s in one tick: the kinetic loss dwarfs drag * travel.
        s.vehicle_speed = 25.0;
        update_simulation(&mut s, &p);
        assert!(s.disk_temperature > 300.0);
        assert!(s.energy_shed_front > 0.0);
    }

    #[test]
    fn drag_sized_speed_drop_does_not_heat() {
        let (mut s, p) = fresh();
        // A loss of ~24 J against ~1.9 kJ of drag work: gate stays closed.
        s.vehicle_speed = 29.999;
        update_simulation(&mut s, &p);
        assert!((s.disk_temperature - 300.0).abs() < 1e-9);
        assert_eq!(s.energy_shed_front, 0.0);
    }

    #[test]
    fn acceleration_is_speed_delta_over_dt() {
        let (mut s, p) = fresh();
        s.vehicle_speed = 32.0;
        update_simulation(&mut s, &p);
        assert!((s.acceleration - 20.0).abs() < 1e-12);
    }

    #[test]
    fn normal_forces_sum_to_vehicle_weight() {
        let (mut s, p) = fresh();
        s.vehicle_speed = 25.0;
        update_simulation(&mut s, &p);
        // The transfer term cancels in the sum.
        let total = s.normal_force_front + s.normal_force_rear;
        assert!((total - 800.0 * 9.81).abs() < 1e-9);
    }

    #[test]
    fn normal_force_transfer_matches_model_formula() {
        let (mut s, p) = fresh();
        s.vehicle_speed = 25.0; // a = -50 m/s²
        update_simulation(&mut s, &p);
        let static_front = 800.0 * 9.81 * 36.0 / 68.0;
        let transfer = (0.6 * -50.0) / 2.435;
        assert!((s.normal_force_front - (static_front + transfer)).abs() < 1e-9);
    }

    #[test]
    fn stationary_disk_cools_toward_ambient() {
        let (mut s, p) = fresh();
        s.vehicle_speed = 0.0;
        s.previous_vehicle_speed = 0.0;
        s.kinetic_energy = 0.0;
        s.previous_kinetic_energy = 0.0;
        s.disk_temperature = 500.0;
        s.previous_disk_temperature = 500.0;

        let mut last = s.disk_temperature;
        for _ in 0..5000 {
            update_simulation(&mut s, &p);
            assert!(s.disk_temperature < last);
            assert!(s.disk_temperature >= 300.0 - 1e-9);
            last = s.disk_temperature;
        }
        // At v = 0 only radiation is active.
        assert_eq!(s.convection_heat_loss, 0.0);
        assert!(s.radiation_heat_loss > 0.0);
    }

    #[test]
    fn energy_shed_carries_over_while_coasting() {
        let (mut s, p) = fresh();
        s.vehicle_speed = 25.0;
        update_simulation(&mut s, &p);
        let shed = s.energy_shed_front;
        assert!(shed > 0.0);

        // Next tick at constant speed: gate closed, last value carries.
        update_simulation(&mut s, &p);
        assert_eq!(s.energy_shed_front, shed);
    }
}
