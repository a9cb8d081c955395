// ==============================================================================
// control.rs — CONTROL RATES, RAMPS, RESET
// ==============================================================================
// The two control rates are mutually exclusive: storing a positive value in
// one atomically zeroes the other and flips the mode flags. The brake and
// accelerate triggers arm a bounded ramp that the coordinator advances once
// per tick, before the physics step; a ramp disarms itself at its bound.
// Every speed write clamps into [0, max_speed].
// ==============================================================================

use log::debug;

use crate::brake_thermal::state::{RampMode, SimulationState};
use crate::brake_thermal::types::SimParams;

/// Store a braking rate from the deceleration slider. Clamps into
/// [0, max_deceleration]; a positive rate evicts any stored acceleration.
pub fn set_control_deceleration(s: &mut SimulationState, p: &SimParams, value: f64) {
    let clamped = value.clamp(0.0, p.max_deceleration);
    if clamped != value {
        debug!(
            "deceleration {} outside [0, {}], clamped to {}",
            value, p.max_deceleration, clamped
        );
    }
    s.control_deceleration = clamped;
    if clamped > 0.0 {
        s.control_acceleration = 0.0;
        s.is_accelerating = false;
    }
    s.is_braking = clamped > 0.0;
}

/// Store a target rate from the acceleration slider. Mirror image of
/// `set_control_deceleration`.
pub fn set_control_acceleration(s: &mut SimulationState, p: &SimParams, value: f64) {
    let clamped = value.clamp(0.0, p.max_acceleration);
    if clamped != value {
        debug!(
            "acceleration {} outside [0, {}], clamped to {}",
            value, p.max_acceleration, clamped
        );
    }
    s.control_acceleration = clamped;
    if clamped > 0.0 {
        s.control_deceleration = 0.0;
        s.is_braking = false;
    }
    s.is_accelerating = clamped > 0.0;
}

/// Arm the braking ramp. No-op unless the car is moving and a braking rate
/// is set.
pub fn trigger_brake(s: &mut SimulationState) {
    if s.vehicle_speed > 0.0 && s.control_deceleration > 0.0 {
        s.is_braking = true;
        s.is_accelerating = false;
        s.ramp = RampMode::Braking;
    }
}

/// Arm the acceleration ramp. No-op unless there is headroom below max speed
/// and an acceleration rate is set.
pub fn trigger_accelerate(s: &mut SimulationState, p: &SimParams) {
    if s.vehicle_speed < p.vehicle.max_speed && s.control_acceleration > 0.0 {
        s.is_accelerating = true;
        s.is_braking = false;
        s.ramp = RampMode::Accelerating;
    }
}

/// Back to the startup state: initial speed, disk at ambient, no rates, no
/// ramp. All `previous_*` fields match current values, so the first tick
/// after a reset derives zero acceleration and no spurious heating.
pub fn trigger_reset(s: &mut SimulationState, p: &SimParams) {
    *s = SimulationState::new(p);
}

/// One ramp increment, run by the coordinator at the start of each tick.
/// A ramp disarms itself on reaching its bound and clears its mode flag.
pub fn ramp_step(s: &mut SimulationState, p: &SimParams) {
    match s.ramp {
        RampMode::Braking => {
            s.vehicle_speed = (s.vehicle_speed - s.control_deceleration * p.dt).max(0.0);
            if s.vehicle_speed <= 0.0 {
                s.ramp = RampMode::Idle;
                s.is_braking = false;
            }
        }
        RampMode::Accelerating => {
            s.vehicle_speed =
                (s.vehicle_speed + s.control_acceleration * p.dt).min(p.vehicle.max_speed);
            if s.vehicle_speed >= p.vehicle.max_speed {
                s.ramp = RampMode::Idle;
                s.is_accelerating = false;
            }
        }
        RampMode::Idle => {}
    }
}
