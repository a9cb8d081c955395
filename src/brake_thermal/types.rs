//! Core shared types for `brake_thermal` (transport-agnostic).

// ============================================
// ----- physical parameters ------------------
// ============================================

#[derive(Debug, Clone, Copy)]
pub struct VehicleParams {
    pub mass: f64,       // kg
    pub front_psi: f64,  // front tire pressure (psi) - sets the static axle split
    pub rear_psi: f64,   // rear tire pressure (psi)
    pub wheelbase: f64,  // m (front axle to rear axle)
    pub h_cog: f64,      // m (center-of-gravity height)
    pub cda: f64,        // m² (drag coefficient × frontal area)
    pub max_speed: f64,  // m/s
}

impl Default for VehicleParams {
    fn default() -> Self {
        Self {
            mass: 800.0,
            front_psi: 36.0,
            rear_psi: 32.0,
            wheelbase: 2.435,
            h_cog: 0.6,
            cda: 1.36,
            max_speed: 40.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DiskParams {
    pub mass: f64,          // kg (one front disk)
    pub specific_heat: f64, // J/(kg·K)
    pub surface_area: f64,  // m²
    pub emissivity: f64,    // 0..1
}

impl Default for DiskParams {
    fn default() -> Self {
        Self {
            mass: 5.5,
            specific_heat: 460.0, // cast iron
            surface_area: 0.0314,
            emissivity: 0.95,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EnvParams {
    pub gravity: f64,          // m/s²
    pub air_density: f64,      // kg/m³
    pub ambient_temp: f64,     // K
    pub stefan_boltzmann: f64, // W/(m²·K⁴)
}

impl Default for EnvParams {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            air_density: 1.01,
            ambient_temp: 300.0,
            stefan_boltzmann: 5.67e-8,
        }
    }
}

// ============================================
// ----- simulation configuration -------------
// ============================================

#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    pub vehicle: VehicleParams,
    pub disk: DiskParams,
    pub env: EnvParams,

    pub dt: f64,               // s (fixed tick duration)
    pub initial_speed: f64,    // m/s
    pub max_deceleration: f64, // m/s² (braking slider upper bound)
    pub max_acceleration: f64, // m/s² (acceleration slider upper bound)
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            vehicle: VehicleParams::default(),
            disk: DiskParams::default(),
            env: EnvParams::default(),
            dt: 0.1,
            initial_speed: 30.0,
            max_deceleration: 9.8,
            max_acceleration: 5.0,
        }
    }
}

impl SimParams {
    /// Thermal capacity of one disk (J/K). Divides every heating/cooling term.
    #[inline]
    pub fn heat_capacity(&self) -> f64 {
        self.disk.specific_heat * self.disk.mass
    }

    /// Startup sanity check. A configuration that would divide by zero in the
    /// per-tick pipeline is fatal here, not a per-tick concern.
    pub fn validate(&self) -> Result<(), String> {
        if self.vehicle.front_psi + self.vehicle.rear_psi <= 0.0 {
            return Err("tire pressure sum must be positive (axle load split)".into());
        }
        if self.heat_capacity() <= 0.0 {
            return Err("disk heat capacity must be positive".into());
        }
        if self.dt <= 0.0 {
            return Err("tick duration must be positive".into());
        }
        if self.vehicle.max_speed <= 0.0 || self.initial_speed < 0.0 {
            return Err("speed bounds must be non-negative".into());
        }
        if self.initial_speed > self.vehicle.max_speed {
            return Err("initial speed exceeds max speed".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(SimParams::default().validate().is_ok());
    }

    #[test]
    fn zero_pressure_sum_is_fatal() {
        let mut p = SimParams::default();
        p.vehicle.front_psi = 0.0;
        p.vehicle.rear_psi = 0.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn zero_disk_mass_is_fatal() {
        let mut p = SimParams::default();
        p.disk.mass = 0.0;
        assert!(p.validate().is_err());
    }
}
