//! brake_thermal - transport-agnostic brake thermodynamics model (pure types + stepper)

pub mod types;
pub mod state;
pub mod step;
pub mod control;
pub mod telemetry;
pub mod color;

pub use types::*;
pub use state::SimulationState;
pub use step::update_simulation;
