pub mod simulation;
pub mod configuration;
pub mod controls;
pub mod benchmark;

pub use simulation::constants::G;
pub use simulation::error::{SimError, SimResult};
pub use simulation::states::{BodyId, CentralBody, OrbitingBody, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::{SimulationContext, DerivedQuantities};
pub use simulation::integrator::angular_euler_step;
pub use simulation::scenario::{Scenario, Catalog, BodyCatalogEntry, CentralCatalogEntry};
pub use simulation::formulas::{
    orbital_velocity, semi_major_axis_from_ellipse, gravitational_force, acceleration,
    total_energy, kinetic_energy, potential_energy, orbital_period, angular_speed_per_tick,
};

pub use configuration::config::{ParametersConfig, CentralConfig, BodyConfig, ScenarioConfig};

pub use controls::inputs::{mass_from_slider, slider_from_mass, TimeScalePreset};

pub use benchmark::benchmark::bench_tick;
