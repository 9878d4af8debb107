pub mod constants;
pub mod error;
pub mod states;
pub mod params;
pub mod formulas;
pub mod engine;
pub mod integrator;
pub mod scenario;
