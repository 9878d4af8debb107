//! Configuration types for loading orbital scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – tick rate, initial time-scale and display settings
//! - [`CentralConfig`]    – the central body
//! - [`BodyConfig`]       – one entry per orbiting body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   seconds_per_tick: 86400.0   # simulated seconds per tick at 1x
//!   time_scale: 1.0
//!   frame_rate: 60
//!   width: 1200
//!   height: 800
//!
//! central:
//!   name: Sun
//!   mass: 1.989e30
//!
//! bodies:
//!   - name: Earth
//!     mass: 5.972e24
//!     radius: 1.496e11          # meters
//!     display_radius: 140.0
//!     angle: 0.0                # optional, radians
//! ```
//!
//! Every `parameters` field is optional and falls back to the engine default.
//! The scenario builder maps this into the runtime catalog and `Parameters`.

use serde::Deserialize;

/// Numerical and driver parameters, all optional
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub seconds_per_tick: Option<f64>, // simulated seconds per tick at 1x
    pub time_scale: Option<f64>,       // initial global time-scale
    pub frame_rate: Option<u32>,       // driver ticks per second
    pub width: Option<u32>,            // display width, center is width/2
    pub height: Option<u32>,           // display height, center is height/2
}

/// The central body
#[derive(Deserialize, Debug, Clone)]
pub struct CentralConfig {
    pub name: String,
    pub mass: f64, // kg
}

/// A single orbiting body's catalog entry
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,        // unique within the scenario
    pub mass: f64,           // kg
    pub radius: f64,         // physical orbit radius in meters
    pub display_radius: f64, // orbit radius in display units
    #[serde(default)]
    pub angle: f64,          // initial angular position, radians
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig, // tick rate and driver settings
    pub central: CentralConfig,       // the body everything orbits
    pub bodies: Vec<BodyConfig>,      // orbiting bodies in display order
}
