//! Build simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime `Scenario`:
//! - numerical/driver parameters (`Parameters`)
//! - the body catalog (`Catalog`: central body + `BodyCatalogEntry` records)
//!
//! A scenario is turned into a live `SimulationContext` with
//! [`Scenario::initialize`]. The built-in eight-planet solar system is
//! available through [`Scenario::solar_system`].

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::SimulationContext;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;

/// Catalog record for the central body
#[derive(Debug, Clone, PartialEq)]
pub struct CentralCatalogEntry {
    pub name: String,
    pub mass: f64, // kg
}

/// Catalog record for one orbiting body
#[derive(Debug, Clone, PartialEq)]
pub struct BodyCatalogEntry {
    pub name: String,
    pub mass: f64,           // kg
    pub radius: f64,         // physical orbit radius (m)
    pub display_radius: f64, // orbit radius in display units
    pub angle: f64,          // initial angular position (rad)
}

impl BodyCatalogEntry {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64, display_radius: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            radius,
            display_radius,
            angle: 0.0,
        }
    }

    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }
}

/// Fixed list of bodies a simulation starts from
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub central: CentralCatalogEntry,
    pub bodies: Vec<BodyCatalogEntry>,
}

/// Fully-specified scenario: parameters plus catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub parameters: Parameters,
    pub catalog: Catalog,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Bodies: map `BodyConfig` -> runtime catalog record
        let bodies: Vec<BodyCatalogEntry> = cfg.bodies.iter().map(|bc: &BodyConfig| BodyCatalogEntry {
            name: bc.name.clone(),
            mass: bc.mass,
            radius: bc.radius,
            display_radius: bc.display_radius,
            angle: bc.angle,
        }).collect();

        let catalog = Catalog {
            central: CentralCatalogEntry {
                name: cfg.central.name,
                mass: cfg.central.mass,
            },
            bodies,
        };

        // Parameters (runtime) from ParametersConfig, defaults for anything missing
        let p_cfg = cfg.parameters;
        let defaults = Parameters::default();
        let parameters = Parameters {
            seconds_per_tick: p_cfg.seconds_per_tick.unwrap_or(defaults.seconds_per_tick),
            time_scale: p_cfg.time_scale.unwrap_or(defaults.time_scale),
            frame_rate: p_cfg.frame_rate.unwrap_or(defaults.frame_rate),
            width: p_cfg.width.unwrap_or(defaults.width),
            height: p_cfg.height.unwrap_or(defaults.height),
        };

        Self { parameters, catalog }
    }

    /// Sun and the eight planets with reference masses and mean orbital radii
    pub fn solar_system() -> Self {
        let bodies = vec![
            BodyCatalogEntry::new("Mercury", 3.301e23, 5.791e10, 60.0),
            BodyCatalogEntry::new("Venus", 4.867e24, 1.0821e11, 100.0),
            BodyCatalogEntry::new("Earth", 5.972e24, 1.496e11, 140.0),
            BodyCatalogEntry::new("Mars", 6.417e23, 2.2794e11, 180.0),
            BodyCatalogEntry::new("Jupiter", 1.898e27, 7.7857e11, 240.0),
            BodyCatalogEntry::new("Saturn", 5.683e26, 1.43353e12, 300.0),
            BodyCatalogEntry::new("Uranus", 8.681e25, 2.87246e12, 360.0),
            BodyCatalogEntry::new("Neptune", 1.024e26, 4.49506e12, 420.0),
        ];

        Self {
            parameters: Parameters::default(),
            catalog: Catalog {
                central: CentralCatalogEntry {
                    name: "Sun".to_string(),
                    mass: 1.989e30,
                },
                bodies,
            },
        }
    }

    /// Validate the catalog and build the live context
    pub fn initialize(&self) -> SimResult<SimulationContext> {
        SimulationContext::initialize(&self.catalog, &self.parameters)
    }
}
