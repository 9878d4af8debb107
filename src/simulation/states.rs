//! Core state types for the orbital engine.
//!
//! - `CentralBody`  the single dominant mass, pinned to the display center
//! - `OrbitingBody` a body on a circular orbit around it, with its cached
//!   velocity / angular speed and the accumulated angle
//! - `BodyId`       identity used by every mutation and query
//!
//! Derived fields are only written by the engine, so they are private here
//! and exposed through read accessors.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Identity of a body inside a `SimulationContext`
///
/// Orbiting bodies are addressed by their position in catalog order, which
/// never changes after initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Central,
    Orbiting(usize),
}

#[derive(Debug, Clone)]
pub struct CentralBody {
    pub(crate) name: String,
    pub(crate) mass: f64,          // kg, always > 0
    pub(crate) original_mass: f64, // restored by reset
    pub(crate) visible: bool,
}

impl CentralBody {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn original_mass(&self) -> f64 {
        self.original_mass
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The central body does not orbit anything
    pub fn velocity(&self) -> f64 {
        0.0
    }

    pub fn angular_speed(&self) -> f64 {
        0.0
    }
}

#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub(crate) name: String,
    pub(crate) mass: f64,           // kg
    pub(crate) original_mass: f64,  // restored by reset
    pub(crate) radius: f64,         // physical orbit radius (m), fixed
    pub(crate) display_radius: f64, // orbit radius in display units, fixed
    pub(crate) velocity: f64,       // m/s, cached
    pub(crate) angular_speed: f64,  // rad per tick, cached
    pub(crate) angle: f64,          // rad, accumulated
    pub(crate) position: NVec2,     // display position, rebuilt every tick
    pub(crate) visible: bool,
}

impl OrbitingBody {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn original_mass(&self) -> f64 {
        self.original_mass
    }

    /// Physical orbit radius in meters
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Orbit radius in display units, only meaningful to a renderer
    pub fn display_radius(&self) -> f64 {
        self.display_radius
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> NVec2 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
