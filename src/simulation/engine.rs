//! Orbital state engine
//!
//! `SimulationContext` owns the central body, the orbiting bodies and the
//! global time-scale. Every mutator validates first and then goes through
//! [`SimulationContext::recompute`], which stages the new velocity / angular
//! speed of every affected body and only commits once all of them succeeded.
//! After any call returns, each body's cached motion matches its current
//! mass, the current central mass and the current time-scale.
//!
//! Advancing the angles lives in `integrator`; this module never moves a body.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::simulation::error::{require_finite, require_positive, SimError, SimResult};
use crate::simulation::formulas;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Catalog;
use crate::simulation::states::{BodyId, CentralBody, NVec2, OrbitingBody};

/// Quantities evaluated on demand for an orbiting body against the central one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    pub force: f64,            // N
    pub acceleration: f64,     // m/s²
    pub total_energy: f64,     // J
    pub kinetic_energy: f64,   // J
    pub potential_energy: f64, // J
    pub period: f64,           // s
}

/// Where the orbiting masses used by a recomputation come from
#[derive(Debug, Clone, Copy)]
enum MassSource {
    Current,
    Single(usize, f64),
    Original,
}

/// Inputs changed by one mutation
#[derive(Debug, Clone, Copy)]
struct Recompute {
    central_mass: Option<f64>,
    masses: MassSource,
    time_scale: Option<f64>,
}

impl Recompute {
    /// Velocity only depends on masses, a pure time-scale change keeps it
    fn moves_velocity(&self) -> bool {
        self.central_mass.is_some() || !matches!(self.masses, MassSource::Current)
    }

    fn touches(&self, index: usize) -> bool {
        match self.masses {
            MassSource::Single(i, _) => i == index,
            _ => true,
        }
    }
}

/// Staged result for one body, committed all at once
struct Staged {
    index: usize,
    mass: f64,
    velocity: f64,
    angular_speed: f64,
}

#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub(crate) central: CentralBody,
    pub(crate) bodies: Vec<OrbitingBody>, // display order
    pub(crate) time_scale: f64,
    pub(crate) seconds_per_tick: f64,
    pub(crate) selected: BodyId,
    pub(crate) ticks: u64,
}

impl SimulationContext {
    /// Build a context from a catalog
    ///
    /// Rejects non-positive masses or radii, non-finite values and duplicate
    /// names. Positions start around the display center from `parameters`.
    pub fn initialize(catalog: &Catalog, parameters: &Parameters) -> SimResult<Self> {
        parameters.validate()?;
        require_positive("central mass", catalog.central.mass)?;

        let mut names = HashSet::new();
        names.insert(catalog.central.name.as_str());

        let mut bodies = Vec::with_capacity(catalog.bodies.len());
        for entry in &catalog.bodies {
            if !names.insert(entry.name.as_str()) {
                return Err(SimError::invalid(format!("duplicate body name '{}'", entry.name)));
            }
            require_positive("body mass", entry.mass)?;
            require_positive("orbit radius", entry.radius)?;
            require_finite("display radius", entry.display_radius)?;
            if entry.display_radius < 0.0 {
                return Err(SimError::invalid(format!(
                    "display radius of '{}' must not be negative", entry.name
                )));
            }
            require_finite("initial angle", entry.angle)?;

            bodies.push(OrbitingBody {
                name: entry.name.clone(),
                mass: entry.mass,
                original_mass: entry.mass,
                radius: entry.radius,
                display_radius: entry.display_radius,
                velocity: 0.0,
                angular_speed: 0.0,
                angle: entry.angle,
                position: NVec2::zeros(),
                visible: true,
            });
        }

        let mut ctx = Self {
            central: CentralBody {
                name: catalog.central.name.clone(),
                mass: catalog.central.mass,
                original_mass: catalog.central.mass,
                visible: true,
            },
            bodies,
            time_scale: parameters.time_scale,
            seconds_per_tick: parameters.seconds_per_tick,
            selected: BodyId::Central,
            ticks: 0,
        };

        ctx.recompute(Recompute {
            central_mass: Some(ctx.central.mass),
            masses: MassSource::Current,
            time_scale: None,
        })?;
        integrator::place_bodies(&mut ctx, parameters.center());

        info!(
            central = %ctx.central.name,
            bodies = ctx.bodies.len(),
            time_scale = ctx.time_scale,
            seconds_per_tick = ctx.seconds_per_tick,
            "simulation initialized"
        );
        Ok(ctx)
    }

    /// Advance every orbiting body by one tick around `center`
    pub fn tick(&mut self, center: NVec2) {
        integrator::angular_euler_step(self, center);
    }

    /// Run `n` ticks with unchanged motion, `n == 0` does nothing
    pub fn advance(&mut self, n: u64, center: NVec2) {
        for _ in 0..n {
            self.tick(center);
        }
    }

    /// Change the global time-scale; angular speeds follow, velocities stay
    pub fn set_time_scale(&mut self, factor: f64) -> SimResult<()> {
        require_positive("time scale", factor)?;
        self.recompute(Recompute {
            central_mass: None,
            masses: MassSource::Current,
            time_scale: Some(factor),
        })
    }

    /// Change a body's mass
    ///
    /// The central mass feeds every orbit, so changing it recomputes all
    /// bodies; an orbiting body's mass only affects that body.
    pub fn set_body_mass(&mut self, id: BodyId, mass: f64) -> SimResult<()> {
        self.check(id)?;
        require_positive("mass", mass)?;

        let plan = match id {
            BodyId::Central => Recompute {
                central_mass: Some(mass),
                masses: MassSource::Current,
                time_scale: None,
            },
            BodyId::Orbiting(index) => Recompute {
                central_mass: None,
                masses: MassSource::Single(index, mass),
                time_scale: None,
            },
        };
        self.recompute(plan)
    }

    /// Change the mass of whichever body is selected
    pub fn set_selected_mass(&mut self, mass: f64) -> SimResult<()> {
        self.set_body_mass(self.selected, mass)
    }

    pub fn set_selected(&mut self, id: BodyId) -> SimResult<()> {
        self.check(id)?;
        self.selected = id;
        debug!(?id, "selected body");
        Ok(())
    }

    pub fn toggle_visible(&mut self, id: BodyId) -> SimResult<()> {
        self.check(id)?;
        let visible = match id {
            BodyId::Central => {
                self.central.visible = !self.central.visible;
                self.central.visible
            }
            BodyId::Orbiting(index) => {
                let body = &mut self.bodies[index];
                body.visible = !body.visible;
                body.visible
            }
        };
        debug!(?id, visible, "toggled visibility");
        Ok(())
    }

    /// Restore original masses and visibility; accumulated angles are kept
    pub fn reset(&mut self) -> SimResult<()> {
        self.recompute(Recompute {
            central_mass: Some(self.central.original_mass),
            masses: MassSource::Original,
            time_scale: None,
        })?;
        self.central.visible = true;
        for body in &mut self.bodies {
            body.visible = true;
        }
        debug!("reset to original masses");
        Ok(())
    }

    /// Force, acceleration, energies and period for an orbiting body
    ///
    /// The central body has no orbit, so querying it is an error
    pub fn query_derived(&self, id: BodyId) -> SimResult<DerivedQuantities> {
        let body = self.orbiting(id)?;
        let mc = self.central.mass;
        let (m, r) = (body.mass, body.radius);

        Ok(DerivedQuantities {
            force: formulas::gravitational_force(mc, m, r)?,
            acceleration: formulas::acceleration(mc, m, r)?,
            total_energy: formulas::total_energy(mc, m, r)?,
            kinetic_energy: formulas::kinetic_energy(mc, m, r)?,
            potential_energy: formulas::potential_energy(mc, m, r)?,
            period: formulas::orbital_period(mc, m, r)?,
        })
    }

    /// Single recomputation routine behind every mutator
    ///
    /// Nothing is written unless every affected body could be recomputed.
    fn recompute(&mut self, plan: Recompute) -> SimResult<()> {
        let central_mass = plan.central_mass.unwrap_or(self.central.mass);
        let time_scale = plan.time_scale.unwrap_or(self.time_scale);

        let mut staged = Vec::with_capacity(self.bodies.len());
        for (index, body) in self.bodies.iter().enumerate() {
            if !plan.touches(index) {
                continue;
            }
            let mass = match plan.masses {
                MassSource::Single(_, mass) => mass,
                MassSource::Original => body.original_mass,
                MassSource::Current => body.mass,
            };
            let velocity = if plan.moves_velocity() {
                formulas::orbital_velocity(central_mass, mass, body.radius, body.radius)?
            } else {
                body.velocity
            };
            let angular_speed =
                formulas::angular_speed_per_tick(velocity, body.radius, self.seconds_per_tick, time_scale)?;
            staged.push(Staged { index, mass, velocity, angular_speed });
        }

        self.central.mass = central_mass;
        self.time_scale = time_scale;
        for s in staged {
            let body = &mut self.bodies[s.index];
            body.mass = s.mass;
            body.velocity = s.velocity;
            body.angular_speed = s.angular_speed;
            debug!(
                body = %body.name,
                mass = body.mass,
                velocity = body.velocity,
                angular_speed = body.angular_speed,
                "recomputed motion"
            );
        }
        Ok(())
    }

    fn check(&self, id: BodyId) -> SimResult<()> {
        match id {
            BodyId::Central => Ok(()),
            BodyId::Orbiting(index) if index < self.bodies.len() => Ok(()),
            BodyId::Orbiting(index) => Err(SimError::invalid(format!("unknown body index {index}"))),
        }
    }

    fn orbiting(&self, id: BodyId) -> SimResult<&OrbitingBody> {
        match id {
            BodyId::Central => Err(SimError::invalid(format!(
                "'{}' is the central body and has no orbit", self.central.name
            ))),
            BodyId::Orbiting(index) => self
                .bodies
                .get(index)
                .ok_or_else(|| SimError::invalid(format!("unknown body index {index}"))),
        }
    }

    // =====================================================================
    // Read accessors
    // =====================================================================

    /// Look a body up by name
    pub fn body_id(&self, name: &str) -> SimResult<BodyId> {
        if self.central.name == name {
            return Ok(BodyId::Central);
        }
        self.bodies
            .iter()
            .position(|b| b.name == name)
            .map(BodyId::Orbiting)
            .ok_or_else(|| SimError::invalid(format!("unknown body '{name}'")))
    }

    pub fn central(&self) -> &CentralBody {
        &self.central
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> SimResult<&OrbitingBody> {
        self.orbiting(id)
    }

    pub fn name(&self, id: BodyId) -> SimResult<&str> {
        match id {
            BodyId::Central => Ok(self.central.name()),
            other => Ok(self.orbiting(other)?.name()),
        }
    }

    pub fn mass(&self, id: BodyId) -> SimResult<f64> {
        match id {
            BodyId::Central => Ok(self.central.mass),
            other => Ok(self.orbiting(other)?.mass),
        }
    }

    pub fn original_mass(&self, id: BodyId) -> SimResult<f64> {
        match id {
            BodyId::Central => Ok(self.central.original_mass),
            other => Ok(self.orbiting(other)?.original_mass),
        }
    }

    pub fn velocity(&self, id: BodyId) -> SimResult<f64> {
        match id {
            BodyId::Central => Ok(self.central.velocity()),
            other => Ok(self.orbiting(other)?.velocity),
        }
    }

    pub fn angular_speed(&self, id: BodyId) -> SimResult<f64> {
        match id {
            BodyId::Central => Ok(self.central.angular_speed()),
            other => Ok(self.orbiting(other)?.angular_speed),
        }
    }

    /// The central body never moves, its angle is zero by convention
    pub fn angle(&self, id: BodyId) -> SimResult<f64> {
        match id {
            BodyId::Central => Ok(0.0),
            other => Ok(self.orbiting(other)?.angle),
        }
    }

    /// Display position; the central body sits at whatever center the
    /// driver passes to `tick`, so the engine cannot report it
    pub fn position(&self, id: BodyId) -> SimResult<NVec2> {
        Ok(self.orbiting(id)?.position)
    }

    pub fn is_visible(&self, id: BodyId) -> SimResult<bool> {
        match id {
            BodyId::Central => Ok(self.central.visible),
            other => Ok(self.orbiting(other)?.visible),
        }
    }

    pub fn selected(&self) -> BodyId {
        self.selected
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn seconds_per_tick(&self) -> f64 {
        self.seconds_per_tick
    }

    /// Ticks advanced since initialization
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
