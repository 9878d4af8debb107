//! Closed-form two-body formulas
//!
//! Pure functions over scalar inputs. Nothing here reads or writes the
//! simulation state; the engine calls into this module whenever a mass or the
//! time-scale changes, and `query_derived` evaluates the energy/force terms on
//! demand.
//!
//! Every function validates its inputs and its result, and returns
//! [`SimError::InvalidArgument`] instead of letting a division by zero, a
//! negative square root or an overflow leak out as `inf`/`NaN`.

use std::f64::consts::PI;

use super::constants::G;
use super::error::{require_finite, require_positive, SimError, SimResult};

/// Vis-viva orbital speed (m/s)
///
/// v = sqrt(G * (m_central + m_orbiting) * (2/r - 1/a))
///
/// With `semi_major_axis == radius` this is the circular-orbit speed
/// sqrt(G * (m_central + m_orbiting) / r)
pub fn orbital_velocity(m_central: f64, m_orbiting: f64, radius: f64, semi_major_axis: f64) -> SimResult<f64> {
    require_finite("central mass", m_central)?;
    require_finite("orbiting mass", m_orbiting)?;
    require_positive("radius", radius)?;
    require_positive("semi-major axis", semi_major_axis)?;

    let mu = G * (m_central + m_orbiting);
    let v2 = mu * (2.0 / radius - 1.0 / semi_major_axis);
    if v2 < 0.0 {
        return Err(SimError::invalid(format!(
            "no real orbital speed for radius {radius} and semi-major axis {semi_major_axis}"
        )));
    }
    require_finite("velocity", v2.sqrt())
}

/// Semi-major axis from an ellipse's two radii, via its area (π r1 r2) / (π r1)
///
/// Always reduces to `r2`; kept for elliptical extensions of the circular model
pub fn semi_major_axis_from_ellipse(r1: f64, r2: f64) -> SimResult<f64> {
    require_positive("r1", r1)?;
    require_finite("r2", r2)?;

    let area = PI * r1 * r2;
    require_finite("semi-major axis", area / (PI * r1))
}

/// Newtonian attraction between two masses (N)
pub fn gravitational_force(m1: f64, m2: f64, r: f64) -> SimResult<f64> {
    require_finite("m1", m1)?;
    require_finite("m2", m2)?;
    require_positive("distance", r)?;

    require_finite("force", G * m1 * m2 / (r * r))
}

/// Acceleration of the orbiting body towards the central one (m/s²)
pub fn acceleration(m_central: f64, m_orbiting: f64, r: f64) -> SimResult<f64> {
    require_positive("orbiting mass", m_orbiting)?;
    require_finite("acceleration", gravitational_force(m_central, m_orbiting, r)? / m_orbiting)
}

/// Total orbital energy, -G m1 m2 / (2a) (J)
pub fn total_energy(m1: f64, m2: f64, axis: f64) -> SimResult<f64> {
    require_finite("m1", m1)?;
    require_finite("m2", m2)?;
    require_positive("semi-major axis", axis)?;

    require_finite("total energy", -G * m1 * m2 / (2.0 * axis))
}

/// Kinetic energy on a circular orbit, G m1 m2 / (2r) (J)
pub fn kinetic_energy(m1: f64, m2: f64, r: f64) -> SimResult<f64> {
    require_finite("m1", m1)?;
    require_finite("m2", m2)?;
    require_positive("radius", r)?;

    require_finite("kinetic energy", G * m1 * m2 / (2.0 * r))
}

/// Gravitational potential energy, -G m1 m2 / r (J)
pub fn potential_energy(m1: f64, m2: f64, r: f64) -> SimResult<f64> {
    require_finite("m1", m1)?;
    require_finite("m2", m2)?;
    require_positive("radius", r)?;

    require_finite("potential energy", -G * m1 * m2 / r)
}

/// Kepler's third law, T = 2π sqrt(a³ / (G (m_central + m_orbiting))) (s)
pub fn orbital_period(m_central: f64, m_orbiting: f64, axis: f64) -> SimResult<f64> {
    require_finite("central mass", m_central)?;
    require_finite("orbiting mass", m_orbiting)?;
    require_positive("semi-major axis", axis)?;
    let total = require_positive("total mass", m_central + m_orbiting)?;

    require_finite("period", 2.0 * PI * (axis.powi(3) / (G * total)).sqrt())
}

/// Angle swept per tick by a body moving at `velocity` on a circle of `radius`
///
/// ω_tick = v / r * seconds_per_tick * time_scale
pub fn angular_speed_per_tick(velocity: f64, radius: f64, seconds_per_tick: f64, time_scale: f64) -> SimResult<f64> {
    require_finite("velocity", velocity)?;
    require_positive("radius", radius)?;
    require_positive("seconds per tick", seconds_per_tick)?;
    require_positive("time scale", time_scale)?;

    require_finite("angular speed", velocity / radius * seconds_per_tick * time_scale)
}
