//! Fixed-step angular integrator for the circular-orbit model
//!
//! Each tick adds the cached angular speed to every orbiting body's angle and
//! rebuilds its display position from the new angle. Motion is never
//! recomputed here; the engine keeps angular speed current between ticks.
//!
//! This is Euler stepping of the angle, not exact Kepler propagation: N ticks
//! equal one N-times-larger step only while angular speed stays constant.

use super::engine::SimulationContext;
use super::states::{NVec2, OrbitingBody};

/// Advance every orbiting body by one tick around `center`
pub fn angular_euler_step(ctx: &mut SimulationContext, center: NVec2) {
    for b in ctx.bodies.iter_mut() {
        // θ_n+1 = θ_n + ω
        b.angle += b.angular_speed;
    }

    place_bodies(ctx, center);
    ctx.ticks += 1;
}

/// Rebuild display positions from the current angles without advancing time
pub fn place_bodies(ctx: &mut SimulationContext, center: NVec2) {
    for b in ctx.bodies.iter_mut() {
        b.position = orbit_point(b, center);
    }
}

/// x = cx + r cos θ, y = cy + r sin θ
fn orbit_point(body: &OrbitingBody, center: NVec2) -> NVec2 {
    let (sin, cos) = body.angle.sin_cos();
    center + body.display_radius * NVec2::new(cos, sin)
}
