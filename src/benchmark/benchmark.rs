use std::time::Instant;

use crate::simulation::engine::SimulationContext;
use crate::simulation::error::SimResult;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{BodyCatalogEntry, Catalog, CentralCatalogEntry};

/// Synthetic catalog with `n` bodies on evenly spaced orbits
fn synthetic_catalog(n: usize) -> Catalog {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic spread, no rand needed
            BodyCatalogEntry::new(
                format!("body-{i}"),
                1.0e22 * (1.0 + (i_f * 0.37).sin().abs()),
                5.0e10 * (1.0 + i_f),
                10.0 + i_f,
            )
            .with_angle((i_f * 0.13).cos())
        })
        .collect();

    Catalog {
        central: CentralCatalogEntry {
            name: "central".to_string(),
            mass: 1.989e30,
        },
        bodies,
    }
}

/// Time `tick` and the central-mass recomputation cascade for growing body counts
pub fn bench_tick() -> SimResult<()> {
    let ns = [8, 64, 512, 4096, 32768];
    let steps = 600; // ten seconds of frames at 60 Hz

    for n in ns {
        let parameters = Parameters::default();
        let center = parameters.center();
        let mut ctx = SimulationContext::initialize(&synthetic_catalog(n), &parameters)?;

        // Warm up
        ctx.tick(center);

        let t0 = Instant::now();
        ctx.advance(steps, center);
        let tick_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        let central = ctx.body_id("central")?;
        let t1 = Instant::now();
        ctx.set_body_mass(central, 2.0e30)?;
        let cascade = t1.elapsed().as_secs_f64();

        println!("N = {n:6}, tick = {:10.3e} s, central cascade = {:10.3e} s", tick_per_step, cascade);
    }

    Ok(())
}
