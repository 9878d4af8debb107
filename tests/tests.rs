use approx::assert_relative_eq;

use orbsim::{BodyCatalogEntry, BodyId, Catalog, CentralCatalogEntry, Parameters, Scenario, ScenarioConfig, SimError, SimulationContext};
use orbsim::{acceleration, gravitational_force, orbital_period, orbital_velocity, G};

/// Built-in solar system with default parameters
pub fn solar() -> SimulationContext {
    Scenario::solar_system().initialize().expect("built-in catalog is valid")
}

/// Sun + Earth only, the reference two-body case
pub fn sun_earth() -> SimulationContext {
    let catalog = Catalog {
        central: CentralCatalogEntry { name: "Sun".into(), mass: 1.989e30 },
        bodies: vec![BodyCatalogEntry::new("Earth", 5.972e24, 1.496e11, 140.0)],
    };
    SimulationContext::initialize(&catalog, &Parameters::default()).expect("valid catalog")
}

/// (mass, velocity, angular speed, angle, visible) for every orbiting body
pub fn snapshot(ctx: &SimulationContext) -> Vec<(f64, f64, f64, f64, bool)> {
    ctx.bodies()
        .iter()
        .map(|b| (b.mass(), b.velocity(), b.angular_speed(), b.angle(), b.is_visible()))
        .collect()
}

fn expected_angular_speed(ctx: &SimulationContext, velocity: f64, radius: f64) -> f64 {
    velocity / radius * ctx.seconds_per_tick() * ctx.time_scale()
}

// ==================================================================================
// Formula tests
// ==================================================================================

#[test]
fn circular_orbit_reduction() {
    for &(mc, mo, r) in &[(1.989e30, 5.972e24, 1.496e11), (5.0e24, 7.3e22, 3.844e8), (1.0, 1.0, 1.0)] {
        let v = orbital_velocity(mc, mo, r, r).unwrap();
        assert_relative_eq!(v, (G * (mc + mo) / r).sqrt(), max_relative = 1e-12);
    }
}

#[test]
fn force_and_acceleration_reject_zero_distance() {
    assert!(matches!(gravitational_force(1.0, 1.0, 0.0), Err(SimError::InvalidArgument(_))));
    assert!(matches!(acceleration(1.0, 1.0, 0.0), Err(SimError::InvalidArgument(_))));
}

#[test]
fn orbital_velocity_rejects_non_positive_radius() {
    assert!(orbital_velocity(1.989e30, 5.972e24, 0.0, 1.0).is_err());
    assert!(orbital_velocity(1.989e30, 5.972e24, -1.0, 1.0).is_err());
}

#[test]
fn earth_reference_values() {
    let v = orbital_velocity(1.989e30, 5.972e24, 1.496e11, 1.496e11).unwrap();
    let t = orbital_period(1.989e30, 5.972e24, 1.496e11).unwrap();

    assert_relative_eq!(v, 2.978e4, max_relative = 1e-3);
    assert_relative_eq!(t, 3.156e7, max_relative = 1e-3);
    assert_relative_eq!(t / 86_400.0, 365.25, max_relative = 2e-3);
}

// ==================================================================================
// Initialization tests
// ==================================================================================

#[test]
fn initialize_computes_motion_for_every_body() {
    let ctx = solar();
    let mc = ctx.central().mass();

    assert_eq!(ctx.bodies().len(), 8);
    assert_eq!(ctx.central().velocity(), 0.0);
    assert_eq!(ctx.central().angular_speed(), 0.0);

    for b in ctx.bodies() {
        let v = orbital_velocity(mc, b.mass(), b.radius(), b.radius()).unwrap();
        assert_eq!(b.velocity(), v);
        assert_relative_eq!(b.angular_speed(), expected_angular_speed(&ctx, v, b.radius()), max_relative = 1e-12);
        assert!(b.is_visible());
    }
}

#[test]
fn inner_planets_move_faster() {
    let ctx = solar();
    let speeds: Vec<f64> = ctx.bodies().iter().map(|b| b.angular_speed()).collect();
    assert!(speeds.windows(2).all(|w| w[0] > w[1]));
}

#[test]
fn initialize_rejects_bad_catalogs() {
    let params = Parameters::default();
    let good = Scenario::solar_system().catalog;

    let mut duplicate = good.clone();
    duplicate.bodies[1].name = "Mercury".into();
    assert!(SimulationContext::initialize(&duplicate, &params).is_err());

    let mut zero_radius = good.clone();
    zero_radius.bodies[0].radius = 0.0;
    assert!(SimulationContext::initialize(&zero_radius, &params).is_err());

    let mut zero_central = good.clone();
    zero_central.central.mass = 0.0;
    assert!(SimulationContext::initialize(&zero_central, &params).is_err());

    let bad_params = Parameters { time_scale: 0.0, ..Parameters::default() };
    assert!(SimulationContext::initialize(&good, &bad_params).is_err());
}

#[test]
fn body_lookup_by_name() {
    let ctx = solar();
    assert_eq!(ctx.body_id("Sun").unwrap(), BodyId::Central);
    assert_eq!(ctx.body_id("Earth").unwrap(), BodyId::Orbiting(2));
    assert!(ctx.body_id("Pluto").is_err());
}

// ==================================================================================
// Mutation tests
// ==================================================================================

#[test]
fn orbiting_mass_change_only_moves_that_body() {
    let mut ctx = solar();
    let earth = ctx.body_id("Earth").unwrap();
    let BodyId::Orbiting(earth_index) = earth else { unreachable!() };
    let before = snapshot(&ctx);

    let original = ctx.mass(earth).unwrap();
    ctx.set_body_mass(earth, 2.0 * original).unwrap();
    let after = snapshot(&ctx);

    for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
        if i == earth_index {
            assert_eq!(a.0, 2.0 * original);
            assert_ne!(a.1, b.1);
            assert_ne!(a.2, b.2);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn central_mass_change_moves_every_body() {
    let mut ctx = solar();
    let before = snapshot(&ctx);

    ctx.set_body_mass(BodyId::Central, 2.5e30).unwrap();
    assert_eq!(ctx.central().mass(), 2.5e30);

    for (b, old) in ctx.bodies().iter().zip(before.iter()) {
        let v = orbital_velocity(2.5e30, b.mass(), b.radius(), b.radius()).unwrap();
        assert_ne!(b.velocity(), old.1);
        assert_ne!(b.angular_speed(), old.2);
        assert_eq!(b.velocity(), v);
        assert_relative_eq!(b.angular_speed(), expected_angular_speed(&ctx, v, b.radius()), max_relative = 1e-12);
    }
}

#[test]
fn time_scale_doubles_angular_speed_only() {
    let mut ctx = solar();
    let before = snapshot(&ctx);

    ctx.set_time_scale(2.0).unwrap();
    assert_eq!(ctx.time_scale(), 2.0);

    for (b, old) in ctx.bodies().iter().zip(before.iter()) {
        assert_eq!(b.velocity(), old.1);
        assert_relative_eq!(b.angular_speed(), 2.0 * old.2, max_relative = 1e-12);
    }
}

#[test]
fn mass_change_after_time_scale_keeps_the_scale() {
    let mut ctx = sun_earth();
    ctx.set_time_scale(4.0).unwrap();
    ctx.set_body_mass(BodyId::Orbiting(0), 6.0e24).unwrap();

    let earth = &ctx.bodies()[0];
    assert_relative_eq!(
        earth.angular_speed(),
        expected_angular_speed(&ctx, earth.velocity(), earth.radius()),
        max_relative = 1e-12
    );
    assert_eq!(ctx.time_scale(), 4.0);
}

#[test]
fn invalid_mass_is_rejected_without_side_effects() {
    let mut ctx = solar();
    ctx.advance(10, Parameters::default().center());
    let before = snapshot(&ctx);
    let central_before = ctx.central().mass();

    for id in [BodyId::Central, BodyId::Orbiting(0), BodyId::Orbiting(7)] {
        for mass in [0.0, -5.0, f64::NAN] {
            let err = ctx.set_body_mass(id, mass).unwrap_err();
            assert!(matches!(err, SimError::InvalidArgument(_)));
        }
    }

    assert_eq!(snapshot(&ctx), before);
    assert_eq!(ctx.central().mass(), central_before);
}

#[test]
fn failed_central_cascade_rolls_back_every_body() {
    let catalog = Catalog {
        central: CentralCatalogEntry { name: "Sun".into(), mass: 1.0e30 },
        bodies: vec![
            BodyCatalogEntry::new("Light", 1.0e3, 1.0e11, 50.0),
            BodyCatalogEntry::new("Heavy", 1.7e308, 1.0e11, 90.0),
        ],
    };
    let mut ctx = SimulationContext::initialize(&catalog, &Parameters::default()).unwrap();
    let before = snapshot(&ctx);

    // "Light" recomputes fine, "Heavy" overflows; nothing may be committed
    let err = ctx.set_body_mass(BodyId::Central, 1.7e308).unwrap_err();
    assert!(matches!(err, SimError::InvalidArgument(_)));

    assert_eq!(ctx.central().mass(), 1.0e30);
    assert_eq!(snapshot(&ctx), before);
}

#[test]
fn overflowing_derived_quantities_are_errors() {
    let mut ctx = solar();
    ctx.set_body_mass(BodyId::Central, 1.0e300).unwrap();

    let err = ctx.query_derived(BodyId::Orbiting(2)).unwrap_err();
    assert!(matches!(err, SimError::InvalidArgument(_)));
    assert!(ctx.bodies().iter().all(|b| b.velocity().is_finite() && b.angular_speed().is_finite()));
}

#[test]
fn invalid_time_scale_is_rejected_without_side_effects() {
    let mut ctx = solar();
    let before = snapshot(&ctx);

    assert!(ctx.set_time_scale(0.0).is_err());
    assert!(ctx.set_time_scale(-2.0).is_err());
    assert!(ctx.set_time_scale(f64::INFINITY).is_err());

    assert_eq!(snapshot(&ctx), before);
    assert_eq!(ctx.time_scale(), 1.0);
}

#[test]
fn unknown_body_is_rejected() {
    let mut ctx = solar();
    let missing = BodyId::Orbiting(99);

    assert!(ctx.set_body_mass(missing, 1.0).is_err());
    assert!(ctx.set_selected(missing).is_err());
    assert!(ctx.toggle_visible(missing).is_err());
    assert!(ctx.query_derived(missing).is_err());
    assert!(ctx.velocity(missing).is_err());
}

#[test]
fn selection_targets_mass_changes() {
    let mut ctx = solar();
    assert_eq!(ctx.selected(), BodyId::Central);

    let mars = ctx.body_id("Mars").unwrap();
    let before = snapshot(&ctx);
    ctx.set_selected(mars).unwrap();
    assert_eq!(snapshot(&ctx), before);

    ctx.set_selected_mass(1.0e24).unwrap();
    assert_eq!(ctx.mass(mars).unwrap(), 1.0e24);
    assert_eq!(ctx.central().mass(), ctx.central().original_mass());
}

#[test]
fn toggle_visibility_has_no_physical_effect() {
    let mut ctx = solar();
    let venus = ctx.body_id("Venus").unwrap();
    let speed = ctx.angular_speed(venus).unwrap();

    ctx.toggle_visible(venus).unwrap();
    ctx.toggle_visible(BodyId::Central).unwrap();
    assert!(!ctx.is_visible(venus).unwrap());
    assert!(!ctx.is_visible(BodyId::Central).unwrap());
    assert_eq!(ctx.angular_speed(venus).unwrap(), speed);

    ctx.toggle_visible(venus).unwrap();
    assert!(ctx.is_visible(venus).unwrap());
}

#[test]
fn reset_restores_masses_derived_values_and_visibility() {
    let mut ctx = solar();
    let center = Parameters::default().center();
    let initial: Vec<_> = (0..ctx.bodies().len())
        .map(|i| ctx.query_derived(BodyId::Orbiting(i)).unwrap())
        .collect();
    let initial_snapshot = snapshot(&ctx);

    ctx.set_body_mass(BodyId::Central, 1.0e30).unwrap();
    ctx.set_body_mass(BodyId::Orbiting(3), 9.9e23).unwrap();
    ctx.toggle_visible(BodyId::Orbiting(5)).unwrap();
    ctx.toggle_visible(BodyId::Central).unwrap();
    ctx.advance(25, center);
    let angles: Vec<f64> = ctx.bodies().iter().map(|b| b.angle()).collect();

    ctx.reset().unwrap();

    assert_eq!(ctx.central().mass(), 1.989e30);
    assert!(ctx.is_visible(BodyId::Central).unwrap());
    for (i, b) in ctx.bodies().iter().enumerate() {
        assert_eq!(b.mass(), b.original_mass());
        assert!(b.is_visible());
        assert_eq!(b.velocity(), initial_snapshot[i].1);
        assert_eq!(b.angular_speed(), initial_snapshot[i].2);
        // accumulated angle survives the reset
        assert_eq!(b.angle(), angles[i]);
        assert_eq!(ctx.query_derived(BodyId::Orbiting(i)).unwrap(), initial[i]);
    }
}

// ==================================================================================
// Tick tests
// ==================================================================================

#[test]
fn zero_ticks_leave_angles_unchanged() {
    let mut ctx = solar();
    let before = snapshot(&ctx);
    ctx.advance(0, Parameters::default().center());
    assert_eq!(snapshot(&ctx), before);
    assert_eq!(ctx.ticks(), 0);
}

#[test]
fn n_ticks_advance_by_n_angular_steps() {
    let mut ctx = solar();
    let center = Parameters::default().center();
    let start: Vec<(f64, f64)> = ctx.bodies().iter().map(|b| (b.angle(), b.angular_speed())).collect();

    let n = 500;
    ctx.advance(n, center);
    assert_eq!(ctx.ticks(), n);

    for (b, (angle0, w)) in ctx.bodies().iter().zip(start.iter()) {
        assert_relative_eq!(b.angle(), angle0 + n as f64 * w, max_relative = 1e-12);
    }
}

#[test]
fn angles_are_not_wrapped() {
    let mut ctx = sun_earth();
    ctx.set_time_scale(8.0).unwrap();
    // a little over one year of ticks at 8x
    ctx.advance(50, Parameters::default().center());
    assert!(ctx.bodies()[0].angle() > 2.0 * std::f64::consts::PI);
}

#[test]
fn positions_follow_display_radius_around_center() {
    let mut ctx = solar();
    let center = Parameters::default().center();
    ctx.advance(17, center);

    for b in ctx.bodies() {
        let offset = b.position() - center;
        assert_relative_eq!(offset.norm(), b.display_radius(), max_relative = 1e-9);
        assert_relative_eq!(offset.y.atan2(offset.x), b.angle().sin().atan2(b.angle().cos()), epsilon = 1e-9);
    }
}

#[test]
fn quarter_turn_lands_on_positive_y() {
    let catalog = Catalog {
        central: CentralCatalogEntry { name: "Sun".into(), mass: 1.989e30 },
        bodies: vec![BodyCatalogEntry::new("Comet", 1.0e3, 1.0e11, 100.0).with_angle(std::f64::consts::FRAC_PI_2)],
    };
    let mut ctx = SimulationContext::initialize(&catalog, &Parameters::default()).unwrap();
    let comet = BodyId::Orbiting(0);

    // before the first tick positions are placed around the display center
    let p = ctx.position(comet).unwrap();
    assert_relative_eq!(p.x, 600.0, epsilon = 1e-9);
    assert_relative_eq!(p.y, 500.0, epsilon = 1e-9);

    ctx.set_time_scale(1e-12).unwrap();
    let center = orbsim::NVec2::new(600.0, 400.0);
    ctx.tick(center);
    let p = ctx.position(comet).unwrap();
    assert_relative_eq!(p.x, 600.0, epsilon = 1e-6);
    assert_relative_eq!(p.y, 500.0, epsilon = 1e-6);
}

// ==================================================================================
// Derived quantity tests
// ==================================================================================

#[test]
fn derived_quantities_for_earth() {
    let ctx = sun_earth();
    let d = ctx.query_derived(BodyId::Orbiting(0)).unwrap();

    assert_relative_eq!(d.force, G * 1.989e30 * 5.972e24 / (1.496e11 * 1.496e11), max_relative = 1e-12);
    assert_relative_eq!(d.acceleration, d.force / 5.972e24, max_relative = 1e-12);
    assert_relative_eq!(d.kinetic_energy + d.potential_energy, d.total_energy, max_relative = 1e-12);
    assert!(d.total_energy < 0.0);
    assert_relative_eq!(d.period, 3.156e7, max_relative = 1e-3);
}

#[test]
fn derived_quantities_follow_mass_changes() {
    let mut ctx = sun_earth();
    let earth = BodyId::Orbiting(0);
    let before = ctx.query_derived(earth).unwrap();

    ctx.set_body_mass(earth, 2.0 * 5.972e24).unwrap();
    let after = ctx.query_derived(earth).unwrap();

    assert_relative_eq!(after.force, 2.0 * before.force, max_relative = 1e-12);
    assert_relative_eq!(after.acceleration, before.acceleration, max_relative = 1e-12);
}

#[test]
fn central_body_has_no_derived_quantities() {
    let ctx = solar();
    assert!(matches!(ctx.query_derived(BodyId::Central), Err(SimError::InvalidArgument(_))));
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_from_yaml() {
    let yaml = r#"
parameters:
  seconds_per_tick: 3600.0
central:
  name: Star
  mass: 2.0e30
bodies:
  - name: A
    mass: 1.0e24
    radius: 1.0e11
    display_radius: 50.0
  - name: B
    mass: 2.0e24
    radius: 2.0e11
    display_radius: 90.0
    angle: 1.0
"#;
    let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.parameters.seconds_per_tick, 3600.0);
    assert_eq!(scenario.parameters.time_scale, 1.0);
    assert_eq!(scenario.parameters.frame_rate, 60);
    assert_eq!(scenario.catalog.bodies[0].angle, 0.0);
    assert_eq!(scenario.catalog.bodies[1].angle, 1.0);

    let ctx = scenario.initialize().unwrap();
    assert_eq!(ctx.central().name(), "Star");
    assert_eq!(ctx.seconds_per_tick(), 3600.0);
    assert_eq!(ctx.angle(BodyId::Orbiting(1)).unwrap(), 1.0);
}

#[test]
fn bundled_solar_system_file_matches_builtin() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("solar_system.yaml");
    let text = std::fs::read_to_string(path).unwrap();
    let cfg: ScenarioConfig = serde_yaml::from_str(&text).unwrap();

    assert_eq!(Scenario::build_scenario(cfg), Scenario::solar_system());
}
