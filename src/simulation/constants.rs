//! Physical constants and engine defaults

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67e-11;

/// Simulated seconds represented by one tick at time-scale 1 (one day)
pub const DEFAULT_SECONDS_PER_TICK: f64 = 86_400.0;

/// Reference driver rate (ticks per real second)
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Reference display size, the central body is pinned to its center
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
