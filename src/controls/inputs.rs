//! Input policy for drivers
//!
//! Maps raw UI inputs to the absolute values the engine accepts:
//! - a mass slider in [0, 1] covers 0.5x..1.5x of the body's original mass
//! - time-scale radio buttons pick one of a few fixed multipliers
//!
//! None of this is part of the engine; a different front end can choose a
//! different mapping and still drive the same `SimulationContext`.

use crate::simulation::error::{require_finite, require_positive, SimError, SimResult};

/// Lowest and highest slider multiplier of the original mass
pub const SLIDER_MIN_FACTOR: f64 = 0.5;
pub const SLIDER_MAX_FACTOR: f64 = 1.5;

/// Slider value in [0, 1] to an absolute mass
pub fn mass_from_slider(original_mass: f64, value: f64) -> SimResult<f64> {
    require_positive("original mass", original_mass)?;
    require_finite("slider value", value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(SimError::invalid(format!("slider value {value} outside [0, 1]")));
    }
    let factor = SLIDER_MIN_FACTOR + (SLIDER_MAX_FACTOR - SLIDER_MIN_FACTOR) * value;
    Ok(original_mass * factor)
}

/// Slider handle position for a mass, clamped to the slider's track
pub fn slider_from_mass(original_mass: f64, mass: f64) -> SimResult<f64> {
    require_positive("original mass", original_mass)?;
    require_finite("mass", mass)?;
    let value = (mass / original_mass - SLIDER_MIN_FACTOR) / (SLIDER_MAX_FACTOR - SLIDER_MIN_FACTOR);
    Ok(value.clamp(0.0, 1.0))
}

/// Time-scale choices offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeScalePreset {
    Quarter,
    Half,
    #[default]
    Normal,
    Double,
    Quadruple,
    Octuple,
}

impl TimeScalePreset {
    pub fn all() -> &'static [TimeScalePreset] {
        &[
            Self::Quarter,
            Self::Half,
            Self::Normal,
            Self::Double,
            Self::Quadruple,
            Self::Octuple,
        ]
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::Quarter => 0.25,
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
            Self::Quadruple => 4.0,
            Self::Octuple => 8.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quarter => "0.25x",
            Self::Half => "0.5x",
            Self::Normal => "1x",
            Self::Double => "2x",
            Self::Quadruple => "4x",
            Self::Octuple => "8x",
        }
    }

    /// Radio button index to preset
    pub fn from_index(index: usize) -> SimResult<Self> {
        Self::all()
            .get(index)
            .copied()
            .ok_or_else(|| SimError::invalid(format!("no time-scale preset at index {index}")))
    }
}
