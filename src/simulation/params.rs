//! Runtime parameters for the simulation and its driver
//!
//! `Parameters` holds:
//! - the simulated seconds one tick represents at time-scale 1,
//! - the initial global time-scale,
//! - driver settings: frame rate and display size (the central body is
//!   pinned to the display center)

use std::time::Duration;

use super::constants::{DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_SECONDS_PER_TICK, DEFAULT_WIDTH};
use super::error::{require_positive, SimError, SimResult};
use super::states::NVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub seconds_per_tick: f64, // simulated seconds per tick at 1x
    pub time_scale: f64,       // initial global multiplier
    pub frame_rate: u32,       // ticks per real second
    pub width: u32,            // display width
    pub height: u32,           // display height
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            seconds_per_tick: DEFAULT_SECONDS_PER_TICK,
            time_scale: 1.0,
            frame_rate: DEFAULT_FRAME_RATE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> SimResult<()> {
        require_positive("seconds per tick", self.seconds_per_tick)?;
        require_positive("time scale", self.time_scale)?;
        if self.frame_rate == 0 {
            return Err(SimError::invalid("frame rate must be positive"));
        }
        Ok(())
    }

    /// Display center the central body is pinned to
    pub fn center(&self) -> NVec2 {
        NVec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Real time between two ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}
