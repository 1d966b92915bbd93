// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stage-wide physics parameters.

use mini_geom::Point;

use crate::error::CoreError;
use crate::particle::DEFAULT_ZERO_BAND;

/// Default downward gravity, world units per tick² per unit mass.
pub const DEFAULT_GRAVITY: Point = Point::new(0.0, 0.5);

/// Physics parameters applied by a [`crate::Stage`] every tick.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhysicsConfig {
    /// Acceleration applied to every body (as force `mass * gravity`).
    pub gravity: Point,
    /// Zero band given to bodies added to the stage.
    pub zero_band: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            zero_band: DEFAULT_ZERO_BAND,
        }
    }
}

impl PhysicsConfig {
    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.zero_band.is_finite() && self.zero_band >= 0.0) {
            return Err(CoreError::InvalidZeroBand(self.zero_band));
        }
        if !self.gravity.is_finite() {
            return Err(CoreError::Geometry(mini_geom::GeomError::NonFinite));
        }
        Ok(())
    }
}
