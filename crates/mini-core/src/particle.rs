// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Physically simulated entities.

use mini_geom::Point;

use crate::entity::{Entity, EntityId};
use crate::error::CoreError;
use crate::obstacle::Bounded;
use crate::seq::Sequence;
use crate::sweep;

/// Velocity components with magnitude below this count as zero in the
/// collision resolver.
pub const DEFAULT_ZERO_BAND: f32 = 1.0e-4;

/// Side of a particle's collision box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// `y` edge.
    Top,
    /// `x + width` edge.
    Right,
    /// `y + height` edge.
    Bottom,
    /// `x` edge.
    Left,
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// What each side of a particle touched during the last move.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Obstacle resting on or hit by the top edge.
    pub top: Option<EntityId>,
    /// Obstacle touching the right edge.
    pub right: Option<EntityId>,
    /// Obstacle under the bottom edge.
    pub bottom: Option<EntityId>,
    /// Obstacle touching the left edge.
    pub left: Option<EntityId>,
}

impl Contacts {
    /// Contact on `side`.
    pub const fn get(&self, side: Side) -> Option<EntityId> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// Records `id` on `side`, replacing any previous contact.
    pub fn set(&mut self, side: Side, id: EntityId) {
        let slot = match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        };
        *slot = Some(id);
    }

    /// Touching sides with their obstacles.
    pub fn iter(&self) -> impl Iterator<Item = (Side, EntityId)> + '_ {
        Side::ALL
            .into_iter()
            .filter_map(|side| self.get(side).map(|id| (side, id)))
    }

    /// Number of touching sides.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if no side touches anything.
    pub const fn is_empty(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Entity with velocity, mass and a speed cap.
///
/// Invariants:
/// - `mass` is finite and `> 0`, `max_speed` finite and `>= 0`;
/// - `|velocity| <= max_speed` after every velocity mutation (rescaled
///   uniformly, direction kept);
/// - `contacts` describes the last move call only.
#[derive(Debug)]
pub struct Particle {
    entity: Entity,
    velocity: Point,
    mass: f32,
    max_speed: f32,
    contacts: Contacts,
    zero_band: f32,
}

impl Particle {
    /// Wraps `entity` at rest.
    pub fn new(entity: Entity, max_speed: f32, mass: f32) -> Result<Self, CoreError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(CoreError::InvalidMass(mass));
        }
        if !(max_speed.is_finite() && max_speed >= 0.0) {
            return Err(CoreError::InvalidMaxSpeed(max_speed));
        }
        Ok(Self {
            entity,
            velocity: Point::ZERO,
            mass,
            max_speed,
            contacts: Contacts::default(),
            zero_band: DEFAULT_ZERO_BAND,
        })
    }

    /// Builder form of [`Particle::set_zero_band`].
    pub fn with_zero_band(mut self, band: f32) -> Result<Self, CoreError> {
        self.set_zero_band(band)?;
        Ok(self)
    }

    /// Sets the band below which velocity components count as zero.
    pub fn set_zero_band(&mut self, band: f32) -> Result<(), CoreError> {
        if !(band.is_finite() && band >= 0.0) {
            return Err(CoreError::InvalidZeroBand(band));
        }
        self.zero_band = band;
        Ok(())
    }

    /// Zero band in use.
    pub const fn zero_band(&self) -> f32 {
        self.zero_band
    }

    /// Sets the velocity, rescaling it onto the speed cap if it exceeds it.
    pub fn set_speed(&mut self, vx: f32, vy: f32) {
        let v = Point::new(vx, vy);
        let len = vx.hypot(vy);
        self.velocity = if len > self.max_speed {
            // halved so the norm stays finite for components near f32::MAX
            let half = v.scale(0.5);
            half.scale(self.max_speed / half.length())
        } else {
            v
        };
    }

    /// Applies a force for one tick: `velocity += force / mass`, then caps.
    pub fn set_forces(&mut self, fx: f32, fy: f32) {
        self.set_speed(self.velocity.x + fx / self.mass, self.velocity.y + fy / self.mass);
    }

    /// Current velocity.
    pub const fn velocity(&self) -> Point {
        self.velocity
    }

    /// Mass.
    pub const fn mass(&self) -> f32 {
        self.mass
    }

    /// Speed cap.
    pub const fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Contacts recorded by the last move.
    pub const fn contacts(&self) -> Contacts {
        self.contacts
    }

    /// Identity of the owned entity.
    pub const fn id(&self) -> EntityId {
        self.entity.id()
    }

    /// Owned entity.
    pub const fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Owned entity, mutably (teleports, animation).
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    /// Releases the entity.
    pub fn into_entity(self) -> Entity {
        self.entity
    }

    /// Advances one tick, resolving collisions against `obstacles` when given.
    ///
    /// Without obstacles the particle simply moves by its velocity and reports
    /// no contacts.
    pub fn move_through<O: Bounded>(&mut self, obstacles: Option<&Sequence<O>>) -> Contacts {
        match obstacles {
            Some(seq) => self.move_among(seq),
            None => {
                self.contacts = Contacts::default();
                self.entity.move_by(self.velocity.x, self.velocity.y);
                self.contacts
            }
        }
    }

    /// Advances one tick against any obstacle iterator.
    ///
    /// The iterator is walked twice (resting contacts, then the swept test),
    /// so it must be cheap to clone. An entry carrying this particle's id is
    /// skipped.
    pub fn move_among<I>(&mut self, obstacles: I) -> Contacts
    where
        I: IntoIterator,
        I::IntoIter: Clone,
        I::Item: Bounded,
    {
        self.contacts = sweep::resolve(
            &mut self.entity,
            &mut self.velocity,
            self.zero_band,
            obstacles.into_iter(),
        );
        self.contacts
    }
}
