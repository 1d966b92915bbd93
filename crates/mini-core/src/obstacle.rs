// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Obstacle capability.

use mini_geom::Rect;

use crate::entity::{Entity, EntityId};
use crate::particle::Particle;

/// Anything the resolver can collide against.
pub trait Bounded {
    /// Identity; a particle skips obstacles carrying its own id.
    fn id(&self) -> EntityId;
    /// Current collision box.
    fn bounds(&self) -> Rect;
}

impl Bounded for Entity {
    fn id(&self) -> EntityId {
        Self::id(self)
    }

    fn bounds(&self) -> Rect {
        Self::bounds(self)
    }
}

impl Bounded for Particle {
    fn id(&self) -> EntityId {
        self.entity().id()
    }

    fn bounds(&self) -> Rect {
        self.entity().bounds()
    }
}

impl<T: Bounded + ?Sized> Bounded for &T {
    fn id(&self) -> EntityId {
        (**self).id()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

/// Frozen snapshot.
impl Bounded for (EntityId, Rect) {
    fn id(&self) -> EntityId {
        self.0
    }

    fn bounds(&self) -> Rect {
        self.1
    }
}

/// Borrowed obstacle of either kind, for chaining mixed sequences.
#[derive(Debug, Copy, Clone)]
pub enum ObstacleRef<'a> {
    /// A plain entity.
    Entity(&'a Entity),
    /// Another particle.
    Particle(&'a Particle),
}

impl Bounded for ObstacleRef<'_> {
    fn id(&self) -> EntityId {
        match self {
            Self::Entity(e) => e.id(),
            Self::Particle(p) => Bounded::id(*p),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Self::Entity(e) => e.bounds(),
            Self::Particle(p) => Bounded::bounds(*p),
        }
    }
}
