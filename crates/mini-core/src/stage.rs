// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Headless fixed-step driver.
//!
//! A [`Stage`] owns the static scenery and the moving bodies. Each
//! [`Stage::tick`] applies gravity to every body in insertion order and moves
//! it against all statics followed by all other bodies. Positions are read
//! live, so a body moved earlier in the tick is seen at its new position by
//! the bodies after it.

use tracing::{debug, warn};

use crate::config::PhysicsConfig;
use crate::entity::Entity;
use crate::error::CoreError;
use crate::obstacle::ObstacleRef;
use crate::particle::Particle;
use crate::render::Renderer;
use crate::seq::{NodeHandle, Sequence};

/// Summary of one [`Stage::tick`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based index of the tick just run.
    pub tick: u64,
    /// Bodies moved.
    pub moved: usize,
    /// Touching sides recorded across all bodies.
    pub contacts: usize,
}

/// Scenery, bodies and physics parameters.
#[derive(Debug, Default)]
pub struct Stage {
    statics: Sequence<Entity>,
    bodies: Sequence<Particle>,
    config: PhysicsConfig,
    tick: u64,
}

impl Stage {
    /// Empty stage using `config`.
    pub fn new(config: PhysicsConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            statics: Sequence::new(),
            bodies: Sequence::new(),
            config,
            tick: 0,
        })
    }

    /// Physics parameters.
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Ticks run so far.
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Static scenery in insertion order.
    pub const fn statics(&self) -> &Sequence<Entity> {
        &self.statics
    }

    /// Bodies in insertion order.
    pub const fn bodies(&self) -> &Sequence<Particle> {
        &self.bodies
    }

    /// Adds scenery.
    pub fn add_static(&mut self, entity: Entity) -> NodeHandle {
        self.statics.push(entity)
    }

    /// Adds a body, giving it the stage's zero band.
    pub fn add_body(&mut self, mut body: Particle) -> Result<NodeHandle, CoreError> {
        body.set_zero_band(self.config.zero_band)?;
        Ok(self.bodies.push(body))
    }

    /// Removes scenery.
    pub fn remove_static(&mut self, handle: NodeHandle) -> Result<Entity, CoreError> {
        self.statics.remove_node(handle)
    }

    /// Removes a body.
    pub fn remove_body(&mut self, handle: NodeHandle) -> Result<Particle, CoreError> {
        self.bodies.remove_node(handle)
    }

    /// Body behind `handle`.
    pub fn body(&self, handle: NodeHandle) -> Option<&Particle> {
        self.bodies.get_node(handle)
    }

    /// Body behind `handle`, mutably.
    pub fn body_mut(&mut self, handle: NodeHandle) -> Option<&mut Particle> {
        self.bodies.get_node_mut(handle)
    }

    /// Runs one fixed step.
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;
        let Self {
            statics,
            bodies,
            config,
            tick,
        } = self;
        let gravity = config.gravity;
        let mut report = TickReport {
            tick: *tick,
            ..TickReport::default()
        };

        let mut cursor = bodies.first_handle();
        while let Some(handle) = cursor {
            let moved = bodies.update_detached(handle, |body, rest| {
                let mass = body.mass();
                body.set_forces(gravity.x * mass, gravity.y * mass);
                let obstacles = statics
                    .iter()
                    .map(ObstacleRef::Entity)
                    .chain(rest.iter().map(ObstacleRef::Particle));
                body.move_among(obstacles)
            });
            match moved {
                Ok(contacts) => {
                    report.moved += 1;
                    report.contacts += contacts.count();
                }
                Err(err) => warn!(?handle, %err, "skipping body"),
            }
            cursor = bodies.next_handle(handle);
        }

        debug!(tick = report.tick, moved = report.moved, contacts = report.contacts, "stage tick");
        report
    }

    /// Steps sprite animation of every static and body.
    pub fn animate_all(&mut self, frames: Option<&[u16]>, interval: u16) -> Result<(), CoreError> {
        let mut outcome = Ok(());
        self.statics.for_each_mut(|_, entity| {
            if outcome.is_ok() {
                outcome = entity.animate(frames, interval);
            }
        });
        self.bodies.for_each_mut(|_, body| {
            if outcome.is_ok() {
                outcome = body.entity_mut().animate(frames, interval);
            }
        });
        outcome
    }

    /// Draws statics, then bodies.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for entity in &self.statics {
            entity.draw(renderer);
        }
        for body in &self.bodies {
            body.entity().draw(renderer);
        }
    }
}
