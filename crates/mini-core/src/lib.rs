// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mini-core: entities, particles and swept AABB collision resolution.
//!
//! Per tick the caller applies forces or sets velocity on each [`Particle`],
//! then moves it once against an ordered obstacle [`Sequence`]. The mover
//! records which sides rest against which obstacle, cancels velocity pushing
//! into those contacts, sweeps the remaining displacement and clamps against
//! anything ahead. [`Stage`] packages that loop headlessly.
//!
//! Drawing goes through the [`Renderer`] port; the core never loads images.

mod config;
mod entity;
mod error;
mod obstacle;
mod particle;
mod render;
pub mod seq;
mod stage;
mod sweep;

pub use config::{PhysicsConfig, DEFAULT_GRAVITY};
pub use entity::{Entity, EntityId, SpriteSheet};
pub use error::CoreError;
pub use obstacle::{Bounded, ObstacleRef};
pub use particle::{Contacts, Particle, Side, DEFAULT_ZERO_BAND};
pub use render::{Image, ImageKey, Renderer};
pub use seq::{Disposer, DropItems, NodeHandle, Sequence};
pub use stage::{Stage, TickReport};

pub use mini_geom::{Point, Rect, ScreenPoint};
