// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declarative scene description and stage construction.

use mini_core::{CoreError, Entity, Image, ImageKey, Particle, PhysicsConfig, Stage};
use mini_geom::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Sprite grid applied to an entity's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteGrid {
    /// Columns in the sheet.
    pub columns: u8,
    /// Rows in the sheet.
    pub rows: u8,
}

/// One entity: collision box plus optional display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    /// Collision box.
    pub bounds: Rect,
    /// Image top-left relative to the collision box.
    #[serde(default)]
    pub offset: Point,
    /// Image drawn for the entity.
    #[serde(default)]
    pub image: Option<Image>,
    /// Slices `image` into frames when present.
    #[serde(default)]
    pub sprite: Option<SpriteGrid>,
}

impl EntitySpec {
    /// Imageless box.
    pub const fn solid(bounds: Rect) -> Self {
        Self {
            bounds,
            offset: Point::ZERO,
            image: None,
            sprite: None,
        }
    }

    /// Builds the entity, re-validating the deserialized box.
    pub fn build(&self) -> Result<Entity, CoreError> {
        let raw = self.bounds;
        let b = Rect::try_new(raw.x(), raw.y(), raw.width(), raw.height())?;
        match (&self.image, self.sprite) {
            (Some(image), Some(grid)) => Entity::sprite(
                b.position(),
                b.size(),
                self.offset,
                image.clone(),
                grid.columns,
                grid.rows,
            ),
            (image, _) => Entity::new(b.position(), b.size(), self.offset, image.clone()),
        }
    }
}

/// A moving body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySpec {
    /// Entity carried by the body.
    pub entity: EntitySpec,
    /// Initial velocity (capped on load).
    #[serde(default)]
    pub velocity: Point,
    /// Mass.
    pub mass: f32,
    /// Speed cap.
    pub max_speed: f32,
}

impl BodySpec {
    /// Builds the particle.
    pub fn build(&self) -> Result<Particle, CoreError> {
        let mut body = Particle::new(self.entity.build()?, self.max_speed, self.mass)?;
        body.set_speed(self.velocity.x, self.velocity.y);
        Ok(body)
    }
}

/// Saved scene: physics parameters, scenery and bodies in stage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SceneConfig {
    /// Stage physics.
    pub physics: PhysicsConfig,
    /// Static scenery.
    pub statics: Vec<EntitySpec>,
    /// Moving bodies.
    pub bodies: Vec<BodySpec>,
}

impl SceneConfig {
    /// Small box room with a few falling crates.
    pub fn demo() -> Self {
        let wall = |x, y, w, h| EntitySpec::solid(Rect::new(x, y, w, h));
        let crate_at = |x: f32, y: f32, vx: f32, key: u32| BodySpec {
            entity: EntitySpec {
                bounds: Rect::new(x, y, 16.0, 16.0),
                offset: Point::ZERO,
                image: Some(Image::new(ImageKey(key), 16, 16)),
                sprite: None,
            },
            velocity: Point::new(vx, 0.0),
            mass: 1.0,
            max_speed: 12.0,
        };
        Self {
            physics: PhysicsConfig::default(),
            statics: vec![
                wall(0.0, 224.0, 320.0, 16.0),
                wall(0.0, 0.0, 16.0, 224.0),
                wall(304.0, 0.0, 16.0, 224.0),
                wall(120.0, 160.0, 80.0, 8.0),
            ],
            bodies: vec![
                crate_at(40.0, 20.0, 2.0, 1),
                crate_at(150.0, 0.0, 0.0, 2),
                crate_at(250.0, 40.0, -3.0, 3),
            ],
        }
    }

    /// Builds a stage with every static and body in file order.
    pub fn build_stage(&self) -> Result<Stage, CoreError> {
        let mut stage = Stage::new(self.physics)?;
        for spec in &self.statics {
            stage.add_static(spec.build()?);
        }
        for spec in &self.bodies {
            stage.add_body(spec.build()?)?;
        }
        Ok(stage)
    }
}
