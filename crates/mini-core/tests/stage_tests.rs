// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Stage stepping, gravity settling, animation and draw order.

use mini_core::{
    CoreError, Entity, Image, ImageKey, Particle, PhysicsConfig, Point, Rect, Renderer, ScreenPoint,
    Stage,
};

#[derive(Default)]
struct RecordingRenderer {
    keys: Vec<ImageKey>,
}

impl Renderer for RecordingRenderer {
    fn blit(&mut self, image: &Image, _section: Option<Rect>, _dest: ScreenPoint) {
        self.keys.push(image.key);
    }
}

fn falling(x: f32, y: f32) -> Particle {
    Particle::new(Entity::solid(Rect::new(x, y, 10.0, 10.0)), 10.0, 1.0)
        .unwrap_or_else(|err| unreachable!("{err}"))
}

#[test]
fn body_settles_on_floor_under_gravity() {
    let mut stage =
        Stage::new(PhysicsConfig::default()).unwrap_or_else(|err| unreachable!("{err}"));
    let floor = stage.add_static(Entity::solid(Rect::new(0.0, 100.0, 200.0, 20.0)));
    let body = stage.add_body(falling(10.0, 0.0)).unwrap_or_else(|err| unreachable!("{err}"));
    for _ in 0..100 {
        stage.tick();
    }
    assert_eq!(stage.tick_count(), 100);
    let settled = stage.body(body).map(|p| (p.entity().position(), p.velocity()));
    assert_eq!(settled, Some((Point::new(10.0, 90.0), Point::ZERO)));
    let floor_id = stage.statics().get_node(floor).map(Entity::id);
    assert_eq!(stage.body(body).and_then(|p| p.contacts().bottom), floor_id);
}

#[test]
fn bodies_stack_with_live_positions() {
    let mut stage =
        Stage::new(PhysicsConfig::default()).unwrap_or_else(|err| unreachable!("{err}"));
    stage.add_static(Entity::solid(Rect::new(0.0, 100.0, 200.0, 20.0)));
    let lower = stage.add_body(falling(10.0, 0.0)).unwrap_or_else(|err| unreachable!("{err}"));
    let upper = stage.add_body(falling(10.0, -30.0)).unwrap_or_else(|err| unreachable!("{err}"));
    let mut last = None;
    for _ in 0..120 {
        last = Some(stage.tick());
    }
    assert_eq!(stage.body(lower).map(|p| p.entity().y()), Some(90.0));
    assert_eq!(stage.body(upper).map(|p| p.entity().y()), Some(80.0));
    let lower_id = stage.body(lower).map(Particle::id);
    assert_eq!(stage.body(upper).and_then(|p| p.contacts().bottom), lower_id);
    let report = last.unwrap_or_default();
    assert_eq!(report.tick, 120);
    assert_eq!(report.moved, 2);
    // lower: floor below + upper on top; upper: lower below
    assert_eq!(report.contacts, 3);
}

#[test]
fn add_body_applies_stage_zero_band() {
    let config = PhysicsConfig {
        zero_band: 0.25,
        ..PhysicsConfig::default()
    };
    let mut stage = Stage::new(config).unwrap_or_else(|err| unreachable!("{err}"));
    let h = stage.add_body(falling(0.0, 0.0)).unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(stage.body(h).map(Particle::zero_band), Some(0.25));
}

#[test]
fn invalid_config_is_rejected() {
    let config = PhysicsConfig {
        zero_band: -1.0,
        ..PhysicsConfig::default()
    };
    assert!(matches!(Stage::new(config), Err(CoreError::InvalidZeroBand(_))));
}

#[test]
fn removed_body_stops_ticking() {
    let mut stage = Stage::default();
    let h = stage.add_body(falling(0.0, 0.0)).unwrap_or_else(|err| unreachable!("{err}"));
    assert!(stage.remove_body(h).is_ok());
    assert!(matches!(stage.remove_body(h), Err(CoreError::StaleHandle)));
    assert_eq!(stage.tick().moved, 0);
}

#[test]
fn draw_visits_statics_then_bodies() {
    let mut stage = Stage::default();
    let body = Particle::new(Entity::block(Point::ZERO, Image::new(ImageKey(3), 4, 4)), 1.0, 1.0)
        .unwrap_or_else(|err| unreachable!("{err}"));
    stage.add_body(body).ok();
    stage.add_static(Entity::block(Point::new(0.0, 50.0), Image::new(ImageKey(1), 4, 4)));
    stage.add_static(Entity::solid(Rect::new(0.0, 60.0, 4.0, 4.0)));
    stage.add_static(Entity::block(Point::new(0.0, 70.0), Image::new(ImageKey(2), 4, 4)));
    let mut r = RecordingRenderer::default();
    stage.draw(&mut r);
    assert_eq!(r.keys, vec![ImageKey(1), ImageKey(2), ImageKey(3)]);
}

#[test]
fn animate_all_steps_every_sprite() {
    let mut stage = Stage::default();
    let sheet = Image::new(ImageKey(9), 20, 10);
    let s = stage.add_static(
        Entity::block_sprite(Point::ZERO, sheet.clone(), 2, 1)
            .unwrap_or_else(|err| unreachable!("{err}")),
    );
    let body = Particle::new(
        Entity::block_sprite(Point::new(50.0, 0.0), sheet, 2, 1)
            .unwrap_or_else(|err| unreachable!("{err}")),
        1.0,
        1.0,
    )
    .unwrap_or_else(|err| unreachable!("{err}"));
    let b = stage.add_body(body).unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(stage.animate_all(None, 1), Ok(()));
    assert_eq!(stage.statics().get_node(s).and_then(Entity::current_frame), Some(1));
    assert_eq!(stage.body(b).and_then(|p| p.entity().current_frame()), Some(1));
    assert_eq!(stage.animate_all(None, 0), Err(CoreError::ZeroInterval));
}
