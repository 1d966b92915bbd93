// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Entity geometry, sprite tables, animation and the draw contract.

use mini_core::{CoreError, Entity, Image, ImageKey, Point, Rect, Renderer, ScreenPoint};
use mini_geom::GeomError;

#[derive(Default)]
struct RecordingRenderer {
    blits: Vec<(ImageKey, Option<Rect>, ScreenPoint)>,
}

impl Renderer for RecordingRenderer {
    fn blit(&mut self, image: &Image, section: Option<Rect>, dest: ScreenPoint) {
        self.blits.push((image.key, section, dest));
    }
}

fn sheet() -> Image {
    // 4 columns x 2 rows of 16x24 cells
    Image::new(ImageKey(7), 64, 48)
}

#[test]
fn block_bounds_match_image() {
    let e = Entity::block(Point::new(3.0, 4.0), Image::new(ImageKey(1), 20, 10));
    assert_eq!(e.bounds(), Rect::new(3.0, 4.0, 20.0, 10.0));
    assert_eq!(e.bounds_offset(), Point::ZERO);
    assert_eq!(e.current_frame(), None);
}

#[test]
fn ids_are_unique() {
    let a = Entity::solid(Rect::new(0.0, 0.0, 1.0, 1.0));
    let b = Entity::solid(Rect::new(0.0, 0.0, 1.0, 1.0));
    assert_ne!(a.id(), b.id());
}

#[test]
fn geometry_mutators_only_touch_bounds() {
    let mut e = Entity::new(Point::new(0.0, 0.0), Point::new(10.0, 6.0), Point::new(2.0, 1.0), None)
        .unwrap_or_else(|err| unreachable!("{err}"));
    e.move_by(1.5, -2.0);
    assert_eq!(e.position(), Point::new(1.5, -2.0));
    e.set_x(5.0);
    e.set_y(7.0);
    assert_eq!((e.x(), e.y()), (5.0, 7.0));
    e.set_center(Point::new(50.0, 50.0));
    assert_eq!(e.position(), Point::new(45.0, 47.0));
    assert_eq!(e.center(), Point::new(50.0, 50.0));
    assert!(e.set_bounds(Point::new(4.0, 4.0), Point::new(2.0, 3.0)).is_ok());
    assert_eq!(e.bounds(), Rect::new(45.0, 47.0, 2.0, 3.0));
    assert_eq!(e.bounds_offset(), Point::new(4.0, 4.0));
    assert_eq!(
        e.set_bounds(Point::ZERO, Point::new(-1.0, 3.0)),
        Err(CoreError::Geometry(GeomError::NegativeSize {
            width: -1.0,
            height: 3.0
        }))
    );
}

#[test]
fn sprite_table_is_row_major() {
    let e = Entity::block_sprite(Point::ZERO, sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(e.frame_count(), 8);
    assert_eq!(e.bounds(), Rect::new(0.0, 0.0, 16.0, 24.0));
    let frames = e.sprite_sheet().map(|s| s.frames().to_vec()).unwrap_or_default();
    // cell (c, r) is frame c + r * columns
    assert_eq!(frames[0], Rect::new(0.0, 0.0, 16.0, 24.0));
    assert_eq!(frames[3], Rect::new(48.0, 0.0, 16.0, 24.0));
    assert_eq!(frames[4], Rect::new(0.0, 24.0, 16.0, 24.0));
    assert_eq!(frames[1 + 4], Rect::new(16.0, 24.0, 16.0, 24.0));
}

#[test]
fn zero_grid_is_rejected() {
    assert_eq!(
        Entity::block_sprite(Point::ZERO, sheet(), 0, 2).map(|_| ()),
        Err(CoreError::InvalidSpriteGrid { columns: 0, rows: 2 })
    );
    assert_eq!(
        Entity::sprite(Point::ZERO, Point::new(1.0, 1.0), Point::ZERO, sheet(), 3, 0).map(|_| ()),
        Err(CoreError::InvalidSpriteGrid { columns: 3, rows: 0 })
    );
}

#[test]
fn raw_animation_steps_every_interval_and_wraps() {
    let mut e = Entity::block_sprite(Point::ZERO, sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    let mut seen = Vec::new();
    for _ in 0..(3 * 9) {
        e.animate(None, 3).ok();
        seen.push(e.current_frame().unwrap_or(u16::MAX));
    }
    assert_eq!(&seen[..6], &[0, 0, 1, 1, 1, 2]);
    // after 8 steps (24 calls) the frame is back at 0
    assert_eq!(seen[23], 0);
    assert_eq!(seen[26], 1);
}

#[test]
fn sequence_animation_wraps_index() {
    let mut e = Entity::block_sprite(Point::ZERO, sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    let walk: &[u16] = &[5, 6, 7];
    let mut seen = Vec::new();
    for _ in 0..4 {
        e.animate(Some(walk), 1).ok();
        seen.push(e.current_frame().unwrap_or(u16::MAX));
    }
    assert_eq!(seen, vec![6, 7, 5, 6]);
}

#[test]
fn animation_rejects_bad_arguments() {
    let mut e = Entity::block_sprite(Point::ZERO, sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(e.animate(None, 0), Err(CoreError::ZeroInterval));
    let empty: &[u16] = &[];
    let bad: &[u16] = &[1, 8];
    assert_eq!(e.animate(Some(empty), 1), Err(CoreError::EmptyFrameSequence));
    assert_eq!(
        e.animate(Some(bad), 1),
        Err(CoreError::InvalidFrame { frame: 8, frames: 8 })
    );
    assert_eq!(e.current_frame(), Some(0));
}

#[test]
fn animation_without_sheet_is_noop() {
    let mut e = Entity::block(Point::ZERO, Image::new(ImageKey(1), 4, 4));
    assert_eq!(e.animate(None, 1), Ok(()));
    assert_eq!(e.current_frame(), None);
    assert!(e.set_frame(0).is_err());
}

#[test]
fn set_frame_selects_directly() {
    let mut e = Entity::block_sprite(Point::ZERO, sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    assert_eq!(e.set_frame(6), Ok(()));
    assert_eq!(e.frame_rect(), Some(Rect::new(32.0, 24.0, 16.0, 24.0)));
    assert_eq!(e.set_frame(8), Err(CoreError::InvalidFrame { frame: 8, frames: 8 }));
    assert_eq!(e.current_frame(), Some(6));
}

#[test]
fn draw_blits_whole_image_at_offset_position() {
    let e = Entity::new(
        Point::new(10.25, 20.5),
        Point::new(8.0, 8.0),
        Point::new(2.0, 3.0),
        Some(Image::new(ImageKey(3), 12, 12)),
    )
    .unwrap_or_else(|err| unreachable!("{err}"));
    let mut r = RecordingRenderer::default();
    e.draw(&mut r);
    // (10.25 - 2, 20.5 - 3) = (8.25, 17.5) -> (8, 18)
    assert_eq!(r.blits, vec![(ImageKey(3), None, ScreenPoint::new(8, 18))]);
}

#[test]
fn draw_position_rounds_half_away_from_zero() {
    let mut e = Entity::solid(Rect::new(-2.5, 2.5, 1.0, 1.0));
    assert_eq!(e.draw_position(), ScreenPoint::new(-3, 3));
    e.set_position(Point::new(-0.4, 0.4));
    assert_eq!(e.draw_position(), ScreenPoint::new(0, 0));
}

#[test]
fn draw_blits_current_frame_section() {
    let mut e = Entity::block_sprite(Point::new(1.0, 1.0), sheet(), 4, 2)
        .unwrap_or_else(|err| unreachable!("{err}"));
    e.set_frame(3).ok();
    let mut r = RecordingRenderer::default();
    e.draw(&mut r);
    assert_eq!(
        r.blits,
        vec![(ImageKey(7), Some(Rect::new(48.0, 0.0, 16.0, 24.0)), ScreenPoint::new(1, 1))]
    );
}

#[test]
fn imageless_entity_draws_nothing() {
    let e = Entity::solid(Rect::new(0.0, 0.0, 5.0, 5.0));
    let mut r = RecordingRenderer::default();
    e.draw(&mut r);
    assert!(r.blits.is_empty());
}
