// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Two-phase swept AABB resolver.
//!
//! Phase 1 finds resting contacts against the pre-move box and cancels
//! velocity that would push into them. Phase 2 sweeps the pre-move box along
//! the Phase-1 velocity and clamps against each obstacle ahead of the motion.
//!
//! The Phase-2 footprint is not refreshed after a clamp, so a particle
//! stopped on one axis by an earlier obstacle can still pass through a later
//! one the stale footprint did not reach. Obstacle order therefore matters.

use mini_geom::{Point, Rect};
use tracing::trace;

use crate::entity::{Entity, EntityId};
use crate::obstacle::Bounded;
use crate::particle::{Contacts, Side};

/// Direction of one velocity component relative to the zero band.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Sign {
    Neg,
    Zero,
    Pos,
}

impl Sign {
    #[allow(clippy::float_cmp)]
    fn of(v: f32, band: f32) -> Self {
        if v == 0.0 || v.abs() < band {
            Self::Zero
        } else if v > 0.0 {
            Self::Pos
        } else {
            Self::Neg
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Moves `entity` by `velocity` for one tick, clamping against `obstacles`.
pub(crate) fn resolve<I>(
    entity: &mut Entity,
    velocity: &mut Point,
    band: f32,
    obstacles: I,
) -> Contacts
where
    I: Iterator + Clone,
    I::Item: Bounded,
{
    let own = entity.id();
    let footprint = entity.bounds();
    let mut contacts = resting_contacts(own, footprint, obstacles.clone());

    if contacts.top.is_some() && velocity.y < band {
        velocity.y = 0.0;
    }
    if contacts.right.is_some() && velocity.x > -band {
        velocity.x = 0.0;
    }
    if contacts.bottom.is_some() && velocity.y > -band {
        velocity.y = 0.0;
    }
    if contacts.left.is_some() && velocity.x < band {
        velocity.x = 0.0;
    }

    let displacement = *velocity;
    for obs in obstacles {
        if obs.id() == own {
            continue;
        }
        let sx = Sign::of(velocity.x, band);
        let sy = Sign::of(velocity.y, band);
        if sx == Sign::Zero && sy == Sign::Zero {
            break;
        }
        let bounds = obs.bounds();
        let sweep = Point::new(
            if sx == Sign::Zero { 0.0 } else { displacement.x },
            if sy == Sign::Zero { 0.0 } else { displacement.y },
        );
        if !footprint.swept(sweep).intersects(&bounds) {
            continue;
        }
        let ahead_x = ahead(sx, footprint.x(), footprint.right(), bounds.x(), bounds.right());
        let ahead_y = ahead(sy, footprint.y(), footprint.bottom(), bounds.y(), bounds.bottom());
        let axis = match (ahead_x, ahead_y) {
            (true, true) => {
                let tx = time_to_contact(
                    sx,
                    footprint.x(),
                    footprint.right(),
                    bounds.x(),
                    bounds.right(),
                    sweep.x,
                );
                let ty = time_to_contact(
                    sy,
                    footprint.y(),
                    footprint.bottom(),
                    bounds.y(),
                    bounds.bottom(),
                    sweep.y,
                );
                if tx >= ty {
                    Axis::X
                } else {
                    Axis::Y
                }
            }
            (true, false) => Axis::X,
            (false, true) => Axis::Y,
            (false, false) => continue,
        };
        let side = clamp(entity, velocity, axis, if axis == Axis::X { sx } else { sy }, bounds);
        contacts.set(side, obs.id());
        trace!(particle = %own, obstacle = %obs.id(), ?side, "contact resolved");
    }

    entity.move_by(velocity.x, velocity.y);
    contacts
}

#[allow(clippy::float_cmp)]
fn resting_contacts<I>(own: EntityId, footprint: Rect, obstacles: I) -> Contacts
where
    I: Iterator,
    I::Item: Bounded,
{
    let mut contacts = Contacts::default();
    for obs in obstacles {
        let id = obs.id();
        if id == own {
            continue;
        }
        let b = obs.bounds();
        if b.is_empty() {
            continue;
        }
        if footprint.overlaps_x(&b) && b.bottom() == footprint.y() {
            contacts.set(Side::Top, id);
        }
        if footprint.overlaps_y(&b) && footprint.right() == b.x() {
            contacts.set(Side::Right, id);
        }
        if footprint.overlaps_x(&b) && footprint.bottom() == b.y() {
            contacts.set(Side::Bottom, id);
        }
        if footprint.overlaps_y(&b) && b.right() == footprint.x() {
            contacts.set(Side::Left, id);
        }
    }
    contacts
}

/// Whether the obstacle span `[lo_o, hi_o]` lies entirely in the direction of
/// motion from the particle span `[lo_p, hi_p]`.
fn ahead(sign: Sign, lo_p: f32, hi_p: f32, lo_o: f32, hi_o: f32) -> bool {
    match sign {
        Sign::Pos => hi_p <= lo_o,
        Sign::Neg => hi_o <= lo_p,
        Sign::Zero => false,
    }
}

/// Fraction of the tick's displacement until the facing edges meet.
fn time_to_contact(sign: Sign, lo_p: f32, hi_p: f32, lo_o: f32, hi_o: f32, d: f32) -> f32 {
    match sign {
        Sign::Pos => (lo_o - hi_p) / d,
        Sign::Neg => (hi_o - lo_p) / d,
        Sign::Zero => f32::INFINITY,
    }
}

fn clamp(entity: &mut Entity, velocity: &mut Point, axis: Axis, sign: Sign, obs: Rect) -> Side {
    match (axis, sign) {
        (Axis::X, Sign::Neg) => {
            entity.set_x(obs.right());
            velocity.x = 0.0;
            Side::Left
        }
        (Axis::X, _) => {
            entity.set_x(obs.x() - entity.width());
            velocity.x = 0.0;
            Side::Right
        }
        (Axis::Y, Sign::Neg) => {
            entity.set_y(obs.bottom());
            velocity.y = 0.0;
            Side::Top
        }
        (Axis::Y, _) => {
            entity.set_y(obs.y() - entity.height());
            velocity.y = 0.0;
            Side::Bottom
        }
    }
}
