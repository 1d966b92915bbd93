// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for Mini.

This crate provides:
- Two-component points (`Point`) used for positions, sizes and velocities.
- Axis-aligned rectangles (`Rect`) with open-interval overlap.
- Screen-space integer points (`ScreenPoint`) and draw-position rounding.

Design notes:
- Overlap is exclusive on edges: two rectangles that only share a boundary do
  not intersect. The particle resolver relies on this to tell a resting
  contact (flush edges) apart from penetration.
- Float32 throughout; there is no rotation and no non-axis-aligned shape.
"]

/// Rounding helpers shared by the draw contract.
pub mod math;
/// Foundational geometric types.
pub mod types;

pub use math::round_half_away;
pub use types::point::{Point, ScreenPoint};
pub use types::rect::{intersects, GeomError, Rect};
