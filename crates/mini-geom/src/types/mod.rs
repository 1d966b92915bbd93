// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the simulation (points, rectangles).
//!
//! Overlap semantics are exclusive on edges so that flush contact can be
//! detected by exact equality of opposing edges.

#[doc = "Two-component float points and integer screen points."]
pub mod point;
#[doc = "Axis-aligned rectangles (world space)."]
pub mod rect;
