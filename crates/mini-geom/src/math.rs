// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers.

/// Rounds `value` to the nearest integer, ties away from zero.
///
/// `2.5 → 3`, `-2.5 → -3`. Out-of-range values saturate at the `i32` bounds
/// and NaN maps to `0`.
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_away(value: f32) -> i32 {
    // `f32::round` already breaks ties away from zero; the cast saturates.
    value.round() as i32
}
