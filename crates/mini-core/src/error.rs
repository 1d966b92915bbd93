// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the core containers, entities and particles.

use std::collections::TryReserveError;

use mini_geom::GeomError;
use thiserror::Error;

/// Errors emitted by the core.
///
/// Every variant except [`CoreError::ResourceExhausted`] is a caller mistake
/// (bad index, stale handle, malformed construction parameters). They are
/// reported instead of aborting so callers may recover, e.g. by ignoring a
/// stray obstacle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Indexed access outside `0..len`.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length at the time of the call.
        len: usize,
    },
    /// The node handle was removed, recycled, or belongs to another sequence.
    #[error("stale node handle")]
    StaleHandle,
    /// Sprite sheets need at least one column and one row.
    #[error("invalid sprite grid: {columns} columns x {rows} rows")]
    InvalidSpriteGrid {
        /// Requested columns.
        columns: u8,
        /// Requested rows.
        rows: u8,
    },
    /// A frame index does not address a cell of the sprite sheet.
    #[error("frame {frame} outside sprite sheet of {frames} frames")]
    InvalidFrame {
        /// Offending frame index.
        frame: u16,
        /// Number of frames in the sheet.
        frames: usize,
    },
    /// An animation frame sequence was supplied but empty.
    #[error("empty frame sequence")]
    EmptyFrameSequence,
    /// Animation intervals are counted in ticks and must be non-zero.
    #[error("animation interval must be at least one tick")]
    ZeroInterval,
    /// Mass must be finite and strictly positive.
    #[error("mass must be finite and positive, got {0}")]
    InvalidMass(f32),
    /// Speed cap must be finite and non-negative.
    #[error("max speed must be finite and non-negative, got {0}")]
    InvalidMaxSpeed(f32),
    /// Zero band must be finite and non-negative.
    #[error("zero band must be finite and non-negative, got {0}")]
    InvalidZeroBand(f32),
    /// Malformed rectangle parameters.
    #[error(transparent)]
    Geometry(#[from] GeomError),
    /// Storage could not grow.
    #[error("allocation failed: {0}")]
    ResourceExhausted(#[from] TryReserveError),
}
