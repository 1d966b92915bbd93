// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

use super::point::Point;

/// Error returned by validated rectangle construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// Width or height was negative.
    #[error("negative rectangle size: {width}x{height}")]
    NegativeSize {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// A coordinate or extent was NaN or infinite.
    #[error("non-finite rectangle component")]
    NonFinite,
}

/// Axis-aligned rectangle in world coordinates.
///
/// Invariants:
/// - `size.x >= 0` and `size.y >= 0` (checked by [`Rect::try_new`], debug-asserted
///   by [`Rect::new`]).
/// - `position` is the top-left corner; `y` grows downward.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    position: Point,
    size: Point,
}

impl Rect {
    /// Constructs a rectangle from its top-left corner and extents.
    ///
    /// Callers must pass non-negative extents; use [`Rect::try_new`] for
    /// untrusted input.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "invalid Rect: negative size");
        Self {
            position: Point::new(x, y),
            size: Point::new(width, height),
        }
    }

    /// Validated constructor: rejects negative or non-finite components.
    pub fn try_new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, GeomError> {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(GeomError::NonFinite);
        }
        if width < 0.0 || height < 0.0 {
            return Err(GeomError::NegativeSize { width, height });
        }
        Ok(Self::new(x, y, width, height))
    }

    /// Builds a rectangle from a position and a size point.
    pub fn from_parts(position: Point, size: Point) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Top-left corner.
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Extents (`x` = width, `y` = height).
    pub const fn size(&self) -> Point {
        self.size
    }

    /// Left edge.
    pub const fn x(&self) -> f32 {
        self.position.x
    }

    /// Top edge.
    pub const fn y(&self) -> f32 {
        self.position.y
    }

    /// Width.
    pub const fn width(&self) -> f32 {
        self.size.x
    }

    /// Height.
    pub const fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.size.x / 2.0,
            self.position.y + self.size.y / 2.0,
        )
    }

    /// Moves the top-left corner, keeping the size.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Replaces the extents.
    pub fn set_size(&mut self, size: Point) {
        debug_assert!(size.x >= 0.0 && size.y >= 0.0, "invalid Rect: negative size");
        self.size = size;
    }

    /// Sets the left edge.
    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    /// Sets the top edge.
    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    /// Translates the rectangle by `delta`.
    pub fn translate(&mut self, delta: Point) {
        self.position += delta;
    }

    /// Returns a copy placed so that its center is `center`.
    pub fn centered_at(&self, center: Point) -> Self {
        Self::from_parts(
            Point::new(center.x - self.size.x / 2.0, center.y - self.size.y / 2.0),
            self.size,
        )
    }

    /// Open-interval overlap of the horizontal spans.
    pub fn overlaps_x(&self, other: &Self) -> bool {
        self.right() > other.x() && other.right() > self.x()
    }

    /// Open-interval overlap of the vertical spans.
    pub fn overlaps_y(&self, other: &Self) -> bool {
        self.bottom() > other.y() && other.bottom() > self.y()
    }

    /// Returns `true` if the interiors overlap.
    ///
    /// Exclusive on edges: rectangles that only touch do not intersect, and a
    /// zero-size rectangle never intersects anything.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Returns `true` if the rectangle has no interior (zero width or height).
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Footprint extended toward `self + displacement`.
    ///
    /// Covers the rectangle and its translated copy along each axis
    /// independently, e.g. `(x, y, w, h)` swept by `(+dx, 0)` is
    /// `(x, y, w + dx, h)` and by `(-dx, 0)` is `(x - dx, y, w + dx, h)`.
    pub fn swept(&self, displacement: Point) -> Self {
        Self::new(
            self.position.x + displacement.x.min(0.0),
            self.position.y + displacement.y.min(0.0),
            self.size.x + displacement.x.abs(),
            self.size.y + displacement.y.abs(),
        )
    }
}

/// Free-function form of [`Rect::intersects`]; symmetric in its arguments.
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}
