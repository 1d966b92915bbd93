// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Positioned, optionally animated visual entities.
//!
//! An [`Entity`] pairs a collision box (`bounds`) with the image drawn for it.
//! `bounds_offset` is where the image's top-left sits relative to the box, so a
//! sprite with transparent margins can collide on its visible body only.

use std::sync::atomic::{AtomicU64, Ordering};

use mini_geom::{Point, Rect, ScreenPoint};

use crate::error::CoreError;
use crate::render::{Image, Renderer};

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique entity identity.
///
/// Used by the resolver to skip a particle's own entry in the obstacle
/// sequence and by contacts to name what a side is touching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocates a fresh identity.
    pub fn fresh() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw value, for logs.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Row-major frame table plus animation cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    frames: Vec<Rect>,
    columns: u8,
    rows: u8,
    current: u16,
    timer: u16,
    step: usize,
}

impl SpriteSheet {
    /// Slices `sheet` into a `columns x rows` grid of equal cells.
    ///
    /// Cell `(c, r)` becomes frame `c + r * columns`. Cell extents use integer
    /// division of the sheet size, so trailing pixels are ignored.
    pub fn new(sheet: &Image, columns: u8, rows: u8) -> Result<Self, CoreError> {
        if columns == 0 || rows == 0 {
            return Err(CoreError::InvalidSpriteGrid { columns, rows });
        }
        let (w, h) = Self::cell_size(sheet, columns, rows);
        let mut frames = Vec::new();
        frames.try_reserve_exact(usize::from(columns) * usize::from(rows))?;
        for r in 0..rows {
            for c in 0..columns {
                frames.push(Rect::new(f32::from(c) * w, f32::from(r) * h, w, h));
            }
        }
        Ok(Self {
            frames,
            columns,
            rows,
            current: 0,
            timer: 0,
            step: 0,
        })
    }

    fn cell_size(sheet: &Image, columns: u8, rows: u8) -> (f32, f32) {
        (
            f32::from(sheet.width / u16::from(columns)),
            f32::from(sheet.height / u16::from(rows)),
        )
    }

    /// Columns in the grid.
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Rows in the grid.
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// All frame rectangles, row-major.
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Currently displayed frame index.
    pub const fn current(&self) -> u16 {
        self.current
    }

    fn check(&self, frame: u16) -> Result<(), CoreError> {
        if usize::from(frame) < self.frames.len() {
            Ok(())
        } else {
            Err(CoreError::InvalidFrame {
                frame,
                frames: self.frames.len(),
            })
        }
    }

    fn animate(&mut self, frames: Option<&[u16]>, interval: u16) -> Result<(), CoreError> {
        if interval == 0 {
            return Err(CoreError::ZeroInterval);
        }
        if let Some(seq) = frames {
            if seq.is_empty() {
                return Err(CoreError::EmptyFrameSequence);
            }
            for &frame in seq {
                self.check(frame)?;
            }
        }
        self.timer = self.timer.saturating_add(1);
        if self.timer < interval {
            return Ok(());
        }
        self.timer = 0;
        match frames {
            Some(seq) => {
                self.step = if self.step + 1 >= seq.len() { 0 } else { self.step + 1 };
                self.current = seq[self.step];
            }
            None => {
                let next = usize::from(self.current) + 1;
                self.current = if next >= self.frames.len() { 0 } else { self.current + 1 };
            }
        }
        Ok(())
    }
}

/// Collision box plus display data.
///
/// Not `Clone`: each entity carries a unique [`EntityId`].
#[derive(Debug)]
pub struct Entity {
    id: EntityId,
    bounds: Rect,
    bounds_offset: Point,
    image: Option<Image>,
    sprite: Option<SpriteSheet>,
}

impl Entity {
    /// Entity with explicit collision size and image offset.
    pub fn new(
        position: Point,
        size: Point,
        offset: Point,
        image: Option<Image>,
    ) -> Result<Self, CoreError> {
        let bounds = Rect::try_new(position.x, position.y, size.x, size.y)?;
        Ok(Self {
            id: EntityId::fresh(),
            bounds,
            bounds_offset: offset,
            image,
            sprite: None,
        })
    }

    /// Entity whose collision box is exactly the image.
    pub fn block(position: Point, image: Image) -> Self {
        let size = Point::new(f32::from(image.width), f32::from(image.height));
        Self {
            id: EntityId::fresh(),
            bounds: Rect::from_parts(position, size),
            bounds_offset: Point::ZERO,
            image: Some(image),
            sprite: None,
        }
    }

    /// Animated entity drawn from a `columns x rows` sprite sheet.
    pub fn sprite(
        position: Point,
        size: Point,
        offset: Point,
        sheet: Image,
        columns: u8,
        rows: u8,
    ) -> Result<Self, CoreError> {
        let table = SpriteSheet::new(&sheet, columns, rows)?;
        let mut entity = Self::new(position, size, offset, Some(sheet))?;
        entity.sprite = Some(table);
        Ok(entity)
    }

    /// Animated entity whose collision box is one sheet cell.
    pub fn block_sprite(
        position: Point,
        sheet: Image,
        columns: u8,
        rows: u8,
    ) -> Result<Self, CoreError> {
        if columns == 0 || rows == 0 {
            return Err(CoreError::InvalidSpriteGrid { columns, rows });
        }
        let (w, h) = SpriteSheet::cell_size(&sheet, columns, rows);
        Self::sprite(position, Point::new(w, h), Point::ZERO, sheet, columns, rows)
    }

    /// Imageless obstacle.
    pub fn solid(bounds: Rect) -> Self {
        Self {
            id: EntityId::fresh(),
            bounds,
            bounds_offset: Point::ZERO,
            image: None,
            sprite: None,
        }
    }

    /// Identity.
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Collision box.
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Top-left of the collision box.
    pub const fn position(&self) -> Point {
        self.bounds.position()
    }

    /// Left edge.
    pub const fn x(&self) -> f32 {
        self.bounds.x()
    }

    /// Top edge.
    pub const fn y(&self) -> f32 {
        self.bounds.y()
    }

    /// Collision width.
    pub const fn width(&self) -> f32 {
        self.bounds.width()
    }

    /// Collision height.
    pub const fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Center of the collision box.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Image top-left relative to the collision box.
    pub const fn bounds_offset(&self) -> Point {
        self.bounds_offset
    }

    /// Attached image, if any.
    pub const fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Sprite sheet, if animated.
    pub const fn sprite_sheet(&self) -> Option<&SpriteSheet> {
        self.sprite.as_ref()
    }

    /// Translates by `(dx, dy)`.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.bounds.translate(Point::new(dx, dy));
    }

    /// Moves the collision box's top-left.
    pub fn set_position(&mut self, position: Point) {
        self.bounds.set_position(position);
    }

    /// Sets the left edge.
    pub fn set_x(&mut self, x: f32) {
        self.bounds.set_x(x);
    }

    /// Sets the top edge.
    pub fn set_y(&mut self, y: f32) {
        self.bounds.set_y(y);
    }

    /// Centers the collision box on `center`.
    pub fn set_center(&mut self, center: Point) {
        self.bounds = self.bounds.centered_at(center);
    }

    /// Replaces the image offset and collision size; position is kept.
    pub fn set_bounds(&mut self, offset: Point, size: Point) -> Result<(), CoreError> {
        let resized = Rect::try_new(self.bounds.x(), self.bounds.y(), size.x, size.y)?;
        self.bounds_offset = offset;
        self.bounds = resized;
        Ok(())
    }

    /// Advances sprite animation by one call.
    ///
    /// Every `interval` calls the displayed frame moves on: to the next entry
    /// of `frames` when given (wrapping to its start), else to the next cell
    /// of the sheet (wrapping after the last). Entities without a sprite sheet
    /// ignore the call.
    pub fn animate(&mut self, frames: Option<&[u16]>, interval: u16) -> Result<(), CoreError> {
        match self.sprite.as_mut() {
            Some(sheet) => sheet.animate(frames, interval),
            None => Ok(()),
        }
    }

    /// Displays `frame` directly.
    pub fn set_frame(&mut self, frame: u16) -> Result<(), CoreError> {
        let Some(sheet) = self.sprite.as_mut() else {
            return Err(CoreError::InvalidFrame { frame, frames: 0 });
        };
        sheet.check(frame)?;
        sheet.current = frame;
        Ok(())
    }

    /// Currently displayed frame, if animated.
    pub fn current_frame(&self) -> Option<u16> {
        self.sprite.as_ref().map(SpriteSheet::current)
    }

    /// Number of frames in the sheet (zero when not animated).
    pub fn frame_count(&self) -> usize {
        self.sprite.as_ref().map_or(0, |s| s.frames.len())
    }

    /// Sheet rectangle of the current frame, if animated.
    pub fn frame_rect(&self) -> Option<Rect> {
        self.sprite
            .as_ref()
            .and_then(|s| s.frames.get(usize::from(s.current)).copied())
    }

    /// Pixel position the image is drawn at.
    pub fn draw_position(&self) -> ScreenPoint {
        ScreenPoint::round(self.bounds.position() - self.bounds_offset)
    }

    /// Blits the image (or the current frame of the sheet) through `renderer`.
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        if let Some(image) = &self.image {
            renderer.blit(image, self.frame_rect(), self.draw_position());
        }
    }
}
