// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Renderer port: the single blit primitive the core draws through.
//!
//! Image loading, surfaces and windows live outside the core. An [`Image`] is
//! an opaque key plus the pixel size the core needs to lay out sprite sheets.

use mini_geom::{Rect, ScreenPoint};

/// Opaque identifier of an image owned by the renderer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageKey(pub u32);

/// Handle to a loaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Image {
    /// Renderer-side key.
    pub key: ImageKey,
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Image {
    /// Creates an image handle.
    pub const fn new(key: ImageKey, width: u16, height: u16) -> Self {
        Self { key, width, height }
    }

    /// Full image rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, f32::from(self.width), f32::from(self.height))
    }
}

/// Draw target.
pub trait Renderer {
    /// Draws `section` of `image` (the whole image when `None`) with its
    /// top-left corner at `dest`.
    fn blit(&mut self, image: &Image, section: Option<Rect>, dest: ScreenPoint);
}
