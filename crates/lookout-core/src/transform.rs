use std::ops::{Add, AddAssign, Sub};

/// 2D offset in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Scale and translation currently applied to the viewer image.
///
/// Translation is in unscaled screen pixels, composed before the scale about
/// the image center, so panning speed does not depend on the zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub translate: Vec2,
    /// True only between pointer-down on the image and the matching pointer-up.
    pub panning: bool,
}

impl TransformState {
    /// The unzoomed, uncropped display state.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            panning: false,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translate == Vec2::ZERO
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}
