//! Integer rectangles and the box overlap test
//!
//! Everything in the arcade (entities, walls, crates, sprite clips, the camera)
//! is an axis-aligned `Rect` in pixel units.

use serde::{Deserialize, Serialize};

/// Width/height pair for playfields and levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center point (integer division, rounds towards the origin)
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Same size, shifted by (dx, dy)
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Check whether two boxes overlap.
    ///
    /// Sides are half-open: boxes that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.bottom() <= other.y {
            return false;
        }
        if self.y >= other.bottom() {
            return false;
        }
        if self.right() <= other.x {
            return false;
        }
        if self.x >= other.right() {
            return false;
        }
        true
    }

    /// Check if `inner` lies fully inside this rect (edges may touch)
    pub fn contains_rect(&self, inner: &Rect) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.right() <= self.right()
            && inner.bottom() <= self.bottom()
    }

    /// Bounds of a playfield of the given size at the origin
    pub fn of_size(size: Size) -> Self {
        Self::new(0, 0, size.w, size.h)
    }

    /// Convert to a macroquad float rect for drawing
    pub fn to_mq(self) -> macroquad::math::Rect {
        macroquad::math::Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

/// Box collision detector, free-function form of [`Rect::overlaps`]
pub fn check_collision(a: Rect, b: Rect) -> bool {
    a.overlaps(&b)
}

/// True if `rect` overlaps any of `obstacles`
pub fn hits_any(rect: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|o| rect.overlaps(o))
}
