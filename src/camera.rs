//! Viewport into a level larger than the window

use crate::geometry::{Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    pub view: Rect,
    level: Size,
}

impl Camera {
    pub fn new(viewport: Size, level: Size) -> Self {
        Self {
            view: Rect::new(0, 0, viewport.w, viewport.h),
            level,
        }
    }

    /// Center on `target`, then keep the view inside the level.
    ///
    /// Each axis is clamped independently to `0..=level - viewport`. A level
    /// smaller than the viewport pins that axis to 0.
    pub fn follow(&mut self, target: Rect) {
        let (cx, cy) = target.center();
        self.view.x = clamp_axis(cx - self.view.w / 2, self.level.w - self.view.w);
        self.view.y = clamp_axis(cy - self.view.h / 2, self.level.h - self.view.h);
    }

    /// Level coordinates to screen coordinates
    pub fn to_screen(&self, x: i32, y: i32) -> (i32, i32) {
        (x - self.view.x, y - self.view.y)
    }
}

fn clamp_axis(pos: i32, max: i32) -> i32 {
    pos.min(max).max(0)
}
