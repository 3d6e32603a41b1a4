//! Scrolling wall pair with a gap
//!
//! Two walls of equal width slide left each tick. The bottom wall spans from
//! its split line to the floor, the top wall from the ceiling down to `gap`
//! pixels above the split. Once the pair has left the screen it respawns at
//! the right edge around a freshly drawn split.

use log::debug;

use crate::geometry::{Rect, Size};

pub const WALL_START_X: i32 = 540;
pub const WALL_START_SPLIT: i32 = 260;
pub const WALL_WIDTH: i32 = 100;
pub const WALL_SPEED: i32 = 5;
pub const WALL_GAP: i32 = 150;

/// Range the respawn split is drawn from (half-open)
pub const SPLIT_MIN: i32 = 100;
pub const SPLIT_MAX: i32 = 400;

#[derive(Debug, Clone)]
pub struct WallPair {
    pub bottom: Rect,
    pub top: Rect,
    speed: i32,
    gap: i32,
    screen: Size,
}

impl WallPair {
    pub fn new(screen: Size) -> Self {
        Self::with_params(screen, WALL_SPEED, WALL_GAP)
    }

    pub fn with_params(screen: Size, speed: i32, gap: i32) -> Self {
        let mut pair = Self {
            bottom: Rect::new(WALL_START_X, 0, WALL_WIDTH, 0),
            top: Rect::new(WALL_START_X, 0, WALL_WIDTH, 0),
            speed,
            gap,
            screen,
        };
        pair.split_at(WALL_START_SPLIT);
        pair
    }

    /// Re-cut both walls around split line `y`
    fn split_at(&mut self, y: i32) {
        self.bottom.y = y;
        self.bottom.h = self.screen.h - y;
        self.top.y = 0;
        self.top.h = self.screen.h - (self.bottom.h + self.gap);
    }

    /// Both walls as a slice-friendly array
    pub fn rects(&self) -> [Rect; 2] {
        [self.bottom, self.top]
    }

    /// Scroll one tick. `split` is asked for a new split line only on respawn
    /// and should return a value in `SPLIT_MIN..SPLIT_MAX`.
    ///
    /// Returns true on the tick the pair respawned.
    pub fn advance(&mut self, mut split: impl FnMut() -> i32) -> bool {
        self.bottom.x -= self.speed;
        self.top.x -= self.speed;

        if self.bottom.right() >= 0 {
            return false;
        }

        self.bottom.x = self.screen.w;
        self.top.x = self.screen.w;
        let y = split();
        self.split_at(y);
        debug!("walls respawned with split at {}", y);
        true
    }
}
