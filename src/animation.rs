//! Walk cycle over a fixed sprite-sheet clip table

use crate::geometry::Rect;

/// Number of frames in the walk cycle
pub const WALKING_FRAMES: usize = 4;

/// Ticks each frame stays on screen
pub const TICKS_PER_FRAME: usize = 4;

/// Size of one clip on the sheet
pub const CLIP_WIDTH: i32 = 64;
pub const CLIP_HEIGHT: i32 = 205;

/// Clip table, left to right along the sheet
pub const CLIPS: [Rect; WALKING_FRAMES] = [
    Rect::new(0, 0, CLIP_WIDTH, CLIP_HEIGHT),
    Rect::new(CLIP_WIDTH, 0, CLIP_WIDTH, CLIP_HEIGHT),
    Rect::new(CLIP_WIDTH * 2, 0, CLIP_WIDTH, CLIP_HEIGHT),
    Rect::new(CLIP_WIDTH * 3, 0, CLIP_WIDTH, CLIP_HEIGHT),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCycle {
    counter: usize,
}

impl WalkCycle {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    /// Advance one tick. Standing still snaps back to the first frame.
    pub fn tick(&mut self, walking: bool) {
        if !walking {
            self.counter = 0;
            return;
        }
        self.counter += 1;
        if self.counter / TICKS_PER_FRAME >= WALKING_FRAMES {
            self.counter = 0;
        }
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn frame(&self) -> usize {
        self.counter / TICKS_PER_FRAME
    }

    pub fn clip(&self) -> Rect {
        CLIPS[self.frame()]
    }
}
