//! Walking player for the scrolling level

use crate::animation::{WalkCycle, CLIP_HEIGHT, CLIP_WIDTH};
use crate::game::MoveOutcome;
use crate::geometry::{hits_any, Rect, Size};
use crate::input::{KeyEdge, Velocity};

pub const PLAYER_WIDTH: i32 = CLIP_WIDTH;
pub const PLAYER_HEIGHT: i32 = CLIP_HEIGHT;
pub const PLAYER_VEL: i32 = 10;

/// Which way the sprite looks; the sheet is drawn facing right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub vel: Velocity,
    pub walk: WalkCycle,
    pub facing: Facing,
    speed: i32,
}

impl Player {
    pub fn new(x: i32, y: i32, speed: i32) -> Self {
        Self {
            x,
            y,
            vel: Velocity::default(),
            walk: WalkCycle::new(),
            facing: Facing::Right,
            speed,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn handle_edge(&mut self, edge: KeyEdge) {
        self.vel.apply(edge, self.speed);
    }

    fn blocked(&self, level: Size, crates: &[Rect]) -> bool {
        let b = self.bounds();
        !Rect::of_size(level).contains_rect(&b) || hits_any(&b, crates)
    }

    /// Move inside the level, rolling back per axis on edge or crate contact,
    /// then advance the walk cycle.
    pub fn step(&mut self, crates: &[Rect], level: Size) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        self.x += self.vel.vx;
        if self.blocked(level, crates) {
            self.x -= self.vel.vx;
            outcome.blocked_x = true;
        }

        self.y += self.vel.vy;
        if self.blocked(level, crates) {
            self.y -= self.vel.vy;
            outcome.blocked_y = true;
        }

        if self.vel.vx < 0 {
            self.facing = Facing::Left;
        } else if self.vel.vx > 0 {
            self.facing = Facing::Right;
        }
        self.walk.tick(!self.vel.is_zero());

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::KeyCode;

    const LEVEL: Size = Size::new(1280, 960);

    #[test]
    fn test_walks_and_animates() {
        let mut p = Player::new(100, 100, PLAYER_VEL);
        p.handle_edge(KeyEdge::Down(KeyCode::D));
        for _ in 0..5 {
            assert!(!p.step(&[], LEVEL).blocked());
        }
        assert_eq!(p.x, 150);
        assert_eq!(p.walk.frame(), 1);
        assert_eq!(p.facing, Facing::Right);

        p.handle_edge(KeyEdge::Up(KeyCode::D));
        p.step(&[], LEVEL);
        assert_eq!(p.x, 150);
        assert_eq!(p.walk.counter(), 0);
    }

    #[test]
    fn test_level_edges_roll_back() {
        let mut p = Player::new(LEVEL.w - PLAYER_WIDTH - 3, 0, PLAYER_VEL);
        p.handle_edge(KeyEdge::Down(KeyCode::D));
        p.handle_edge(KeyEdge::Down(KeyCode::W));
        let outcome = p.step(&[], LEVEL);
        assert!(outcome.blocked_x && outcome.blocked_y);
        assert_eq!((p.x, p.y), (LEVEL.w - PLAYER_WIDTH - 3, 0));
    }

    #[test]
    fn test_crate_blocks_one_axis() {
        let crate_box = Rect::new(170, 0, 50, 960);
        let mut p = Player::new(100, 300, PLAYER_VEL);
        p.handle_edge(KeyEdge::Down(KeyCode::D));
        p.handle_edge(KeyEdge::Down(KeyCode::S));
        let outcome = p.step(&[crate_box], LEVEL);
        assert!(outcome.blocked_x);
        assert!(!outcome.blocked_y);
        assert_eq!((p.x, p.y), (100, 310));
        // still pushing counts as walking
        assert_eq!(p.walk.counter(), 1);
    }

    #[test]
    fn test_faces_last_horizontal_direction() {
        let mut p = Player::new(500, 300, PLAYER_VEL);
        p.handle_edge(KeyEdge::Down(KeyCode::A));
        p.step(&[], LEVEL);
        assert_eq!(p.facing, Facing::Left);
        p.handle_edge(KeyEdge::Up(KeyCode::A));
        p.handle_edge(KeyEdge::Down(KeyCode::S));
        p.step(&[], LEVEL);
        assert_eq!(p.facing, Facing::Left);
    }
}
