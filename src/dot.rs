//! The dodging dot
//!
//! Moves one axis at a time; a move that leaves the playfield or lands on a
//! wall is undone on that axis only. After the vertical step the dot sinks by
//! a fixed drift, whether or not the vertical move was undone.

use log::debug;

use crate::game::MoveOutcome;
use crate::geometry::{hits_any, Rect, Size};
use crate::input::{KeyEdge, Velocity};

/// Dot dimensions
pub const DOT_WIDTH: i32 = 35;
pub const DOT_HEIGHT: i32 = 35;

/// Axis velocity added per held key
pub const DOT_VEL: i32 = 13;

/// Default downward drift per tick
pub const DOT_DRIFT: i32 = 5;

/// Starting offsets
pub const DOT_START: (i32, i32) = (70, 220);

#[derive(Debug, Clone)]
pub struct Dot {
    pub x: i32,
    pub y: i32,
    pub vel: Velocity,
    /// Collision box, follows (x, y)
    collider: Rect,
    drift: i32,
}

impl Dot {
    pub fn new() -> Self {
        Self::at(DOT_START.0, DOT_START.1)
    }

    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            vel: Velocity::default(),
            collider: Rect::new(x, y, DOT_WIDTH, DOT_HEIGHT),
            drift: DOT_DRIFT,
        }
    }

    pub fn with_drift(mut self, drift: i32) -> Self {
        self.drift = drift;
        self
    }

    pub fn collider(&self) -> Rect {
        self.collider
    }

    /// Adjust velocity from a key edge
    pub fn handle_edge(&mut self, edge: KeyEdge) {
        self.vel.apply(edge, DOT_VEL);
    }

    /// Left or right of the playfield
    fn out_of_bounds_x(&self, field: Size) -> bool {
        self.x < 0 || self.x + DOT_WIDTH > field.w
    }

    /// Above or below the playfield
    fn out_of_bounds_y(&self, field: Size) -> bool {
        self.y < 0 || self.y + DOT_HEIGHT > field.h
    }

    fn sync_collider(&mut self) {
        self.collider.x = self.x;
        self.collider.y = self.y;
    }

    /// Move by velocity, rolling back per axis on bounds or wall contact
    pub fn step(&mut self, walls: &[Rect], field: Size) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();

        self.x += self.vel.vx;
        self.sync_collider();
        if self.out_of_bounds_x(field) || hits_any(&self.collider, walls) {
            self.x -= self.vel.vx;
            self.sync_collider();
            outcome.blocked_x = true;
        }

        self.y += self.vel.vy;
        self.sync_collider();
        if self.out_of_bounds_y(field) || hits_any(&self.collider, walls) {
            self.y -= self.vel.vy;
            self.sync_collider();
            outcome.blocked_y = true;
        }

        // Drift is applied unconditionally and not validated until next tick
        self.y += self.drift;
        self.sync_collider();

        if outcome.blocked() {
            debug!("dot blocked at ({}, {}): {:?}", self.x, self.y, outcome);
        }
        outcome
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new()
    }
}
