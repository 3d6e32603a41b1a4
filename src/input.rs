//! Keyboard edges and velocity deltas
//!
//! Velocity only changes on key edges: a key-down adds its delta once,
//! the matching key-up takes it back. Held keys and OS key repeat do nothing.

use macroquad::prelude::*;

/// One key transition seen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Down(KeyCode),
    Up(KeyCode),
}

/// Per-axis velocity in pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity {
    pub vx: i32,
    pub vy: i32,
}

impl Velocity {
    pub fn new(vx: i32, vy: i32) -> Self {
        Self { vx, vy }
    }

    pub fn is_zero(&self) -> bool {
        self.vx == 0 && self.vy == 0
    }

    /// Adjust velocity for one key edge. Unmapped keys are ignored.
    pub fn apply(&mut self, edge: KeyEdge, speed: i32) {
        let (key, sign) = match edge {
            KeyEdge::Down(key) => (key, 1),
            KeyEdge::Up(key) => (key, -1),
        };
        if let Some((dx, dy)) = direction_of(key) {
            self.vx += dx * speed * sign;
            self.vy += dy * speed * sign;
        }
    }
}

/// Unit direction for the W/A/S/D keys
pub fn direction_of(key: KeyCode) -> Option<(i32, i32)> {
    match key {
        KeyCode::W => Some((0, -1)),
        KeyCode::S => Some((0, 1)),
        KeyCode::A => Some((-1, 0)),
        KeyCode::D => Some((1, 0)),
        _ => None,
    }
}

/// Everything the update step needs from one frame of input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub edges: Vec<KeyEdge>,
    /// Window close requested or Escape pressed
    pub quit: bool,
}

impl FrameInput {
    pub fn keys(edges: &[KeyEdge]) -> Self {
        Self {
            edges: edges.to_vec(),
            quit: false,
        }
    }

    pub fn closing() -> Self {
        Self {
            edges: Vec::new(),
            quit: true,
        }
    }
}

/// Poll macroquad for this frame's key edges and quit request.
///
/// Needs `prevent_quit()` to have been called so closing the window is
/// reported here instead of ending the process.
pub fn poll_frame_input() -> FrameInput {
    FrameInput {
        edges: poll_key_edges(),
        quit: is_quit_requested() || is_key_pressed(KeyCode::Escape),
    }
}

/// Collect this frame's key edges from macroquad.
///
/// Releases come first so a tap inside one frame nets out to zero.
pub fn poll_key_edges() -> Vec<KeyEdge> {
    get_keys_released()
        .into_iter()
        .map(KeyEdge::Up)
        .chain(get_keys_pressed().into_iter().map(KeyEdge::Down))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release_cancel() {
        let mut v = Velocity::default();
        v.apply(KeyEdge::Down(KeyCode::D), 13);
        assert_eq!(v, Velocity::new(13, 0));
        v.apply(KeyEdge::Down(KeyCode::W), 13);
        assert_eq!(v, Velocity::new(13, -13));
        v.apply(KeyEdge::Up(KeyCode::D), 13);
        v.apply(KeyEdge::Up(KeyCode::W), 13);
        assert!(v.is_zero());
    }

    #[test]
    fn test_opposite_keys_cancel_while_held() {
        let mut v = Velocity::default();
        v.apply(KeyEdge::Down(KeyCode::A), 10);
        v.apply(KeyEdge::Down(KeyCode::D), 10);
        assert!(v.is_zero());
        v.apply(KeyEdge::Up(KeyCode::A), 10);
        assert_eq!(v.vx, 10);
    }

    #[test]
    fn test_unmapped_key_is_noop() {
        let mut v = Velocity::new(3, -4);
        v.apply(KeyEdge::Down(KeyCode::Q), 13);
        v.apply(KeyEdge::Up(KeyCode::Space), 13);
        assert_eq!(v, Velocity::new(3, -4));
    }

    #[test]
    fn test_direction_table() {
        assert_eq!(direction_of(KeyCode::W), Some((0, -1)));
        assert_eq!(direction_of(KeyCode::S), Some((0, 1)));
        assert_eq!(direction_of(KeyCode::A), Some((-1, 0)));
        assert_eq!(direction_of(KeyCode::D), Some((1, 0)));
        assert_eq!(direction_of(KeyCode::Up), None);
    }
}
