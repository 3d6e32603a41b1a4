//! dot-arcade: two small 2D programs on macroquad
//!
//! - `dodge`: steer a sinking dot through the gap of scrolling walls
//! - `scroller`: an animated walker in a level larger than the window,
//!   followed by a clamped camera
//!
//! The game rules (movement, collision, animation, camera) are plain data
//! and functions; only the texture holder and the `draw` methods touch the GPU.

pub mod animation;
pub mod camera;
pub mod config;
pub mod dodge;
pub mod dot;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod player;
pub mod scroller;
pub mod texture;
pub mod timer;
pub mod wall;

pub use config::{ArcadeConfig, CONFIG_FILE, SCREEN};
pub use error::{AssetError, ConfigError};
pub use game::LoopControl;
pub use geometry::{check_collision, Rect, Size};
