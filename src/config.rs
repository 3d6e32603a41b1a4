//! Game settings loaded from `dot-arcade.ron`
//!
//! Every field has a default matching the built-in constants, so the file
//! (and any field in it) is optional.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::dot::DOT_DRIFT;
use crate::error::ConfigError;
use crate::geometry::{hits_any, Rect, Size};
use crate::player::{PLAYER_HEIGHT, PLAYER_VEL, PLAYER_WIDTH};
use crate::wall::{WALL_GAP, WALL_SPEED};

/// Default config file, relative to the working directory
pub const CONFIG_FILE: &str = "dot-arcade.ron";

/// Window size shared by both programs
pub const SCREEN: Size = Size::new(640, 480);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub dodge: DodgeConfig,
    pub scroller: ScrollerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeConfig {
    pub dot_texture: PathBuf,
    /// Pixels the walls move left per tick
    pub wall_speed: i32,
    /// Pixels the dot sinks per tick
    pub drift: i32,
    /// Vertical opening between the walls
    pub gap: i32,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        Self {
            dot_texture: PathBuf::from("cards.png"),
            wall_speed: WALL_SPEED,
            drift: DOT_DRIFT,
            gap: WALL_GAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    pub sprite_sheet: PathBuf,
    pub background: PathBuf,
    pub level: Size,
    pub player_speed: i32,
    pub start: (i32, i32),
    /// Solid boxes in level coordinates
    pub crates: Vec<Rect>,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            sprite_sheet: PathBuf::from("foo2.png"),
            background: PathBuf::from("bg.png"),
            level: Size::new(1280, 960),
            player_speed: PLAYER_VEL,
            start: (0, 0),
            crates: vec![
                Rect::new(400, 300, 120, 120),
                Rect::new(900, 600, 200, 80),
            ],
        }
    }
}

impl DodgeConfig {
    /// Replace values the game can't run with by their defaults
    fn validate(&mut self) {
        let defaults = Self::default();
        if self.wall_speed <= 0 {
            warn!(
                "dodge.wall_speed {} must be positive, using {}",
                self.wall_speed, defaults.wall_speed
            );
            self.wall_speed = defaults.wall_speed;
        }
        if self.gap < 0 || self.gap >= SCREEN.h {
            warn!("dodge.gap {} must be in 0..{}, using {}", self.gap, SCREEN.h, defaults.gap);
            self.gap = defaults.gap;
        }
    }
}

impl ScrollerConfig {
    fn start_box(&self) -> Rect {
        Rect::new(self.start.0, self.start.1, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Replace values the game can't run with by their defaults.
    ///
    /// The player must fit in the level and start clear of every crate,
    /// otherwise it could never move. Crates covering the start are dropped.
    fn validate(&mut self) {
        let defaults = Self::default();
        if self.player_speed <= 0 {
            warn!(
                "scroller.player_speed {} must be positive, using {}",
                self.player_speed, defaults.player_speed
            );
            self.player_speed = defaults.player_speed;
        }
        if self.level.w < PLAYER_WIDTH || self.level.h < PLAYER_HEIGHT {
            warn!(
                "scroller.level {:?} is smaller than the player, using {:?}",
                self.level, defaults.level
            );
            self.level = defaults.level;
        }
        let start_box = self.start_box();
        let in_level = Rect::of_size(self.level).contains_rect(&start_box);
        if !in_level || hits_any(&start_box, &self.crates) {
            warn!("scroller.start {:?} is blocked, using {:?}", self.start, defaults.start);
            self.start = defaults.start;
        }
        let start_box = self.start_box();
        let before = self.crates.len();
        self.crates.retain(|c| !c.overlaps(&start_box));
        if self.crates.len() != before {
            warn!("dropped {} crate(s) covering the start position", before - self.crates.len());
        }
    }
}

impl ArcadeConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Read and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_ron_str(&contents)?.validated())
    }

    /// Fix up out-of-range values, logging each one
    pub fn validated(mut self) -> Self {
        self.dodge.validate();
        self.scroller.validate();
        self
    }

    /// Load from `path`, falling back to defaults.
    /// A missing file is normal; anything else is logged.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
