//! Scroller: walk around a level larger than the window

use macroquad::prelude::*;

use crate::camera::Camera;
use crate::config::{ScrollerConfig, SCREEN};
use crate::game::LoopControl;
use crate::geometry::{Rect as IRect, Size};
use crate::input::FrameInput;
use crate::player::{Facing, Player};
use crate::texture::{Flip, RenderOptions, TextureHolder};

pub struct ScrollerGame {
    pub player: Player,
    pub camera: Camera,
    pub crates: Vec<IRect>,
    pub level: Size,
}

impl ScrollerGame {
    pub fn new(config: &ScrollerConfig) -> Self {
        let (x, y) = config.start;
        let mut camera = Camera::new(SCREEN, config.level);
        let player = Player::new(x, y, config.player_speed);
        camera.follow(player.bounds());
        Self {
            player,
            camera,
            crates: config.crates.clone(),
            level: config.level,
        }
    }

    pub fn update(&mut self, input: &FrameInput) -> LoopControl {
        if input.quit {
            return LoopControl::Quit;
        }
        for &edge in &input.edges {
            self.player.handle_edge(edge);
        }
        self.player.step(&self.crates, self.level);
        self.camera.follow(self.player.bounds());
        LoopControl::Continue
    }

    pub fn draw(&self, background: &TextureHolder, sprite_sheet: &TextureHolder) {
        clear_background(WHITE);

        background.render(0, 0, &RenderOptions::clipped(self.camera.view));

        for crate_box in &self.crates {
            let (sx, sy) = self.camera.to_screen(crate_box.x, crate_box.y);
            let r = IRect::new(sx, sy, crate_box.w, crate_box.h).to_mq();
            draw_rectangle(r.x, r.y, r.w, r.h, BROWN);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, BLACK);
        }

        let flip = match self.player.facing {
            Facing::Right => Flip::None,
            Facing::Left => Flip::Horizontal,
        };
        let (px, py) = self.camera.to_screen(self.player.x, self.player.y);
        let opts = RenderOptions::clipped(self.player.walk.clip()).flipped(flip);
        sprite_sheet.render(px, py, &opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyEdge;
    use macroquad::prelude::KeyCode;

    #[test]
    fn test_camera_tracks_player() {
        let config = ScrollerConfig {
            start: (600, 400),
            crates: Vec::new(),
            ..ScrollerConfig::default()
        };
        let mut game = ScrollerGame::new(&config);
        assert_eq!(game.camera.view.x, 600 + 32 - 320);

        game.update(&FrameInput::keys(&[KeyEdge::Down(KeyCode::D)]));
        assert_eq!(game.player.x, 610);
        assert_eq!(game.camera.view.x, 610 + 32 - 320);
    }

    #[test]
    fn test_camera_stays_inside_level() {
        let mut game = ScrollerGame::new(&ScrollerConfig::default());
        game.update(&FrameInput::keys(&[KeyEdge::Down(KeyCode::A), KeyEdge::Down(KeyCode::W)]));
        for _ in 0..10 {
            game.update(&FrameInput::default());
        }
        assert_eq!((game.player.x, game.player.y), (0, 0));
        assert_eq!((game.camera.view.x, game.camera.view.y), (0, 0));
        assert_eq!(game.player.walk.counter(), 11 % 16);
    }

    #[test]
    fn test_crates_block_walker() {
        let config = ScrollerConfig {
            start: (300, 300),
            crates: vec![IRect::new(370, 0, 10, 960)],
            ..ScrollerConfig::default()
        };
        let mut game = ScrollerGame::new(&config);
        game.update(&FrameInput::keys(&[KeyEdge::Down(KeyCode::D)]));
        assert_eq!(game.player.x, 300);
        game.update(&FrameInput::keys(&[KeyEdge::Up(KeyCode::D), KeyEdge::Down(KeyCode::A)]));
        assert_eq!(game.player.x, 290);
    }

    #[test]
    fn test_quit_request_ends_loop() {
        let mut game = ScrollerGame::new(&ScrollerConfig::default());
        let input = FrameInput {
            edges: vec![KeyEdge::Down(KeyCode::D)],
            quit: true,
        };
        assert_eq!(game.update(&input), LoopControl::Quit);
        // quitting frame applies no input
        assert_eq!(game.player.x, 0);
        assert!(game.player.vel.is_zero());
        assert_eq!(game.update(&FrameInput::default()), LoopControl::Continue);
    }
}
