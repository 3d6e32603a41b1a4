//! Dodge: steer the sinking dot through the gap of the scrolling walls
//!
//! One update per frame: apply key edges, scroll the walls, move the dot.
//! The first blocked move ends the run.

use log::info;
use macroquad::prelude::*;

use crate::config::{DodgeConfig, SCREEN};
use crate::dot::Dot;
use crate::game::LoopControl;
use crate::input::FrameInput;
use crate::texture::{RenderOptions, TextureHolder};
use crate::timer::Timer;
use crate::wall::WallPair;

pub struct DodgeGame {
    pub dot: Dot,
    pub walls: WallPair,
    pub timer: Timer,
}

impl DodgeGame {
    pub fn new(config: &DodgeConfig) -> Self {
        Self {
            dot: Dot::new().with_drift(config.drift),
            walls: WallPair::with_params(SCREEN, config.wall_speed, config.gap),
            timer: Timer::new(),
        }
    }

    /// Run one tick. `split` supplies the wall split on respawn, `now` is the
    /// clock in seconds.
    ///
    /// On game over the timer is paused, not stopped, so the survived time
    /// stays on screen for the final frame.
    pub fn update(
        &mut self,
        input: &FrameInput,
        split: impl FnMut() -> i32,
        now: f64,
    ) -> LoopControl {
        if input.quit {
            return LoopControl::Quit;
        }

        if !self.timer.is_started() {
            self.timer.start(now);
        }

        for &edge in &input.edges {
            self.dot.handle_edge(edge);
        }

        self.walls.advance(split);

        let outcome = self.dot.step(&self.walls.rects(), SCREEN);
        if outcome.blocked() {
            self.timer.pause(now);
            info!("game over after {:.1}s", self.timer.elapsed(now));
            return LoopControl::GameOver;
        }
        LoopControl::Continue
    }

    pub fn draw(&self, dot_texture: &TextureHolder, now: f64) {
        clear_background(WHITE);

        dot_texture.render(self.dot.x, self.dot.y, &RenderOptions::default());

        for wall in self.walls.rects() {
            let r = wall.to_mq();
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, BLACK);
        }

        let label = format!("{:.1}s", self.timer.elapsed(now));
        draw_text(&label, 8.0, 20.0, 20.0, DARKGRAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dot::{DOT_HEIGHT, DOT_VEL};
    use crate::input::KeyEdge;
    use macroquad::prelude::KeyCode;

    /// Tick until the game stops, one clock second per tick
    fn run_until_stopped(game: &mut DodgeGame) -> (LoopControl, f64) {
        let mut now = 0.0;
        loop {
            now += 1.0;
            let control = game.update(&FrameInput::default(), || 300, now);
            if control != LoopControl::Continue || now > 1000.0 {
                return (control, now);
            }
        }
    }

    #[test]
    fn test_idle_run_continues_until_floor() {
        let mut game = DodgeGame::new(&DodgeConfig::default());
        let (control, _) = run_until_stopped(&mut game);
        assert_eq!(control, LoopControl::GameOver);
        // sinks 5px per tick from y=220 until the floor check fails
        assert!(game.dot.y + DOT_HEIGHT > SCREEN.h);
    }

    #[test]
    fn test_survived_time_kept_after_game_over() {
        let mut game = DodgeGame::new(&DodgeConfig::default());
        let (control, ended_at) = run_until_stopped(&mut game);
        assert_eq!(control, LoopControl::GameOver);
        assert_eq!(ended_at, 47.0);
        // started on the first tick at t=1
        assert_eq!(game.timer.elapsed(ended_at), 46.0);
        assert_eq!(game.timer.elapsed(ended_at + 10.0), 46.0);
        assert!(game.timer.is_paused());
    }

    #[test]
    fn test_quit_request_ends_loop() {
        let mut game = DodgeGame::new(&DodgeConfig::default());
        let control = game.update(&FrameInput::closing(), || unreachable!(), 0.0);
        assert_eq!(control, LoopControl::Quit);
        assert!(control.should_stop());
        // nothing moved
        assert_eq!(game.walls.bottom.x, 540);
        assert_eq!(game.dot.y, 220);
    }

    #[test]
    fn test_first_tick_moves_walls_and_dot() {
        let mut game = DodgeGame::new(&DodgeConfig::default());
        let input = FrameInput::keys(&[KeyEdge::Down(KeyCode::W)]);
        let control = game.update(&input, || 300, 0.0);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(game.walls.bottom.x, 535);
        assert_eq!(game.dot.y, 220 - DOT_VEL + 5);
        assert!(game.timer.is_started());
    }

    #[test]
    fn test_flying_into_wall_ends_run() {
        let mut game = DodgeGame::new(&DodgeConfig {
            drift: 0,
            ..DodgeConfig::default()
        });
        game.dot.y = 300;
        let input = FrameInput::keys(&[KeyEdge::Down(KeyCode::D)]);
        let mut control = game.update(&input, || 300, 0.0);
        let mut ticks = 1;
        while control == LoopControl::Continue && ticks < 100 {
            control = game.update(&FrameInput::default(), || 300, 0.0);
            ticks += 1;
        }
        assert_eq!(control, LoopControl::GameOver);
        assert!(game.dot.collider().right() <= game.walls.bottom.x + 5);
    }
}
