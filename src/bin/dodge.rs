//! Dodge: keep the dot clear of the scrolling walls
//!
//! W/A/S/D steer, Escape or closing the window quits. The run ends at the
//! first collision. Load failures are logged and the program exits normally.

use dot_arcade::dodge::DodgeGame;
use dot_arcade::input::poll_frame_input;
use dot_arcade::texture::TextureHolder;
use dot_arcade::wall::{SPLIT_MAX, SPLIT_MIN};
use dot_arcade::{ArcadeConfig, AssetError, LoopControl, CONFIG_FILE, SCREEN};
use log::{error, info};
use macroquad::prelude::*;
use macroquad::rand;

fn window_conf() -> Conf {
    Conf {
        window_title: "Dodge".to_owned(),
        window_width: SCREEN.w,
        window_height: SCREEN.h,
        window_resizable: false,
        platform: miniquad::conf::Platform {
            swap_interval: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Textures owned for the whole run, released when dropped
struct Assets {
    dot: TextureHolder,
}

fn load_media(config: &ArcadeConfig) -> Result<Assets, AssetError> {
    let mut dot = TextureHolder::new();
    dot.load_from_file(&config.dodge.dot_texture)?;
    Ok(Assets { dot })
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ArcadeConfig::load_or_default(CONFIG_FILE);
    let assets = match load_media(&config) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load media: {}", e);
            return;
        }
    };

    prevent_quit();
    rand::srand(miniquad::date::now() as u64);

    let mut game = DodgeGame::new(&config.dodge);

    loop {
        let input = poll_frame_input();
        let now = get_time();
        let control = game.update(&input, || rand::gen_range(SPLIT_MIN, SPLIT_MAX), now);

        match control {
            LoopControl::Quit => {
                info!("quit requested");
                break;
            }
            LoopControl::GameOver => {
                // one last frame showing the survived time
                game.draw(&assets.dot, now);
                next_frame().await;
                break;
            }
            LoopControl::Continue => {
                game.draw(&assets.dot, now);
                next_frame().await;
            }
        }
    }
}
