//! Scroller: walk the animated sprite around a level bigger than the window
//!
//! W/A/S/D walk, Escape or closing the window quits.

use dot_arcade::input::poll_frame_input;
use dot_arcade::scroller::ScrollerGame;
use dot_arcade::texture::TextureHolder;
use dot_arcade::{ArcadeConfig, AssetError, LoopControl, CONFIG_FILE, SCREEN};
use log::{error, info};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Scroller".to_owned(),
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

struct Assets {
    sprite_sheet: TextureHolder,
    background: TextureHolder,
}

fn load_media(config: &ArcadeConfig) -> Result<Assets, AssetError> {
    let mut sprite_sheet = TextureHolder::new();
    sprite_sheet.load_from_file(&config.scroller.sprite_sheet)?;

    let mut background = TextureHolder::new();
    background.load_from_file(&config.scroller.background)?;

    Ok(Assets {
        sprite_sheet,
        background,
    })
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

    let mut game = ScrollerGame::new(&config.scroller);

    loop {
        match game.update(&poll_frame_input()) {
            LoopControl::Continue => {
                game.draw(&assets.background, &assets.sprite_sheet);
                next_frame().await;
            }
            control => {
                info!("stopping: {:?}", control);
                break;
            }
        }
    }
}
