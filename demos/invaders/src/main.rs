mod assets;
mod entities;
mod game;

use anyhow::Result;
use ember2d::Engine;

use crate::game::{InvadersGame, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

fn main() -> Result<()> {
    env_logger::init();

    Engine::new()
        .with_title("Space Invaders")
        .with_size(PLAYFIELD_WIDTH as u32, PLAYFIELD_HEIGHT as u32)
        .run(InvadersGame::new())
}
