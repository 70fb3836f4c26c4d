use macroquad::prelude::*;

use crate::game::{CANVAS_HEIGHT, CANVAS_WIDTH, Game};
use crate::sprites::Sprites;
use crate::{input, level, render, screen_wake};

pub(crate) const GAME_TITLE: &str = "Pup Quest";

/// The window matches the fixed play-field size; everything renders in
/// play-field coordinates.
pub fn window_conf() -> Conf {
    Conf {
        window_title: GAME_TITLE.to_string(),
        window_width: CANVAS_WIDTH as i32,
        window_height: CANVAS_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

pub struct App {
    game: Game,
    sprites: Sprites,
}

impl App {
    pub fn new(sprites: Sprites) -> Self {
        screen_wake::request();

        let game = Game::new(level::get(), sprites.player().width());
        Self { game, sprites }
    }

    /// Run one frame of the game loop. Returns false if the game should exit.
    pub fn tick(&mut self) -> bool {
        let input = input::poll();
        if input.quit {
            return false;
        }

        self.game.update(&input);
        render::render(&self.game, &self.sprites, level::get());

        true
    }
}
