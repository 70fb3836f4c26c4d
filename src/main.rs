use macroquad::window::next_frame;

use pup_quest::game_app::{App, window_conf};
use pup_quest::sprites::Sprites;

#[macroquad::main(window_conf)]
async fn main() {
    let mut app = App::new(Sprites::load().await);
    while app.tick() {
        next_frame().await;
    }
}
