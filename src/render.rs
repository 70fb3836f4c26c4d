use macroquad::prelude::*;

use crate::direction::Facing;
use crate::game::{CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_Y, Game, PlayState, SPRITE_SCALE};
use crate::game_app::GAME_TITLE;
use crate::level::Level;
use crate::sprites::Sprites;

const SKY: Color = Color::new(0.53, 0.81, 0.92, 1.0);
const GRASS: Color = Color::new(0.30, 0.69, 0.31, 1.0);
const CLOUD: Color = Color::new(1.0, 1.0, 1.0, 0.85);
const BONE: Color = Color::new(0.82, 0.71, 0.55, 1.0);
const INK: Color = Color::new(0.20, 0.20, 0.20, 1.0);
const INK_MUTED: Color = Color::new(0.33, 0.33, 0.33, 1.0);
const ACCENT: Color = Color::new(0.88, 0.36, 0.71, 1.0);

/// Fraction of the companion sprite, from the top, that stays still;
/// the rest is the wagging rear.
const COMPANION_SPLIT: f32 = 0.65;
const WAG_RATE: f32 = 0.18;
const WAG_ANGLE: f32 = 0.18;

/// Fraction of the player sprite, from the top, that bounces while walking.
const PLAYER_SPLIT: f32 = 0.2;
const BOUNCE_RATE: f32 = 0.3;
const BOUNCE_PIXELS: f32 = 1.5;

/// Source-pixel overlap between the two halves of a split blit, hiding the
/// seam when one half moves.
const SPLIT_OVERLAP: f32 = 2.0;

fn text_params(font: &Font, size: u16, color: Color) -> TextParams<'_> {
    TextParams {
        font: Some(font),
        font_size: size,
        color,
        ..Default::default()
    }
}

fn draw_text_f(text: &str, x: f32, y: f32, font: &Font, size: u16, color: Color) {
    draw_text_ex(text, x, y, text_params(font, size, color));
}

fn measure_text_f(text: &str, font: &Font, size: u16) -> TextDimensions {
    measure_text(text, Some(font), size, 1.0)
}

fn draw_text_centered(text: &str, center_x: f32, y: f32, font: &Font, size: u16, color: Color) {
    let dims = measure_text_f(text, font, size);
    draw_text_f(text, center_x - dims.width / 2.0, y, font, size, color);
}

pub(crate) fn render(game: &Game, sprites: &Sprites, level: &Level) {
    match game.play_state {
        PlayState::Title => render_title(sprites),
        PlayState::Playing => render_playing(game, sprites),
        PlayState::Won => render_win(game, sprites, level),
    }
}

fn draw_backdrop() {
    clear_background(SKY);
    draw_clouds();
    draw_rectangle(0.0, GROUND_Y, CANVAS_WIDTH, CANVAS_HEIGHT - GROUND_Y, GRASS);
}

fn draw_clouds() {
    const CLOUDS: [(f32, f32); 4] = [(100.0, 60.0), (350.0, 90.0), (600.0, 50.0), (750.0, 100.0)];
    for (x, y) in CLOUDS {
        draw_circle(x, y, 25.0, CLOUD);
        draw_circle(x + 30.0, y - 10.0, 30.0, CLOUD);
        draw_circle(x + 60.0, y, 25.0, CLOUD);
        draw_circle(x + 30.0, y + 5.0, 20.0, CLOUD);
    }
}

/// Dog-bone shape: two knobs joined by a bar.
fn draw_treat(x: f32, y: f32) {
    draw_circle(x - 8.0, y, 5.0, BONE);
    draw_circle(x + 8.0, y, 5.0, BONE);
    draw_rectangle(x - 8.0, y - 3.0, 16.0, 6.0, BONE);
}

/// Draw a whole sprite x-centered and bottom-anchored at (x, y).
fn draw_sprite(texture: &Texture2D, x: f32, y: f32, mirrored: bool, scale: f32) {
    let w = texture.width() * scale;
    let h = texture.height() * scale;
    draw_texture_ex(
        texture,
        x - w / 2.0,
        y - h,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            flip_x: mirrored,
            ..Default::default()
        },
    );
}

/// The companion in two parts: a static head/chest and a rear that wags by
/// rotating about the split line.
fn draw_companion(sprites: &Sprites, x: f32, y: f32, frame: u32) {
    let texture = sprites.companion();
    let src_w = texture.width();
    let src_h = texture.height();
    let w = src_w * SPRITE_SCALE;
    let h = src_h * SPRITE_SCALE;
    let split = (src_h * COMPANION_SPLIT).floor();

    let top_src_h = split + SPLIT_OVERLAP;
    draw_texture_ex(
        texture,
        x - w / 2.0,
        y - h,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, top_src_h * SPRITE_SCALE)),
            source: Some(Rect::new(0.0, 0.0, src_w, top_src_h)),
            ..Default::default()
        },
    );

    let bottom_src_y = split - SPLIT_OVERLAP;
    let bottom_src_h = src_h - bottom_src_y;
    let pivot = vec2(x, y - h + split * SPRITE_SCALE);
    let angle = (frame as f32 * WAG_RATE).sin() * WAG_ANGLE;
    draw_texture_ex(
        texture,
        x - w / 2.0,
        pivot.y - SPLIT_OVERLAP * SPRITE_SCALE,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, bottom_src_h * SPRITE_SCALE)),
            source: Some(Rect::new(0.0, bottom_src_y, src_w, bottom_src_h)),
            rotation: angle,
            pivot: Some(pivot),
            ..Default::default()
        },
    );
}

/// The player in two parts while walking: bouncing hair over a static body.
/// Standing still draws the sprite whole.
fn draw_player(sprites: &Sprites, x: f32, y: f32, facing: Facing, moving: bool, frame: u32) {
    let texture = sprites.player();
    if !moving {
        draw_sprite(texture, x, y, facing.mirrored(), SPRITE_SCALE);
        return;
    }

    let src_w = texture.width();
    let src_h = texture.height();
    let w = src_w * SPRITE_SCALE;
    let h = src_h * SPRITE_SCALE;
    let split = (src_h * PLAYER_SPLIT).floor();
    let bounce = (frame as f32 * BOUNCE_RATE).sin() * BOUNCE_PIXELS;
    let mirrored = facing.mirrored();

    // Both halves span the full sprite width, so mirroring each in place
    // is the same as mirroring the assembled figure.
    let top_src_h = split + SPLIT_OVERLAP;
    draw_texture_ex(
        texture,
        x - w / 2.0,
        y - h + bounce,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, top_src_h * SPRITE_SCALE)),
            source: Some(Rect::new(0.0, 0.0, src_w, top_src_h)),
            flip_x: mirrored,
            ..Default::default()
        },
    );

    let bottom_src_y = split - SPLIT_OVERLAP;
    let bottom_src_h = src_h - bottom_src_y;
    draw_texture_ex(
        texture,
        x - w / 2.0,
        y - h + (split - SPLIT_OVERLAP) * SPRITE_SCALE,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, bottom_src_h * SPRITE_SCALE)),
            source: Some(Rect::new(0.0, bottom_src_y, src_w, bottom_src_h)),
            flip_x: mirrored,
            ..Default::default()
        },
    );
}

fn render_title(sprites: &Sprites) {
    draw_backdrop();
    let font = sprites.font();
    draw_text_centered(GAME_TITLE, CANVAS_WIDTH / 2.0, 160.0, font, 48, INK);
    draw_text_centered(
        "Press Enter to Start",
        CANVAS_WIDTH / 2.0,
        210.0,
        font,
        20,
        INK_MUTED,
    );
}

fn render_playing(game: &Game, sprites: &Sprites) {
    draw_backdrop();

    for treat in &game.treats {
        if !treat.collected {
            draw_treat(treat.x, treat.y);
        }
    }

    draw_companion(sprites, game.companion_x, GROUND_Y, game.anim_frame);
    draw_player(
        sprites,
        game.player_x,
        GROUND_Y,
        game.facing,
        game.moving,
        game.anim_frame,
    );

    let counter = format!("Treats: {}/{}", game.treats_collected, game.treats.len());
    draw_text_f(&counter, 10.0, 25.0, sprites.font(), 16, INK);
}

fn render_win(game: &Game, sprites: &Sprites, level: &Level) {
    draw_backdrop();

    draw_sprite(
        sprites.petting(),
        game.companion_x - 20.0,
        GROUND_Y,
        false,
        sprites.petting_scale(),
    );

    let font = sprites.font();
    draw_text_centered(&level.win_title, CANVAS_WIDTH / 2.0, 100.0, font, 48, INK);
    draw_text_centered(&level.win_message, CANVAS_WIDTH / 2.0, 145.0, font, 32, ACCENT);

    let summary = format!(
        "Treats collected: {}/{}",
        game.treats_collected,
        game.treats.len()
    );
    draw_text_centered(&summary, CANVAS_WIDTH / 2.0, 185.0, font, 20, INK_MUTED);
}
