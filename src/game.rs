use crate::direction::Facing;
use crate::input::FrameInput;
use crate::level::Level;

pub(crate) const CANVAS_WIDTH: f32 = 800.0;
pub(crate) const CANVAS_HEIGHT: f32 = 400.0;
pub(crate) const GROUND_Y: f32 = 320.0;
pub(crate) const SPRITE_SCALE: f32 = 0.12;

/// Treats rest this far above the ground line.
const TREAT_RAISE: f32 = 15.0;
/// A treat within this horizontal distance of the player is picked up.
const PICKUP_RANGE: f32 = 30.0;
/// Reaching within this horizontal distance of the companion wins.
const WIN_RANGE: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayState {
    Title,
    Playing,
    Won,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Treat {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) collected: bool,
}

pub(crate) struct Game {
    pub(crate) play_state: PlayState,
    pub(crate) player_x: f32,
    pub(crate) facing: Facing,
    /// Whether the player walked this frame. Reset every update.
    pub(crate) moving: bool,
    /// Frame counter driving both limb animations. Advances in every state.
    pub(crate) anim_frame: u32,
    pub(crate) treats: Vec<Treat>,
    pub(crate) treats_collected: usize,
    pub(crate) companion_x: f32,
    walk_speed: f32,
    /// Half the on-screen width of the trimmed player sprite, for clamping.
    player_half_width: f32,
}

impl Game {
    /// `player_sprite_width` is the width of the trimmed player sprite in
    /// source pixels; the clamp bound scales it the same way render does.
    pub(crate) fn new(level: &Level, player_sprite_width: f32) -> Self {
        let treats = level
            .treats
            .iter()
            .map(|spawn| Treat {
                x: spawn.x,
                y: GROUND_Y - TREAT_RAISE,
                collected: false,
            })
            .collect();
        Self {
            play_state: PlayState::Title,
            player_x: level.player_start_x,
            facing: Facing::Right,
            moving: false,
            anim_frame: 0,
            treats,
            treats_collected: 0,
            companion_x: level.companion_x,
            walk_speed: level.walk_speed,
            player_half_width: player_sprite_width * SPRITE_SCALE / 2.0,
        }
    }

    /// Advance one frame: state transitions, walking, pickups, win check.
    pub(crate) fn update(&mut self, input: &FrameInput) {
        self.anim_frame = self.anim_frame.wrapping_add(1);
        self.moving = false;

        match self.play_state {
            PlayState::Title => {
                if input.start {
                    self.play_state = PlayState::Playing;
                }
                return;
            }
            PlayState::Won => return,
            PlayState::Playing => {}
        }

        if input.left {
            self.player_x -= self.walk_speed;
            self.facing = Facing::Left;
            self.moving = true;
        }
        if input.right {
            self.player_x += self.walk_speed;
            self.facing = Facing::Right;
            self.moving = true;
        }

        self.player_x = self
            .player_x
            .clamp(self.player_half_width, CANVAS_WIDTH - self.player_half_width);

        for treat in &mut self.treats {
            if !treat.collected && (self.player_x - treat.x).abs() < PICKUP_RANGE {
                treat.collected = true;
                self.treats_collected += 1;
            }
        }

        if (self.player_x - self.companion_x).abs() < WIN_RANGE {
            self.play_state = PlayState::Won;
        }
    }
}
