use macroquad::prelude::*;

/// Keyboard state sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FrameInput {
    /// Walk-left key held (Left arrow or A).
    pub(crate) left: bool,
    /// Walk-right key held (Right arrow or D).
    pub(crate) right: bool,
    /// Start pressed this frame (Enter).
    pub(crate) start: bool,
    /// Quit requested this frame (Escape).
    pub(crate) quit: bool,
}

/// Poll the keyboard. Call exactly once per frame, before the update step.
pub(crate) fn poll() -> FrameInput {
    FrameInput {
        left: any_down(&[KeyCode::Left, KeyCode::A]),
        right: any_down(&[KeyCode::Right, KeyCode::D]),
        start: is_key_pressed(KeyCode::Enter),
        quit: is_key_pressed(KeyCode::Escape),
    }
}

fn any_down(keys: &[KeyCode]) -> bool {
    keys.iter().any(|&key| is_key_down(key))
}
