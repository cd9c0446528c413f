//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, get_frame_time, is_key_pressed};

const ACTION_KEYS: [KeyCode; 6] =
    [KeyCode::A, KeyCode::G, KeyCode::I, KeyCode::T, KeyCode::N, KeyCode::Escape];

pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    /// Seconds since the previous frame.
    pub dt: f32,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|key| is_key_pressed(*key)).collect();
    FrameInput { keys_pressed, dt: get_frame_time() }
}
