//! Window configuration for the desktop app.

use arena_app::APP_NAME;
use macroquad::window::{Conf, screen_dpi_scale};
use std::env;

const DEFAULT_WINDOW_WIDTH: i32 = 1000;
const DEFAULT_WINDOW_HEIGHT: i32 = 750;
const UI_SCALE_ENV: &str = "ARENA_UI_SCALE";
const MIN_UI_SCALE: f32 = 0.5;
const MAX_UI_SCALE: f32 = 4.0;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale() -> f32 {
    let override_value = env::var(UI_SCALE_ENV).ok();
    resolve_ui_scale(screen_dpi_scale(), override_value.as_deref())
}

/// `ARENA_UI_SCALE` wins, then a high-DPI display, then 1.0.
fn resolve_ui_scale(dpi_scale: f32, ui_scale_override: Option<&str>) -> f32 {
    let override_scale = ui_scale_override
        .and_then(|raw| raw.parse::<f32>().ok())
        .filter(|scale| scale.is_finite());
    if let Some(scale) = override_scale {
        return scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE);
    }
    if dpi_scale.is_finite() && dpi_scale > 1.0 {
        return dpi_scale.clamp(MIN_UI_SCALE, MAX_UI_SCALE);
    }
    1.0
}
