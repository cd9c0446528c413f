//! Drawing for the battle screen.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{event_log_lines, fighter_lines, help_text, recap_lines, status_text};
use arena_app::app_loop::{AppMode, AppState};
use arena_app::health_fraction;
use arena_core::Combatant;
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.2, g: 0.2, b: 0.2, a: 1.0 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 15.0;
const PANEL_PAD_Y: f32 = 25.0;
const LINE_HEIGHT: f32 = 20.0;
const BAR_HEIGHT: f32 = 12.0;

pub fn draw_frame(app: &AppState, layout: &FrameLayout, ui_scale: f32) {
    draw_panel_borders(layout, ui_scale);
    draw_status_panel(app, layout.status, ui_scale);
    draw_fighter_panel(app.engine().player(), GREEN, layout.player, ui_scale);
    draw_fighter_panel(app.engine().enemy(), RED, layout.enemy, ui_scale);
    draw_event_log(app, layout.event_log, ui_scale);
    draw_help_panel(app, layout.help, ui_scale);
}

fn draw_panel_borders(layout: &FrameLayout, ui_scale: f32) {
    for panel in [layout.status, layout.player, layout.enemy, layout.event_log, layout.help] {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            scaled(BORDER_THICKNESS, ui_scale),
            BORDER_COLOR,
        );
    }
}

fn draw_status_panel(app: &AppState, panel: PanelRect, ui_scale: f32) {
    let color = if app.notices.is_empty() { WHITE } else { ORANGE };
    draw_text(
        &status_text(app),
        panel.x + scaled(PANEL_PAD_X, ui_scale),
        panel.y + scaled(PANEL_PAD_Y, ui_scale),
        scaled(22.0, ui_scale),
        color,
    );
}

fn draw_fighter_panel(fighter: &Combatant, accent: Color, panel: PanelRect, ui_scale: f32) {
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let mut text_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);
    let lines = fighter_lines(fighter);

    for (index, line) in lines.iter().enumerate() {
        let (size, color) = if index == 0 { (24.0, accent) } else { (18.0, LIGHTGRAY) };
        draw_text(line, text_x, text_y, scaled(size, ui_scale), color);
        text_y += scaled(LINE_HEIGHT, ui_scale);
        if index == 0 {
            let bar_y = text_y - scaled(BAR_HEIGHT, ui_scale);
            draw_health_bar(fighter, text_x, bar_y, panel, ui_scale);
            text_y += scaled(BAR_HEIGHT, ui_scale);
        }
    }
}

fn draw_health_bar(fighter: &Combatant, x: f32, y: f32, panel: PanelRect, ui_scale: f32) {
    let width = (panel.width - 2.0 * scaled(PANEL_PAD_X, ui_scale)).max(0.0);
    let height = scaled(BAR_HEIGHT, ui_scale);
    let fraction = health_fraction(fighter.health(), fighter.max_health());
    let fill = if fraction < 0.3 { RED } else { GREEN };

    draw_rectangle(x, y, width, height, DARKGRAY);
    draw_rectangle(x, y, width * fraction, height, fill);
}

fn draw_event_log(app: &AppState, panel: PanelRect, ui_scale: f32) {
    let text_x = panel.x + scaled(PANEL_PAD_X, ui_scale);
    let title_y = panel.y + scaled(PANEL_PAD_Y, ui_scale);
    draw_text("Battle log", text_x, title_y, scaled(24.0, ui_scale), YELLOW);

    let mut lines = event_log_lines(app.engine(), usize::MAX);
    if let AppMode::Finished(outcome) = app.mode {
        lines.push(String::new());
        lines.extend(recap_lines(app, outcome));
    }
    let body_top = scaled(PANEL_PAD_Y, ui_scale) * 2.0;
    let visible =
        fit_lines_to_panel(&lines, panel.height, scaled(LINE_HEIGHT, ui_scale), body_top);

    for (index, line) in visible.iter().enumerate() {
        draw_text(
            line,
            text_x,
            panel.y + body_top + index as f32 * scaled(LINE_HEIGHT, ui_scale),
            scaled(18.0, ui_scale),
            LIGHTGRAY,
        );
    }
}

fn draw_help_panel(app: &AppState, panel: PanelRect, ui_scale: f32) {
    draw_text(
        help_text(&app.mode),
        panel.x + scaled(PANEL_PAD_X, ui_scale),
        panel.y + scaled(PANEL_PAD_Y + 10.0, ui_scale),
        scaled(22.0, ui_scale),
        WHITE,
    );
}

/// Keep the newest lines that fit, replacing the rest with a count.
fn fit_lines_to_panel(
    lines: &[String],
    panel_height: f32,
    line_step: f32,
    panel_pad_y: f32,
) -> Vec<String> {
    if line_step <= 0.0 {
        return Vec::new();
    }

    let usable_height = (panel_height - panel_pad_y).max(0.0);
    let max_lines = (usable_height / line_step).floor() as usize;
    if lines.len() <= max_lines {
        return lines.to_vec();
    }
    if max_lines == 0 {
        return Vec::new();
    }
    if max_lines == 1 {
        return vec![format!("... {} earlier lines", lines.len())];
    }

    let hidden_count = lines.len() - (max_lines - 1);
    let mut fitted_lines = vec![format!("... {hidden_count} earlier lines")];
    fitted_lines.extend_from_slice(&lines[hidden_count..]);
    fitted_lines
}

fn scaled(value: f32, ui_scale: f32) -> f32 {
    value * ui_scale
}
