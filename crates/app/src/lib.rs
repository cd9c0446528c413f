pub mod app_loop;
pub mod launch;

pub const APP_NAME: &str = "Arena";

/// Fraction of health left, for the health bars.
pub fn health_fraction(health: u32, max_health: u32) -> f32 {
    if max_health == 0 {
        return 0.0;
    }
    (health as f32 / max_health as f32).clamp(0.0, 1.0)
}
