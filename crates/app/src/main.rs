mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;

use arena_app::app_loop::{AppMode, AppState};
use arena_app::launch::resolve_launch_options;
use arena_core::content::default_roster;
use arena_core::seed::{derive_seed, generate_runtime_seed};
use arena_core::{ArenaConfig, ArenaStore, FileStore, GladiatorTemplate, MemoryStore};
use macroquad::prelude::*;
use taffy::TaffyTree;
use tracing_subscriber::EnvFilter;

use crate::frame_input::capture_frame_input;
use crate::game_layout::{compute_frame_layout, setup_layout};
use crate::ui_render::draw_frame;
use crate::window_config::{build_window_conf, runtime_ui_scale};

const REMATCH_STREAM: u64 = 0x5245_4d41;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_config() -> ArenaConfig {
    let Some(path) = ArenaConfig::get_default_path() else {
        return ArenaConfig::default();
    };
    ArenaConfig::load_or_default(&path).unwrap_or_else(|error| {
        tracing::warn!(%error, "falling back to default settings");
        ArenaConfig::default()
    })
}

fn open_file_store(config: &ArenaConfig) -> Option<FileStore> {
    let opened = config
        .resolve_data_dir()
        .map_err(|error| error.to_string())
        .and_then(|dir| FileStore::open(&dir).map_err(|error| error.to_string()));
    match opened {
        Ok(store) => Some(store),
        Err(error) => {
            tracing::warn!(%error, "results will not be saved this session");
            None
        }
    }
}

fn load_roster(store: &mut dyn ArenaStore) -> Vec<GladiatorTemplate> {
    store.load_roster().unwrap_or_else(|error| {
        tracing::warn!(%error, "using the built-in roster");
        default_roster()
    })
}

#[macroquad::main(build_window_conf)]
async fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let options = match resolve_launch_options(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(message) => {
            tracing::error!("{message}");
            return;
        }
    };
    let config = load_config();
    let policy = options.policy.unwrap_or(config.ai_policy);
    let player = config.player.template(options.name.as_str());
    let enemy_delay = config.turn_delay();

    let mut file_store = open_file_store(&config);
    let mut memory_store = MemoryStore::new();
    let store: &mut dyn ArenaStore = match file_store.as_mut() {
        Some(store) => store,
        None => &mut memory_store,
    };
    let roster = load_roster(&mut *store);

    let mut seed = options.seed.value();
    let mut app = match AppState::start(&roster, &player, policy, seed, enemy_delay) {
        Ok(app) => app,
        Err(message) => {
            tracing::error!("{message}");
            return;
        }
    };

    let mut taffy = TaffyTree::new();
    let nodes = match setup_layout(&mut taffy) {
        Ok(nodes) => nodes,
        Err(error) => {
            tracing::error!(%error, "failed to build the screen layout");
            return;
        }
    };

    loop {
        let input = capture_frame_input();
        if matches!(app.mode, AppMode::Finished(_)) && input.keys_pressed.contains(&KeyCode::Escape)
        {
            break;
        }
        app.tick(&mut *store, &input.keys_pressed, input.dt);

        if app.rematch_requested {
            seed = derive_seed(seed, REMATCH_STREAM);
            match AppState::start(&roster, &player, policy, seed, enemy_delay) {
                Ok(next) => app = next,
                Err(message) => {
                    tracing::error!("{message}");
                    break;
                }
            }
        }

        clear_background(BLACK);
        match compute_frame_layout(&mut taffy, &nodes, screen_width(), screen_height()) {
            Ok(layout) => draw_frame(&app, &layout, runtime_ui_scale()),
            Err(error) => tracing::warn!(%error, "layout failed"),
        }
        next_frame().await
    }

    if let Some(store) = file_store
        && let Err(error) = store.close()
    {
        tracing::warn!(%error, "failed to flush the data directory");
    }
}
