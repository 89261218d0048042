//! Sokoban core crate.
//!
//! Push every box onto a goal to clear a level. The game runs in the browser
//! on a canvas (`start_game()`), while the puzzle rules, level loading and the
//! Title → Loading → Game state machine are plain Rust usable on the host.

use wasm_bindgen::prelude::*;

pub mod app;
pub mod board;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod levels;
mod logging;
pub mod ui;
mod web;

pub use app::{App, FrameInput, LoadingTimer, Mode};
pub use board::{Board, Direction, MoveOutcome, Position, Tile, TileKind};
pub use config::GameConfig;
pub use error::{LoadError, StartupError};
pub use levels::{CAMPAIGN, LevelSource, StaticLevels, load_level};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(GameConfig::default().log_level);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default()).map_err(Into::into)
}

/// Start with settings from a JSON object; unknown keys are rejected,
/// missing keys keep their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json).map_err(StartupError::from)?;
    web::start(config).map_err(Into::into)
}
