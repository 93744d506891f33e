//! Coin Chase core crate.
//!
//! A player square dodges an enemy square that homes in on it, while picking
//! up a coin that respawns at random. Every coin adds to the score and makes
//! the enemy step more often.
//!
//! The simulation (`game`) and drawing (`render`) are host independent and
//! tested natively; `web` binds them to a page's canvas, keyboard and controls.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod input;
mod logger;
pub mod render;
pub mod utils;
mod web;

pub use config::{DomConfig, GameConfig, Palette};
pub use error::{ConfigError, GameError};
pub use game::{Board, Game, GameEvent, Phase, Piece, Position};
pub use input::Direction;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

// -----------------------------------------------------------------------------
// Page entrypoints
// -----------------------------------------------------------------------------

/// Attach the game to the page using the default element selectors and tuning.
#[wasm_bindgen]
pub fn mount_game() -> Result<(), JsValue> {
    web::mount(GameConfig::default())?;
    Ok(())
}

/// Same as [`mount_game`] with a (partial) JSON `GameConfig` override.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn mount_game_with_config(json: &str) -> Result<(), JsValue> {
    web::mount(GameConfig::from_json(json)?)?;
    Ok(())
}

/// Start or restart programmatically, as the start button does.
#[wasm_bindgen]
pub fn restart_game() -> Result<(), JsValue> {
    web::start_or_restart()?;
    Ok(())
}

/// Score of the mounted game; 0 before mounting.
#[wasm_bindgen]
pub fn current_score() -> u32 {
    web::current_score().unwrap_or(0)
}

/// True while the frame loop is scheduled; false before start and after game over.
#[wasm_bindgen]
pub fn loop_active() -> bool {
    web::loop_active()
}
