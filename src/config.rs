//! Tunable game constants.
//!
//! `GameConfig::default()` reproduces the classic setup: a 30x30 board of 20px
//! cells, the enemy moving every 300ms and speeding up by 50ms per coin down to
//! a 20ms floor. With the `serde` feature every field can be overridden from the
//! page, missing fields falling back to the defaults.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Largest board accepted, in cells.
pub const MAX_BOARD_CELLS: u64 = 1_000_000;
/// Largest canvas edge accepted, in pixels (common browser limit).
pub const MAX_CANVAS_PX: u32 = 16_384;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Pixel size of one board cell on the canvas.
    pub block_size: u32,
    pub board_width: i32,
    pub board_height: i32,
    /// Milliseconds accumulated before the enemy takes a step.
    pub initial_refresh_ms: f64,
    pub refresh_step_ms: f64,
    pub min_refresh_ms: f64,
    pub coin_value: u32,
    pub enemy_start: (i32, i32),
    pub coin_start: (i32, i32),
    pub palette: Palette,
    pub dom: DomConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_size: 20,
            board_width: 30,
            board_height: 30,
            initial_refresh_ms: 300.0,
            refresh_step_ms: 50.0,
            min_refresh_ms: 20.0,
            coin_value: 10,
            enemy_start: (20, 20),
            coin_start: (15, 20),
            palette: Palette::default(),
            dom: DomConfig::default(),
        }
    }
}

impl GameConfig {
    /// Player spawn: horizontally centred on the top row.
    pub fn player_start(&self) -> (i32, i32) {
        (self.board_width / 2, 0)
    }

    /// Canvas pixel size. Saturates on configs that `validate` rejects.
    pub fn canvas_size(&self) -> (u32, u32) {
        let edge = |cells: i32| self.block_size.saturating_mul(cells.max(0) as u32);
        (edge(self.board_width), edge(self.board_height))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // coin relocation draws from [1, dim - 1) which must hold a cell
        if self.board_width < 3 || self.board_height < 3 {
            return Err(ConfigError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        let cells = (self.board_width as u64).checked_mul(self.board_height as u64);
        if cells.is_none_or(|c| c > MAX_BOARD_CELLS) {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
            });
        }
        for cells in [self.board_width, self.board_height] {
            let px = self.block_size.checked_mul(cells as u32);
            if px.is_none_or(|px| px > MAX_CANVAS_PX) {
                return Err(ConfigError::CanvasTooLarge {
                    block_size: self.block_size,
                    cells,
                });
            }
        }
        let in_bounds = |(x, y): (i32, i32)| {
            (0..self.board_width).contains(&x) && (0..self.board_height).contains(&y)
        };
        for (piece, pos) in [("enemy", self.enemy_start), ("coin", self.coin_start)] {
            if !in_bounds(pos) {
                return Err(ConfigError::StartOutOfBounds { piece, x: pos.0, y: pos.1 });
            }
        }
        let timings_ok = self.initial_refresh_ms > 0.0
            && self.refresh_step_ms >= 0.0
            && self.min_refresh_ms > 0.0
            && self.min_refresh_ms <= self.initial_refresh_ms;
        if !timings_ok {
            return Err(ConfigError::InvalidRefresh {
                initial: self.initial_refresh_ms,
                step: self.refresh_step_ms,
                floor: self.min_refresh_ms,
            });
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON override and validate it.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::error::GameError> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// CSS colours used by the renderer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    pub background: String,
    pub cell: String,
    pub border: String,
    /// Border thickness as a fraction of one cell.
    pub border_width: f64,
    pub player: String,
    pub enemy: String,
    pub coin: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#000".into(),
            cell: "#ccc".into(),
            border: "white".into(),
            border_width: 0.1,
            player: "blue".into(),
            enemy: "red".into(),
            coin: "green".into(),
        }
    }
}

/// Selectors of the page elements the game drives.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DomConfig {
    pub canvas: String,
    pub score: String,
    pub start_button: String,
    pub dialog: String,
    pub start_label: String,
    pub restart_label: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            canvas: "canvas".into(),
            score: "span".into(),
            start_button: "#start-button".into(),
            dialog: "dialog".into(),
            start_label: "Start Game".into(),
            restart_label: "Restart Game".into(),
        }
    }
}
