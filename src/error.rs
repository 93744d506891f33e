use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejected `GameConfig` values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board must be at least 3x3 cells, got {width}x{height}")]
    BoardTooSmall { width: i32, height: i32 },
    #[error("board of {width}x{height} cells exceeds the cell limit")]
    BoardTooLarge { width: i32, height: i32 },
    #[error("canvas edge of {cells} cells at {block_size}px exceeds the pixel limit")]
    CanvasTooLarge { block_size: u32, cells: i32 },
    #[error("block size must be positive")]
    ZeroBlockSize,
    #[error("{piece} start ({x}, {y}) lies outside the board")]
    StartOutOfBounds { piece: &'static str, x: i32, y: i32 },
    #[error("refresh timings must be positive with floor <= initial (initial {initial}, step {step}, floor {floor})")]
    InvalidRefresh { initial: f64, step: f64, floor: f64 },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element matches selector '{0}'")]
    MissingElement(String),
    #[error("element '{0}' has an unexpected type")]
    WrongElementType(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("game is not mounted")]
    NotMounted,
    #[error("game is already mounted on this page")]
    AlreadyMounted,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[cfg(feature = "serde_json")]
    #[error("malformed configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
