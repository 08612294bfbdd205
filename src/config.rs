use std::time::Duration;

use thiserror::Error;

use crate::input::Direction;
use crate::snake::Position;

/// Default playfield width in pixels.
pub const DEFAULT_WIDTH: i32 = 600;

/// Default playfield height in pixels.
pub const DEFAULT_HEIGHT: i32 = 600;

/// Default edge length of one grid cell in pixels.
pub const DEFAULT_CELL_SIZE: i32 = 25;

/// Default tick interval in milliseconds. Lower is faster.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 75;

/// Default number of segments the snake starts with.
pub const DEFAULT_INITIAL_LENGTH: usize = 6;

/// Compile-time game parameters.
///
/// All coordinates in the game are pixel values aligned to `cell_size`, so
/// the playable grid is `width / cell_size` columns by `height / cell_size`
/// rows. The defaults reproduce the classic 600×600 board with 25-pixel
/// cells. None of these are runtime-configurable; an embedder constructs a
/// different config and validates it once.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    /// Playfield width in pixels. Must be a multiple of `cell_size`.
    pub width: i32,
    /// Playfield height in pixels. Must be a multiple of `cell_size`.
    pub height: i32,
    /// Edge length of one grid cell in pixels.
    pub cell_size: i32,
    /// Interval between simulation ticks.
    pub tick_interval: Duration,
    /// Segment count at game start; all segments overlap at the origin.
    pub initial_length: usize,
    /// Movement direction at game start.
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            initial_length: DEFAULT_INITIAL_LENGTH,
            initial_direction: Direction::Right,
        }
    }
}

impl GameConfig {
    /// Returns the number of playable columns.
    #[must_use]
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Returns the number of playable rows.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Returns the total number of playable cells.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Returns true when `position` lies inside the playfield.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Checks the structural invariants the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize {
                cell_size: self.cell_size,
            });
        }

        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }

        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(ConfigError::MisalignedPlayfield {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }

        if self.initial_length == 0 {
            return Err(ConfigError::ZeroInitialLength);
        }

        Ok(())
    }
}

/// Invalid [`GameConfig`] construction.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {cell_size}")]
    NonPositiveCellSize { cell_size: i32 },
    #[error("playfield must be non-empty, got {width}x{height}")]
    EmptyPlayfield { width: i32, height: i32 },
    #[error("playfield {width}x{height} is not a multiple of cell size {cell_size}")]
    MisalignedPlayfield {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,
}

/// Glyphs the renderer uses for one visual style.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    pub snake_head: &'static str,
    pub snake_body: &'static str,
    pub food: &'static str,
    pub grid_dot: &'static str,
}

/// Default block-drawing glyphs.
pub const GLYPHS_UNICODE: GlyphSet = GlyphSet {
    snake_head: "█",
    snake_body: "▓",
    food: "●",
    grid_dot: "·",
};

/// Plain ASCII fallback for terminals without good Unicode fonts.
pub const GLYPHS_ASCII: GlyphSet = GlyphSet {
    snake_head: "@",
    snake_body: "o",
    food: "*",
    grid_dot: ".",
};
