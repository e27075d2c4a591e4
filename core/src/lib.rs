#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use gravity::*;
pub use grid::*;
pub use matching::*;
pub use shape::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod gravity;
mod grid;
mod matching;
mod shape;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: Coord,
    pub points_multiplier: Score,
    pub win_score: Score,
}

impl GameConfig {
    pub const MIN_GRID_SIZE: Coord = 3;
    pub const DEFAULT_GRID_SIZE: Coord = 16;
    pub const DEFAULT_POINTS_MULTIPLIER: Score = 60;
    pub const DEFAULT_WIN_SCORE: Score = 1000;

    pub const fn new_unchecked(grid_size: Coord, points_multiplier: Score, win_score: Score) -> Self {
        Self {
            grid_size,
            points_multiplier,
            win_score,
        }
    }

    pub fn new(grid_size: Coord, points_multiplier: Score, win_score: Score) -> Result<Self> {
        let config = Self::new_unchecked(grid_size, points_multiplier, win_score);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size < Self::MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall(self.grid_size));
        }
        Ok(())
    }

    pub const fn with_grid_size(self, grid_size: Coord) -> Self {
        Self { grid_size, ..self }
    }

    pub const fn with_points_multiplier(self, points_multiplier: Score) -> Self {
        Self {
            points_multiplier,
            ..self
        }
    }

    pub const fn with_win_score(self, win_score: Score) -> Self {
        Self { win_score, ..self }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_GRID_SIZE,
            Self::DEFAULT_POINTS_MULTIPLIER,
            Self::DEFAULT_WIN_SCORE,
        )
    }
}

/// Outcome of a swap request. Only `Accepted` changes the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    Accepted,
    /// A cascade is still in progress.
    Busy,
    AlreadyWon,
    NotAdjacent,
    /// The swap would not produce a match and was reverted.
    NoMatch,
}

impl SwapOutcome {
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Outcome of clicking a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    Ignored,
    Selected(Coord2),
    Deselected,
    Swap(SwapOutcome),
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Ignored => false,
            Selected(_) => true,
            Deselected => true,
            Swap(outcome) => outcome.is_accepted(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 16);
        assert_eq!(config.points_multiplier, 60);
        assert_eq!(config.win_score, 1000);
        assert_eq!(config.total_cells(), 256);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_rejects_boards_too_small_to_match() {
        assert_eq!(GameConfig::new(2, 60, 1000), Err(GameError::GridTooSmall(2)));
        assert!(GameConfig::new(3, 60, 1000).is_ok());
        assert_eq!(
            GameConfig::default().with_grid_size(0).validate(),
            Err(GameError::GridTooSmall(0))
        );
    }

    #[test]
    fn builder_setters_keep_other_fields() {
        let config = GameConfig::default()
            .with_points_multiplier(10)
            .with_win_score(50);
        assert_eq!(config, GameConfig::new_unchecked(16, 10, 50));
    }
}
