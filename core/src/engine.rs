use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Number of initial stabilisation passes after which a warning is logged.
const STABILIZE_WARN_PASSES: usize = 64;

/// Where the engine is in the swap/cascade cycle. Every phase except `Idle` names the step the
/// next [`MatchEngine::advance`] will perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    Idle,
    /// A legal swap was committed; its matches are scored next.
    Swapping,
    /// A drop produced new matches; they are scored next.
    Resolving,
    /// Scored cells are emptied next.
    Clearing,
    /// Columns are compacted and refilled next, then the board is rescanned.
    Dropping,
}

impl EnginePhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Default for EnginePhase {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeEvent {
    SwapCommitted {
        first: Coord2,
        second: Coord2,
    },
    /// Deduplicated cells of every current match and the points they earned.
    MatchResolved {
        cells: Vec<Coord2>,
        points: Score,
        score: Score,
    },
    CellsCleared {
        cells: Vec<Coord2>,
    },
    CellsDropped {
        moves: Vec<DropMove>,
    },
    Won {
        score: Score,
    },
    /// The board is stable again and swaps are accepted.
    Settled,
}

/// Result of a single [`MatchEngine::advance`] call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStep {
    pub phase: EnginePhase,
    pub done: bool,
    pub events: Vec<CascadeEvent>,
}

/// One game session: the board, the score, and the swap/cascade state machine.
///
/// All mutation is synchronous. A legal swap only arms the cascade; the host drives it with
/// [`advance`](Self::advance) at its own pace, typically once per finished animation.
#[derive(Clone, Debug)]
pub struct MatchEngine<S = RandomShapeSource> {
    config: GameConfig,
    grid: Grid,
    source: S,
    score: Saturating<Score>,
    selection: Option<Coord2>,
    phase: EnginePhase,
    won: bool,
    pending: Vec<Match>,
    scored: BTreeSet<Coord2>,
    events: VecDeque<CascadeEvent>,
}

impl MatchEngine<RandomShapeSource> {
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::new(config, RandomShapeSource::new(seed))
    }
}

impl<S: ShapeSource> MatchEngine<S> {
    /// Starts a session on a random board that already satisfies the stable invariant.
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        config.validate()?;
        let mut grid = Grid::random(config.grid_size, &mut source);
        stabilize(&mut grid, &mut source);
        log::debug!(
            "New {size}x{size} session, win at {}",
            config.win_score,
            size = config.grid_size
        );
        Ok(Self::from_parts(config, grid, source))
    }

    /// Starts a session on a caller-supplied board, taken as-is.
    pub fn with_grid(config: GameConfig, grid: Grid, source: S) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.grid_size {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_parts(config, grid, source))
    }

    fn from_parts(config: GameConfig, grid: Grid, source: S) -> Self {
        Self {
            config,
            grid,
            source,
            score: Saturating(0),
            selection: None,
            phase: EnginePhase::Idle,
            won: false,
            pending: Vec::new(),
            scored: BTreeSet::new(),
            events: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> Coord {
        self.grid.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    pub fn score(&self) -> Score {
        self.score.0
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn is_resolving(&self) -> bool {
        !self.phase.is_idle()
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn selection(&self) -> Option<Coord2> {
        self.selection
    }

    /// Matches waiting to be scored by the next step.
    pub fn pending_matches(&self) -> &[Match] {
        &self.pending
    }

    pub fn is_stable(&self) -> bool {
        self.grid.is_stable()
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Click-to-swap: the first click selects a cell, the second one swaps with it when adjacent.
    /// Either way the second click clears the selection.
    pub fn select(&mut self, coords: Coord2) -> SelectOutcome {
        if self.is_resolving() || self.won {
            return SelectOutcome::Ignored;
        }

        match self.selection.take() {
            None => {
                self.selection = Some(coords);
                SelectOutcome::Selected(coords)
            }
            Some(selected) if is_adjacent(selected, coords) => {
                SelectOutcome::Swap(self.request_swap(selected, coords))
            }
            Some(_) => SelectOutcome::Deselected,
        }
    }

    /// Swaps two adjacent cells if doing so creates at least one match, otherwise leaves the board
    /// exactly as it was.
    ///
    /// # Panics
    ///
    /// Panics if an adjacent pair reaches outside the board.
    pub fn request_swap(&mut self, first: Coord2, second: Coord2) -> SwapOutcome {
        if self.is_resolving() {
            return SwapOutcome::Busy;
        }
        if self.won {
            return SwapOutcome::AlreadyWon;
        }
        if !is_adjacent(first, second) {
            return SwapOutcome::NotAdjacent;
        }

        self.grid.swap(first, second);
        let matches = self.grid.find_matches();
        if matches.is_empty() {
            self.grid.swap(first, second);
            log::debug!("Swap {first:?} <-> {second:?} makes no match, reverted");
            return SwapOutcome::NoMatch;
        }

        log::debug!(
            "Swap {first:?} <-> {second:?} accepted with {} matches",
            matches.len()
        );
        self.pending = matches;
        self.phase = EnginePhase::Swapping;
        self.events
            .push_back(CascadeEvent::SwapCommitted { first, second });
        SwapOutcome::Accepted
    }

    /// Performs the next cascade step and hands over every event queued so far.
    pub fn advance(&mut self) -> CascadeStep {
        use EnginePhase::*;
        match self.phase {
            Idle => {}
            Swapping | Resolving => self.score_matches(),
            Clearing => self.clear_scored(),
            Dropping => self.drop_and_rescan(),
        }

        CascadeStep {
            phase: self.phase,
            done: self.phase.is_idle(),
            events: self.drain_events(),
        }
    }

    /// Runs the cascade until the board settles, returning every event in order.
    pub fn resolve_all(&mut self) -> Vec<CascadeEvent> {
        let mut events = Vec::new();
        loop {
            let step = self.advance();
            events.extend(step.events);
            if step.done {
                return events;
            }
        }
    }

    pub fn drain_events(&mut self) -> Vec<CascadeEvent> {
        self.events.drain(..).collect()
    }

    fn score_matches(&mut self) {
        let cells = matched_cells(&self.pending);
        self.pending.clear();

        let count = Score::try_from(cells.len()).unwrap_or(Score::MAX);
        let points = count.saturating_mul(self.config.points_multiplier);
        self.score += points;
        log::trace!(
            "Scored {} cells for {points}, total {}",
            cells.len(),
            self.score
        );

        self.events.push_back(CascadeEvent::MatchResolved {
            cells: cells.iter().copied().collect(),
            points,
            score: self.score.0,
        });

        if !self.won && self.score.0 >= self.config.win_score {
            self.won = true;
            log::debug!("Win score reached with {}", self.score);
            self.events.push_back(CascadeEvent::Won {
                score: self.score.0,
            });
        }

        self.scored = cells;
        self.phase = EnginePhase::Clearing;
    }

    fn clear_scored(&mut self) {
        let cells = core::mem::take(&mut self.scored);
        for &coords in &cells {
            self.grid[coords] = Cell::Empty;
        }
        log::trace!("Cleared {} cells", cells.len());

        self.events.push_back(CascadeEvent::CellsCleared {
            cells: cells.into_iter().collect(),
        });
        self.phase = EnginePhase::Dropping;
    }

    fn drop_and_rescan(&mut self) {
        let moves = self.grid.collapse(&mut self.source);
        self.events.push_back(CascadeEvent::CellsDropped { moves });

        let matches = self.grid.find_matches();
        if matches.is_empty() {
            log::debug!("Cascade settled at score {}", self.score);
            self.phase = EnginePhase::Idle;
            self.events.push_back(CascadeEvent::Settled);
        } else {
            log::trace!("Cascade continues with {} matches", matches.len());
            self.pending = matches;
            self.phase = EnginePhase::Resolving;
        }
    }
}

/// Redraws every cell that sits in a triple until a full pass finds none.
fn stabilize(grid: &mut Grid, source: &mut impl ShapeSource) {
    let mut passes = 0;
    loop {
        passes += 1;
        let mut replaced = 0;
        for coords in grid.coords() {
            if grid.is_part_of_match(coords) {
                grid[coords] = Cell::Filled(source.next_shape());
                replaced += 1;
            }
        }
        log::trace!("Stabilise pass {passes}: {replaced} cells redrawn");

        if replaced == 0 {
            break;
        }
        if passes == STABILIZE_WARN_PASSES {
            log::warn!("Board still unstable after {passes} passes");
        }
    }
}
