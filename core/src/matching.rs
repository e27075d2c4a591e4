use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Shortest run of identical shapes that counts as a match.
pub const MIN_RUN: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Coordinates of the `offset`-th cell along `line`, which is a row for horizontal runs and a
    /// column for vertical ones.
    const fn at(self, line: Coord, offset: Coord) -> Coord2 {
        match self {
            Self::Horizontal => (offset, line),
            Self::Vertical => (line, offset),
        }
    }

    const fn delta(self, step: i8) -> (i8, i8) {
        match self {
            Self::Horizontal => (step, 0),
            Self::Vertical => (0, step),
        }
    }
}

/// A maximal straight run of at least [`MIN_RUN`] identical shapes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    axis: Axis,
    shape: Shape,
    cells: SmallVec<[Coord2; 5]>,
}

impl Match {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Member cells in scan order (left to right, or top to bottom).
    pub fn cells(&self) -> &[Coord2] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        self.cells.contains(&coords)
    }
}

/// Union of the cells of every match; a cell shared by a horizontal and a vertical run is
/// counted once.
pub fn matched_cells(matches: &[Match]) -> BTreeSet<Coord2> {
    matches
        .iter()
        .flat_map(|m| m.cells().iter().copied())
        .collect()
}

/// Three-cell windows through a cell, as offsets along one axis: the cell as left end, middle,
/// and right end.
const WINDOWS: [[i8; 3]; 3] = [[0, 1, 2], [-1, 0, 1], [-2, -1, 0]];

impl Grid {
    /// Every maximal run on the board, all horizontal runs first, then all vertical ones.
    ///
    /// Runs are reported independently, so a cell where a row run crosses a column run appears
    /// in two matches. Empty cells never take part in a run.
    pub fn find_matches(&self) -> Vec<Match> {
        let mut matches = Vec::new();
        for axis in Axis::BOTH {
            self.scan_axis(axis, &mut matches);
        }
        matches
    }

    pub fn has_matches(&self) -> bool {
        self.coords().any(|coords| self.is_part_of_match(coords))
    }

    /// Whether the cell at `coords` sits inside any straight triple of its own shape.
    pub fn is_part_of_match(&self, coords: Coord2) -> bool {
        let Some(shape) = self.shape_at(coords) else {
            return false;
        };

        Axis::BOTH.into_iter().any(|axis| {
            WINDOWS.iter().any(|window| {
                window.iter().all(|&step| {
                    apply_delta(coords, axis.delta(step), self.size())
                        .is_some_and(|pos| self.shape_at(pos) == Some(shape))
                })
            })
        })
    }

    /// Settled means completely filled and free of matches.
    pub fn is_stable(&self) -> bool {
        self.is_full() && !self.has_matches()
    }

    fn scan_axis(&self, axis: Axis, out: &mut Vec<Match>) {
        let size = self.size();
        for line in 0..size {
            let shape_at = |offset: Coord| self.shape_at(axis.at(line, offset));

            let mut start: Coord = 0;
            while usize::from(start) + MIN_RUN <= usize::from(size) {
                let Some(shape) = shape_at(start) else {
                    start += 1;
                    continue;
                };

                if shape_at(start + 1) != Some(shape) || shape_at(start + 2) != Some(shape) {
                    start += 1;
                    continue;
                }

                let mut end = start + 3;
                while end < size && shape_at(end) == Some(shape) {
                    end += 1;
                }

                log::trace!(
                    "{:?} run of {} {:?} at {:?}",
                    axis,
                    end - start,
                    shape,
                    axis.at(line, start)
                );
                out.push(Match {
                    axis,
                    shape,
                    cells: (start..end).map(|offset| axis.at(line, offset)).collect(),
                });
                start = end;
            }
        }
    }
}
