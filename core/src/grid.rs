use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of [`Cell`]s, indexed by `(x, y)` with `y = 0` the top row.
///
/// Indexing outside the board panics; callers that start from untrusted positions should go
/// through [`Grid::validate_coords`] first.
///
/// Serialised as its cell array; deserialising goes through [`Grid::from_cells`] so the side
/// length always agrees with the array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Grid {
    size: Coord,
    cells: Array2<Cell>,
}

impl Grid {
    pub fn empty(size: Coord) -> Self {
        Self {
            size,
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Builds a grid by visiting every cell row by row, top to bottom.
    pub fn from_fn(size: Coord, mut f: impl FnMut(Coord2) -> Cell) -> Self {
        let mut grid = Self::empty(size);
        for y in 0..size {
            for x in 0..size {
                grid[(x, y)] = f((x, y));
            }
        }
        grid
    }

    /// Fills every cell with an independent draw from `source`.
    pub fn random(size: Coord, source: &mut impl ShapeSource) -> Self {
        Self::from_fn(size, |_| Cell::Filled(source.next_shape()))
    }

    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (width, height) = cells.dim();
        if width != height {
            return Err(GameError::InvalidBoardShape);
        }
        let size = Coord::try_from(width).map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size && coords.1 < self.size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn set(&mut self, coords: Coord2, cell: impl Into<Cell>) {
        self[coords] = cell.into();
    }

    pub fn shape_at(&self, coords: Coord2) -> Option<Shape> {
        self[coords].shape()
    }

    pub fn swap(&mut self, a: Coord2, b: Coord2) {
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Every coordinate, row by row, top to bottom.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    /// Cells of column `x`, top to bottom.
    pub fn column(&self, x: Coord) -> Vec<Cell> {
        (0..self.size).map(|y| self[(x, y)]).collect()
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: Coord) -> Vec<Cell> {
        (0..self.size).map(|x| self[(x, y)]).collect()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Cell>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Grid> for Array2<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

/// One row per whitespace-separated token, using the symbols of [`Cell::symbol`].
impl FromStr for Grid {
    type Err = GameError;

    fn from_str(text: &str) -> Result<Self> {
        let rows = text
            .split_whitespace()
            .map(|row| row.chars().map(Cell::try_from).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;

        let size = Coord::try_from(rows.len()).map_err(|_| GameError::InvalidBoardShape)?;
        if size == 0 || rows.iter().any(|row| row.len() != rows.len()) {
            return Err(GameError::InvalidBoardShape);
        }

        Ok(Self::from_fn(size, |(x, y)| {
            rows[usize::from(y)][usize::from(x)]
        }))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.size {
                write!(f, "{}", self[(x, y)])?;
            }
        }
        Ok(())
    }
}
