/// Single coordinate axis used for grid side length and positions.
pub type Coord = u8;

/// Count type used for matched-cell and total-cell counts.
pub type CellCount = u16;

/// Score accumulated over a session.
pub type Score = u32;

/// Two-dimensional coordinates `(x, y)`, `x` is the column and `y` the row.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Whether two cells differ by exactly one step along a single axis.
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    let dx = a.0.abs_diff(b.0);
    let dy = a.1.abs_diff(b.1);
    matches!((dx, dy), (1, 0) | (0, 1))
}

/// Applies `delta` to `coords`, returning a value only when it remains inside a square of `size`.
pub(crate) fn apply_delta(coords: Coord2, delta: (i8, i8), size: Coord) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;

    let next_x = x.checked_add_signed(dx)?;
    if next_x >= size {
        return None;
    }

    let next_y = y.checked_add_signed(dy)?;
    if next_y >= size {
        return None;
    }

    Some((next_x, next_y))
}
