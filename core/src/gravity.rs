use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Movement of one shape during a drop, for the presentation layer to animate.
///
/// Refilled shapes start above the board: `from_row` is negative and the whole refill stack of a
/// column falls by the same distance, so stacked shapes keep their order while falling. The
/// topmost refill therefore reports `-vacated` and the lowest one `-1`, not the other way round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropMove {
    pub column: Coord,
    pub from_row: i16,
    pub to_row: Coord,
    pub shape: Shape,
}

impl DropMove {
    pub const fn is_refill(&self) -> bool {
        self.from_row < 0
    }

    pub const fn distance(&self) -> u16 {
        (self.to_row as i16 - self.from_row).unsigned_abs()
    }
}

impl Grid {
    /// Lets every column settle under gravity and tops up the vacated slots from `source`.
    ///
    /// Shapes never pass each other: each column is compacted towards the bottom row in its
    /// existing order. Columns are processed left to right, and within a column the moved shapes
    /// are reported bottom-up followed by the refills top-down.
    pub fn collapse(&mut self, source: &mut impl ShapeSource) -> Vec<DropMove> {
        let mut moves = Vec::new();
        for x in 0..self.size() {
            self.collapse_column(x, source, &mut moves);
        }
        moves
    }

    fn collapse_column(
        &mut self,
        x: Coord,
        source: &mut impl ShapeSource,
        moves: &mut Vec<DropMove>,
    ) {
        let mut vacated: Coord = 0;

        for y in (0..self.size()).rev() {
            match self[(x, y)] {
                Cell::Empty => vacated += 1,
                Cell::Filled(shape) if vacated > 0 => {
                    let to_row = y + vacated;
                    self[(x, to_row)] = Cell::Filled(shape);
                    self[(x, y)] = Cell::Empty;
                    moves.push(DropMove {
                        column: x,
                        from_row: y.into(),
                        to_row,
                        shape,
                    });
                }
                Cell::Filled(_) => {}
            }
        }

        for y in 0..vacated {
            let shape = source.next_shape();
            self[(x, y)] = Cell::Filled(shape);
            moves.push(DropMove {
                column: x,
                from_row: i16::from(y) - i16::from(vacated),
                to_row: y,
                shape,
            });
        }

        if vacated > 0 {
            log::trace!("Column {x} refilled {vacated} cells");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn column_compacts_in_order_and_refills_from_the_top() {
        let mut g = grid(
            "CHT
             .ZT
             T.H",
        );
        let mut source = ScriptedShapeSource::new([Shape::Hexagon, Shape::Trapezium]).unwrap();

        let moves = g.collapse(&mut source);

        use Shape::*;
        assert_eq!(
            g.column(0),
            vec![Cell::Filled(Hexagon), Cell::Filled(Circle), Cell::Filled(Triangle)]
        );
        assert_eq!(
            g.column(1),
            vec![Cell::Filled(Trapezium), Cell::Filled(Hexagon), Cell::Filled(Trapezium)]
        );
        assert_eq!(
            moves,
            vec![
                DropMove { column: 0, from_row: 0, to_row: 1, shape: Circle },
                DropMove { column: 0, from_row: -1, to_row: 0, shape: Hexagon },
                DropMove { column: 1, from_row: 1, to_row: 2, shape: Trapezium },
                DropMove { column: 1, from_row: 0, to_row: 1, shape: Hexagon },
                DropMove { column: 1, from_row: -1, to_row: 0, shape: Trapezium },
            ]
        );
        assert!(g.is_full());
    }

    #[test]
    fn stacked_refills_fall_together() {
        let mut g = grid(
            "...
             ...
             CCC",
        );
        let mut source = ScriptedShapeSource::cycling();

        let moves = g.collapse(&mut source);

        let first_column: Vec<_> = moves.iter().filter(|m| m.column == 0).collect();
        assert_eq!(first_column.len(), 2);
        assert!(first_column.iter().all(|m| m.is_refill() && m.distance() == 2));
        assert_eq!(first_column[0].from_row, -2);
        assert_eq!(first_column[1].from_row, -1);
        assert_eq!(source.drawn(), 6);
    }

    #[test]
    fn full_column_is_untouched() {
        let mut g = grid(
            "CH
             HC",
        );
        let before = g.clone();
        let mut source = ScriptedShapeSource::cycling();

        assert!(g.collapse(&mut source).is_empty());
        assert_eq!(g, before);
        assert_eq!(source.drawn(), 0);
    }
}
