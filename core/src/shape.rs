use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// One of the four matchable shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Hexagon,
    Triangle,
    Trapezium,
}

impl Shape {
    pub const ALL: [Shape; 4] = [
        Shape::Circle,
        Shape::Hexagon,
        Shape::Triangle,
        Shape::Trapezium,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        match self {
            Self::Circle => 0,
            Self::Hexagon => 1,
            Self::Triangle => 2,
            Self::Trapezium => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Circle => 'C',
            Self::Hexagon => 'H',
            Self::Triangle => 'T',
            Self::Trapezium => 'Z',
        }
    }
}

impl TryFrom<char> for Shape {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self> {
        match symbol {
            'C' => Ok(Self::Circle),
            'H' => Ok(Self::Hexagon),
            'T' => Ok(Self::Triangle),
            'Z' => Ok(Self::Trapezium),
            other => Err(GameError::UnknownShape(other)),
        }
    }
}

/// Content of a single grid slot.
///
/// `Empty` only exists transiently between clearing and refilling; a settled grid is fully
/// `Filled`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(Shape),
}

impl Cell {
    pub const EMPTY_SYMBOL: char = '.';

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn shape(self) -> Option<Shape> {
        match self {
            Self::Empty => None,
            Self::Filled(shape) => Some(shape),
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => Self::EMPTY_SYMBOL,
            Self::Filled(shape) => shape.symbol(),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Shape> for Cell {
    fn from(shape: Shape) -> Self {
        Self::Filled(shape)
    }
}

impl TryFrom<char> for Cell {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self> {
        if symbol == Self::EMPTY_SYMBOL {
            Ok(Self::Empty)
        } else {
            Shape::try_from(symbol).map(Self::Filled)
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
