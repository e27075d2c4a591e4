use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of shapes in order, wrapping around at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedShapeSource {
    shapes: Vec<Shape>,
    next: usize,
}

impl ScriptedShapeSource {
    pub fn new(shapes: impl IntoIterator<Item = Shape>) -> Result<Self> {
        let shapes: Vec<Shape> = shapes.into_iter().collect();
        if shapes.is_empty() {
            return Err(GameError::EmptyShapeSequence);
        }
        Ok(Self { shapes, next: 0 })
    }

    /// Cycles through all four shapes starting with [`Shape::Circle`].
    pub fn cycling() -> Self {
        Self {
            shapes: Shape::ALL.to_vec(),
            next: 0,
        }
    }

    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl ShapeSource for ScriptedShapeSource {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.next % self.shapes.len()];
        self.next += 1;
        shape
    }
}
