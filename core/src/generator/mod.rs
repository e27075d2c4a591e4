use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Supplies the shapes used to populate and refill the grid.
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

impl<S: ShapeSource + ?Sized> ShapeSource for &mut S {
    fn next_shape(&mut self) -> Shape {
        (**self).next_shape()
    }
}
