use crate::plane::{Orientation, Plane};
use crate::volume::PlaneIndex;

/// A point on a slice in (column, row) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

/// The two reference lines drawn over one plane's slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crosshair {
    /// One point per column at a constant row.
    pub horizontal: Vec<Point>,
    /// One point per row at a constant column.
    pub vertical: Vec<Point>,
}

impl Crosshair {
    /// Lines for a slice of `dim` (height, width), placing the vertical line
    /// at column `x` and the horizontal line at row `y`.
    pub fn new(dim: (usize, usize), x: usize, y: usize) -> Self {
        let (height, width) = dim;
        Self {
            horizontal: (0..width).map(|col| Point { x: col, y }).collect(),
            vertical: (0..height).map(|row| Point { x, y: row }).collect(),
        }
    }

    /// Crosshair of `plane`, positioned by the current indices of its
    /// driving planes.
    pub fn compute(plane: Plane, indices: &PlaneIndex, dim: (usize, usize)) -> Self {
        let x = indices.get(plane.crosshair_driver(Orientation::Vertical));
        let y = indices.get(plane.crosshair_driver(Orientation::Horizontal));
        Self::new(dim, x, y)
    }

    pub fn line(&self, orientation: Orientation) -> &[Point] {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    /// Row of the horizontal line, if the slice has any columns.
    pub fn row(&self) -> Option<usize> {
        self.horizontal.first().map(|p| p.y)
    }

    /// Column of the vertical line, if the slice has any rows.
    pub fn column(&self) -> Option<usize> {
        self.vertical.first().map(|p| p.x)
    }
}
