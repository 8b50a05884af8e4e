//! Grid shape: fixed per-axis extents and the row-major point/offset bijection.

use std::fmt;

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    point::Point,
};

/// The fixed extent of a grid along every axis.
///
/// A shape is immutable once constructed. Every axis extent must be positive
/// and the total cell count must fit in `usize`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    /// Per-axis extents, first axis first.
    dims: SmallVec<[usize; 8]>,
    /// Cached product of all extents.
    size: usize,
}

impl Shape {
    /// Construct a shape from per-axis extents.
    pub fn new(dims: impl Into<SmallVec<[usize; 8]>>) -> Result<Self> {
        let dims = dims.into();
        if dims.is_empty() {
            return Err(Error::InvalidShape("a shape needs at least one axis".into()));
        }
        let mut size = 1usize;
        for (axis, &extent) in dims.iter().enumerate() {
            if extent == 0 {
                return Err(Error::InvalidShape(format!("axis {axis} has extent 0")));
            }
            size = size
                .checked_mul(extent)
                .ok_or_else(|| Error::InvalidShape("total size overflows usize".into()))?;
        }
        Ok(Self { dims, size })
    }

    /// Per-axis extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total cell count: the product of all extents.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `point` names a cell inside this shape.
    ///
    /// A point of the wrong rank is never contained.
    pub fn contains(&self, point: &[usize]) -> bool {
        point.len() == self.rank() && point.iter().zip(&self.dims).all(|(&c, &e)| c < e)
    }

    /// Row-major linear offset of `point`.
    ///
    /// The last axis varies fastest. `point` must be contained in the shape.
    pub fn offset_of(&self, point: &[usize]) -> usize {
        debug_assert!(self.contains(point), "point {point:?} outside shape {self}");
        point
            .iter()
            .zip(&self.dims)
            .fold(0, |acc, (&c, &extent)| acc * extent + c)
    }

    /// The point at row-major linear `offset`. Inverse of [`Self::offset_of`].
    pub fn point_at(&self, offset: usize) -> Point {
        debug_assert!(offset < self.size, "offset {offset} outside shape {self}");
        let mut coords: SmallVec<[usize; 8]> = SmallVec::from_elem(0, self.rank());
        let mut rest = offset;
        for (slot, &extent) in coords.iter_mut().zip(&self.dims).rev() {
            *slot = rest % extent;
            rest /= extent;
        }
        Point::new_with_rank(self.rank(), coords)
    }
}

impl fmt::Display for Shape {
    /// Tuple rendering matching [`Point`], e.g. `(2, 3)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dims.as_slice() {
            [only] => write!(f, "({only},)"),
            dims => {
                write!(f, "(")?;
                for (i, d) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{d}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl TryFrom<&[usize]> for Shape {
    type Error = Error;
    fn try_from(dims: &[usize]) -> Result<Self> {
        Self::new(dims)
    }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = Error;
    fn try_from(dims: Vec<usize>) -> Result<Self> {
        Self::new(dims)
    }
}
