//! Lightweight N‑dimensional coordinate type.

use std::{fmt, ops::Deref, vec::Vec};

use smallvec::SmallVec;

/// Compact N‑dimensional coordinate into a grid.
///
/// Components are ordered first axis first, so deriving `Ord` gives exactly
/// the row-major enumeration order of points within one shape.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point(pub SmallVec<[usize; 8]>);

impl Point {
    /// Create a new `Point` from a backing vector.
    pub fn new(vec: impl Into<SmallVec<[usize; 8]>>) -> Self {
        Self(vec.into())
    }

    /// Create a new `Point`, asserting the component count matches `rank`.
    ///
    /// This is a convenience to avoid repeating rank checks at every callsite.
    pub fn new_with_rank(rank: usize, vec: impl Into<SmallVec<[usize; 8]>>) -> Self {
        let coords = vec.into();
        debug_assert_eq!(
            coords.len(),
            rank,
            "Point rank mismatch: expected {rank}, got {}",
            coords.len()
        );
        Self(coords)
    }

    /// Return the point's components as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of axes this point addresses.
    pub fn rank(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Point {
    /// Tuple rendering, e.g. `(0, 3)`; a 1-axis point prints as `(3,)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_slice() {
            [only] => write!(f, "({only},)"),
            coords => {
                write!(f, "(")?;
                for (i, c) in coords.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{c}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<Point> for Vec<usize> {
    fn from(val: Point) -> Self {
        val.0.to_vec()
    }
}

impl From<&Point> for Vec<usize> {
    fn from(val: &Point) -> Self {
        val.0.to_vec()
    }
}

impl Deref for Point {
    type Target = [usize];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
