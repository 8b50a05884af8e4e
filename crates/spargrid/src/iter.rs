//! Enumeration sequences over grids.
//!
//! Every iterator here is finite and restartable: each call to the grid
//! method that produces it returns a fresh, independent instance, and no two
//! instances share cursor state. `Cells` and `Points` unrank their cursor
//! through the shape on demand; `Labels` and `Subsets` take a fresh scan of
//! the distinct labels when they are created, which is the always-rescan
//! contract for enumeration after mutation.

use std::{
    collections::{BTreeSet, btree_set},
    iter::FusedIterator,
};

use crate::{grid::LabeledGrid, label::Label, point::Point, shape::Shape};

/// Row-major cursor over `(point, label)` pairs of a grid.
///
/// Produced by [`LabeledGrid::cells`] and by iterating `&LabeledGrid`.
#[derive(Debug)]
pub struct Cells<'g> {
    /// The grid being traversed.
    grid: &'g LabeledGrid,
    /// Next row-major offset to visit.
    cursor: usize,
}

impl<'g> Cells<'g> {
    /// Fresh cursor at the origin of `grid`.
    pub(crate) fn new(grid: &'g LabeledGrid) -> Self {
        Self { grid, cursor: 0 }
    }
}

impl Iterator for Cells<'_> {
    type Item = (Point, Label);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.grid.size() {
            return None;
        }
        let point = self.grid.shape().point_at(self.cursor);
        let label = self.grid.raw_cells()[self.cursor];
        self.cursor += 1;
        Some((point, label))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.grid.size() - self.cursor;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cells<'_> {}
impl FusedIterator for Cells<'_> {}

/// Row-major cursor over every point of a shape, label-blind.
///
/// Produced by [`LabeledGrid::points`].
#[derive(Debug)]
pub struct Points<'g> {
    /// Shape whose coordinate space is enumerated.
    shape: &'g Shape,
    /// Next row-major offset to visit.
    cursor: usize,
}

impl<'g> Points<'g> {
    /// Fresh cursor at the origin of `shape`.
    pub(crate) fn new(shape: &'g Shape) -> Self {
        Self { shape, cursor: 0 }
    }
}

impl Iterator for Points<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.shape.size() {
            return None;
        }
        let point = self.shape.point_at(self.cursor);
        self.cursor += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.shape.size() - self.cursor;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Points<'_> {}
impl FusedIterator for Points<'_> {}

/// Ascending sequence of the distinct labels present in a grid.
///
/// Produced by [`LabeledGrid::labels`]. Holds its own snapshot of the
/// distinct set, taken when the iterator was created.
#[derive(Debug)]
pub struct Labels {
    /// Distinct labels in ascending order.
    inner: btree_set::IntoIter<Label>,
}

impl Labels {
    /// Wrap an already-collected distinct set.
    pub(crate) fn new(distinct: BTreeSet<Label>) -> Self {
        Self {
            inner: distinct.into_iter(),
        }
    }
}

impl Iterator for Labels {
    type Item = Label;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Labels {}
impl FusedIterator for Labels {}

/// One subset per distinct label, labels ascending.
///
/// Produced by [`LabeledGrid::subsets`]. Each step rescans the grid for the
/// next label's points, so every entry equals the label lookup for the
/// matching entry of [`LabeledGrid::labels`].
#[derive(Debug)]
pub struct Subsets<'g> {
    /// The grid scanned for each subset.
    grid: &'g LabeledGrid,
    /// Remaining labels to produce subsets for.
    labels: Labels,
}

impl<'g> Subsets<'g> {
    /// Snapshot the label sequence of `grid` and prepare to scan per label.
    pub(crate) fn new(grid: &'g LabeledGrid) -> Self {
        Self {
            labels: grid.labels(),
            grid,
        }
    }
}

impl Iterator for Subsets<'_> {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        self.labels.next().map(|label| self.grid.subset(label))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.labels.size_hint()
    }
}

impl ExactSizeIterator for Subsets<'_> {}
impl FusedIterator for Subsets<'_> {}
