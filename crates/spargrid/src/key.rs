//! Grid keys: coordinate selections and label lookups.
//!
//! A [`Key`] is what the container's `get` and `set` accept. The two variants
//! carry the container's defining dual dispatch: a coordinate-shaped key
//! addresses cells by position, a label-shaped key addresses the subset of
//! cells holding that value. The variant is fixed when the caller builds the
//! key; nothing is inferred at lookup time.

use std::ops::{Range, RangeFull};

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    label::Label,
    point::Point,
    shape::Shape,
};

/// Selector for a single axis of a coordinate key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisKey {
    /// Pin the axis to one index. Pinned axes are dropped from the shape of
    /// a sub-grid selection.
    At(usize),
    /// Select a non-empty half-open index range; the axis is kept.
    Span(Range<usize>),
    /// Select the full axis.
    All,
}

impl From<usize> for AxisKey {
    fn from(index: usize) -> Self {
        Self::At(index)
    }
}

impl From<Range<usize>> for AxisKey {
    fn from(span: Range<usize>) -> Self {
        Self::Span(span)
    }
}

impl From<RangeFull> for AxisKey {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

/// A coordinate key: one [`AxisKey`] per leading axis.
///
/// The key may name fewer axes than the grid has; trailing axes are
/// implicitly [`AxisKey::All`], which is what makes partial coordinates work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordKey(SmallVec<[AxisKey; 8]>);

impl CoordKey {
    /// Build a coordinate key from per-axis selectors.
    pub fn new(axes: impl IntoIterator<Item = AxisKey>) -> Self {
        Self(axes.into_iter().collect())
    }

    /// The per-axis selectors.
    pub fn axes(&self) -> &[AxisKey] {
        &self.0
    }

    /// Validate the key against `shape` and expand implicit trailing axes.
    pub(crate) fn resolve(&self, shape: &Shape) -> Result<Resolved> {
        if self.0.len() > shape.rank() {
            return Err(Error::RankMismatch {
                given: self.0.len(),
                rank: shape.rank(),
            });
        }
        let mut ranges: SmallVec<[Range<usize>; 8]> = SmallVec::new();
        let mut pinned: SmallVec<[bool; 8]> = SmallVec::new();
        for (axis, &extent) in shape.dims().iter().enumerate() {
            let sel = self.0.get(axis).unwrap_or(&AxisKey::All);
            match sel {
                AxisKey::At(index) => {
                    if *index >= extent {
                        return Err(Error::OutOfBounds {
                            axis,
                            index: *index,
                            extent,
                        });
                    }
                    ranges.push(*index..index + 1);
                    pinned.push(true);
                }
                AxisKey::Span(span) => {
                    if span.start >= span.end {
                        return Err(Error::InvalidShape(format!("empty span on axis {axis}")));
                    }
                    if span.end > extent {
                        return Err(Error::OutOfBounds {
                            axis,
                            index: span.end - 1,
                            extent,
                        });
                    }
                    ranges.push(span.clone());
                    pinned.push(false);
                }
                AxisKey::All => {
                    ranges.push(0..extent);
                    pinned.push(false);
                }
            }
        }
        Ok(Resolved { ranges, pinned })
    }
}

/// A key into the container: coordinate selection or label lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Address cells by position; valid for reads and writes.
    Coord(CoordKey),
    /// Address the subset of cells holding a label; valid for reads only.
    Label(Label),
}

impl Key {
    /// Coordinate key from per-axis selectors.
    pub fn coord(axes: impl IntoIterator<Item = AxisKey>) -> Self {
        Self::Coord(CoordKey::new(axes))
    }

    /// Full or partial coordinate key pinning every named axis.
    pub fn cell(point: impl AsRef<[usize]>) -> Self {
        Self::Coord(CoordKey::new(
            point.as_ref().iter().map(|&index| AxisKey::At(index)),
        ))
    }

    /// Label-lookup key.
    pub fn label(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<&Point> for Key {
    fn from(point: &Point) -> Self {
        Self::cell(point.as_slice())
    }
}

impl From<&[usize]> for Key {
    fn from(point: &[usize]) -> Self {
        Self::cell(point)
    }
}

impl<const N: usize> From<[usize; N]> for Key {
    fn from(point: [usize; N]) -> Self {
        Self::cell(point)
    }
}

/// A coordinate key checked against a concrete shape.
///
/// Holds one selected range per axis of the full space, plus which axes were
/// pinned and therefore vanish from the shape of a sub-grid result.
#[derive(Debug)]
pub(crate) struct Resolved {
    /// Selected half-open range per axis.
    ranges: SmallVec<[Range<usize>; 8]>,
    /// Axes pinned by [`AxisKey::At`].
    pinned: SmallVec<[bool; 8]>,
}

impl Resolved {
    /// Whether the selection is a single cell with every axis pinned.
    pub(crate) fn is_scalar(&self) -> bool {
        self.pinned.iter().all(|&p| p)
    }

    /// Number of cells selected.
    pub(crate) fn selected_count(&self) -> usize {
        self.ranges.iter().map(|range| range.len()).product()
    }

    /// Extents of the unpinned axes: the shape of a sub-grid result.
    pub(crate) fn result_dims(&self) -> SmallVec<[usize; 8]> {
        self.ranges
            .iter()
            .zip(&self.pinned)
            .filter(|&(_, &pinned)| !pinned)
            .map(|(range, _)| range.len())
            .collect()
    }

    /// Row-major linear offsets of every selected cell, in selection order.
    pub(crate) fn offsets(&self, shape: &Shape) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.selected_count());
        let mut cursor: SmallVec<[usize; 8]> =
            self.ranges.iter().map(|range| range.start).collect();
        'walk: loop {
            out.push(shape.offset_of(&cursor));
            for axis in (0..self.ranges.len()).rev() {
                cursor[axis] += 1;
                if cursor[axis] < self.ranges[axis].end {
                    continue 'walk;
                }
                cursor[axis] = self.ranges[axis].start;
            }
            return out;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape() -> Shape {
        Shape::new(vec![2, 3]).unwrap()
    }

    #[test]
    fn full_coordinate_is_scalar() -> Result<()> {
        let key = CoordKey::new([AxisKey::At(1), AxisKey::At(2)]);
        let resolved = key.resolve(&shape())?;
        assert!(resolved.is_scalar());
        assert_eq!(resolved.selected_count(), 1);
        assert_eq!(resolved.offsets(&shape()), vec![5]);
        Ok(())
    }

    #[test]
    fn partial_coordinate_keeps_trailing_axes() -> Result<()> {
        let key = CoordKey::new([AxisKey::At(1)]);
        let resolved = key.resolve(&shape())?;
        assert!(!resolved.is_scalar());
        assert_eq!(resolved.result_dims().as_slice(), &[3]);
        assert_eq!(resolved.offsets(&shape()), vec![3, 4, 5]);
        Ok(())
    }

    #[test]
    fn span_keeps_its_axis() -> Result<()> {
        let key = CoordKey::new([AxisKey::Span(0..2), AxisKey::At(1)]);
        let resolved = key.resolve(&shape())?;
        assert_eq!(resolved.result_dims().as_slice(), &[2]);
        assert_eq!(resolved.offsets(&shape()), vec![1, 4]);
        Ok(())
    }

    #[test]
    fn out_of_bounds() {
        let err = CoordKey::new([AxisKey::At(2)]).resolve(&shape());
        assert_eq!(
            err.unwrap_err(),
            Error::OutOfBounds {
                axis: 0,
                index: 2,
                extent: 2
            }
        );

        let err = CoordKey::new([AxisKey::All, AxisKey::Span(1..4)]).resolve(&shape());
        assert_eq!(
            err.unwrap_err(),
            Error::OutOfBounds {
                axis: 1,
                index: 3,
                extent: 3
            }
        );
    }

    #[test]
    fn too_many_axes() {
        let key = CoordKey::new([AxisKey::At(0), AxisKey::At(0), AxisKey::At(0)]);
        assert_eq!(
            key.resolve(&shape()).unwrap_err(),
            Error::RankMismatch { given: 3, rank: 2 }
        );
    }

    #[test]
    fn empty_span_rejected() {
        let key = CoordKey::new([AxisKey::Span(1..1)]);
        assert!(matches!(
            key.resolve(&shape()).unwrap_err(),
            Error::InvalidShape(_)
        ));
    }

    #[test]
    fn key_constructors() {
        assert_eq!(Key::cell([1, 2]), Key::from([1, 2]));
        let p = Point::new(vec![1, 2]);
        assert_eq!(Key::from(&p), Key::cell([1, 2]));
        assert_eq!(Key::label(7), Key::Label(7));
    }
}
