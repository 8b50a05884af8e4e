//! The labeled-partition grid container.

use std::{collections::BTreeSet, fmt};

use crate::{
    error::{Error, Result},
    iter::{Cells, Labels, Points, Subsets},
    key::Key,
    label::{Label, ToLabel},
    point::Point,
    shape::Shape,
};

/// The result of a keyed read.
///
/// Which variant comes back is decided entirely by the key: a fully pinned
/// coordinate yields [`Selection::Value`], a partial or spanned coordinate
/// yields [`Selection::Region`], and a label key yields [`Selection::Subset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The label at a single cell.
    Value(Label),
    /// An owned copy of the cells under a partial or spanned coordinate.
    Region(LabeledGrid),
    /// All points holding the looked-up label, in row-major order.
    Subset(Vec<Point>),
}

impl Selection {
    /// The scalar label, if this selection addressed a single cell.
    pub fn into_value(self) -> Option<Label> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The sub-grid, if this selection addressed a region.
    pub fn into_region(self) -> Option<LabeledGrid> {
        match self {
            Self::Region(region) => Some(region),
            _ => None,
        }
    }

    /// The point list, if this selection was a label lookup.
    pub fn into_subset(self) -> Option<Vec<Point>> {
        match self {
            Self::Subset(points) => Some(points),
            _ => None,
        }
    }
}

/// An N-dimensional grid of integer labels, addressable by coordinate and
/// queryable by label.
///
/// The grid owns its cells exclusively and its shape never changes after
/// construction. Every cell holds a [`Label`]; the set of cells holding one
/// label is that label's subset, and the subsets partition the coordinate
/// space. Label and subset queries always rescan the live cell data, so they
/// reflect every mutation made through [`LabeledGrid::set`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledGrid {
    /// Fixed coordinate-space shape.
    shape: Shape,
    /// Cell labels in row-major order; length equals `shape.size()`.
    cells: Vec<Label>,
}

impl LabeledGrid {
    /// Allocate a zero-filled grid of the given shape.
    pub fn zeros(shape: Shape) -> Self {
        let cells = vec![0; shape.size()];
        Self { shape, cells }
    }

    /// Adopt row-major cell data for the given shape.
    ///
    /// The element count must equal `shape.size()`.
    pub fn from_flat(shape: Shape, cells: Vec<Label>) -> Result<Self> {
        if cells.len() != shape.size() {
            return Err(Error::ShapeMismatch {
                expected: format!("{} cells for shape {}", shape.size(), shape),
                found: format!("{} cells", cells.len()),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Build a grid by coercing row-major array-like data to labels.
    ///
    /// Accepts any element type with a [`ToLabel`] impl; the first element
    /// that cannot be interpreted as an integer aborts construction with a
    /// conversion error.
    pub fn from_data<T, I>(shape: Shape, data: I) -> Result<Self>
    where
        T: ToLabel,
        I: IntoIterator<Item = T>,
    {
        let cells = data
            .into_iter()
            .map(ToLabel::to_label)
            .collect::<Result<Vec<Label>>>()?;
        Self::from_flat(shape, cells)
    }

    /// The fixed coordinate-space shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Total cell count: the product of the shape's extents.
    pub fn size(&self) -> usize {
        self.shape.size()
    }

    /// Number of *distinct* labels present in the grid.
    ///
    /// Two grids of identical shape can report different lengths; a freshly
    /// zeroed grid reports 1.
    pub fn len(&self) -> usize {
        self.distinct().len()
    }

    /// Always false: a grid has at least one cell and therefore one label.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The label at a full coordinate.
    pub fn value_at(&self, point: &[usize]) -> Result<Label> {
        if point.len() != self.shape.rank() {
            return Err(Error::RankMismatch {
                given: point.len(),
                rank: self.shape.rank(),
            });
        }
        for (axis, (&index, &extent)) in point.iter().zip(self.shape.dims()).enumerate() {
            if index >= extent {
                return Err(Error::OutOfBounds {
                    axis,
                    index,
                    extent,
                });
            }
        }
        Ok(self.cells[self.shape.offset_of(point)])
    }

    /// All points whose cell holds `label`, in row-major order.
    ///
    /// An absent label yields an empty list, not an error.
    pub fn subset(&self, label: Label) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value == label)
            .map(|(offset, _)| self.shape.point_at(offset))
            .collect()
    }

    /// Keyed read.
    ///
    /// Coordinate keys perform standard array indexing; label keys look up
    /// the label's subset. See [`Selection`] for the result variants.
    pub fn get(&self, key: &Key) -> Result<Selection> {
        match key {
            Key::Label(label) => Ok(Selection::Subset(self.subset(*label))),
            Key::Coord(coord) => {
                let resolved = coord.resolve(&self.shape)?;
                let offsets = resolved.offsets(&self.shape);
                if resolved.is_scalar() {
                    Ok(Selection::Value(self.cells[offsets[0]]))
                } else {
                    let shape = Shape::new(resolved.result_dims())?;
                    let cells = offsets.iter().map(|&offset| self.cells[offset]).collect();
                    Ok(Selection::Region(Self { shape, cells }))
                }
            }
        }
    }

    /// Keyed write: store `value` in every cell the coordinate key selects.
    ///
    /// Only coordinate keys may be written through. Writing by label is
    /// asymmetric with reading and rejected with [`Error::IndexMustBeTuple`].
    pub fn set(&mut self, key: &Key, value: Label) -> Result<()> {
        match key {
            Key::Label(_) => Err(Error::IndexMustBeTuple),
            Key::Coord(coord) => {
                let resolved = coord.resolve(&self.shape)?;
                for offset in resolved.offsets(&self.shape) {
                    self.cells[offset] = value;
                }
                Ok(())
            }
        }
    }

    /// Region write: copy `source` into the cells the coordinate key selects.
    ///
    /// The source's shape must equal the selection's shape (pinned axes
    /// dropped). Label keys are rejected as in [`LabeledGrid::set`].
    pub fn set_from(&mut self, key: &Key, source: &Self) -> Result<()> {
        match key {
            Key::Label(_) => Err(Error::IndexMustBeTuple),
            Key::Coord(coord) => {
                let resolved = coord.resolve(&self.shape)?;
                let dims = resolved.result_dims();
                if source.shape.dims() != dims.as_slice() {
                    return Err(Error::ShapeMismatch {
                        expected: fmt_dims(&dims),
                        found: source.shape.to_string(),
                    });
                }
                for (&offset, &value) in
                    resolved.offsets(&self.shape).iter().zip(&source.cells)
                {
                    self.cells[offset] = value;
                }
                Ok(())
            }
        }
    }

    /// Row-major traversal of `(point, label)` pairs.
    ///
    /// Every call mints a fresh cursor at the origin, so restarting a
    /// traversal always discards any prior position.
    pub fn cells(&self) -> Cells<'_> {
        Cells::new(self)
    }

    /// Distinct labels present in the grid, in ascending order.
    pub fn labels(&self) -> Labels {
        Labels::new(self.distinct())
    }

    /// Every point of the coordinate space in row-major order, label-blind.
    pub fn points(&self) -> Points<'_> {
        Points::new(&self.shape)
    }

    /// Per distinct label in ascending order, that label's full point list.
    ///
    /// Each entry equals the label lookup for the corresponding entry of
    /// [`LabeledGrid::labels`].
    pub fn subsets(&self) -> Subsets<'_> {
        Subsets::new(self)
    }

    /// Cell labels in row-major order.
    pub(crate) fn raw_cells(&self) -> &[Label] {
        &self.cells
    }

    /// Fresh scan of the distinct labels present.
    fn distinct(&self) -> BTreeSet<Label> {
        self.cells.iter().copied().collect()
    }
}

impl<'g> IntoIterator for &'g LabeledGrid {
    type Item = (Point, Label);
    type IntoIter = Cells<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

impl fmt::Display for LabeledGrid {
    /// Nested bracketed rendering of the full contents, one row per line.
    ///
    /// Debugging aid only; the layout is not a stable format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(1);
        write_block(f, &self.cells, self.shape.dims(), width, 0)
    }
}

/// Render `dims` the way [`Shape`] displays, for mismatch messages about
/// selections that may have had every axis pinned away.
fn fmt_dims(dims: &[usize]) -> String {
    match dims {
        [] => "()".into(),
        [only] => format!("({only},)"),
        _ => format!(
            "({})",
            dims.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// Recursive worker for the `Display` impl. `cells` is the contiguous
/// row-major block for the axes in `dims`.
fn write_block(
    f: &mut fmt::Formatter<'_>,
    cells: &[Label],
    dims: &[usize],
    width: usize,
    indent: usize,
) -> fmt::Result {
    match dims {
        [] | [_] => {
            write!(f, "[")?;
            for (i, value) in cells.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
            write!(f, "]")
        }
        [first, rest @ ..] => {
            let chunk = rest.iter().product::<usize>();
            write!(f, "[")?;
            for i in 0..*first {
                if i > 0 {
                    writeln!(f)?;
                    write!(f, "{:indent$} ", "", indent = indent)?;
                }
                write_block(f, &cells[i * chunk..(i + 1) * chunk], rest, width, indent + 1)?;
            }
            write!(f, "]")
        }
    }
}
