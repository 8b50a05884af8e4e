//! Labeled-partition containers over N‑dimensional integer grids.
//!
//! A [`LabeledGrid`] treats an N‑dimensional integer array as a partition of
//! its coordinate space: every cell holds a label, and the cells sharing one
//! label form that label's subset. The container is addressable by full or
//! partial coordinate, queryable by label, and enumerable by cell, by label,
//! by point, or by subset.
//!
//! # Example
//!
//! ```
//! use spargrid::{LabeledGrid, key::Key, shape::Shape};
//!
//! let mut grid = LabeledGrid::zeros(Shape::new(vec![2, 2])?);
//! grid.set(&Key::cell([0, 0]), 5)?;
//!
//! assert_eq!(grid.len(), 2); // two distinct labels: 0 and 5
//! let fives = grid.get(&Key::label(5))?.into_subset().unwrap();
//! assert_eq!(fives.len(), 1);
//! # Ok::<(), spargrid::error::Error>(())
//! ```

/// Error types used across the crate.
pub mod error;
/// Grid keys: coordinate selections and label lookups.
pub mod key;
/// Label values and coercion from array-like input data.
pub mod label;
/// N‑dimensional points and helpers.
pub mod point;
/// Grid shapes and the row-major point/offset bijection.
pub mod shape;

/// The `LabeledGrid` container itself.
mod grid;
/// Enumeration sequences over grids.
mod iter;

pub use crate::{
    grid::{LabeledGrid, Selection},
    iter::{Cells, Labels, Points, Subsets},
};
