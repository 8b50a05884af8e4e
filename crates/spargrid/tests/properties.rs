//! Property-based tests for the partition and enumeration contracts.
//!
//! The core invariant: the subsets of a grid partition its coordinate space.
//! Every point appears in exactly one subset, label lookups agree with a
//! cell-by-cell filter, and the enumeration sequences stay mutually
//! consistent after arbitrary construction and mutation.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use spargrid::{
    LabeledGrid, Selection, key::Key, label::Label, point::Point, shape::Shape,
};

/// Axis extents for small grids: 1 to 3 axes, each of extent 1 to 4.
fn dims_strategy() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..=4, 1..=3)
}

/// Arbitrary small grids over a handful of labels (repeats are the point).
fn grid_strategy() -> impl Strategy<Value = LabeledGrid> {
    dims_strategy()
        .prop_flat_map(|dims| {
            let size: usize = dims.iter().product();
            (Just(dims), prop::collection::vec(-3i64..=3i64, size))
        })
        .prop_map(|(dims, cells)| {
            let shape = Shape::new(dims).expect("extents are positive");
            LabeledGrid::from_flat(shape, cells).expect("cell count matches shape")
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Concatenating all subsets yields every point exactly once.
    #[test]
    fn subsets_partition_the_space(grid in grid_strategy()) {
        let mut covered: Vec<Point> = grid.subsets().flatten().collect();
        covered.sort();

        let space: Vec<Point> = grid.points().collect();
        prop_assert_eq!(covered, space);
    }

    /// A label lookup returns exactly the points whose cell holds the label,
    /// in row-major order.
    #[test]
    fn lookup_equals_cell_filter(grid in grid_strategy()) {
        for label in grid.labels() {
            let looked_up = match grid.get(&Key::label(label)).unwrap() {
                Selection::Subset(points) => points,
                other => panic!("label key returned {other:?}"),
            };
            let filtered: Vec<Point> = grid
                .cells()
                .filter(|&(_, value)| value == label)
                .map(|(point, _)| point)
                .collect();
            prop_assert_eq!(looked_up, filtered);
        }
    }

    /// `len` counts distinct labels, not cells.
    #[test]
    fn len_counts_distinct_labels(grid in grid_strategy()) {
        let distinct: BTreeSet<Label> = grid.cells().map(|(_, value)| value).collect();
        prop_assert_eq!(grid.len(), distinct.len());
        prop_assert_eq!(grid.labels().count(), distinct.len());
    }

    /// `size` is the product of the shape and the length of `points()`.
    #[test]
    fn size_matches_shape_and_points(grid in grid_strategy()) {
        let product: usize = grid.shape().dims().iter().product();
        prop_assert_eq!(grid.size(), product);
        prop_assert_eq!(grid.points().count(), product);
        prop_assert_eq!(grid.cells().count(), product);
    }

    /// Labels come out ascending and without repeats.
    #[test]
    fn labels_ascending_distinct(grid in grid_strategy()) {
        let labels: Vec<Label> = grid.labels().collect();
        for pair in labels.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// Writing a cell is visible to reads and reshapes the partition.
    #[test]
    fn write_then_read(
        (grid, offset) in grid_strategy().prop_flat_map(|grid| {
            let size = grid.size();
            (Just(grid), 0..size)
        })
    ) {
        let mut grid = grid;
        let point = grid.shape().point_at(offset);

        grid.set(&Key::from(&point), 99).unwrap();
        prop_assert_eq!(grid.value_at(&point).unwrap(), 99);

        let subset = grid.subset(99);
        prop_assert!(subset.contains(&point));

        // The scalar-key write stays rejected no matter the grid.
        prop_assert!(grid.set(&Key::label(99), 0).is_err());
    }

    /// An absent label yields an empty subset, never an error.
    #[test]
    fn absent_label_is_empty(grid in grid_strategy()) {
        // The strategy only produces labels in [-3, 3].
        let subset = grid.get(&Key::label(1_000)).unwrap();
        prop_assert_eq!(subset, Selection::Subset(vec![]));
    }
}
