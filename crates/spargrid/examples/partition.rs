//! Minimal example: paint labels into a grid and enumerate its subsets.

use std::error::Error;

use spargrid::{
    LabeledGrid,
    key::{AxisKey, Key},
    shape::Shape,
};

fn main() -> Result<(), Box<dyn Error>> {
    // 4x4 grid, all cells start with label 0
    let mut grid = LabeledGrid::zeros(Shape::new(vec![4, 4])?);

    // Label the top-left quadrant 1 and the bottom row 2
    grid.set(&Key::coord([AxisKey::Span(0..2), AxisKey::Span(0..2)]), 1)?;
    grid.set(&Key::cell([3]), 2)?;

    println!("{grid}");
    println!("{} distinct labels over {} cells", grid.len(), grid.size());

    for (label, subset) in grid.labels().zip(grid.subsets()) {
        println!("label {label}: {} cells, first at {}", subset.len(), subset[0]);
    }

    let twos = grid.get(&Key::label(2))?.into_subset().unwrap();
    assert_eq!(twos.len(), 4);

    Ok(())
}
