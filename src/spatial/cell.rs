//! Cell and grid descriptor types produced by sampling

use ndarray::Array2;

/// One sampled unit of an image grid
///
/// Carries the region's mean color and the normalized center of its grid
/// slot. Created once during sampling and immutable thereafter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Grid row in [0, resolution)
    pub row: usize,
    /// Grid column in [0, resolution)
    pub col: usize,
    /// Mean channel intensities in [0, 255]
    pub color: [f64; 3],
    /// Normalized (y, x) center of the grid slot in [0, 1]²
    pub position: [f64; 2],
}

impl Cell {
    /// Rec. 601 luma of the cell's mean color
    pub fn luminance(&self) -> f64 {
        let [r, g, b] = self.color;
        0.114f64.mul_add(b, 0.299f64.mul_add(r, 0.587 * g))
    }
}

/// An R×R ordered collection of cells for one image
///
/// Invariant: exactly resolution² cells stored row-major, one per coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    resolution: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Assemble a grid from row-major cells
    ///
    /// Callers must supply exactly resolution² cells in row-major coordinate
    /// order; the sampler is the only intended producer.
    pub(crate) fn from_cells(resolution: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), resolution * resolution);
        Self { resolution, cells }
    }

    /// Cells per side
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Total cell count (resolution²)
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the grid is degenerate
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at a grid coordinate, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.resolution && col < self.resolution {
            self.cells.get(row * self.resolution + col)
        } else {
            None
        }
    }

    /// Mean colors as an n×3 matrix in row-major cell order
    pub fn colors(&self) -> Array2<f64> {
        let mut colors = Array2::zeros((self.cells.len(), 3));
        for (i, cell) in self.cells.iter().enumerate() {
            for (c, &channel) in cell.color.iter().enumerate() {
                if let Some(entry) = colors.get_mut((i, c)) {
                    *entry = channel;
                }
            }
        }
        colors
    }

    /// Normalized slot centers as an n×2 matrix in row-major cell order
    pub fn positions(&self) -> Array2<f64> {
        let mut positions = Array2::zeros((self.cells.len(), 2));
        for (i, cell) in self.cells.iter().enumerate() {
            for (axis, &coord) in cell.position.iter().enumerate() {
                if let Some(entry) = positions.get_mut((i, axis)) {
                    *entry = coord;
                }
            }
        }
        positions
    }
}
