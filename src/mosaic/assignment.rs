//! Per-cell color-ID assignment produced by matching

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::palette::entry::ColorId;

/// Row-major grid of chosen color-IDs, one per target cell
///
/// Built once by the matcher and consumed read-only by the assembler;
/// nothing mutates an assignment after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    ids: Array2<ColorId>,
}

impl Assignment {
    /// Build an assignment from a row-major ID sequence
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] when the sequence length
    /// does not equal `width * height`.
    ///
    /// [`MosaicError::InvalidParameter`]: crate::io::error::MosaicError::InvalidParameter
    pub fn from_row_major(width: u32, height: u32, ids: Vec<ColorId>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if ids.len() != expected {
            return Err(invalid_parameter(
                "assignment length",
                &ids.len(),
                &format!("expected {expected} entries for a {width}x{height} grid"),
            ));
        }
        let ids = Array2::from_shape_vec((height as usize, width as usize), ids)
            .map_err(|error| invalid_parameter("assignment shape", &"row-major", &error))?;
        Ok(Self { ids })
    }

    /// Grid width in cells
    #[must_use]
    pub fn width(&self) -> u32 {
        self.ids.ncols() as u32
    }

    /// Grid height in cells
    #[must_use]
    pub fn height(&self) -> u32 {
        self.ids.nrows() as u32
    }

    /// ID at a cell, if the cell is in bounds
    #[must_use]
    pub fn get(&self, row: u32, column: u32) -> Option<ColorId> {
        self.ids.get((row as usize, column as usize)).copied()
    }

    /// Cells in row-major order as `(row, column, id)`
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, ColorId)> + '_ {
        self.ids
            .indexed_iter()
            .map(|((row, column), &id)| (row as u32, column as u32, id))
    }

    /// Total number of cells
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.ids.len()
    }
}
