use serde::Serialize;

/// Cell boundaries of a (possibly non-uniform) rectangular grid.
///
/// `columns` holds the x coordinates of the vertical grid lines and `rows` the
/// y coordinates of the horizontal ones, so a grid of `w × h` cells stores
/// `w + 1` and `h + 1` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    columns: Vec<f64>,
    rows: Vec<f64>,
}

/// One cell of a [`Grid`], with its minimum corner and extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Grid {
    #[must_use]
    pub fn new(columns: Vec<f64>, rows: Vec<f64>) -> Self {
        Self { columns, rows }
    }

    #[must_use]
    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<GridCell> {
        let x0 = *self.columns.get(column)?;
        let x1 = *self.columns.get(column + 1)?;
        let y0 = *self.rows.get(row)?;
        let y1 = *self.rows.get(row + 1)?;
        Some(GridCell {
            column,
            row,
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }

    /// Iterates cells column by column; within a column, rows go top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.column_count()).flat_map(move |column| {
            (0..self.row_count()).filter_map(move |row| self.cell(column, row))
        })
    }

    /// Grid with every x boundary multiplied by `sx` and every y boundary by `sy`.
    #[must_use]
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Self::new(
            self.columns.iter().map(|x| x * sx).collect(),
            self.rows.iter().map(|y| y * sy).collect(),
        )
    }
}
