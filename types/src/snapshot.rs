use crate::CellType;

/// Immutable copy of the grid, taken at the moment a solve is triggered.
///
/// The snapshot owns its rows and shares nothing with the live board, so
/// later paints and resizes cannot alter a request that is already on the
/// wire. Rows are indexed by `y`, columns by `x`, matching the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    rows: Vec<Vec<CellType>>,
}

impl BoardSnapshot {
    /// Wraps an owned grid. Callers hand over a square matrix; the board
    /// model is the only production caller and maintains that invariant.
    #[must_use]
    pub fn new(rows: Vec<Vec<CellType>>) -> Self {
        debug_assert!(
            rows.iter().all(|row| row.len() == rows.len()),
            "snapshot grid must be square"
        );
        Self { rows }
    }

    /// Edge length. The wire protocol carries no explicit size field; the
    /// matrix dimensions are the size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> CellType {
        self.rows[y][x]
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellType>] {
        &self.rows
    }

    /// Position `(x, y)` of the cat, if one is placed.
    #[must_use]
    pub fn cat(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.iter()
                .position(|&cell| cell == CellType::Cat)
                .map(|x| (x, y))
        })
    }

    /// Wire-code matrix for the solver request body.
    #[must_use]
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }
}
