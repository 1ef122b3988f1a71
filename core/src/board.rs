//! The square grid being authored.

use longacat_types::{BoardSize, BoardSnapshot, CellType};

/// Grid of cell states. Rows are indexed by `y`, columns by `x`.
///
/// Two invariants hold between any two calls:
///
/// - the grid is always exactly `size × size`, with `size` in the editable
///   range enforced by [`BoardSize`]
/// - at most one cell is [`CellType::Cat`]; painting a new cat clears the
///   old one in the same call, so no caller ever observes two
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardModel {
    size: BoardSize,
    grid: Vec<Vec<CellType>>,
}

impl BoardModel {
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            grid: empty_grid(size),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size.get()
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<CellType>] {
        &self.grid
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> CellType {
        self.grid[y][x]
    }

    /// Replace the grid with a fresh all-empty one at the clamped size.
    ///
    /// Out-of-range requests saturate to the nearest bound rather than
    /// failing. Prior content is discarded, never migrated, even when the
    /// size does not change.
    pub fn resize(&mut self, requested: usize) {
        self.size = BoardSize::clamp(requested);
        self.grid = empty_grid(self.size);
    }

    /// Paint one cell.
    ///
    /// Painting [`CellType::Cat`] first clears any previously placed cat,
    /// then sets the target, as one atomic transition. Painting anything
    /// else touches only the target cell.
    ///
    /// In-bounds coordinates are the caller's contract: the sole caller is
    /// a rendering grid that only issues coordinates it drew.
    pub fn paint(&mut self, x: usize, y: usize, cell: CellType) {
        debug_assert!(
            x < self.size() && y < self.size(),
            "paint at ({x}, {y}) outside {} x {} board",
            self.size(),
            self.size(),
        );
        if cell == CellType::Cat {
            for row in &mut self.grid {
                for existing in row {
                    if *existing == CellType::Cat {
                        *existing = CellType::Empty;
                    }
                }
            }
        }
        self.grid[y][x] = cell;
    }

    /// Aliasing-free copy of the grid for building a solve request.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.grid.clone())
    }

    /// Count of cat cells. Always 0 or 1.
    #[must_use]
    pub fn cat_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == CellType::Cat)
            .count()
    }
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

fn empty_grid(size: BoardSize) -> Vec<Vec<CellType>> {
    vec![vec![CellType::Empty; size.get()]; size.get()]
}

#[cfg(test)]
mod tests {
    use super::BoardModel;
    use longacat_types::{BoardSize, CellType};

    fn all_empty(board: &BoardModel) -> bool {
        board
            .grid()
            .iter()
            .flatten()
            .all(|&cell| cell == CellType::Empty)
    }

    #[test]
    fn starts_at_default_size_all_empty() {
        let board = BoardModel::default();
        assert_eq!(board.size(), 6);
        assert!(all_empty(&board));
    }

    #[test]
    fn resize_clamps_to_bounds() {
        let mut board = BoardModel::default();

        board.resize(2);
        assert_eq!(board.size(), 3);
        assert_eq!(board.grid().len(), 3);
        assert!(all_empty(&board));

        board.resize(25);
        assert_eq!(board.size(), 20);
        assert_eq!(board.grid().len(), 20);
        assert!(all_empty(&board));
    }

    #[test]
    fn resize_to_clamped_value_is_stable() {
        let mut board = BoardModel::default();
        board.resize(0);
        let clamped = board.size();
        board.resize(clamped);
        assert_eq!(board.size(), clamped);
    }

    #[test]
    fn resize_discards_content() {
        let mut board = BoardModel::default();
        board.paint(1, 1, CellType::Wall);
        board.paint(2, 2, CellType::Cat);

        board.resize(board.size());
        assert!(all_empty(&board));
    }

    #[test]
    fn painting_a_second_cat_moves_it() {
        let mut board = BoardModel::new(BoardSize::clamp(6));
        board.paint(2, 2, CellType::Wall);
        board.paint(3, 3, CellType::Cat);
        board.paint(1, 1, CellType::Cat);

        assert_eq!(board.cell(3, 3), CellType::Empty);
        assert_eq!(board.cell(1, 1), CellType::Cat);
        assert_eq!(board.cell(2, 2), CellType::Wall);
        assert_eq!(board.cat_count(), 1);
    }

    #[test]
    fn at_most_one_cat_across_paint_sequences() {
        let mut board = BoardModel::default();
        let moves = [
            (0, 0, CellType::Cat),
            (5, 5, CellType::Wall),
            (5, 5, CellType::Cat),
            (0, 0, CellType::Wall),
            (3, 2, CellType::Cat),
            (3, 2, CellType::Empty),
        ];
        for (x, y, cell) in moves {
            board.paint(x, y, cell);
            assert!(board.cat_count() <= 1, "after painting {cell:?} at ({x}, {y})");
        }
    }

    #[test]
    fn non_cat_paint_touches_only_the_target() {
        let mut board = BoardModel::default();
        board.paint(4, 4, CellType::Cat);

        board.paint(1, 2, CellType::Wall);
        assert_eq!(board.cell(1, 2), CellType::Wall);
        assert_eq!(board.cell(4, 4), CellType::Cat);

        board.paint(1, 2, CellType::Empty);
        assert_eq!(board.cell(1, 2), CellType::Empty);
        assert_eq!(board.cell(4, 4), CellType::Cat);
    }

    #[test]
    fn painting_over_the_cat_removes_it() {
        let mut board = BoardModel::default();
        board.paint(2, 3, CellType::Cat);
        board.paint(2, 3, CellType::Wall);
        assert_eq!(board.cat_count(), 0);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutations() {
        let mut board = BoardModel::default();
        board.paint(0, 0, CellType::Wall);
        let snapshot = board.snapshot();

        board.paint(0, 0, CellType::Empty);
        board.resize(3);

        assert_eq!(snapshot.size(), 6);
        assert_eq!(snapshot.cell(0, 0), CellType::Wall);
    }
}
