use longacat_types::CellType;

/// Tracks which cell state the next paint places.
///
/// Kept separate from the board because the view mutates the two
/// independently: switching tools never touches the grid, and painting
/// never changes the active tool. Defaults to [`CellType::Wall`], the
/// first thing an author usually places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSelector {
    current: CellType,
}

impl ToolSelector {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: CellType::Wall,
        }
    }

    pub fn select(&mut self, cell: CellType) {
        self.current = cell;
    }

    #[must_use]
    pub const fn current(&self) -> CellType {
        self.current
    }
}

impl Default for ToolSelector {
    fn default() -> Self {
        Self::new()
    }
}
