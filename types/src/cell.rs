use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One paintable cell state.
///
/// This is a closed set: the painting palette, the wire protocol, and the
/// rendering tables all enumerate exactly these three variants. On the wire
/// a cell is a small integer (`0`/`1`/`2`), which is also how it serializes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CellType {
    /// Open floor the cat can slide across.
    #[default]
    Empty,
    /// Immovable obstacle.
    Wall,
    /// The single movable token. The board enforces uniqueness.
    Cat,
}

/// A cell code outside `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown cell code {0}, expected 0..=2")]
pub struct UnknownCellCode(pub u8);

impl CellType {
    /// Every variant, in wire-code order. Used by palettes that list the
    /// available tools.
    pub const ALL: [CellType; 3] = [CellType::Empty, CellType::Wall, CellType::Cat];

    /// Wire code used in solver payloads.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            CellType::Empty => 0,
            CellType::Wall => 1,
            CellType::Cat => 2,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellType::Empty),
            1 => Some(CellType::Wall),
            2 => Some(CellType::Cat),
            _ => None,
        }
    }

    /// Human-readable name for palette buttons.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CellType::Empty => "Empty",
            CellType::Wall => "Wall",
            CellType::Cat => "Cat",
        }
    }

    /// Glyph drawn inside a cell. Empty cells draw nothing.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            CellType::Empty => "",
            CellType::Wall => "■",
            CellType::Cat => "🐱",
        }
    }

    /// Background color for a rendered cell, as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            CellType::Empty => "#fff",
            CellType::Wall => "#b39ddb",
            CellType::Cat => "#ffd54f",
        }
    }
}

impl From<CellType> for u8 {
    fn from(cell: CellType) -> Self {
        cell.code()
    }
}

impl TryFrom<u8> for CellType {
    type Error = UnknownCellCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(UnknownCellCode(code))
    }
}

#[cfg(test)]
mod tests {
    use super::{CellType, UnknownCellCode};

    #[test]
    fn wire_codes_round_trip() {
        for cell in CellType::ALL {
            assert_eq!(CellType::from_code(cell.code()), Some(cell));
        }
    }

    #[test]
    fn rejects_unknown_code() {
        assert_eq!(CellType::from_code(3), None);
        assert_eq!(CellType::try_from(7), Err(UnknownCellCode(7)));
    }

    #[test]
    fn serializes_as_wire_code() {
        assert_eq!(serde_json::to_string(&CellType::Empty).unwrap(), "0");
        assert_eq!(serde_json::to_string(&CellType::Wall).unwrap(), "1");
        assert_eq!(serde_json::to_string(&CellType::Cat).unwrap(), "2");
    }

    #[test]
    fn deserializes_from_wire_code() {
        let cells: Vec<CellType> = serde_json::from_str("[0,1,2]").unwrap();
        assert_eq!(cells, CellType::ALL);
        assert!(serde_json::from_str::<CellType>("3").is_err());
    }

    #[test]
    fn presentation_mappings_cover_all_variants() {
        assert_eq!(CellType::Wall.label(), "Wall");
        assert_eq!(CellType::Cat.symbol(), "🐱");
        assert_eq!(CellType::Empty.color(), "#fff");
    }
}
