use std::fmt;

/// Board edge length, always within the editable range.
///
/// Construction saturating-clamps to `[MIN, MAX]` rather than rejecting, so
/// every resize request is total: values below 3 become 3, values above 20
/// become 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest editable board edge.
    pub const MIN: usize = 3;
    /// Largest editable board edge.
    pub const MAX: usize = 20;
    /// Edge length of a freshly created session.
    pub const DEFAULT: BoardSize = BoardSize(6);

    #[must_use]
    pub fn clamp(requested: usize) -> Self {
        Self(requested.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
