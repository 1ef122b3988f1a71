use crate::BoardSnapshot;

/// Terminal result of one solve invocation.
///
/// There is no partial or streaming form: a solve either produces the full
/// ordered move sequence or a single opaque failure reason. The reason is
/// surfaced to the user as-is; no structured sub-classification exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Ordered, human-readable move descriptions. Order is significant:
    /// this is the sequence to execute, not a set.
    Solved(Vec<String>),
    /// The solver could not be reached or returned nothing usable.
    Failed(String),
}

impl SolveOutcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    #[must_use]
    pub fn steps(&self) -> Option<&[String]> {
        match self {
            SolveOutcome::Solved(steps) => Some(steps),
            SolveOutcome::Failed(_) => None,
        }
    }
}

/// Capability to submit a board and obtain an outcome asynchronously.
///
/// The HTTP client implements this against the real solving service; tests
/// substitute stubs so the session state machine is exercised without any
/// network dependency. Implementations are total: failures arrive as
/// [`SolveOutcome::Failed`], never as a panic or an error type.
pub trait Solver {
    fn solve(&self, board: &BoardSnapshot) -> impl Future<Output = SolveOutcome>;
}

#[cfg(test)]
mod tests {
    use super::SolveOutcome;

    #[test]
    fn steps_only_on_success() {
        let solved = SolveOutcome::Solved(vec!["up".into(), "left".into()]);
        assert!(solved.is_solved());
        assert_eq!(solved.steps(), Some(&["up".to_string(), "left".to_string()][..]));

        let failed = SolveOutcome::Failed("unreachable".into());
        assert!(!failed.is_solved());
        assert_eq!(failed.steps(), None);
    }
}
