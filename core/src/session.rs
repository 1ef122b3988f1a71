//! View-facing editor state machine.

use longacat_types::{BoardSnapshot, CellType, SolveOutcome, Solver};

use crate::{BoardModel, ToolSelector};

/// Handle for one in-flight solve, issued by [`EditorSession::begin_solve`].
///
/// Pairs the snapshot to submit with the board generation at issuance, so
/// the session can tell on completion whether the response still describes
/// the current board.
#[derive(Debug, Clone)]
pub struct SolveTicket {
    generation: u64,
    snapshot: BoardSnapshot,
}

impl SolveTicket {
    #[must_use]
    pub fn snapshot(&self) -> &BoardSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything the rendering layer reads and mutates, in one owned struct.
///
/// Intents arrive as plain method calls (`set_size`, `paint_cell`,
/// `select_tool`); outputs are read back through accessors. Any mutation of
/// the board bumps an internal generation counter and drops the held solve
/// outcome, because it no longer corresponds to what is on screen.
///
/// The solve lifecycle is split into `begin_solve` / `complete_solve` so
/// the session itself never suspends: the caller runs the network round
/// trip between the two calls (or uses [`EditorSession::solve_with`] to do
/// all three steps). Completions carrying a stale generation are discarded,
/// which closes the race where a slow response for an old board would
/// overwrite the invalidation its mutation triggered. Overlapping solves
/// are permitted; the in-progress flag stays set until every outstanding
/// ticket has completed.
#[derive(Debug, Default)]
pub struct EditorSession {
    board: BoardModel,
    tools: ToolSelector,
    generation: u64,
    in_flight: usize,
    result: Option<SolveOutcome>,
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- view intents -----------------------------------------------------

    /// Resize the board. The request is clamped, the grid is reset to all
    /// empty, and any held solve outcome is dropped.
    pub fn set_size(&mut self, requested: usize) {
        self.board.resize(requested);
        self.mutated();
    }

    /// Paint the cell at `(x, y)` with the currently selected tool.
    pub fn paint_cell(&mut self, x: usize, y: usize) {
        self.board.paint(x, y, self.tools.current());
        self.mutated();
    }

    /// Change the active tool. Does not touch the board, so the held solve
    /// outcome stays valid.
    pub fn select_tool(&mut self, cell: CellType) {
        self.tools.select(cell);
    }

    // --- solve lifecycle --------------------------------------------------

    /// Snapshot the board and mark a solve as outstanding.
    ///
    /// Every ticket must eventually be handed back through
    /// [`EditorSession::complete_solve`], or `solve_in_progress` reports
    /// busy forever. The `Solver` capability is total - failures arrive as
    /// a `Failed` outcome - so there is always an outcome to hand back.
    #[must_use]
    pub fn begin_solve(&mut self) -> SolveTicket {
        self.in_flight += 1;
        SolveTicket {
            generation: self.generation,
            snapshot: self.board.snapshot(),
        }
    }

    /// Install the outcome of a completed solve.
    ///
    /// Consumes the ticket, so one `begin_solve` pairs with exactly one
    /// completion and the outstanding count cannot drift. If the board has
    /// been mutated since the ticket was issued the outcome is discarded:
    /// it describes a board the user is no longer looking at.
    pub fn complete_solve(&mut self, ticket: SolveTicket, outcome: SolveOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket_generation = ticket.generation,
                board_generation = self.generation,
                "discarding stale solve response"
            );
            return;
        }
        self.result = Some(outcome);
    }

    /// One full solve round trip against the given solver.
    pub async fn solve_with<S: Solver>(&mut self, solver: &S) {
        let ticket = self.begin_solve();
        let outcome = solver.solve(ticket.snapshot()).await;
        self.complete_solve(ticket, outcome);
    }

    // --- view outputs -----------------------------------------------------

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<CellType>] {
        self.board.grid()
    }

    #[must_use]
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    #[must_use]
    pub fn current_tool(&self) -> CellType {
        self.tools.current()
    }

    /// Latest solve outcome, if the board has not changed since it arrived.
    #[must_use]
    pub fn solve_result(&self) -> Option<&SolveOutcome> {
        self.result.as_ref()
    }

    /// True while at least one solve is outstanding. The view uses this to
    /// show a busy indicator and disable the solve trigger.
    #[must_use]
    pub fn solve_in_progress(&self) -> bool {
        self.in_flight > 0
    }

    fn mutated(&mut self) {
        self.generation += 1;
        if self.result.take().is_some() {
            tracing::debug!(generation = self.generation, "board changed, dropping solve result");
        }
    }
}
