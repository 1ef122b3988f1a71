//! Core domain types for the longacat board editor.
//!
//! This crate contains pure domain types with no IO, no async runtime, and
//! minimal dependencies. Everything here can be used from any layer of the
//! application: the board model, the HTTP solve client, and whatever
//! rendering layer sits on top.

mod cell;
mod size;
mod snapshot;
mod solve;

pub use cell::{CellType, UnknownCellCode};
pub use size::BoardSize;
pub use snapshot::BoardSnapshot;
pub use solve::{SolveOutcome, Solver};
