//! Board authoring model and editor session state machine.
//!
//! This crate owns everything the rendering layer mutates and reads:
//!
//! - [`BoardModel`] - the square grid of cell states and its placement
//!   invariants (size clamping, the single-cat rule, resize semantics)
//! - [`ToolSelector`] - which cell state the next paint places
//! - [`EditorSession`] - the view-facing state struct that ties the two
//!   together with the latest solve outcome, invalidating stale results
//!   whenever the board changes
//!
//! The session is a pure state machine: the one suspension point in the
//! system (the solver round trip) lives behind the `Solver` capability in
//! `longacat-types`, so everything here is testable synchronously.

mod board;
mod session;
mod tools;

pub use board::BoardModel;
pub use session::{EditorSession, SolveTicket};
pub use tools::ToolSelector;
