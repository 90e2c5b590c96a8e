//! Rostering domain models.
//!
//! Defines the input problem ([`RosterProblem`]) and the solution types
//! ([`Roster`], [`ScoredRoster`]). The solver in [`crate::solver`]
//! consumes a problem and produces scored rosters; nothing here carries
//! any search behavior.

mod problem;
mod roster;

pub use problem::RosterProblem;
pub use roster::{Roster, ScoredRoster};
