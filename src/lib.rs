//! Weekly duty rostering by randomized-restart backtracking.
//!
//! Assigns a fixed roster of candidates to recurring weekly slots so
//! that nobody is double-booked within a week and nobody is placed in
//! a week where they are unavailable. Valid rosters are accumulated by
//! timeout-bounded restarts and ranked by a fairness/spacing cost
//! (repeat appearances, back-to-back weeks, per-candidate weights).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RosterProblem`, `Roster`, `ScoredRoster`
//! - **`validation`**: Input integrity checks (duplicate names, dangling
//!   references, degenerate dimensions)
//! - **`solver`**: The search engine — week-ordering heuristic,
//!   deadline-bounded backtracking, restart controller, cost evaluator
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use rota_solver::models::RosterProblem;
//! use rota_solver::solver::SolverConfig;
//!
//! let problem = RosterProblem::new(
//!     vec!["ana".into(), "ben".into(), "cho".into(), "dee".into()],
//!     vec![
//!         Default::default(),
//!         ["ben".to_string()].into_iter().collect(),
//!         Default::default(),
//!     ],
//! );
//! let config = SolverConfig::new()
//!     .with_attempt_timeout(Duration::from_millis(20))
//!     .with_global_timeout(Duration::from_millis(80))
//!     .with_seed(42);
//!
//! let ranked = rota_solver::solve(&problem, config).unwrap();
//! let best = &ranked[0];
//! assert!(!best.roster.contains_in_week("ben", 1));
//! ```

pub mod models;
pub mod solver;
pub mod validation;

use models::{RosterProblem, ScoredRoster};
use solver::{RestartSolver, SolveError, SolverConfig};

/// Solves a rostering problem, returning valid rosters ranked ascending
/// by cost. Convenience wrapper around [`RestartSolver`].
pub fn solve(
    problem: &RosterProblem,
    config: SolverConfig,
) -> Result<Vec<ScoredRoster>, SolveError> {
    RestartSolver::new(config).solve(problem)
}
