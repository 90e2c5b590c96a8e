//! Restart-based backtracking solver.
//!
//! # Algorithm
//!
//! A single attempt is a depth-first backtracking search that fills one
//! (week, slot) cell at a time, visiting weeks most-constrained-first
//! ([`heuristic::search_order`]) so infeasible branches fail near the
//! root. The [`RestartSolver`] wraps attempts in a timeout-bounded
//! restart loop: each attempt gets a freshly shuffled candidate pool,
//! failed attempts grow the pool by another roster copy, and successes
//! are scored by [`cost::evaluate`] and ranked ascending.
//!
//! The solver guarantees validity (no double booking, no unavailable
//! placements), not optimality: the cost only ranks whatever valid
//! rosters the time budget yields.

mod backtrack;
pub mod cost;
pub mod heuristic;
mod restart;

pub use restart::{RestartSolver, SolveError, SolverConfig};
