//! Randomized-restart controller.
//!
//! # Algorithm
//!
//! 1. Shuffle a working copy of the roster (uniform permutation).
//! 2. Run one backtracking attempt with a fresh per-attempt deadline.
//! 3. On failure (timeout or exhaustion), append another full roster
//!    copy to the working pool — letting candidates legitimately repeat
//!    across weeks when the roster is too small — and retry.
//! 4. On success, score the roster and record it.
//! 5. Repeat until the global deadline elapses; rank results ascending
//!    by cost.
//!
//! Shuffling happens once per attempt, so each attempt is deterministic
//! while different attempts explore different parts of the space. The
//! generator is seedable for reproducible runs.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use thiserror::Error;

use crate::models::{Roster, RosterProblem, ScoredRoster};
use crate::solver::backtrack::{self, SearchContext};
use crate::solver::{cost, heuristic};
use crate::validation::{validate_problem, ValidationError, ValidationErrorKind};

/// Errors from a solve run.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The problem or configuration failed boundary validation.
    #[error("invalid problem: {0:?}")]
    InvalidInput(Vec<ValidationError>),
    /// The global deadline elapsed without a single valid roster.
    #[error("no valid roster found within the time budget ({attempts} attempts)")]
    NoSolution {
        /// Attempts made before giving up.
        attempts: usize,
    },
}

/// Timing and reproducibility settings for a solve run.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Budget for a single backtracking attempt.
    pub attempt_timeout: Duration,
    /// Budget for the whole run.
    pub global_timeout: Duration,
    /// Seed for the shuffle generator; `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            attempt_timeout: Duration::from_millis(500),
            global_timeout: Duration::from_secs(5),
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-attempt budget.
    pub fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// Sets the whole-run budget.
    pub fn with_global_timeout(mut self, timeout: Duration) -> Self {
        self.global_timeout = timeout;
        self
    }

    /// Fixes the shuffle seed for deterministic replay.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Randomized-restart roster solver.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use rota_solver::models::RosterProblem;
/// use rota_solver::solver::{RestartSolver, SolverConfig};
///
/// let problem = RosterProblem::new(
///     vec!["ana".into(), "ben".into(), "cho".into()],
///     vec![Default::default(), Default::default()],
/// );
/// let config = SolverConfig::new()
///     .with_attempt_timeout(Duration::from_millis(20))
///     .with_global_timeout(Duration::from_millis(60))
///     .with_seed(7);
///
/// let ranked = RestartSolver::new(config).solve(&problem).unwrap();
/// assert!(ranked.windows(2).all(|w| w[0].cost <= w[1].cost));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestartSolver {
    config: SolverConfig,
}

impl RestartSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Runs restarts until the global deadline and returns every valid
    /// roster found, ranked ascending by cost.
    ///
    /// The caller truncates to however many top results it wants.
    ///
    /// # Errors
    /// [`SolveError::InvalidInput`] if the problem or timeouts fail
    /// validation; [`SolveError::NoSolution`] if the deadline elapses
    /// without a single valid roster.
    pub fn solve(&self, problem: &RosterProblem) -> Result<Vec<ScoredRoster>, SolveError> {
        self.validate(problem)?;

        let candidates = &problem.candidates;
        let weeks = problem.weeks();
        let width = problem.slots_per_week;
        let ctx = SearchContext {
            unavailable: intern_unavailability(problem),
            order: heuristic::search_order(&problem.unavailable),
            slots_per_week: width,
        };

        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let mut working: Vec<usize> = (0..candidates.len()).collect();
        let mut copies = 1usize;
        let mut results: Vec<ScoredRoster> = Vec::new();
        let mut attempts = 0usize;

        let start = Instant::now();
        let global_deadline = start + self.config.global_timeout;

        loop {
            let now = Instant::now();
            if now >= global_deadline {
                break;
            }

            working.shuffle(&mut rng);
            // Clamped so the run never overshoots the global budget.
            let deadline = global_deadline.min(now + self.config.attempt_timeout);
            attempts += 1;

            match backtrack::search(&ctx, &working, deadline) {
                Some(grid) => {
                    let roster = materialize(grid, candidates);
                    let cost = cost::evaluate(candidates, &problem.extra_cost, &roster);
                    debug!("attempt {attempts}: found roster with cost {cost}");
                    results.push(ScoredRoster { roster, cost });
                }
                None => {
                    // With `weeks` copies of everyone and enough entries to
                    // satisfy the pool-size check at full depth, further
                    // copies cannot unlock any new assignment.
                    if copies < weeks || working.len() < weeks * (width + 1) {
                        working.extend(0..candidates.len());
                        copies += 1;
                        debug!(
                            "attempt {attempts}: no roster within budget, growing pool to {} entries",
                            working.len()
                        );
                    } else {
                        debug!("attempt {attempts}: no roster within budget");
                    }
                }
            }
        }

        results.sort_by_key(|s| s.cost);
        info!(
            "finished after {attempts} attempts in {:?}: {} roster(s) found",
            start.elapsed(),
            results.len()
        );

        if results.is_empty() {
            Err(SolveError::NoSolution { attempts })
        } else {
            Ok(results)
        }
    }

    fn validate(&self, problem: &RosterProblem) -> Result<(), SolveError> {
        let mut errors = match validate_problem(problem) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };
        if self.config.attempt_timeout.is_zero() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveTimeout,
                "Attempt timeout must be positive",
            ));
        }
        if self.config.global_timeout.is_zero() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveTimeout,
                "Global timeout must be positive",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolveError::InvalidInput(errors))
        }
    }
}

/// Builds the `[week][candidate]` unavailability bitmap.
fn intern_unavailability(problem: &RosterProblem) -> Vec<Vec<bool>> {
    let index: HashMap<&str, usize> = problem
        .candidates
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let mut table = vec![vec![false; problem.candidates.len()]; problem.weeks()];
    for (week, set) in problem.unavailable.iter().enumerate() {
        for name in set {
            // Unknown names are rejected by validation before search.
            if let Some(&i) = index.get(name.as_str()) {
                table[week][i] = true;
            }
        }
    }
    table
}

/// Converts an index grid back into a named roster, in natural week order.
fn materialize(grid: Vec<Vec<usize>>, candidates: &[String]) -> Roster {
    Roster::new(
        grid.into_iter()
            .map(|slots| slots.into_iter().map(|i| candidates[i].clone()).collect())
            .collect(),
    )
}
