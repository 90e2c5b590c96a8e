//! Rostering problem definition.
//!
//! A problem is a roster of candidates, a per-week unavailability table,
//! an optional per-candidate extra-cost table, and the number of slots
//! each week must fill. The unavailability table fixes the planning
//! horizon: one entry per week to schedule.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Input container for a rostering problem.
///
/// Candidates are opaque names; equality is by name and the roster must
/// not contain duplicates (enforced by [`crate::validation`], not here).
///
/// # Example
///
/// ```
/// use rota_solver::models::RosterProblem;
///
/// let problem = RosterProblem::new(
///     vec!["ana".into(), "ben".into(), "cho".into()],
///     vec![Default::default(), ["ben".to_string()].into_iter().collect()],
/// )
/// .with_slots_per_week(2)
/// .with_extra_cost("cho", 3);
///
/// assert_eq!(problem.weeks(), 2);
/// assert_eq!(problem.cost_weight("cho"), 3);
/// assert_eq!(problem.cost_weight("ana"), 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterProblem {
    /// Ordered roster of candidate names (unique).
    pub candidates: Vec<String>,
    /// Per-week sets of candidates who must not be placed that week.
    /// The length of this table is the number of weeks to schedule.
    pub unavailable: Vec<HashSet<String>>,
    /// Extra cost charged per appearance of a listed candidate.
    /// Candidates absent from this table have weight 0.
    #[serde(default)]
    pub extra_cost: HashMap<String, i64>,
    /// Slots to fill in each week.
    #[serde(default = "default_slots_per_week")]
    pub slots_per_week: usize,
}

fn default_slots_per_week() -> usize {
    2
}

impl RosterProblem {
    /// Creates a problem with the default width of two slots per week.
    pub fn new(candidates: Vec<String>, unavailable: Vec<HashSet<String>>) -> Self {
        Self {
            candidates,
            unavailable,
            extra_cost: HashMap::new(),
            slots_per_week: default_slots_per_week(),
        }
    }

    /// Sets the number of slots per week.
    pub fn with_slots_per_week(mut self, slots: usize) -> Self {
        self.slots_per_week = slots;
        self
    }

    /// Adds an extra cost weight for one candidate.
    pub fn with_extra_cost(mut self, candidate: impl Into<String>, weight: i64) -> Self {
        self.extra_cost.insert(candidate.into(), weight);
        self
    }

    /// Number of weeks to schedule.
    #[inline]
    pub fn weeks(&self) -> usize {
        self.unavailable.len()
    }

    /// Extra cost weight for a candidate (0 if unlisted).
    #[inline]
    pub fn cost_weight(&self, candidate: &str) -> i64 {
        self.extra_cost.get(candidate).copied().unwrap_or(0)
    }

    /// Whether a candidate is unavailable in the given week.
    pub fn is_unavailable(&self, candidate: &str, week: usize) -> bool {
        self.unavailable
            .get(week)
            .is_some_and(|set| set.contains(candidate))
    }
}
