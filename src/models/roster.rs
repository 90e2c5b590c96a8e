//! Roster (solution) model.
//!
//! A roster is a complete assignment of candidates to every slot of every
//! week. Rosters are produced by the solver already satisfying the hard
//! constraints (no double booking within a week, no unavailable
//! placements); the cost attached by [`ScoredRoster`] only ranks valid
//! rosters against each other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed weekly assignment.
///
/// `weeks[w]` holds the candidates filling week `w`'s slots in column
/// order. Every week has the same number of slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Per-week slot assignments.
    pub weeks: Vec<Vec<String>>,
}

/// A roster together with its evaluated cost. Lower is better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRoster {
    /// The valid assignment.
    pub roster: Roster,
    /// Fairness/spacing penalty; 0 is the best attainable score.
    pub cost: i64,
}

impl Roster {
    /// Creates a roster from per-week slot assignments.
    pub fn new(weeks: Vec<Vec<String>>) -> Self {
        Self { weeks }
    }

    /// Number of weeks covered.
    #[inline]
    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Week indices (in order) at which a candidate appears anywhere.
    ///
    /// A candidate occupies at most one slot per week in a valid roster,
    /// so the result is strictly increasing.
    pub fn appearance_weeks(&self, candidate: &str) -> Vec<usize> {
        self.weeks
            .iter()
            .enumerate()
            .filter(|(_, slots)| slots.iter().any(|s| s == candidate))
            .map(|(week, _)| week)
            .collect()
    }

    /// Whether a candidate fills any slot of the given week.
    pub fn contains_in_week(&self, candidate: &str, week: usize) -> bool {
        self.weeks
            .get(week)
            .is_some_and(|slots| slots.iter().any(|s| s == candidate))
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slots) in self.weeks.iter().enumerate() {
            writeln!(f, "Week {}: {}", i + 1, slots.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            vec!["ana".into(), "ben".into()],
            vec!["cho".into(), "ana".into()],
            vec!["ben".into(), "cho".into()],
        ])
    }

    #[test]
    fn test_appearance_weeks() {
        let r = sample_roster();
        assert_eq!(r.appearance_weeks("ana"), vec![0, 1]);
        assert_eq!(r.appearance_weeks("ben"), vec![0, 2]);
        assert_eq!(r.appearance_weeks("cho"), vec![1, 2]);
        assert!(r.appearance_weeks("nobody").is_empty());
    }

    #[test]
    fn test_contains_in_week() {
        let r = sample_roster();
        assert!(r.contains_in_week("ana", 0));
        assert!(r.contains_in_week("ana", 1));
        assert!(!r.contains_in_week("ana", 2));
        assert!(!r.contains_in_week("ana", 99));
    }

    #[test]
    fn test_display() {
        let r = Roster::new(vec![vec!["ana".into(), "ben".into()]]);
        assert_eq!(r.to_string(), "Week 1: ana ben\n");
    }

    #[test]
    fn test_serde_round() {
        let r = sample_roster();
        let json = serde_json::to_string(&r).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
