//! Roster cost evaluation.
//!
//! Scores a completed, valid roster for fairness and spacing. The score
//! only ranks valid rosters against each other; the search never uses
//! it for pruning.
//!
//! # Penalties
//!
//! Per roster candidate, with `n` = number of weeks they appear in:
//!
//! | Condition | Penalty |
//! |-----------|---------|
//! | `n > 1` | `2^n` |
//! | two appearances in adjacent weeks | 50 per adjacent pair |
//! | listed in the extra-cost table | `weight × n` |
//!
//! 0 is the best attainable score (everyone at most once, nobody
//! listed in the cost table); there is no upper bound.

use crate::models::Roster;
use std::collections::HashMap;

/// Flat penalty for a pair of appearances in back-to-back weeks.
const ADJACENT_WEEK_PENALTY: i64 = 50;

/// Evaluates the cost of a completed roster. Pure; lower is better.
///
/// `candidates` is the full original roster (not the grown working
/// pool); candidates absent from `extra_cost` carry weight 0.
pub fn evaluate(
    candidates: &[String],
    extra_cost: &HashMap<String, i64>,
    roster: &Roster,
) -> i64 {
    let mut cost: i64 = 0;

    for candidate in candidates {
        let appearances = roster.appearance_weeks(candidate);

        if appearances.len() > 1 {
            cost = cost.saturating_add(2i64.saturating_pow(appearances.len() as u32));

            // Every ordered pair is inspected; since a candidate appears
            // at most once per week the list is strictly increasing and
            // only the ascending orientation of an adjacent pair has
            // distance exactly 1.
            for &a1 in &appearances {
                for &a2 in &appearances {
                    if a2 as i64 - a1 as i64 == 1 {
                        cost = cost.saturating_add(ADJACENT_WEEK_PENALTY);
                    }
                }
            }
        }

        if let Some(&weight) = extra_cost.get(candidate) {
            cost = cost.saturating_add(weight.saturating_mul(appearances.len() as i64));
        }
    }

    cost
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn roster(weeks: &[&[&str]]) -> Roster {
        Roster::new(
            weeks
                .iter()
                .map(|slots| slots.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_unique_appearances_cost_zero() {
        let r = roster(&[&["a", "b"], &["c", "d"]]);
        assert_eq!(evaluate(&names(&["a", "b", "c", "d"]), &HashMap::new(), &r), 0);
    }

    #[test]
    fn test_adjacent_repeat() {
        // "a" in weeks 0 and 1: 2^2 + 50 = 54.
        let r = roster(&[&["a", "b"], &["a", "c"]]);
        assert_eq!(evaluate(&names(&["a", "b", "c"]), &HashMap::new(), &r), 54);
    }

    #[test]
    fn test_non_adjacent_repeat() {
        // "a" in weeks 0 and 2: no adjacency, only 2^2.
        let r = roster(&[&["a", "b"], &["c", "d"], &["a", "c"]]);
        assert_eq!(
            evaluate(&names(&["a", "b", "c", "d"]), &HashMap::new(), &r),
            // "c" also repeats in weeks 1 and 2: 2^2 + 50.
            4 + 4 + 50
        );
    }

    #[test]
    fn test_three_consecutive_weeks() {
        // "a" in weeks 0, 1, 2: 2^3 plus two adjacent pairs.
        let r = roster(&[&["a"], &["a"], &["a"]]);
        assert_eq!(evaluate(&names(&["a"]), &HashMap::new(), &r), 8 + 100);
    }

    #[test]
    fn test_extra_cost_scales_with_appearances() {
        let r = roster(&[&["a", "b"], &["c", "a"], &["a", "d"]]);
        let table: HashMap<String, i64> = [("a".to_string(), 3)].into_iter().collect();
        // "a" three times, weeks 0-2: 2^3 + 2*50 + 3*3 = 117.
        assert_eq!(evaluate(&names(&["a", "b", "c", "d"]), &table, &r), 117);
    }

    #[test]
    fn test_extra_cost_applies_to_single_appearance() {
        let r = roster(&[&["a", "b"]]);
        let table: HashMap<String, i64> = [("a".to_string(), 7)].into_iter().collect();
        assert_eq!(evaluate(&names(&["a", "b"]), &table, &r), 7);
    }

    #[test]
    fn test_extra_cost_ignored_when_absent_from_roster_weeks() {
        // Listed candidate never placed: weight × 0 appearances.
        let r = roster(&[&["a", "b"]]);
        let table: HashMap<String, i64> = [("c".to_string(), 7)].into_iter().collect();
        assert_eq!(evaluate(&names(&["a", "b", "c"]), &table, &r), 0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let r = roster(&[&["a", "b"], &["a", "c"], &["b", "c"]]);
        let roster_names = names(&["a", "b", "c"]);
        let table: HashMap<String, i64> = [("b".to_string(), 2)].into_iter().collect();
        let first = evaluate(&roster_names, &table, &r);
        assert_eq!(evaluate(&roster_names, &table, &r), first);
    }
}
