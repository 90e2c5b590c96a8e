//! Week-ordering heuristic.
//!
//! # Algorithm
//!
//! Most-constrained-first: weeks with more unavailable candidates have
//! fewer legal placements, so visiting them first makes infeasible
//! branches fail near the root of the search tree, where backtracking
//! prunes the most. Ties keep their original week order, so the result
//! is deterministic for a given table.
//!
//! The order is a pure function of the unavailability table and is
//! computed once per solve, never per recursive call.

use std::collections::HashSet;

/// Returns a permutation of week indices, most-constrained week first.
///
/// `unavailable[w]` is the set of candidates barred from week `w`.
/// Sorting is stable, so weeks with equal unavailable counts stay in
/// index order.
pub fn search_order(unavailable: &[HashSet<String>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..unavailable.len()).collect();
    order.sort_by(|&a, &b| unavailable[b].len().cmp(&unavailable[a].len()));
    order
}
