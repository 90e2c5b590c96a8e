//! Deadline-bounded backtracking search.
//!
//! # Algorithm
//!
//! Fills one (week, column) cell at a time, visiting weeks in the
//! precomputed heuristic order and columns left to right within a week.
//! At each cell every remaining pool entry is tried in pool order; a
//! placement is skipped if the candidate is unavailable that week or
//! already holds an earlier column of the same week. The first complete
//! assignment found is propagated up unchanged.
//!
//! Each recursive call either advances the cursor or shrinks the pool,
//! so the search always terminates: a deadline trips, the pool runs dry,
//! or every cell is filled.
//!
//! The working state is a single mutable grid and a per-entry `used`
//! bitmap over the shared pool slice; every tentative placement is
//! undone before the enclosing loop moves on, so sibling branches never
//! observe each other's placements.

use std::time::Instant;

/// Immutable per-attempt inputs, interned to candidate indices.
pub(crate) struct SearchContext {
    /// `unavailable[week][candidate]` — barred placements.
    pub unavailable: Vec<Vec<bool>>,
    /// Week visiting order, most-constrained first.
    pub order: Vec<usize>,
    /// Columns to fill per week.
    pub slots_per_week: usize,
}

impl SearchContext {
    /// Number of weeks to fill.
    #[inline]
    pub fn weeks(&self) -> usize {
        self.order.len()
    }
}

/// One in-flight attempt over a shuffled pool.
struct Attempt<'a> {
    ctx: &'a SearchContext,
    /// Shuffled candidate indices; duplicates appear after pool growth.
    pool: &'a [usize],
    /// Per-entry consumption flags, parallel to `pool`.
    used: Vec<bool>,
    /// Count of entries with `used == false`.
    remaining: usize,
    /// `grid[week][column]` — tentative placements.
    grid: Vec<Vec<Option<usize>>>,
    deadline: Instant,
}

/// Runs one backtracking attempt.
///
/// Returns the completed `weeks × slots_per_week` grid of candidate
/// indices (in natural week order), or `None` on timeout or exhaustion.
pub(crate) fn search(
    ctx: &SearchContext,
    pool: &[usize],
    deadline: Instant,
) -> Option<Vec<Vec<usize>>> {
    let mut attempt = Attempt {
        ctx,
        pool,
        used: vec![false; pool.len()],
        remaining: pool.len(),
        grid: vec![vec![None; ctx.slots_per_week]; ctx.unavailable.len()],
        deadline,
    };

    if !attempt.fill(0, 0) {
        return None;
    }

    Some(
        attempt
            .grid
            .into_iter()
            .map(|slots| slots.into_iter().flatten().collect())
            .collect(),
    )
}

impl Attempt<'_> {
    /// Fills the cell at (`order[cursor]`, `column`) and recurses.
    fn fill(&mut self, cursor: usize, column: usize) -> bool {
        // Necessary condition, not sufficient: with fewer entries left
        // than weeks in total, some week can never be filled. Checked
        // before the completion test, matching the reference semantics
        // that drive pool growth.
        if self.remaining < self.ctx.weeks() {
            return false;
        }

        // An attempt can run arbitrarily deep, so the deadline is
        // checked on every call, not only at the root.
        if Instant::now() >= self.deadline {
            return false;
        }

        if cursor == self.ctx.order.len() {
            return true;
        }

        let week = self.ctx.order[cursor];
        for entry in 0..self.pool.len() {
            if self.used[entry] {
                continue;
            }
            let candidate = self.pool[entry];
            if self.ctx.unavailable[week][candidate] {
                continue;
            }
            // No double booking within one week.
            if self.grid[week][..column]
                .iter()
                .any(|slot| *slot == Some(candidate))
            {
                continue;
            }

            self.used[entry] = true;
            self.remaining -= 1;
            self.grid[week][column] = Some(candidate);

            let found = if column + 1 < self.ctx.slots_per_week {
                self.fill(cursor, column + 1)
            } else {
                self.fill(cursor + 1, 0)
            };
            if found {
                return true;
            }

            self.grid[week][column] = None;
            self.used[entry] = false;
            self.remaining += 1;
        }

        false
    }
}
