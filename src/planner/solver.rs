use std::cmp::Ordering;

use tracing::debug;

use crate::config::RecommenderConfig;
use crate::models::{FoodCandidate, NutrientProfile, SolutionCandidate, SolveOutcome};
use crate::planner::constants::{DEFAULT_MAX_SOLUTIONS, DEFAULT_TOLERANCE, SINGULAR_EPSILON};

/// Least-squares fit of one food pair to the macros in deficit.
///
/// Rows are the masked macros; columns are the two foods' per-gram
/// nutrient fractions. Amounts are boxed to `[0, upper]`.
#[derive(Debug, Clone)]
struct PairProblem {
    rows: Vec<[f64; 2]>,
    target: Vec<f64>,
    upper: [f64; 2],
}

impl PairProblem {
    fn new(
        first: &FoodCandidate,
        second: &FoodCandidate,
        needed: &NutrientProfile,
        mask: [bool; 3],
        max_volume_cm3: f64,
    ) -> Self {
        let a = first.nutrients.to_array();
        let b = second.nutrients.to_array();
        let y = needed.to_array();

        let mut rows = Vec::with_capacity(3);
        let mut target = Vec::with_capacity(3);
        for d in 0..3 {
            if mask[d] {
                rows.push([a[d], b[d]]);
                target.push(y[d]);
            }
        }

        let upper = [
            first.amount_bound(max_volume_cm3).max(0.0),
            second.amount_bound(max_volume_cm3).max(0.0),
        ];

        Self {
            rows,
            target,
            upper,
        }
    }

    /// L2 norm of `A·x − y`.
    fn residual(&self, x: [f64; 2]) -> f64 {
        self.rows
            .iter()
            .zip(&self.target)
            .map(|(row, y)| {
                let r = row[0] * x[0] + row[1] * x[1] - y;
                r * r
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Normal equations: (AᵀA, Aᵀy).
    fn normal_equations(&self) -> ([[f64; 2]; 2], [f64; 2]) {
        let mut gram = [[0.0; 2]; 2];
        let mut rhs = [0.0; 2];
        for (row, y) in self.rows.iter().zip(&self.target) {
            for k in 0..2 {
                rhs[k] += row[k] * y;
                for l in 0..2 {
                    gram[k][l] += row[k] * row[l];
                }
            }
        }
        (gram, rhs)
    }

    fn in_box(&self, x: [f64; 2]) -> bool {
        (0..2).all(|k| x[k] >= 0.0 && x[k] <= self.upper[k])
    }

    /// Global minimiser over the box.
    ///
    /// The objective is a convex quadratic in two variables, so the
    /// minimum is either the unconstrained solution (when it lies in the
    /// box) or the best point on one of the four edges. When the normal
    /// equations are rank deficient the minimum-norm solution is used,
    /// which is where a gradient method started at zero ends up.
    fn minimize(&self) -> Option<([f64; 2], f64)> {
        let (gram, rhs) = self.normal_equations();
        let det = gram[0][0] * gram[1][1] - gram[0][1] * gram[1][0];
        let scale = gram[0][0] * gram[1][1];

        let free = if scale > 0.0 && det > SINGULAR_EPSILON * scale {
            [
                (gram[1][1] * rhs[0] - gram[0][1] * rhs[1]) / det,
                (gram[0][0] * rhs[1] - gram[1][0] * rhs[0]) / det,
            ]
        } else {
            let trace = gram[0][0] + gram[1][1];
            if trace > 0.0 {
                [rhs[0] / trace, rhs[1] / trace]
            } else {
                [0.0, 0.0]
            }
        };

        let best = if self.in_box(free) {
            (free, self.residual(free))
        } else {
            self.best_on_edges(&gram, &rhs)
        };

        let (x, residual) = best;
        if x.iter().all(|v| v.is_finite()) && residual.is_finite() {
            Some(best)
        } else {
            None
        }
    }

    /// Pin each variable to each bound, solve the other in 1-D and clamp.
    fn best_on_edges(&self, gram: &[[f64; 2]; 2], rhs: &[f64; 2]) -> ([f64; 2], f64) {
        let mut best: Option<([f64; 2], f64)> = None;

        for pinned in 0..2 {
            let other = 1 - pinned;
            for value in [0.0, self.upper[pinned]] {
                let t = if gram[other][other] > 0.0 {
                    (rhs[other] - gram[other][pinned] * value) / gram[other][other]
                } else {
                    0.0
                };

                let mut x = [0.0; 2];
                x[pinned] = value;
                x[other] = t.clamp(0.0, self.upper[other]);

                let residual = self.residual(x);
                if best.is_none_or(|(_, r)| residual < r) {
                    best = Some((x, residual));
                }
            }
        }

        best.unwrap_or(([0.0, 0.0], self.residual([0.0, 0.0])))
    }
}

/// All index pairs `(i, j)` with `i < j` that avoid `excluded_index`,
/// in lexicographic order.
pub fn candidate_pairs(catalog_len: usize, excluded_index: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..catalog_len {
        for j in (i + 1)..catalog_len {
            if i != excluded_index && j != excluded_index {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Searches food pairs for gram amounts that best cover a nutrient need.
#[derive(Debug, Clone)]
pub struct CandidateSolver {
    /// Residual below which a pair is accepted.
    pub tolerance: f64,
    /// Maximum number of solutions kept after ranking.
    pub max_solutions: usize,
}

impl Default for CandidateSolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_solutions: DEFAULT_MAX_SOLUTIONS,
        }
    }
}

impl CandidateSolver {
    pub fn new(tolerance: f64, max_solutions: usize) -> Self {
        Self {
            tolerance,
            max_solutions,
        }
    }

    pub fn from_config(config: &RecommenderConfig) -> Self {
        Self::new(config.tolerance, config.max_solutions)
    }

    /// Rank food pairs for `needed`.
    ///
    /// Returns an empty list when nothing is in deficit. Pairs must have
    /// both amounts strictly positive and a residual under the tolerance
    /// to be accepted; if none qualifies, the best pair with positive
    /// amounts is returned alone.
    pub fn solve(
        &self,
        needed: &NutrientProfile,
        catalog: &[FoodCandidate],
        excluded_index: usize,
        max_volume_cm3: f64,
    ) -> Vec<SolutionCandidate> {
        if !needed.has_positive() {
            return Vec::new();
        }

        let mask = needed.positive_mask();
        let mut accepted: Vec<SolutionCandidate> = Vec::new();
        let mut fallback: Option<SolutionCandidate> = None;

        for (i, j) in candidate_pairs(catalog.len(), excluded_index) {
            let problem = PairProblem::new(&catalog[i], &catalog[j], needed, mask, max_volume_cm3);

            let Some((amounts, residual)) = problem.minimize() else {
                debug!(pair = ?(i, j), "Optimizer produced a non-finite result, skipping pair");
                continue;
            };

            let trial = SolutionCandidate {
                pair: (i, j),
                amounts,
                residual,
            };

            if !trial.amounts_positive() {
                debug!(pair = ?(i, j), ?amounts, residual, "REJECTED (non-positive amount)");
                continue;
            }

            if fallback
                .as_ref()
                .is_none_or(|best| trial.residual < best.residual)
            {
                fallback = Some(trial.clone());
            }

            if trial.residual < self.tolerance {
                debug!(pair = ?(i, j), ?amounts, residual, "ACCEPTED");
                accepted.push(trial);
            } else {
                debug!(
                    pair = ?(i, j),
                    ?amounts,
                    residual,
                    tolerance = self.tolerance,
                    "REJECTED (over tolerance)"
                );
            }
        }

        if accepted.is_empty() {
            if let Some(best) = fallback {
                debug!(pair = ?best.pair, residual = best.residual, "Using best pair as fallback");
                accepted.push(best);
            }
        }

        accepted.sort_by(|a, b| {
            a.residual
                .partial_cmp(&b.residual)
                .unwrap_or(Ordering::Equal)
        });
        accepted.truncate(self.max_solutions);
        accepted
    }

    /// Like [`solve`](Self::solve), but says whether the search came up dry.
    pub fn solve_outcome(
        &self,
        needed: &NutrientProfile,
        catalog: &[FoodCandidate],
        excluded_index: usize,
        max_volume_cm3: f64,
    ) -> SolveOutcome {
        if !needed.has_positive() {
            return SolveOutcome::Optimized(Vec::new());
        }

        let solutions = self.solve(needed, catalog, excluded_index, max_volume_cm3);
        if solutions.is_empty() {
            SolveOutcome::Degraded(*needed)
        } else {
            SolveOutcome::Optimized(solutions)
        }
    }
}
