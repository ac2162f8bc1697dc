use std::cmp::Ordering;

use tracing::debug;

use crate::models::{FoodItem, MacroVector};
use crate::planner::calculations::{OptimizerConfig, PenaltyShape};
use crate::planner::constants::COMBINATION_SIZE;

/// Multipliers and totals found by the joint search.
#[derive(Debug, Clone, PartialEq)]
pub struct JointPlan {
    /// One multiplier per food, same order as [`Combination::foods`].
    pub multipliers: Vec<f64>,
    pub achieved: MacroVector,
    pub cost: f64,
}

/// Foods chosen to fill a target together.
#[derive(Debug, Clone)]
pub struct Combination<'a> {
    pub foods: Vec<&'a FoodItem>,
    /// `None` when the catalog was too small to search and every item was
    /// returned as-is.
    pub joint: Option<JointPlan>,
}

/// Counters from one search, for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub triples: usize,
    pub evaluated: usize,
    pub pruned_branches: usize,
}

/// Highest energy-density foods first, name as tie-break.
pub fn rank_candidates<'a>(catalog: &[&'a FoodItem], pool_size: usize) -> Vec<&'a FoodItem> {
    let mut ranked = catalog.to_vec();
    ranked.sort_by(|a, b| {
        b.density_score()
            .partial_cmp(&a.density_score())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key().cmp(&b.key()))
    });
    ranked.truncate(pool_size);
    ranked
}

/// Per-food macros at every ladder rung, ascending.
fn scaled_table(food: &FoodItem, ladder: &[f64]) -> Vec<MacroVector> {
    ladder.iter().map(|m| food.scaled(*m)).collect()
}

struct Best {
    indices: [usize; 3],
    rungs: [usize; 3],
    achieved: MacroVector,
    cost: f64,
}

/// Search every multiplier triple for one food triple, updating `best`.
///
/// Ladders are ascending and macros non-negative, so partial sums only grow
/// along each loop. Once the overshoot of a partial sum alone cannot beat the
/// best cost, the rest of that loop is skipped.
fn search_triple(
    tables: [&[MacroVector]; 3],
    indices: [usize; 3],
    target: &MacroVector,
    shape: &PenaltyShape,
    best: &mut Option<Best>,
    stats: &mut SearchStats,
) {
    let bound = |best: &Option<Best>| best.as_ref().map_or(f64::INFINITY, |b| b.cost);

    for (ra, a) in tables[0].iter().enumerate() {
        if shape.overshoot_cost(a, target) >= bound(best) {
            stats.pruned_branches += 1;
            break;
        }
        for (rb, b) in tables[1].iter().enumerate() {
            let ab = *a + *b;
            if shape.overshoot_cost(&ab, target) >= bound(best) {
                stats.pruned_branches += 1;
                break;
            }
            for (rc, c) in tables[2].iter().enumerate() {
                let total = ab + *c;
                let cost = shape.cost(&total, target);
                stats.evaluated += 1;
                if cost < bound(best) {
                    *best = Some(Best {
                        indices,
                        rungs: [ra, rb, rc],
                        achieved: total,
                        cost,
                    });
                } else if shape.overshoot_cost(&total, target) >= bound(best) {
                    stats.pruned_branches += 1;
                    break;
                }
            }
        }
    }
}

/// Choose three foods and a multiplier for each that jointly fill `target`.
///
/// Candidates are pre-ranked by energy density and capped at the configured
/// pool size; every unordered triple of the pool is then searched over the
/// coarse ladder with the squared combination penalty. With fewer foods than
/// the combination size, all of them are returned without searching.
pub fn optimize_combination<'a>(
    catalog: &[&'a FoodItem],
    target: &MacroVector,
    config: &OptimizerConfig,
) -> Combination<'a> {
    if catalog.len() < COMBINATION_SIZE {
        debug!(available = catalog.len(), "catalog too small for joint search");
        return Combination {
            foods: catalog.to_vec(),
            joint: None,
        };
    }

    let pool = rank_candidates(catalog, config.candidate_pool_size);
    let tables: Vec<Vec<MacroVector>> = pool
        .iter()
        .map(|f| scaled_table(f, &config.combination_ladder))
        .collect();

    let mut best: Option<Best> = None;
    let mut stats = SearchStats::default();

    for i in 0..pool.len() {
        for j in (i + 1)..pool.len() {
            for k in (j + 1)..pool.len() {
                stats.triples += 1;
                search_triple(
                    [tables[i].as_slice(), tables[j].as_slice(), tables[k].as_slice()],
                    [i, j, k],
                    target,
                    &config.combination_penalty,
                    &mut best,
                    &mut stats,
                );
            }
        }
    }

    debug!(
        pool = pool.len(),
        triples = stats.triples,
        evaluated = stats.evaluated,
        pruned = stats.pruned_branches,
        "joint search finished"
    );

    match best {
        Some(b) => Combination {
            foods: b.indices.iter().map(|i| pool[*i]).collect(),
            joint: Some(JointPlan {
                multipliers: b.rungs.iter().map(|r| config.combination_ladder[*r]).collect(),
                achieved: b.achieved,
                cost: b.cost,
            }),
        },
        None => Combination {
            foods: Vec::new(),
            joint: None,
        },
    }
}
