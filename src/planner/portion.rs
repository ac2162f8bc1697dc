use tracing::debug;

use crate::models::{FoodItem, MacroVector, PortionResult};
use crate::planner::calculations::OptimizerConfig;
use crate::planner::constants::{MAX_MULTIPLIER, MIN_MULTIPLIER, SERVING_LADDER, SNAP_BUCKETS};

/// Snap a raw multiplier onto the serving ladder.
///
/// Bucket edges sit above each rung, so values just past a rung still round
/// down to it. Beyond 2.65 the value rounds to the nearest quarter. The result
/// is always within `[0.25, 3.0]`.
pub fn snap_multiplier(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_MULTIPLIER;
    }
    let snapped = SNAP_BUCKETS
        .iter()
        .find(|(edge, _)| raw <= *edge)
        .map(|(_, rung)| *rung)
        .unwrap_or_else(|| (raw * 4.0).round() / 4.0);
    snapped.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER)
}

/// Whether `m` is one of the ladder rungs.
pub fn is_ladder_value(m: f64) -> bool {
    SERVING_LADDER.iter().any(|rung| (rung - m).abs() < 1e-9)
}

/// Best multiplier on the fine grid; earliest wins ties.
fn grid_search(macros: &MacroVector, target: &MacroVector, config: &OptimizerConfig) -> (f64, f64) {
    let mut best = (config.grid_min, f64::INFINITY);
    for m in config.grid() {
        let cost = config.single_penalty.cost(&macros.scale(m), target);
        if cost < best.1 {
            best = (m, cost);
        }
    }
    best
}

/// Shrink `m` until no macro exceeds the tolerance, up to the attempt cap.
fn repair(macros: &MacroVector, target: &MacroVector, mut m: f64, config: &OptimizerConfig) -> f64 {
    let mut attempts = 0;
    while attempts < config.max_repair_attempts
        && !macros.scale(m).fits_within(target, config.overshoot_tolerance)
    {
        m *= config.repair_factor;
        attempts += 1;
    }
    if attempts > 0 {
        debug!(attempts, multiplier = m, "repaired overshooting multiplier");
    }
    m
}

/// Pick a serving multiplier for one food against a target.
///
/// Grid search on the asymmetric cost, shrink until no macro exceeds the
/// target by more than the tolerance, snap to the ladder. If snapping rounds
/// back up past the tolerance, step down the ladder until it fits or the
/// smallest rung is reached.
pub fn optimize_portion(
    food: &FoodItem,
    target: &MacroVector,
    config: &OptimizerConfig,
) -> PortionResult {
    let macros = food.macros();

    let (best, cost) = grid_search(&macros, target, config);
    let repaired = repair(&macros, target, best, config);
    let mut snapped = snap_multiplier(repaired);

    while snapped > MIN_MULTIPLIER
        && !macros.scale(snapped).fits_within(target, config.overshoot_tolerance)
    {
        snapped = SERVING_LADDER
            .iter()
            .rev()
            .copied()
            .find(|rung| *rung < snapped - 1e-9)
            .unwrap_or(MIN_MULTIPLIER);
    }

    debug!(
        food = %food.name,
        grid_best = best,
        grid_cost = cost,
        repaired,
        multiplier = snapped,
        "sized single portion"
    );

    PortionResult::new(food.clone(), snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_buckets() {
        assert_eq!(snap_multiplier(0.0), 0.25);
        assert_eq!(snap_multiplier(0.3), 0.25);
        assert_eq!(snap_multiplier(0.31), 0.5);
        assert_eq!(snap_multiplier(0.6), 0.5);
        assert_eq!(snap_multiplier(0.85), 0.75);
        assert_eq!(snap_multiplier(0.9), 1.0);
        assert_eq!(snap_multiplier(1.15), 1.0);
        assert_eq!(snap_multiplier(1.2), 1.25);
        assert_eq!(snap_multiplier(2.65), 2.5);
        assert_eq!(snap_multiplier(2.7), 2.75);
        assert_eq!(snap_multiplier(2.9), 3.0);
        assert_eq!(snap_multiplier(7.0), 3.0);
    }

    #[test]
    fn test_snapped_values_are_on_ladder() {
        for i in 0..400 {
            let raw = i as f64 * 0.01;
            assert!(is_ladder_value(snap_multiplier(raw)), "raw {} off ladder", raw);
        }
    }

    #[test]
    fn test_exact_multiple_is_found() {
        let food = FoodItem::new("Rice", 130.0, 2.7, 28.0, 0.3);
        let target = food.scaled(2.0);
        let result = optimize_portion(&food, &target, &OptimizerConfig::default());
        assert_eq!(result.multiplier, 2.0);
    }

    #[test]
    fn test_prefers_short_over_long() {
        // 1.1 servings fills exactly; the grid lands there, the snap rounds to 1.
        let food = FoodItem::new("Lentils", 100.0, 10.0, 10.0, 1.0);
        let target = food.scaled(1.1);
        let result = optimize_portion(&food, &target, &OptimizerConfig::default());
        assert_eq!(result.multiplier, 1.0);
        assert!(result.achieved.fits_within(&target, 1.0));
    }

    #[test]
    fn test_snap_up_is_stepped_back_down() {
        // Grid best is 0.9 (exact fill); the 0.85..1.15 bucket would round it
        // to 1.0, an 11% overshoot, so the result steps down to 0.75.
        let food = FoodItem::new("Bread", 250.0, 9.0, 49.0, 3.2);
        let target = food.scaled(0.9);
        let result = optimize_portion(&food, &target, &OptimizerConfig::default());
        assert_eq!(result.multiplier, 0.75);
    }

    #[test]
    fn test_zero_target_gets_smallest_serving() {
        let food = FoodItem::new("Butter", 717.0, 0.9, 0.1, 81.0);
        let result = optimize_portion(&food, &MacroVector::zero(), &OptimizerConfig::default());
        assert_eq!(result.multiplier, 0.25);
    }
}
