use crate::models::MacroVector;
use crate::planner::constants::*;

/// Shape of the asymmetric penalty.
///
/// Overshoot is weighted far above undershoot: falling short can be topped up
/// later in the day, eating too much cannot be undone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenaltyShape {
    pub overshoot_weight: f64,
    pub undershoot_weight: f64,
    /// Square the error magnitude before weighting.
    pub squared: bool,
}

impl PenaltyShape {
    /// Linear error, 20x overshoot. Used when sizing one food.
    pub const SINGLE: PenaltyShape = PenaltyShape {
        overshoot_weight: SINGLE_OVERSHOOT_WEIGHT,
        undershoot_weight: UNDERSHOOT_WEIGHT,
        squared: false,
    };

    /// Squared error, 100x overshoot. Used when stacking several foods,
    /// where overshoot compounds across items.
    pub const COMBINATION: PenaltyShape = PenaltyShape {
        overshoot_weight: COMBINATION_OVERSHOOT_WEIGHT,
        undershoot_weight: UNDERSHOOT_WEIGHT,
        squared: true,
    };

    /// Penalty for one macro, normalized by its target.
    #[inline]
    fn term(&self, obtained: f64, target: f64) -> f64 {
        let error = obtained - target;
        let magnitude = if self.squared { error * error } else { error.abs() };
        let weight = if error > 0.0 {
            self.overshoot_weight
        } else {
            self.undershoot_weight
        };
        let penalty = magnitude * weight;

        if target > 0.0 {
            penalty / target
        } else {
            penalty * ZERO_TARGET_PENALTY
        }
    }

    /// Total cost of `obtained` against `target`; 0 is a perfect fill.
    pub fn cost(&self, obtained: &MacroVector, target: &MacroVector) -> f64 {
        obtained
            .components()
            .iter()
            .zip(target.components())
            .map(|(o, t)| self.term(*o, t))
            .sum()
    }

    /// Cost contributed by overshooting macros only.
    ///
    /// Adding more food never lowers an overshoot, so this is a lower bound on
    /// the cost of any superset of `partial`.
    pub fn overshoot_cost(&self, partial: &MacroVector, target: &MacroVector) -> f64 {
        partial
            .components()
            .iter()
            .zip(target.components())
            .map(|(p, t)| if *p > t { self.term(*p, t) } else { 0.0 })
            .sum()
    }
}

/// Runtime knobs for both optimizers.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    pub single_penalty: PenaltyShape,
    pub combination_penalty: PenaltyShape,
    pub grid_min: f64,
    pub grid_max: f64,
    pub grid_step: f64,
    pub overshoot_tolerance: f64,
    pub repair_factor: f64,
    pub max_repair_attempts: usize,
    pub candidate_pool_size: usize,
    pub combination_ladder: Vec<f64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            single_penalty: PenaltyShape::SINGLE,
            combination_penalty: PenaltyShape::COMBINATION,
            grid_min: MIN_MULTIPLIER,
            grid_max: MAX_MULTIPLIER,
            grid_step: GRID_STEP,
            overshoot_tolerance: OVERSHOOT_TOLERANCE,
            repair_factor: REPAIR_FACTOR,
            max_repair_attempts: MAX_REPAIR_ATTEMPTS,
            candidate_pool_size: CANDIDATE_POOL_SIZE,
            combination_ladder: COMBINATION_LADDER.to_vec(),
        }
    }
}

impl OptimizerConfig {
    /// Multipliers visited by the single-food grid search, inclusive.
    pub fn grid(&self) -> Vec<f64> {
        let steps = ((self.grid_max - self.grid_min) / self.grid_step).round() as usize;
        (0..=steps)
            .map(|i| self.grid_min + i as f64 * self.grid_step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: MacroVector = MacroVector::new(500.0, 40.0, 50.0, 20.0);

    #[test]
    fn test_perfect_fill_costs_nothing() {
        assert_eq!(PenaltyShape::SINGLE.cost(&TARGET, &TARGET), 0.0);
        assert_eq!(PenaltyShape::COMBINATION.cost(&TARGET, &TARGET), 0.0);
    }

    #[test]
    fn test_overshoot_costs_twenty_times_undershoot() {
        let over = MacroVector::new(550.0, 40.0, 50.0, 20.0);
        let under = MacroVector::new(450.0, 40.0, 50.0, 20.0);

        let over_cost = PenaltyShape::SINGLE.cost(&over, &TARGET);
        let under_cost = PenaltyShape::SINGLE.cost(&under, &TARGET);
        assert!((over_cost - 2.0).abs() < 1e-9);
        assert!((under_cost - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_combination_shape_squares_error() {
        let over = MacroVector::new(500.0, 42.0, 50.0, 20.0);
        // (2^2 * 100) / 40
        assert!((PenaltyShape::COMBINATION.cost(&over, &TARGET) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_target_component_does_not_divide() {
        let target = MacroVector::new(200.0, 0.0, 20.0, 5.0);
        let obtained = MacroVector::new(200.0, 1.0, 20.0, 5.0);
        let cost = PenaltyShape::SINGLE.cost(&obtained, &target);
        assert!(cost.is_finite());
        assert!((cost - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_overshoot_cost_ignores_shortfall() {
        let partial = MacroVector::new(600.0, 10.0, 10.0, 10.0);
        let lb = PenaltyShape::COMBINATION.overshoot_cost(&partial, &TARGET);
        assert!((lb - 100.0 * 100.0 * 100.0 / 500.0).abs() < 1e-6);
    }

    #[test]
    fn test_grid_has_56_points() {
        let grid = OptimizerConfig::default().grid();
        assert_eq!(grid.len(), 56);
        assert!((grid[0] - 0.25).abs() < 1e-12);
        assert!((grid[55] - 3.0).abs() < 1e-9);
    }
}
