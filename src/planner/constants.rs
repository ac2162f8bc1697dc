use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::MealSlot;

// ─────────────────────────────────────────────────────────────────────────────
// Asymmetric penalty
// ─────────────────────────────────────────────────────────────────────────────

/// Overshoot weight for a single food (linear error).
pub const SINGLE_OVERSHOOT_WEIGHT: f64 = 20.0;

/// Overshoot weight for a stacked combination (squared error).
pub const COMBINATION_OVERSHOOT_WEIGHT: f64 = 100.0;

/// Undershoot weight shared by both penalty shapes.
pub const UNDERSHOOT_WEIGHT: f64 = 1.0;

/// Replaces division when a target component is zero.
pub const ZERO_TARGET_PENALTY: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Single-portion search
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest and largest serving multiplier.
pub const MIN_MULTIPLIER: f64 = 0.25;
pub const MAX_MULTIPLIER: f64 = 3.0;

/// Fine grid step for the single-food search.
pub const GRID_STEP: f64 = 0.05;

/// Allowed overshoot per macro before repair kicks in (5%).
pub const OVERSHOOT_TOLERANCE: f64 = 1.05;

/// Shrink factor and attempt cap for the repair pass.
pub const REPAIR_FACTOR: f64 = 0.9;
pub const MAX_REPAIR_ATTEMPTS: usize = 20;

/// Human-friendly multipliers every result is snapped to.
pub const SERVING_LADDER: [f64; 12] = [
    0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0,
];

/// Upper bucket boundary for each ladder rung up to 2.5; anything above the
/// last boundary rounds to the nearest quarter.
pub const SNAP_BUCKETS: [(f64, f64); 10] = [
    (0.30, 0.25),
    (0.60, 0.5),
    (0.85, 0.75),
    (1.15, 1.0),
    (1.40, 1.25),
    (1.65, 1.5),
    (1.90, 1.75),
    (2.15, 2.0),
    (2.40, 2.25),
    (2.65, 2.5),
];

// ─────────────────────────────────────────────────────────────────────────────
// Combination search
// ─────────────────────────────────────────────────────────────────────────────

/// Foods picked jointly per recommendation.
pub const COMBINATION_SIZE: usize = 3;

/// Candidates kept after the density pre-rank.
pub const CANDIDATE_POOL_SIZE: usize = 15;

/// Coarse per-food multipliers for the joint search (ascending).
pub const COMBINATION_LADDER: [f64; 10] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0];

// ─────────────────────────────────────────────────────────────────────────────
// Ranking
// ─────────────────────────────────────────────────────────────────────────────

/// Weight on the food's grams of the most-needed macro.
pub const DEFICIT_WEIGHT: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Slot shares
// ─────────────────────────────────────────────────────────────────────────────

/// Relative size of each slot before normalization over the active slots.
pub static DEFAULT_SLOT_WEIGHTS: LazyLock<HashMap<MealSlot, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(MealSlot::Breakfast, 25.0);
    m.insert(MealSlot::MidMorning, 10.0);
    m.insert(MealSlot::Lunch, 35.0);
    m.insert(MealSlot::Snack, 10.0);
    m.insert(MealSlot::Dinner, 30.0);
    m.insert(MealSlot::PostWorkout, 10.0);
    m.insert(MealSlot::Supper, 10.0);
    m
});

/// Built-in weight for a slot.
pub fn default_slot_weight(slot: MealSlot) -> f64 {
    *DEFAULT_SLOT_WEIGHTS.get(&slot).unwrap_or(&10.0)
}
