use tracing::{debug, info};

use crate::error::Result;
use crate::models::{DayLog, FoodItem, MealSlot, PortionResult, Profile};
use crate::planner::allocation::{allocate_target, SlotShares, SlotTarget};
use crate::planner::calculations::OptimizerConfig;
use crate::planner::combination::{optimize_combination, JointPlan};
use crate::planner::filter::filter_catalog;
use crate::planner::preview::preview_selection;
use crate::planner::ranking::{largest_deficit, rank_remaining, Macronutrient, RankedFood};

/// Everything shown for one slot's recommendation view.
#[derive(Debug, Clone)]
pub struct RecommendationSet<'a> {
    pub target: SlotTarget,

    /// Macro the "more ideas" list is ordered by.
    pub focus: Macronutrient,

    /// Winning foods sized one after another against the slot target.
    pub top: Vec<PortionResult>,

    /// Multipliers from the joint search, kept for inspection.
    pub joint: Option<JointPlan>,

    /// Remaining catalog entries, best first.
    pub others: Vec<RankedFood<'a>>,
}

impl RecommendationSet<'_> {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.others.is_empty()
    }
}

/// Build the recommendation for `slot` from scratch.
///
/// Pure: the same profile, log and catalog always give the same result. An
/// empty catalog after exclusions yields an empty set, not an error.
pub fn compute_recommendations<'a>(
    profile: &Profile,
    log: &DayLog,
    slot: MealSlot,
    catalog: &[&'a FoodItem],
    config: &OptimizerConfig,
) -> Result<RecommendationSet<'a>> {
    let shares = SlotShares::for_profile(profile);
    let target = allocate_target(&profile.goal, &profile.slots, &shares, log, slot)?;
    let focus = largest_deficit(&target.remaining, &profile.goal);

    let allowed = filter_catalog(catalog, &profile.exclusions);
    debug!(
        catalog = catalog.len(),
        allowed = allowed.len(),
        "applied exclusions"
    );

    if allowed.is_empty() {
        info!(%slot, "no foods left after exclusions");
        return Ok(RecommendationSet {
            target,
            focus,
            top: Vec::new(),
            joint: None,
            others: Vec::new(),
        });
    }

    let combination = optimize_combination(&allowed, &target.target, config);
    let top = preview_selection(&target.target, &combination.foods, config);
    let others = rank_remaining(&allowed, &combination.foods, focus);

    Ok(RecommendationSet {
        target,
        focus,
        top,
        joint: combination.joint,
        others,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exclusions, MacroVector};

    fn profile() -> Profile {
        Profile::new(
            MacroVector::new(2000.0, 150.0, 200.0, 60.0),
            vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
        )
    }

    #[test]
    fn test_everything_excluded_gives_empty_set() {
        let foods = vec![FoodItem::new("Peanuts", 567.0, 26.0, 16.0, 49.0)];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let exclusions = Exclusions::new(vec!["peanut".to_string()], vec![]);
        let profile = profile().with_exclusions(exclusions);
        let config = OptimizerConfig::default();

        let set =
            compute_recommendations(&profile, &DayLog::new(), MealSlot::Lunch, &refs, &config)
                .unwrap();
        assert!(set.is_empty());
        assert!(!set.target.is_last_slot);
    }

    #[test]
    fn test_focus_follows_remaining_budget_not_slot_share() {
        // Protein-heavy breakfast leaves carbs as the largest open share
        // (90/150 = 0.6 protein, 180/200 = 0.9 carbs, 50/60 = 0.83 fat).
        let log = DayLog::new()
            .with_meal(MealSlot::Breakfast, MacroVector::new(500.0, 60.0, 20.0, 10.0));
        let foods = vec![FoodItem::new("Rice", 130.0, 2.7, 28.0, 0.3)];
        let refs: Vec<&FoodItem> = foods.iter().collect();
        let config = OptimizerConfig::default();

        let set =
            compute_recommendations(&profile(), &log, MealSlot::Lunch, &refs, &config).unwrap();
        assert!(!set.target.is_last_slot);
        assert_eq!(set.target.remaining, MacroVector::new(1500.0, 90.0, 180.0, 50.0));
        assert_eq!(set.focus, Macronutrient::Carbs);
    }

    #[test]
    fn test_inactive_slot_propagates_error() {
        let config = OptimizerConfig::default();
        let result =
            compute_recommendations(&profile(), &DayLog::new(), MealSlot::Snack, &[], &config);
        assert!(result.is_err());
    }
}
