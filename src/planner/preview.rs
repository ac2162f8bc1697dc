use crate::models::{FoodItem, MacroVector, PortionResult};
use crate::planner::calculations::OptimizerConfig;
use crate::planner::portion::optimize_portion;

/// Size a list of selected foods one after another against a shared budget.
///
/// Sequential greedy allocation over selection order: each food is sized
/// against what the earlier selections left of `budget`. Selecting A then B
/// generally differs from B then A.
pub fn preview_selection(
    budget: &MacroVector,
    selection: &[&FoodItem],
    config: &OptimizerConfig,
) -> Vec<PortionResult> {
    let mut left = *budget;
    let mut portions = Vec::with_capacity(selection.len());

    for food in selection {
        let portion = optimize_portion(food, &left, config);
        left = left.saturating_sub(&portion.achieved);
        portions.push(portion);
    }

    portions
}

/// Budget still open after the given portions.
pub fn budget_after(budget: &MacroVector, portions: &[PortionResult]) -> MacroVector {
    portions
        .iter()
        .fold(*budget, |left, p| left.saturating_sub(&p.achieved))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_items_see_smaller_budget() {
        let rice = FoodItem::new("Rice", 130.0, 2.7, 28.0, 0.3);
        let budget = rice.scaled(3.0);
        let portions = preview_selection(&budget, &[&rice, &rice], &OptimizerConfig::default());

        assert_eq!(portions[0].multiplier, 3.0);
        // Nothing left, so the second pick falls to the smallest serving.
        assert_eq!(portions[1].multiplier, 0.25);
    }

    #[test]
    fn test_budget_after_never_negative() {
        let cheese = FoodItem::new("Cheese", 402.0, 25.0, 1.3, 33.0);
        let budget = MacroVector::new(100.0, 5.0, 5.0, 5.0);
        let portions = vec![PortionResult::new(cheese, 2.0)];
        let left = budget_after(&budget, &portions);
        assert_eq!(left.calories, 0.0);
        assert_eq!(left.protein, 0.0);
        assert_eq!(left.fat, 0.0);
        assert!((left.carbs - 2.4).abs() < 1e-9);
    }
}
