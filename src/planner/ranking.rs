use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{FoodItem, MacroVector};
use crate::planner::constants::DEFICIT_WEIGHT;

/// One of the three energy-bearing macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Macronutrient {
    Protein,
    Carbs,
    Fat,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] = [
        Macronutrient::Protein,
        Macronutrient::Carbs,
        Macronutrient::Fat,
    ];

    pub fn of(&self, macros: &MacroVector) -> f64 {
        match self {
            Macronutrient::Protein => macros.protein,
            Macronutrient::Carbs => macros.carbs,
            Macronutrient::Fat => macros.fat,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "protein",
            Macronutrient::Carbs => "carbs",
            Macronutrient::Fat => "fat",
        }
    }
}

/// Macronutrient with the largest still-open share of the daily goal.
///
/// Proportion is `remaining / goal` per macro, where `remaining` is the
/// day's budget left before the slot; a zero goal component counts as no
/// deficit. Ties go to protein, then carbs.
pub fn largest_deficit(remaining: &MacroVector, goal: &MacroVector) -> Macronutrient {
    let ratio = |m: Macronutrient| {
        let g = m.of(goal);
        if g > 0.0 { m.of(remaining) / g } else { 0.0 }
    };

    let mut focus = Macronutrient::Protein;
    let mut best = ratio(focus);
    for m in &Macronutrient::ALL[1..] {
        let r = ratio(*m);
        if r > best {
            best = r;
            focus = *m;
        }
    }
    focus
}

/// A catalog entry scored for the "more ideas" list.
#[derive(Debug, Clone)]
pub struct RankedFood<'a> {
    pub food: &'a FoodItem,
    pub score: f64,
}

/// Score one food: its grams of `focus` weighted, plus its average macro grams.
pub fn ranking_score(food: &FoodItem, focus: Macronutrient) -> f64 {
    let macros = food.macros();
    focus.of(&macros) * DEFICIT_WEIGHT + macros.grams() / 3.0
}

/// Order the foods not already recommended, best first.
pub fn rank_remaining<'a>(
    catalog: &[&'a FoodItem],
    chosen: &[&FoodItem],
    focus: Macronutrient,
) -> Vec<RankedFood<'a>> {
    let mut ranked: Vec<RankedFood<'a>> = catalog
        .iter()
        .copied()
        .filter(|f| !chosen.iter().any(|c| *c == *f))
        .map(|food| RankedFood {
            food,
            score: ranking_score(food, focus),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.food.key().cmp(&b.food.key()))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: MacroVector = MacroVector::new(2000.0, 150.0, 200.0, 60.0);

    #[test]
    fn test_largest_deficit_is_proportional() {
        let remaining = MacroVector::new(530.0, 20.0, 100.0, 10.0);
        assert_eq!(largest_deficit(&remaining, &GOAL), Macronutrient::Carbs);

        let remaining = MacroVector::new(530.0, 20.0, 20.0, 30.0);
        assert_eq!(largest_deficit(&remaining, &GOAL), Macronutrient::Fat);
    }

    #[test]
    fn test_zero_goal_component_is_not_a_deficit() {
        let goal = MacroVector::new(2000.0, 150.0, 0.0, 60.0);
        let remaining = MacroVector::new(500.0, 30.0, 80.0, 5.0);
        assert_eq!(largest_deficit(&remaining, &goal), Macronutrient::Protein);
    }

    #[test]
    fn test_rank_remaining_excludes_chosen() {
        let tuna = FoodItem::new("Tuna", 132.0, 28.0, 0.0, 1.0);
        let pasta = FoodItem::new("Pasta", 371.0, 13.0, 75.0, 1.5);
        let cheese = FoodItem::new("Cheese", 402.0, 25.0, 1.3, 33.0);
        let catalog = vec![&tuna, &pasta, &cheese];

        let ranked = rank_remaining(&catalog, &[&cheese], Macronutrient::Protein);
        let names: Vec<&str> = ranked.iter().map(|r| r.food.name.as_str()).collect();
        // Tuna: 84 + 9.67; Pasta: 39 + 29.83
        assert_eq!(names, vec!["Tuna", "Pasta"]);

        let ranked = rank_remaining(&catalog, &[], Macronutrient::Carbs);
        assert_eq!(ranked[0].food.name, "Pasta");
    }
}
