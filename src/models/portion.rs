use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, MacroVector};

/// A food together with the serving multiplier chosen for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortionResult {
    pub food: FoodItem,

    /// Number of reference portions; always a member of the serving ladder
    /// when produced by the optimizer.
    pub multiplier: f64,

    /// Macros obtained at this multiplier.
    pub achieved: MacroVector,
}

impl PortionResult {
    pub fn new(food: FoodItem, multiplier: f64) -> Self {
        let achieved = food.scaled(multiplier);
        Self {
            food,
            multiplier,
            achieved,
        }
    }

    /// Human-readable serving, e.g. `1.5 x 100g`.
    pub fn describe(&self) -> String {
        format!("{} x {}", format_multiplier(self.multiplier), self.food.portion)
    }
}

/// Format a multiplier without trailing zeros (`1`, `1.5`, `0.25`).
pub fn format_multiplier(multiplier: f64) -> String {
    let text = format!("{:.2}", multiplier);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
