use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, MacroVector, MealSlot};

/// Name fragments a user never wants recommended.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exclusions {
    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl Exclusions {
    pub fn new(allergies: Vec<String>, dislikes: Vec<String>) -> Self {
        Self {
            allergies,
            dislikes,
        }
    }

    /// Lowercased, non-empty fragments from both lists.
    pub fn needles(&self) -> Vec<String> {
        self.allergies
            .iter()
            .chain(self.dislikes.iter())
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// True if the food's name contains any fragment (case-insensitive).
    pub fn excludes(&self, food: &FoodItem) -> bool {
        let name = food.name.to_lowercase();
        self.needles().iter().any(|n| name.contains(n.as_str()))
    }
}

/// A user's daily goal and meal configuration.
///
/// `slots` lists the active slots in the order the user eats them. When
/// `shares` is absent, per-slot shares come from built-in weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub goal: MacroVector,

    pub slots: Vec<MealSlot>,

    #[serde(default)]
    pub shares: Option<HashMap<MealSlot, f64>>,

    #[serde(default, flatten)]
    pub exclusions: Exclusions,
}

impl Profile {
    pub fn new(goal: MacroVector, slots: Vec<MealSlot>) -> Self {
        Self {
            goal,
            slots,
            shares: None,
            exclusions: Exclusions::default(),
        }
    }

    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_shares(mut self, shares: HashMap<MealSlot, f64>) -> Self {
        self.shares = Some(shares);
        self
    }
}
