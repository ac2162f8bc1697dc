use std::cmp::Ordering;
use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::{MacroError, Result};
use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a fuzzy name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// The foods a user can be recommended: global entries plus their own.
pub struct FoodCatalog {
    /// All foods keyed by lowercase name.
    foods: HashMap<String, FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog; later entries replace earlier ones with the same name.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut map = HashMap::new();
        for food in foods {
            map.insert(food.key(), food);
        }
        Self { foods: map }
    }

    /// Global catalog with the user's custom entries layered on top.
    pub fn with_custom(global: Vec<FoodItem>, custom: Vec<FoodItem>) -> Self {
        let mut catalog = Self::new(global);
        for food in custom {
            catalog.insert(food);
        }
        catalog
    }

    pub fn insert(&mut self, food: FoodItem) {
        self.foods.insert(food.key(), food);
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&FoodItem> {
        self.foods.get(&name.trim().to_lowercase())
    }

    /// Foods whose names resemble `name`, closest first.
    pub fn suggestions(&self, name: &str, limit: usize) -> Vec<&FoodItem> {
        let needle = name.trim().to_lowercase();
        let mut scored: Vec<(&FoodItem, f64)> = self
            .foods
            .iter()
            .map(|(key, food)| (food, jaro_winkler(key, &needle)))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.key().cmp(&b.0.key()))
        });
        scored.into_iter().take(limit).map(|(f, _)| f).collect()
    }

    /// Exact match, else the single closest suggestion.
    pub fn resolve(&self, name: &str) -> Result<&FoodItem> {
        self.get_food(name)
            .or_else(|| self.suggestions(name, 1).into_iter().next())
            .ok_or_else(|| MacroError::FoodNotFound(name.to_string()))
    }

    /// All foods ordered by name, so searches over the catalog are
    /// deterministic.
    pub fn all_foods(&self) -> Vec<&FoodItem> {
        let mut foods: Vec<&FoodItem> = self.foods.values().collect();
        foods.sort_by_key(|f| f.key());
        foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}
