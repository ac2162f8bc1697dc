use serde::{Deserialize, Serialize};

use crate::models::MacroVector;

/// A catalog entry with macros for one reference portion.
///
/// `portion` describes the reference portion ("100g", "1 unit") the macros
/// refer to; a serving multiplier scales all four values together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    #[serde(default = "default_portion")]
    pub portion: String,
}

fn default_portion() -> String {
    "100g".to_string()
}

impl FoodItem {
    pub fn new(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            name: name.to_string(),
            calories,
            protein,
            carbs,
            fat,
            portion: default_portion(),
        }
    }

    /// Macros for one reference portion.
    #[inline]
    pub fn macros(&self) -> MacroVector {
        MacroVector::new(self.calories, self.protein, self.carbs, self.fat)
    }

    /// Macros for `multiplier` reference portions.
    #[inline]
    pub fn scaled(&self, multiplier: f64) -> MacroVector {
        self.macros().scale(multiplier)
    }

    /// Rough energy-density proxy used to pre-rank candidates.
    #[inline]
    pub fn density_score(&self) -> f64 {
        self.protein * 4.0 + self.carbs * 4.0 + self.fat * 9.0
    }

    /// Reason the entry is unusable, if any: negative or non-finite macros.
    pub fn validation_error(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("empty name".to_string());
        }
        let fields = [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ];
        fields.iter().find_map(|(label, value)| {
            if !value.is_finite() {
                Some(format!("{} is not a finite number", label))
            } else if *value < 0.0 {
                Some(format!("{} is negative ({})", label, value))
            } else {
                None
            }
        })
    }

    pub fn is_valid(&self) -> bool {
        self.validation_error().is_none()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
