use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MacroError;
use crate::models::{MacroVector, PortionResult};

/// An eating occasion within a day.
///
/// The variant order is the canonical chronological order; a profile picks a
/// subset of these and may reorder them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MidMorning,
    Lunch,
    Snack,
    Dinner,
    PostWorkout,
    Supper,
}

impl MealSlot {
    pub const ALL: [MealSlot; 7] = [
        MealSlot::Breakfast,
        MealSlot::MidMorning,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
        MealSlot::PostWorkout,
        MealSlot::Supper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::MidMorning => "mid_morning",
            MealSlot::Lunch => "lunch",
            MealSlot::Snack => "snack",
            MealSlot::Dinner => "dinner",
            MealSlot::PostWorkout => "post_workout",
            MealSlot::Supper => "supper",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = MacroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == normalized)
            .ok_or_else(|| MacroError::UnknownSlot(s.to_string()))
    }
}

/// A complementary item the user accepted from a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraIntake {
    pub food_name: String,
    pub label: String,
    pub slot: MealSlot,
    pub achieved: MacroVector,
    pub portion_description: String,
}

impl ExtraIntake {
    pub fn from_portion(slot: MealSlot, portion: &PortionResult) -> Self {
        Self {
            food_name: portion.food.name.clone(),
            label: portion.food.portion.clone(),
            slot,
            achieved: portion.achieved,
            portion_description: portion.describe(),
        }
    }
}

/// One day's intake: what was logged per slot plus accepted extras.
///
/// A slot counts as logged when it has a meal entry or at least one extra
/// tagged with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayLog {
    #[serde(default)]
    pub meals: HashMap<MealSlot, MacroVector>,

    #[serde(default)]
    pub extras: Vec<ExtraIntake>,
}

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the consumed macros for a slot.
    pub fn log_meal(&mut self, slot: MealSlot, consumed: MacroVector) {
        self.meals.insert(slot, consumed);
    }

    /// Builder-style variant of [`DayLog::log_meal`].
    pub fn with_meal(mut self, slot: MealSlot, consumed: MacroVector) -> Self {
        self.log_meal(slot, consumed);
        self
    }

    /// Append accepted recommendation entries to a slot.
    pub fn append_extras(&mut self, slot: MealSlot, portions: &[PortionResult]) {
        self.extras
            .extend(portions.iter().map(|p| ExtraIntake::from_portion(slot, p)));
    }

    /// Total consumed for a slot, or `None` when nothing is logged for it.
    pub fn logged(&self, slot: MealSlot) -> Option<MacroVector> {
        let meal = self.meals.get(&slot).copied();
        let mut extras = self.extras.iter().filter(|e| e.slot == slot).peekable();

        if meal.is_none() && extras.peek().is_none() {
            return None;
        }

        let extra_total: MacroVector = extras.map(|e| e.achieved).sum();
        Some(meal.unwrap_or_default() + extra_total)
    }

    pub fn is_logged(&self, slot: MealSlot) -> bool {
        self.logged(slot).is_some()
    }

    pub fn clear(&mut self) {
        self.meals.clear();
        self.extras.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodItem;

    #[test]
    fn test_parse_slot_names() {
        assert_eq!("Lunch".parse::<MealSlot>().unwrap(), MealSlot::Lunch);
        assert_eq!("mid-morning".parse::<MealSlot>().unwrap(), MealSlot::MidMorning);
        assert_eq!("post workout".parse::<MealSlot>().unwrap(), MealSlot::PostWorkout);
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn test_logged_combines_meal_and_extras() {
        let mut log =
            DayLog::new().with_meal(MealSlot::Lunch, MacroVector::new(500.0, 30.0, 50.0, 15.0));
        assert!(log.logged(MealSlot::Dinner).is_none());

        let yogurt = PortionResult::new(FoodItem::new("Yogurt", 60.0, 10.0, 4.0, 0.5), 2.0);
        log.append_extras(MealSlot::Lunch, std::slice::from_ref(&yogurt));
        log.append_extras(MealSlot::Snack, &[yogurt]);

        assert_eq!(
            log.logged(MealSlot::Lunch).unwrap(),
            MacroVector::new(620.0, 50.0, 58.0, 16.0)
        );
        assert_eq!(
            log.logged(MealSlot::Snack).unwrap(),
            MacroVector::new(120.0, 20.0, 8.0, 1.0)
        );
    }

    #[test]
    fn test_day_log_json_shape() {
        let log =
            DayLog::new().with_meal(MealSlot::Breakfast, MacroVector::new(400.0, 20.0, 50.0, 10.0));
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"breakfast\""));

        let back: DayLog = serde_json::from_str(&json).unwrap();
        assert!(back.is_logged(MealSlot::Breakfast));
    }
}
