use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{MacroError, Result};
use crate::models::{DayLog, FoodItem, Profile};

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}

/// Reject entries with negative or non-finite macros, then deduplicate by
/// lowercase name (last occurrence wins).
fn validate_and_dedupe(foods: Vec<FoodItem>) -> Result<Vec<FoodItem>> {
    let mut seen: HashMap<String, FoodItem> = HashMap::new();
    for food in foods {
        if let Some(reason) = food.validation_error() {
            return Err(MacroError::InvalidFood {
                name: food.name,
                reason,
            });
        }
        seen.insert(food.key(), food);
    }

    let mut deduped: Vec<FoodItem> = seen.into_values().collect();
    deduped.sort_by_key(|f| f.key());
    Ok(deduped)
}

/// Load foods from a JSON array or a CSV file (chosen by extension).
///
/// CSV columns: `name,calories,protein,carbs,fat,portion`.
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    let foods: Vec<FoodItem> = if is_csv(path) {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
        reader
            .deserialize::<FoodItem>()
            .collect::<std::result::Result<Vec<_>, _>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    let count = foods.len();
    let foods = validate_and_dedupe(foods)?;
    debug!(path = %path.display(), read = count, kept = foods.len(), "loaded foods");
    Ok(foods)
}

/// Load a user profile.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&content)?;

    if profile.slots.is_empty() {
        return Err(MacroError::InvalidInput(
            "profile has no active meal slots".to_string(),
        ));
    }
    if profile.goal.components().iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(MacroError::InvalidInput(
            "daily goal must be non-negative".to_string(),
        ));
    }
    Ok(profile)
}

/// Load the day log; a missing file is an empty day.
pub fn load_day<P: AsRef<Path>>(path: P) -> Result<DayLog> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "no day log yet; starting empty");
        return Ok(DayLog::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the day log.
pub fn save_day<P: AsRef<Path>>(path: P, log: &DayLog) -> Result<()> {
    let json = serde_json::to_string_pretty(log)?;
    fs::write(path, json)?;
    Ok(())
}
