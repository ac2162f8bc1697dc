use dialoguer::{Confirm, Input, Select};

use crate::error::{MacroError, Result};
use crate::models::FoodItem;
use crate::state::FoodCatalog;

/// Prompt for the next food to add to a selection.
///
/// Returns the index into `options`, or `None` when the user is done.
pub fn prompt_next_pick(options: &[&FoodItem], picked: usize) -> Result<Option<usize>> {
    if options.is_empty() {
        return Ok(None);
    }

    let mut items: Vec<String> = options
        .iter()
        .map(|f| format!("{} ({}: {})", f.name, f.portion, f.macros()))
        .collect();
    items.push("Done".to_string());

    let prompt = if picked == 0 {
        "Pick a food to add".to_string()
    } else {
        format!("Pick another food ({} selected)", picked)
    };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok((selection < options.len()).then_some(selection))
}

/// Resolve a typed food name, confirming fuzzy matches with the user.
pub fn prompt_food_choice<'a>(catalog: &'a FoodCatalog, name: &str) -> Result<&'a FoodItem> {
    if let Some(food) = catalog.get_food(name) {
        return Ok(food);
    }

    let candidates = catalog.suggestions(name, 5);
    match candidates.len() {
        0 => Err(MacroError::FoodNotFound(name.to_string())),
        1 => {
            let food = candidates[0];
            if prompt_yes_no(&format!("Did you mean '{}'?", food.name), true)? {
                Ok(food)
            } else {
                Err(MacroError::FoodNotFound(name.to_string()))
            }
        }
        _ => {
            let mut options: Vec<String> = candidates.iter().map(|f| f.name.clone()).collect();
            options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&options)
                .default(0)
                .interact()?;

            candidates
                .get(selection)
                .copied()
                .ok_or_else(|| MacroError::FoodNotFound(name.to_string()))
        }
    }
}

/// Prompt for a non-negative number.
pub fn prompt_amount(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| MacroError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(MacroError::InvalidInput(format!(
            "{} must be a non-negative number",
            label
        )));
    }
    Ok(value)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
