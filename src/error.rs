use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum MacroError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid food '{name}': {reason}")]
    InvalidFood { name: String, reason: String },

    #[error("Slot {0} is not active in this profile")]
    SlotNotActive(MealSlot),

    #[error("Unknown meal slot: {0}")]
    UnknownSlot(String),
}

pub type Result<T> = std::result::Result<T, MacroError>;
