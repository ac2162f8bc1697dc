use clap::{Parser, Subcommand};

use crate::models::MealSlot;

/// MacroFill: fills what is left of your daily macros with sensible portions.
#[derive(Parser, Debug)]
#[command(name = "macrofill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the profile JSON file (goal, active slots, exclusions).
    #[arg(short, long, default_value = "profile.json")]
    pub profile: String,

    /// Path to the food catalog (JSON or CSV).
    #[arg(short, long, default_value = "foods.json")]
    pub catalog: String,

    /// Optional catalog of the user's own foods, layered over the main one.
    #[arg(long)]
    pub custom: Option<String>,

    /// Path to today's log JSON file.
    #[arg(short, long, default_value = "day.json")]
    pub day: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the macro target for a meal slot.
    Target {
        #[arg(short, long)]
        slot: MealSlot,
    },

    /// Recommend foods and portions to fill a meal slot.
    Recommend {
        #[arg(short, long)]
        slot: MealSlot,

        /// Candidates kept for the joint search.
        #[arg(long)]
        pool: Option<usize>,

        /// How many extra ideas to list.
        #[arg(long, default_value = "10")]
        more: usize,

        /// Pick foods one at a time and optionally save them to the day log.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Size a single food against a slot's target.
    Portion {
        #[arg(short, long)]
        slot: MealSlot,

        /// Food name (fuzzy matched).
        #[arg(short, long)]
        food: String,
    },

    /// Log what was eaten for a slot. Missing values are prompted for.
    Log {
        #[arg(short, long)]
        slot: MealSlot,

        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,
    },

    /// Clear today's log.
    Reset,
}
