use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use macro_fill_rs::cli::{Cli, Command};
use macro_fill_rs::error::{MacroError, Result};
use macro_fill_rs::interface::{
    display_portions, display_recommendations, display_target, prompt_amount, prompt_food_choice,
    prompt_next_pick, prompt_yes_no,
};
use macro_fill_rs::models::{DayLog, FoodItem, MacroVector, MealSlot, Profile};
use macro_fill_rs::planner::{
    allocate_target, compute_recommendations, optimize_portion, preview_selection,
    OptimizerConfig, SlotShares,
};
use macro_fill_rs::state::{load_day, load_foods, load_profile, save_day, FoodCatalog};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Target { slot } => cmd_target(&cli.profile, &cli.day, slot),
        Command::Recommend {
            slot,
            pool,
            more,
            interactive,
        } => {
            let catalog = load_catalog(&cli.catalog, cli.custom.as_deref())?;
            let mut config = OptimizerConfig::default();
            if let Some(pool) = pool {
                config.candidate_pool_size = pool.max(3);
            }
            cmd_recommend(
                &cli.profile,
                &cli.day,
                &catalog,
                slot,
                &config,
                more,
                interactive,
            )
        }
        Command::Portion { slot, food } => {
            let catalog = load_catalog(&cli.catalog, cli.custom.as_deref())?;
            cmd_portion(&cli.profile, &cli.day, &catalog, slot, &food)
        }
        Command::Log {
            slot,
            calories,
            protein,
            carbs,
            fat,
        } => cmd_log(&cli.profile, &cli.day, slot, [calories, protein, carbs, fat]),
        Command::Reset => cmd_reset(&cli.day),
    }
}

/// Load the main catalog plus the optional custom one.
fn load_catalog(catalog_path: &str, custom_path: Option<&str>) -> Result<FoodCatalog> {
    let global = load_foods(catalog_path)?;
    let custom: Vec<FoodItem> = match custom_path {
        Some(path) if Path::new(path).exists() => load_foods(path)?,
        Some(path) => {
            eprintln!("Custom catalog not found: {} (ignored)", path);
            Vec::new()
        }
        None => Vec::new(),
    };

    let catalog = FoodCatalog::with_custom(global, custom);
    println!("Loaded {} foods", catalog.len());
    Ok(catalog)
}

/// Show the target for one slot.
fn cmd_target(profile_path: &str, day_path: &str, slot: MealSlot) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let day = load_day(day_path)?;
    let shares = SlotShares::for_profile(&profile);

    let target = allocate_target(&profile.goal, &profile.slots, &shares, &day, slot)?;
    display_target(&target);
    Ok(())
}

/// Recommend a combination for a slot, optionally letting the user build
/// and save their own selection.
fn cmd_recommend(
    profile_path: &str,
    day_path: &str,
    catalog: &FoodCatalog,
    slot: MealSlot,
    config: &OptimizerConfig,
    more: usize,
    interactive: bool,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let mut day = load_day(day_path)?;
    let foods = catalog.all_foods();

    let set = compute_recommendations(&profile, &day, slot, &foods, config)?;
    display_recommendations(&set, more);

    if !interactive || set.is_empty() {
        return Ok(());
    }

    // Offer the recommended foods first, then the ranked rest.
    let mut options: Vec<&FoodItem> = set
        .top
        .iter()
        .filter_map(|p| foods.iter().copied().find(|f| *f == &p.food))
        .collect();
    options.extend(set.others.iter().map(|r| r.food));

    let mut selection: Vec<&FoodItem> = Vec::new();
    while let Some(idx) = prompt_next_pick(&options, selection.len())? {
        selection.push(options.remove(idx));
        let preview = preview_selection(&set.target.target, &selection, config);
        display_portions("Your selection", &preview, &set.target.target);
    }

    if selection.is_empty() {
        println!("Nothing selected.");
        return Ok(());
    }

    let preview = preview_selection(&set.target.target, &selection, config);
    if prompt_yes_no(&format!("Add these to {}?", slot), true)? {
        day.append_extras(slot, &preview);
        save_day(day_path, &day)?;
        println!("Saved {} items to {}.", preview.len(), slot);
    }

    Ok(())
}

/// Size one food against a slot target.
fn cmd_portion(
    profile_path: &str,
    day_path: &str,
    catalog: &FoodCatalog,
    slot: MealSlot,
    name: &str,
) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let day = load_day(day_path)?;
    let shares = SlotShares::for_profile(&profile);

    let food = prompt_food_choice(catalog, name)?;
    if profile.exclusions.excludes(food) {
        println!("Note: '{}' matches your allergies or dislikes.", food.name);
    }

    let target = allocate_target(&profile.goal, &profile.slots, &shares, &day, slot)?;
    let portion = optimize_portion(food, &target.target, &OptimizerConfig::default());

    display_target(&target);
    display_portions("Portion", &[portion], &target.target);
    Ok(())
}

/// Record a slot's consumed macros, prompting for anything not given.
fn cmd_log(
    profile_path: &str,
    day_path: &str,
    slot: MealSlot,
    values: [Option<f64>; 4],
) -> Result<()> {
    let profile: Profile = load_profile(profile_path)?;
    if !profile.slots.contains(&slot) {
        println!("Note: {} is not one of your active slots.", slot);
    }

    let labels = ["Calories", "Protein (g)", "Carbs (g)", "Fat (g)"];
    let mut components = [0.0; 4];
    for (i, value) in values.iter().enumerate() {
        components[i] = match value {
            Some(v) => *v,
            None => prompt_amount(labels[i], 0.0)?,
        };
    }

    let consumed = MacroVector::from_components(components);
    if consumed.components().iter().any(|c| !c.is_finite() || *c < 0.0) {
        return Err(MacroError::InvalidInput(
            "logged macros must be non-negative".to_string(),
        ));
    }

    let mut day = load_day(day_path)?;
    day.log_meal(slot, consumed);
    save_day(day_path, &day)?;
    println!("Logged {} for {}.", consumed, slot);
    Ok(())
}

/// Clear the day log.
fn cmd_reset(day_path: &str) -> Result<()> {
    save_day(day_path, &DayLog::new())?;
    println!("Day log cleared.");
    Ok(())
}
