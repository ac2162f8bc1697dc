use crate::models::{format_multiplier, MacroVector, PortionResult};
use crate::planner::{JointPlan, RecommendationSet, SlotTarget};

/// Sentence describing a slot target, for display only.
pub fn describe_target(target: &SlotTarget) -> String {
    if target.is_last_slot {
        format!(
            "{} is your last open meal: eat exactly what is left ({}) to close the day on target.",
            target.slot, target.target
        )
    } else {
        let later = target.remaining_slot_count.saturating_sub(1);
        let plural = if later == 1 { "" } else { "s" };
        format!(
            "Aim for {} at {}; {} more open meal{} after this one.",
            target.target, target.slot, later, plural
        )
    }
}

/// Display the target for a slot.
pub fn display_target(target: &SlotTarget) {
    println!();
    println!("=== Target for {} ===", target.slot);
    println!();
    println!("Remaining today: {}", target.remaining);
    println!("Slot target:     {}", target.target);
    println!();
    println!("{}", describe_target(target));
    println!();
}

fn portion_line(index: usize, portion: &PortionResult, width: usize) -> String {
    format!(
        "{:>3}. {:<width$} {:>6} x {:<8} | {}",
        index,
        portion.food.name,
        format_multiplier(portion.multiplier),
        portion.food.portion,
        portion.achieved,
        width = width
    )
}

/// Display a list of sized portions with their combined total.
pub fn display_portions(title: &str, portions: &[PortionResult], budget: &MacroVector) {
    if portions.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("--- {} ---", title);
    let width = portions.iter().map(|p| p.food.name.len()).max().unwrap_or(10);
    for (i, portion) in portions.iter().enumerate() {
        println!("{}", portion_line(i + 1, portion, width));
    }

    let total: MacroVector = portions.iter().map(|p| p.achieved).sum();
    println!();
    println!("Total:     {}", total);
    println!("Left over: {}", budget.saturating_sub(&total));
    println!();
}

fn display_joint(joint: &JointPlan, names: &[&str]) {
    let parts: Vec<String> = names
        .iter()
        .zip(&joint.multipliers)
        .map(|(name, m)| format!("{} x{}", name, format_multiplier(*m)))
        .collect();
    println!("Joint search: {} => {} (cost {:.3})", parts.join(", "), joint.achieved, joint.cost);
}

/// Display a full recommendation view.
pub fn display_recommendations(set: &RecommendationSet, more_limit: usize) {
    display_target(&set.target);

    if set.is_empty() {
        println!("No suggestions available (catalog empty after exclusions).");
        return;
    }

    display_portions("Top recommendation", &set.top, &set.target.target);

    if let Some(joint) = &set.joint {
        let names: Vec<&str> = set.top.iter().map(|p| p.food.name.as_str()).collect();
        display_joint(joint, &names);
        println!();
    }

    if set.others.is_empty() {
        return;
    }

    println!("--- More ideas (rich in {}) ---", set.focus.name());
    for (i, ranked) in set.others.iter().take(more_limit).enumerate() {
        println!(
            "{:>3}. {} ({}: {}) score {:.1}",
            i + 1,
            ranked.food.name,
            ranked.food.portion,
            ranked.food.macros(),
            ranked.score
        );
    }
    if set.others.len() > more_limit {
        println!("     ... and {} more", set.others.len() - more_limit);
    }
    println!();
}
