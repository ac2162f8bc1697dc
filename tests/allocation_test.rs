use assert_float_eq::assert_float_absolute_eq;

use macro_fill_rs::interface::describe_target;
use macro_fill_rs::models::{DayLog, MacroVector, MealSlot};
use macro_fill_rs::planner::{allocate_target, consumed_before, remaining_budget, SlotShares};

const GOAL: MacroVector = MacroVector::new(2000.0, 150.0, 200.0, 60.0);

fn four_slots() -> Vec<MealSlot> {
    vec![
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ]
}

#[test]
fn test_last_slot_gets_exactly_what_is_left() {
    let slots = four_slots();
    let log = DayLog::new()
        .with_meal(MealSlot::Breakfast, MacroVector::new(500.0, 40.0, 50.0, 15.0))
        .with_meal(MealSlot::Lunch, MacroVector::new(720.0, 50.0, 80.0, 22.0))
        .with_meal(MealSlot::Snack, MacroVector::new(250.0, 20.0, 20.0, 7.0));

    let shares = SlotShares::default_for(&slots);
    let result = allocate_target(&GOAL, &slots, &shares, &log, MealSlot::Dinner).unwrap();

    assert!(result.is_last_slot);
    assert_eq!(result.remaining_slot_count, 1);
    assert_eq!(result.target, MacroVector::new(530.0, 40.0, 50.0, 16.0));
}

#[test]
fn test_two_active_slots_fasting_day() {
    let slots = vec![MealSlot::Lunch, MealSlot::Dinner];
    let log = DayLog::new().with_meal(MealSlot::Lunch, MacroVector::new(900.0, 70.0, 90.0, 30.0));

    let shares = SlotShares::default_for(&slots);
    let result = allocate_target(&GOAL, &slots, &shares, &log, MealSlot::Dinner).unwrap();

    assert!(result.is_last_slot);
    assert_eq!(result.remaining_slot_count, 1);
    assert_eq!(result.target, MacroVector::new(1100.0, 80.0, 110.0, 30.0));
}

#[test]
fn test_eating_every_target_closes_the_day_on_goal() {
    let slots = four_slots();
    let shares = SlotShares::default_for(&slots);
    let mut log = DayLog::new();

    for slot in &slots {
        let result = allocate_target(&GOAL, &slots, &shares, &log, *slot).unwrap();
        log.log_meal(*slot, result.target);
    }

    let total: MacroVector = slots.iter().filter_map(|s| log.logged(*s)).sum();
    assert_float_absolute_eq!(total.calories, GOAL.calories, 1e-9);
    assert_float_absolute_eq!(total.protein, GOAL.protein, 1e-9);
    assert_float_absolute_eq!(total.carbs, GOAL.carbs, 1e-9);
    assert_float_absolute_eq!(total.fat, GOAL.fat, 1e-9);
}

#[test]
fn test_last_slot_detected_for_any_slot_count_and_order() {
    for n in 1..=MealSlot::ALL.len() {
        let mut slots: Vec<MealSlot> = MealSlot::ALL[..n].to_vec();
        // Users pick their own order; reverse it to be sure order comes from
        // the profile, not the enum.
        slots.reverse();
        let shares = SlotShares::even(&slots);

        // Nothing logged: only the final slot is the last one.
        for (i, slot) in slots.iter().enumerate() {
            let result = allocate_target(&GOAL, &slots, &shares, &DayLog::new(), *slot).unwrap();
            assert_eq!(result.is_last_slot, i == n - 1, "n={} slot={}", n, slot);
            assert_eq!(result.remaining_slot_count, n - i);
        }

        // Every slot but one logged: that one closes the day.
        for open in 0..n {
            let mut log = DayLog::new();
            for (i, slot) in slots.iter().enumerate() {
                if i != open {
                    log.log_meal(*slot, MacroVector::new(100.0, 5.0, 10.0, 3.0));
                }
            }
            let result = allocate_target(&GOAL, &slots, &shares, &log, slots[open]).unwrap();
            assert!(result.is_last_slot, "n={} open={}", n, open);
            assert_eq!(result.target, result.remaining);
        }
    }
}

#[test]
fn test_remaining_budget_never_grows_as_more_is_logged() {
    let slots = four_slots();
    let meals = [
        MacroVector::new(800.0, 20.0, 120.0, 25.0),
        MacroVector::new(900.0, 90.0, 50.0, 30.0),
        MacroVector::new(600.0, 60.0, 60.0, 20.0),
    ];

    let mut log = DayLog::new();
    let mut previous = remaining_budget(&GOAL, &consumed_before(&log, &slots, MealSlot::Dinner));
    for (slot, meal) in slots.iter().zip(meals) {
        log.log_meal(*slot, meal);
        let now = remaining_budget(&GOAL, &consumed_before(&log, &slots, MealSlot::Dinner));
        assert!(now.fits_within(&previous, 1.0), "{} grew past {}", now, previous);
        assert!(now.components().iter().all(|c| *c >= 0.0));
        previous = now;
    }

    // Calories were overeaten, so they floor at zero.
    assert_eq!(previous.calories, 0.0);
}

#[test]
fn test_description_is_separate_from_result() {
    let slots = four_slots();
    let shares = SlotShares::default_for(&slots);

    let first =
        allocate_target(&GOAL, &slots, &shares, &DayLog::new(), MealSlot::Breakfast).unwrap();
    let text = describe_target(&first);
    assert!(text.contains("Breakfast") || text.contains("breakfast"));
    assert!(text.contains("3 more"));

    let log = DayLog::new()
        .with_meal(MealSlot::Breakfast, MacroVector::new(500.0, 40.0, 50.0, 15.0))
        .with_meal(MealSlot::Lunch, MacroVector::new(700.0, 50.0, 70.0, 20.0))
        .with_meal(MealSlot::Snack, MacroVector::new(200.0, 10.0, 20.0, 5.0));
    let last = allocate_target(&GOAL, &slots, &shares, &log, MealSlot::Dinner).unwrap();
    assert!(describe_target(&last).contains("last open meal"));
}
