use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MacroError, Result};
use crate::models::{DayLog, MacroVector, MealSlot, Profile};
use crate::planner::constants::default_slot_weight;

/// Fraction of the daily goal each active slot aims for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotShares(HashMap<MealSlot, f64>);

impl SlotShares {
    pub fn new(shares: HashMap<MealSlot, f64>) -> Self {
        Self(shares)
    }

    /// Built-in slot weights normalized so the active slots sum to 1.
    pub fn default_for(slots: &[MealSlot]) -> Self {
        let total: f64 = slots.iter().map(|s| default_slot_weight(*s)).sum();
        if total <= 0.0 {
            return Self::default();
        }
        Self(
            slots
                .iter()
                .map(|s| (*s, default_slot_weight(*s) / total))
                .collect(),
        )
    }

    /// Shares configured in the profile, or the built-in defaults.
    ///
    /// Configured shares are used as given; a sum away from 1 is logged.
    pub fn for_profile(profile: &Profile) -> Self {
        match &profile.shares {
            Some(shares) => {
                let shares = Self(shares.clone());
                let total = shares.total(&profile.slots);
                if (total - 1.0).abs() > 1e-6 {
                    warn!(total, "configured slot shares do not sum to 1");
                }
                shares
            }
            None => Self::default_for(&profile.slots),
        }
    }

    /// Equal share for every active slot.
    pub fn even(slots: &[MealSlot]) -> Self {
        if slots.is_empty() {
            return Self::default();
        }
        let share = 1.0 / slots.len() as f64;
        Self(slots.iter().map(|s| (*s, share)).collect())
    }

    pub fn get(&self, slot: MealSlot) -> Option<f64> {
        self.0.get(&slot).copied()
    }

    /// Share for `slot`, falling back to an even split over `slots`.
    pub fn share_for(&self, slot: MealSlot, slots: &[MealSlot]) -> f64 {
        self.get(slot).unwrap_or_else(|| {
            let even = Self::even(slots).get(slot).unwrap_or(0.0);
            warn!(%slot, even, "no configured share for slot; using even split");
            even
        })
    }

    /// Sum of shares over the given slots (≈1 for a sane configuration).
    pub fn total(&self, slots: &[MealSlot]) -> f64 {
        slots.iter().filter_map(|s| self.get(*s)).sum()
    }
}

/// Target handed to the portion optimizers for one slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotTarget {
    pub slot: MealSlot,
    pub target: MacroVector,
    /// Budget left before this slot (goal minus earlier slots, floored at 0).
    pub remaining: MacroVector,
    pub is_last_slot: bool,
    /// This slot plus every later slot not yet logged.
    pub remaining_slot_count: usize,
}

/// Sum of everything logged in slots strictly before `current`.
///
/// Slots at or after `current` are never counted, even if logged, so that
/// re-editing a slot does not count itself. If `current` is not in
/// `ordered_slots` every logged slot counts.
pub fn consumed_before(log: &DayLog, ordered_slots: &[MealSlot], current: MealSlot) -> MacroVector {
    ordered_slots
        .iter()
        .take_while(|s| **s != current)
        .filter_map(|s| log.logged(*s))
        .sum()
}

/// One for `current` plus every unlogged slot after it.
pub fn remaining_slot_count(log: &DayLog, ordered_slots: &[MealSlot], current: MealSlot) -> usize {
    let later_unlogged = ordered_slots
        .iter()
        .skip_while(|s| **s != current)
        .skip(1)
        .filter(|s| !log.is_logged(**s))
        .count();
    1 + later_unlogged
}

/// `max(0, goal - consumed)` per macro.
pub fn remaining_budget(goal: &MacroVector, consumed: &MacroVector) -> MacroVector {
    goal.saturating_sub(consumed)
}

/// Decide how much of the day's budget `slot` should aim for.
///
/// The last unfilled slot gets exactly what is left, so the day closes at the
/// goal when every slot is eaten as recommended. Any other slot gets its
/// configured share of the goal, capped at what is left.
pub fn allocate_target(
    goal: &MacroVector,
    ordered_slots: &[MealSlot],
    shares: &SlotShares,
    log: &DayLog,
    slot: MealSlot,
) -> Result<SlotTarget> {
    if !ordered_slots.contains(&slot) {
        return Err(MacroError::SlotNotActive(slot));
    }

    let consumed = consumed_before(log, ordered_slots, slot);
    let remaining = remaining_budget(goal, &consumed);
    let n = remaining_slot_count(log, ordered_slots, slot);

    let (target, is_last_slot) = match n {
        0 => {
            warn!(%slot, "no remaining slots counted; returning zero target");
            (MacroVector::zero(), false)
        }
        1 => (remaining, true),
        _ => {
            let share = shares.share_for(slot, ordered_slots);
            (goal.scale(share).min(&remaining), false)
        }
    };

    debug!(%slot, n, is_last_slot, %target, %remaining, "allocated slot target");

    Ok(SlotTarget {
        slot,
        target,
        remaining,
        is_last_slot,
        remaining_slot_count: n,
    })
}
