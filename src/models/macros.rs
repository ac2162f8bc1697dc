use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Calories, protein, carbs and fat for a food, a meal, or a daily goal.
///
/// Grams for the three macronutrients, kcal for energy. Values are expected
/// to be non-negative; `saturating_sub` floors every component at zero so a
/// remainder can never go negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroVector {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroVector {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Components in fixed order: calories, protein, carbs, fat.
    #[inline]
    pub fn components(&self) -> [f64; 4] {
        [self.calories, self.protein, self.carbs, self.fat]
    }

    #[inline]
    pub fn from_components(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Multiply every component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.calories * factor,
            self.protein * factor,
            self.carbs * factor,
            self.fat * factor,
        )
    }

    /// Component-wise `max(0, self - other)`.
    #[inline]
    pub fn saturating_sub(&self, other: &MacroVector) -> Self {
        Self::new(
            (self.calories - other.calories).max(0.0),
            (self.protein - other.protein).max(0.0),
            (self.carbs - other.carbs).max(0.0),
            (self.fat - other.fat).max(0.0),
        )
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &MacroVector) -> Self {
        Self::new(
            self.calories.min(other.calories),
            self.protein.min(other.protein),
            self.carbs.min(other.carbs),
            self.fat.min(other.fat),
        )
    }

    /// True when every component of `self` is at most `other * factor`.
    pub fn fits_within(&self, other: &MacroVector, factor: f64) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(mine, limit)| *mine <= limit * factor)
    }

    /// Macronutrient grams only (protein, carbs, fat).
    #[inline]
    pub fn grams(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    pub fn is_zero(&self) -> bool {
        self.components().iter().all(|c| *c == 0.0)
    }
}

impl Add for MacroVector {
    type Output = MacroVector;

    fn add(self, rhs: MacroVector) -> MacroVector {
        MacroVector::new(
            self.calories + rhs.calories,
            self.protein + rhs.protein,
            self.carbs + rhs.carbs,
            self.fat + rhs.fat,
        )
    }
}

impl std::iter::Sum for MacroVector {
    fn sum<I: Iterator<Item = MacroVector>>(iter: I) -> Self {
        iter.fold(MacroVector::zero(), |acc, v| acc + v)
    }
}

impl std::fmt::Display for MacroVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.0} kcal, P:{:.1} C:{:.1} F:{:.1}",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}
