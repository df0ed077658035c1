use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::models::Ingredient;

/// Calories and macros for one bar (or a batch, after `scaled`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutritionTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl NutritionTotals {
    pub fn of(ingredient: &Ingredient) -> Self {
        Self {
            calories: ingredient.calories,
            protein: ingredient.protein,
            carbs: ingredient.carbs,
            fats: ingredient.fats,
        }
    }

    /// Totals for `quantity` bars.
    pub fn scaled(&self, quantity: u32) -> Self {
        let q = quantity as f64;
        Self {
            calories: self.calories * q,
            protein: self.protein * q,
            carbs: self.carbs * q,
            fats: self.fats * q,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Each macro's share of total macro grams, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}
