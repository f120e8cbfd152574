use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use super::ingredient::Ingredient;
use super::step::Step;
use super::unit::Unit;
use crate::list_edit;

/// Lowest canonical portion count a recipe can be written for.
pub const MIN_PORTIONS: u32 = 1;
/// Highest canonical portion count a recipe can be written for.
pub const MAX_PORTIONS: u32 = 100;

/// A recipe: a scalable ingredient list plus ordered preparation steps.
///
/// The recipe owns its ingredient and step lists exclusively; rows are
/// addressed by index (for ordered edits) or by id (for field edits), never
/// through live references held elsewhere. Ingredient amounts are authored
/// per one `portion_amount`-sized batch and are not rescaled by portion
/// edits; see [`crate::scaling::PortionView`] for display scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    portion_amount: u32,
    pub portion_unit: Unit,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<Step>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One invariant violation fixed while loading external data.
#[derive(Debug, Clone, PartialEq)]
pub enum Repair {
    PortionAmountClamped { from: u32, to: u32 },
    DuplicateIngredientId(Uuid),
    DuplicateStepId(Uuid),
    NegativeAmountZeroed { id: Uuid },
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::PortionAmountClamped { from, to } => {
                write!(f, "portion amount {} clamped to {}", from, to)
            }
            Repair::DuplicateIngredientId(id) => {
                write!(f, "duplicate ingredient id {} reassigned", id)
            }
            Repair::DuplicateStepId(id) => write!(f, "duplicate step id {} reassigned", id),
            Repair::NegativeAmountZeroed { id } => {
                write!(f, "negative amount on ingredient {} reset to 0", id)
            }
        }
    }
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            portion_amount: 4,
            portion_unit: Unit::Piece,
            ingredients: Vec::new(),
            steps: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_portions(mut self, amount: u32, unit: Unit) -> Self {
        self.portion_amount = amount.clamp(MIN_PORTIONS, MAX_PORTIONS);
        self.portion_unit = unit;
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }

    pub fn portion_amount(&self) -> u32 {
        self.portion_amount
    }

    /// Set the canonical portion count, clamped to `[1, 100]`.
    ///
    /// Stored ingredient amounts are the authored truth and are left
    /// untouched; only the denominator for display scaling changes.
    pub fn set_portion_amount(&mut self, amount: u32) {
        self.portion_amount = amount.clamp(MIN_PORTIONS, MAX_PORTIONS);
        self.touch();
    }

    /// Append a blank ingredient row and return a reference to it.
    pub fn add_ingredient(&mut self) -> &mut Ingredient {
        self.ingredients.push(Ingredient::new());
        self.touch();
        self.ingredients.last_mut().unwrap()
    }

    /// Append an empty step and return a reference to it.
    pub fn add_step(&mut self) -> &mut Step {
        self.steps.push(Step::new());
        self.touch();
        self.steps.last_mut().unwrap()
    }

    /// Look up an ingredient by id for a field edit.
    pub fn ingredient_mut(&mut self, id: Uuid) -> Option<&mut Ingredient> {
        self.updated_at = Utc::now();
        self.ingredients.iter_mut().find(|i| i.id == id)
    }

    /// Look up a step by id for a field edit.
    pub fn step_mut(&mut self, id: Uuid) -> Option<&mut Step> {
        self.updated_at = Utc::now();
        self.steps.iter_mut().find(|s| s.id == id)
    }

    /// Remove the ingredients at the given positions in one atomic step.
    pub fn remove_ingredients(&mut self, indices: &[usize]) {
        list_edit::remove_at(&mut self.ingredients, indices);
        self.touch();
    }

    /// Move the ingredients at `source` to just before `dest`.
    pub fn move_ingredients(&mut self, source: &[usize], dest: usize) {
        list_edit::move_to(&mut self.ingredients, source, dest);
        self.touch();
    }

    /// Remove the steps at the given positions in one atomic step.
    pub fn remove_steps(&mut self, indices: &[usize]) {
        list_edit::remove_at(&mut self.steps, indices);
        self.touch();
    }

    /// Move the steps at `source` to just before `dest`.
    pub fn move_steps(&mut self, source: &[usize], dest: usize) {
        list_edit::move_to(&mut self.steps, source, dest);
        self.touch();
    }

    /// Drop every fully blank ingredient row (empty name, zero amount, no
    /// unit). Runs once per edit-session exit, not per keystroke.
    pub fn sweep_blank_ingredients(&mut self) -> usize {
        let before = self.ingredients.len();
        self.ingredients.retain(|i| !i.is_blank());
        let removed = before - self.ingredients.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Validate and repair invariants on a recipe from an external source.
    ///
    /// External data cannot be trusted to satisfy the model invariants, and
    /// the user cannot act on a low-level inconsistency, so the loader
    /// repairs instead of failing: out-of-range portion counts are clamped,
    /// colliding ids get fresh ones, negative amounts reset to zero. Returns
    /// what was fixed so the caller can log it.
    pub fn repair(&mut self) -> Vec<Repair> {
        let mut repairs = Vec::new();

        let clamped = self.portion_amount.clamp(MIN_PORTIONS, MAX_PORTIONS);
        if clamped != self.portion_amount {
            repairs.push(Repair::PortionAmountClamped {
                from: self.portion_amount,
                to: clamped,
            });
            self.portion_amount = clamped;
        }

        let mut seen = HashSet::new();
        for ingredient in &mut self.ingredients {
            if !seen.insert(ingredient.id) {
                repairs.push(Repair::DuplicateIngredientId(ingredient.id));
                ingredient.id = Uuid::new_v4();
            }
            if ingredient.amount < 0.0 {
                repairs.push(Repair::NegativeAmountZeroed { id: ingredient.id });
                ingredient.amount = 0.0;
            }
        }

        let mut seen = HashSet::new();
        for step in &mut self.steps {
            if !seen.insert(step.id) {
                repairs.push(Repair::DuplicateStepId(step.id));
                step.id = Uuid::new_v4();
            }
        }

        repairs
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len()))?;
        let unit_label = self.portion_unit.label(self.portion_amount as f64);
        if unit_label.is_empty() {
            writeln!(f, "For {}", self.portion_amount)?;
        } else {
            writeln!(f, "For {} {}", self.portion_amount, unit_label)?;
        }

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.steps.is_empty() {
            writeln!(f, "\nSteps:")?;
            for (index, step) in self.steps.iter().enumerate() {
                writeln!(f, "  {}. {}", index + 1, step)?;
            }
        }

        Ok(())
    }
}
