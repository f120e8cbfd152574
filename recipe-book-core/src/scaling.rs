//! Portion scaling.
//!
//! A recipe's ingredient amounts are authored per one
//! `portion_amount`-sized batch. A [`PortionView`] layers a temporary,
//! view-only serving offset on top: it scales what is displayed and never
//! touches the stored amounts. Editing the canonical portion count is the
//! only thing that changes the denominator, and that edit does not rescale
//! amounts either.

use std::ops::RangeInclusive;
use thiserror::Error;

use crate::models::{Ingredient, Recipe, MAX_PORTIONS, MIN_PORTIONS};

/// Errors from misusing the scaling engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScalingError {
    #[error("offset {offset} outside valid range {min}..={max}")]
    OffsetOutOfRange { offset: i32, min: i32, max: i32 },

    #[error("offset range is empty")]
    EmptyOffsetRange,
}

/// The offsets a viewer may select for a recipe written for
/// `portion_amount` servings.
///
/// `[1 - portion_amount, 100 - portion_amount]`, so that
/// `portion_amount + offset` always lands in `[1, 100]`. Non-empty for
/// every valid portion amount.
pub fn offset_range(portion_amount: u32) -> RangeInclusive<i32> {
    let portions = portion_amount as i32;
    (MIN_PORTIONS as i32 - portions)..=(MAX_PORTIONS as i32 - portions)
}

/// Clamp `offset` into `range` for the caller to apply.
///
/// An empty range is a configuration error; it cannot arise from
/// [`offset_range`] over a valid recipe.
pub fn clamp_offset(offset: i32, range: &RangeInclusive<i32>) -> Result<i32, ScalingError> {
    if range.is_empty() {
        return Err(ScalingError::EmptyOffsetRange);
    }
    Ok(offset.clamp(*range.start(), *range.end()))
}

/// Transient per-session view state: a serving-count offset on top of the
/// recipe's canonical portion amount.
///
/// Owned by the presentation session and never persisted with the recipe.
/// Display values are recomputed on read from the recipe passed in, so the
/// view holds no copy of recipe state that could go stale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortionView {
    offset: i32,
}

impl PortionView {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Apply a viewing offset. Out-of-range offsets are rejected, never
    /// applied; callers wanting nearest-valid behavior clamp first via
    /// [`clamp_offset`].
    pub fn set_offset(&mut self, recipe: &Recipe, offset: i32) -> Result<(), ScalingError> {
        let range = offset_range(recipe.portion_amount());
        if !range.contains(&offset) {
            return Err(ScalingError::OffsetOutOfRange {
                offset,
                min: *range.start(),
                max: *range.end(),
            });
        }
        self.offset = offset;
        Ok(())
    }

    /// The serving count currently shown: `portion_amount + offset`.
    pub fn effective_portions(&self, recipe: &Recipe) -> u32 {
        debug_assert!(
            offset_range(recipe.portion_amount()).contains(&self.offset),
            "stale offset; reconcile() must run after portion edits"
        );
        let effective = recipe.portion_amount() as i32 + self.offset;
        effective.clamp(MIN_PORTIONS as i32, MAX_PORTIONS as i32) as u32
    }

    /// Multiplier applied to stored amounts for display:
    /// `effective_portions / portion_amount`. 1.0 whenever no offset is
    /// active.
    pub fn display_scale(&self, recipe: &Recipe) -> f64 {
        self.effective_portions(recipe) as f64 / recipe.portion_amount() as f64
    }

    /// The amount to render for one ingredient. The stored amount is left
    /// untouched.
    pub fn display_amount(&self, recipe: &Recipe, ingredient: &Ingredient) -> f64 {
        ingredient.amount * self.display_scale(recipe)
    }

    /// The `(display amount, unit label)` pair for rendering one row, the
    /// label's plurality chosen by the displayed amount.
    pub fn display(&self, recipe: &Recipe, ingredient: &Ingredient) -> (f64, &'static str) {
        let amount = self.display_amount(recipe, ingredient);
        (amount, ingredient.unit.label(amount))
    }

    /// Drop the offset entirely. Applied when the canonical portion count
    /// is edited directly: the authored denominator changed, so a stale
    /// temporary view makes no sense.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Reconciliation for any other change to the recipe: if the offset
    /// fell outside the freshly computed range, reset it to zero. Required
    /// after every edit session, per the session ordering contract.
    pub fn reconcile(&mut self, recipe: &Recipe) {
        if !offset_range(recipe.portion_amount()).contains(&self.offset) {
            self.offset = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;

    fn recipe_for(portions: u32) -> Recipe {
        Recipe::new("Test").with_portions(portions, Unit::Piece)
    }

    #[test]
    fn test_offset_range_total_over_valid_portions() {
        for portions in MIN_PORTIONS..=MAX_PORTIONS {
            let range = offset_range(portions);
            assert!(!range.is_empty());
            for offset in [*range.start(), 0, *range.end()] {
                let effective = portions as i32 + offset;
                assert!((1..=100).contains(&effective));
            }
        }
    }

    #[test]
    fn test_offset_range_bounds() {
        assert_eq!(offset_range(1), 0..=99);
        assert_eq!(offset_range(4), -3..=96);
        assert_eq!(offset_range(100), -99..=0);
    }

    #[test]
    fn test_clamp_offset() {
        let range = offset_range(4);
        assert_eq!(clamp_offset(-10, &range), Ok(-3));
        assert_eq!(clamp_offset(500, &range), Ok(96));
        assert_eq!(clamp_offset(2, &range), Ok(2));
    }

    #[test]
    fn test_clamp_offset_empty_range() {
        assert_eq!(
            clamp_offset(0, &(5..=-5)),
            Err(ScalingError::EmptyOffsetRange)
        );
    }

    #[test]
    fn test_set_offset_rejects_out_of_range() {
        let recipe = recipe_for(4);
        let mut view = PortionView::new();
        let err = view.set_offset(&recipe, 97).unwrap_err();
        assert_eq!(
            err,
            ScalingError::OffsetOutOfRange {
                offset: 97,
                min: -3,
                max: 96
            }
        );
        // The rejected offset was never applied.
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_display_scale_with_offset() {
        let recipe = recipe_for(4)
            .with_ingredients(vec![Ingredient::with("flour", 200.0, Unit::Gram)]);
        let mut view = PortionView::new();
        view.set_offset(&recipe, 2).unwrap();

        assert_eq!(view.effective_portions(&recipe), 6);
        assert_eq!(view.display_scale(&recipe), 1.5);
        assert_eq!(view.display_amount(&recipe, &recipe.ingredients[0]), 300.0);
        // Stored amount untouched.
        assert_eq!(recipe.ingredients[0].amount, 200.0);
    }

    #[test]
    fn test_display_scale_is_identity_without_offset() {
        let recipe = recipe_for(7)
            .with_ingredients(vec![Ingredient::with("milk", 0.5, Unit::Liter)]);
        let view = PortionView::new();
        assert_eq!(view.display_scale(&recipe), 1.0);
        assert_eq!(view.display_amount(&recipe, &recipe.ingredients[0]), 0.5);
    }

    #[test]
    fn test_display_pairs_label_with_scaled_amount() {
        let recipe = recipe_for(2)
            .with_ingredients(vec![Ingredient::with("lemon", 0.5, Unit::Piece)]);
        let mut view = PortionView::new();

        // 0.5 pieces at 2 portions; doubling the servings makes it exactly 1.
        assert_eq!(view.display(&recipe, &recipe.ingredients[0]), (0.5, "pieces"));
        view.set_offset(&recipe, 2).unwrap();
        assert_eq!(view.display(&recipe, &recipe.ingredients[0]), (1.0, "piece"));
    }

    #[test]
    fn test_reconcile_resets_stale_offset() {
        let mut recipe = recipe_for(4);
        let mut view = PortionView::new();
        view.set_offset(&recipe, 96).unwrap();

        // Canonical edit shrinks the valid range; 96 is now stale.
        recipe.set_portion_amount(10);
        view.reconcile(&recipe);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_reconcile_keeps_valid_offset() {
        let mut recipe = recipe_for(4);
        let mut view = PortionView::new();
        view.set_offset(&recipe, 2).unwrap();

        recipe.set_portion_amount(6);
        view.reconcile(&recipe);
        assert_eq!(view.offset(), 2);
    }

    #[test]
    fn test_reset_clears_offset() {
        let recipe = recipe_for(4);
        let mut view = PortionView::new();
        view.set_offset(&recipe, 2).unwrap();
        view.reset();
        assert_eq!(view.offset(), 0);
        assert_eq!(view.display_scale(&recipe), 1.0);
    }
}
