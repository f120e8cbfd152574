//! Edit-session orchestration.
//!
//! All editing follows one strictly ordered, non-reentrant cycle:
//! enter edit, any number of field and order mutations, exit edit. Exit is
//! where the deferred work happens: the blank-ingredient sweep and the
//! portion-offset reconciliation. Everything is synchronous and
//! single-threaded; display values are recomputed on read.

use crate::models::Recipe;
use crate::scaling::{PortionView, ScalingError};

/// A recipe under interactive editing, with its transient portion view.
///
/// Owns the recipe exclusively for the session's lifetime. The portion
/// view (the temporary serving offset) lives and dies with the session and
/// is never persisted.
#[derive(Debug, Clone)]
pub struct EditSession {
    recipe: Recipe,
    view: PortionView,
    editing: bool,
    portions_at_entry: u32,
}

impl EditSession {
    pub fn new(recipe: Recipe) -> Self {
        let portions_at_entry = recipe.portion_amount();
        Self {
            recipe,
            view: PortionView::new(),
            editing: false,
            portions_at_entry,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn view(&self) -> &PortionView {
        &self.view
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Pick a temporary serving offset for viewing. Only meaningful outside
    /// edit mode; in edit mode the canonical portion count is edited
    /// directly.
    pub fn set_offset(&mut self, offset: i32) -> Result<(), ScalingError> {
        debug_assert!(!self.editing, "offset is a view-mode control");
        self.view.set_offset(&self.recipe, offset)
    }

    /// Begin an edit cycle. A second cycle may not begin before the prior
    /// one's exit reconciliation has completed.
    pub fn enter_edit(&mut self) {
        debug_assert!(!self.editing, "edit sessions do not nest");
        self.portions_at_entry = self.recipe.portion_amount();
        self.editing = true;
    }

    /// Mutable access to the recipe for the duration of the edit cycle.
    pub fn recipe_mut(&mut self) -> &mut Recipe {
        debug_assert!(self.editing, "mutations require an open edit session");
        &mut self.recipe
    }

    /// End the edit cycle: sweep fully blank ingredient rows, then settle
    /// the portion view. A direct edit of the canonical portion count drops
    /// the offset entirely; otherwise the offset is merely reconciled
    /// against the (unchanged) valid range. Returns the number of rows
    /// swept.
    pub fn exit_edit(&mut self) -> usize {
        debug_assert!(self.editing, "no edit session to exit");
        let swept = self.recipe.sweep_blank_ingredients();
        if self.recipe.portion_amount() != self.portions_at_entry {
            self.view.reset();
        } else {
            self.view.reconcile(&self.recipe);
        }
        self.editing = false;
        swept
    }

    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Unit};

    #[test]
    fn test_exit_edit_sweeps_blank_rows() {
        let recipe = Recipe::new("Test").with_ingredients(vec![
            Ingredient::with("", 0.0, Unit::None),
            Ingredient::with("Salt", 0.0, Unit::None),
            Ingredient::with("", 2.0, Unit::Gram),
        ]);
        let mut session = EditSession::new(recipe);

        session.enter_edit();
        let swept = session.exit_edit();

        assert_eq!(swept, 1);
        assert_eq!(session.recipe().ingredients.len(), 2);
    }

    #[test]
    fn test_sweep_runs_on_exit_not_during_edit() {
        let mut session = EditSession::new(Recipe::new("Test"));
        session.enter_edit();
        session.recipe_mut().add_ingredient();
        // The blank row survives while the session is open.
        assert_eq!(session.recipe().ingredients.len(), 1);
        session.exit_edit();
        assert!(session.recipe().ingredients.is_empty());
    }

    #[test]
    fn test_portion_scaling_end_to_end() {
        let recipe = Recipe::new("Bread")
            .with_portions(4, Unit::Piece)
            .with_ingredients(vec![Ingredient::with("flour", 200.0, Unit::Gram)]);
        let mut session = EditSession::new(recipe);

        // Temporary view at 6 servings: display scales, storage does not.
        session.set_offset(2).unwrap();
        let ingredient = &session.recipe().ingredients[0];
        assert_eq!(session.view().effective_portions(session.recipe()), 6);
        assert_eq!(
            session.view().display_amount(session.recipe(), ingredient),
            300.0
        );
        assert_eq!(session.recipe().ingredients[0].amount, 200.0);

        // Canonical edit to 6: offset resets to 0, authored amounts
        // unchanged — only the denominator moved.
        session.enter_edit();
        session.recipe_mut().set_portion_amount(6);
        session.exit_edit();

        assert_eq!(session.view().offset(), 0);
        assert_eq!(session.recipe().portion_amount(), 6);
        assert_eq!(session.recipe().ingredients[0].amount, 200.0);
        let ingredient = &session.recipe().ingredients[0];
        assert_eq!(
            session.view().display_amount(session.recipe(), ingredient),
            200.0
        );
    }

    #[test]
    fn test_exit_edit_resets_stale_offset() {
        let recipe = Recipe::new("Test").with_portions(4, Unit::Piece);
        let mut session = EditSession::new(recipe);
        session.set_offset(96).unwrap();

        session.enter_edit();
        session.recipe_mut().set_portion_amount(10);
        session.exit_edit();

        // 96 is outside 10's range; reconciliation reset it.
        assert_eq!(session.view().offset(), 0);
    }

    #[test]
    fn test_exit_edit_keeps_offset_when_portions_untouched() {
        let recipe = Recipe::new("Test").with_portions(4, Unit::Piece);
        let mut session = EditSession::new(recipe);
        session.set_offset(2).unwrap();

        session.enter_edit();
        session.recipe_mut().add_ingredient().name = "Salt".into();
        session.exit_edit();

        assert_eq!(session.view().offset(), 2);
    }

    #[test]
    #[should_panic(expected = "edit sessions do not nest")]
    fn test_enter_edit_is_not_reentrant() {
        let mut session = EditSession::new(Recipe::new("Test"));
        session.enter_edit();
        session.enter_edit();
    }

    #[test]
    #[should_panic(expected = "mutations require an open edit session")]
    fn test_mutation_outside_edit_session_asserts() {
        let mut session = EditSession::new(Recipe::new("Test"));
        session.recipe_mut();
    }
}
