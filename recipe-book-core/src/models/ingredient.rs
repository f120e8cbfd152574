use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::unit::Unit;
use crate::codec;

/// A single ingredient line: name, amount and unit.
///
/// Identity is the `id`, not the content; two rows with the same name,
/// amount and unit are still distinct list elements. Structural equality
/// (`PartialEq`) compares content including the id and must not be used to
/// locate rows in a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub unit: Unit,
}

impl Ingredient {
    /// A blank row, as appended when the user adds an ingredient.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            amount: 0.0,
            unit: Unit::None,
        }
    }

    pub fn with(name: impl Into<String>, amount: f64, unit: Unit) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            unit,
        }
    }

    /// True for rows the cleanup sweep removes: empty name, zero amount,
    /// no unit.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.amount == 0.0 && self.unit == Unit::None
    }
}

impl Default for Ingredient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.unit.label(self.amount);
        if label.is_empty() {
            write!(f, "{} {}", codec::format_amount(self.amount), self.name)
        } else {
            write!(
                f,
                "{} {} {}",
                codec::format_amount(self.amount),
                label,
                self.name
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_new_is_blank() {
        let ingredient = Ingredient::new();
        assert!(ingredient.name.is_empty());
        assert_eq!(ingredient.amount, 0.0);
        assert_eq!(ingredient.unit, Unit::None);
        assert!(ingredient.is_blank());
    }

    #[test]
    fn test_ingredient_ids_are_unique() {
        let a = Ingredient::new();
        let b = Ingredient::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_is_blank_requires_all_three() {
        assert!(!Ingredient::with("Salt", 0.0, Unit::None).is_blank());
        assert!(!Ingredient::with("", 2.0, Unit::Gram).is_blank());
        assert!(!Ingredient::with("", 0.0, Unit::Pinch).is_blank());
    }

    #[test]
    fn test_ingredient_display() {
        let flour = Ingredient::with("flour", 2.5, Unit::Cup);
        assert_eq!(format!("{}", flour), "2.5 cups flour");

        let egg = Ingredient::with("egg", 1.0, Unit::Piece);
        assert_eq!(format!("{}", egg), "1 piece egg");

        let apples = Ingredient::with("apples", 3.0, Unit::None);
        assert_eq!(format!("{}", apples), "3 apples");
    }

    #[test]
    fn test_ingredient_json_roundtrip() {
        let ingredient = Ingredient::with("sugar", 1.5, Unit::Tablespoon);
        let json = serde_json::to_string(&ingredient).unwrap();
        let parsed: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(ingredient, parsed);
    }
}
