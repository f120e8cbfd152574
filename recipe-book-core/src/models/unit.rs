use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement unit for ingredient amounts and recipe portions.
///
/// The set is closed: unknown units cannot occur, so label lookup is total
/// and has no failure mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    None,
    Piece,
    Kilogram,
    Gram,
    Liter,
    Milliliter,
    Tablespoon,
    Teaspoon,
    Stem,
    Box,
    Cup,
    Pinch,
    Dice,
    Leaf,
    Jar,
}

impl Unit {
    /// Every unit, in menu order. `None` comes first so pickers default to it.
    pub const ALL: [Unit; 15] = [
        Unit::None,
        Unit::Piece,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Stem,
        Unit::Box,
        Unit::Cup,
        Unit::Pinch,
        Unit::Dice,
        Unit::Leaf,
        Unit::Jar,
    ];

    /// The `(singular, plural)` human-readable label pair.
    ///
    /// `None` maps to the shared "no unit" label (empty) for both forms.
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Unit::None => ("", ""),
            Unit::Piece => ("piece", "pieces"),
            Unit::Kilogram => ("kg", "kg"),
            Unit::Gram => ("g", "g"),
            Unit::Liter => ("l", "l"),
            Unit::Milliliter => ("ml", "ml"),
            Unit::Tablespoon => ("tablespoon", "tablespoons"),
            Unit::Teaspoon => ("teaspoon", "teaspoons"),
            Unit::Stem => ("stem", "stems"),
            Unit::Box => ("box", "boxes"),
            Unit::Cup => ("cup", "cups"),
            Unit::Pinch => ("pinch", "pinches"),
            Unit::Dice => ("dice", "dices"),
            Unit::Leaf => ("leaf", "leaves"),
            Unit::Jar => ("jar", "jars"),
        }
    }

    pub fn singular(&self) -> &'static str {
        self.labels().0
    }

    pub fn plural(&self) -> &'static str {
        self.labels().1
    }

    /// The label to show next to `count` of something: singular only when the
    /// count is exactly 1. Display amounts can be fractional, so anything
    /// that is not exactly 1 reads as plural ("0.5 cups", "1.5 cups").
    pub fn label(&self, count: f64) -> &'static str {
        if count == 1.0 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::None => "none",
            Unit::Piece => "piece",
            Unit::Kilogram => "kilogram",
            Unit::Gram => "gram",
            Unit::Liter => "liter",
            Unit::Milliliter => "milliliter",
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Stem => "stem",
            Unit::Box => "box",
            Unit::Cup => "cup",
            Unit::Pinch => "pinch",
            Unit::Dice => "dice",
            Unit::Leaf => "leaf",
            Unit::Jar => "jar",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "" => Ok(Unit::None),
            "piece" => Ok(Unit::Piece),
            "kilogram" | "kg" => Ok(Unit::Kilogram),
            "gram" | "g" => Ok(Unit::Gram),
            "liter" | "l" => Ok(Unit::Liter),
            "milliliter" | "ml" => Ok(Unit::Milliliter),
            "tablespoon" | "tbsp" => Ok(Unit::Tablespoon),
            "teaspoon" | "tsp" => Ok(Unit::Teaspoon),
            "stem" => Ok(Unit::Stem),
            "box" => Ok(Unit::Box),
            "cup" => Ok(Unit::Cup),
            "pinch" => Ok(Unit::Pinch),
            "dice" => Ok(Unit::Dice),
            "leaf" => Ok(Unit::Leaf),
            "jar" => Ok(Unit::Jar),
            _ => Err(format!(
                "Invalid unit '{}'. Valid options: none, piece, kilogram, gram, liter, \
                 milliliter, tablespoon, teaspoon, stem, box, cup, pinch, dice, leaf, jar",
                s
            )),
        }
    }
}
