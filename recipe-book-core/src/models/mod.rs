mod ingredient;
mod recipe;
mod step;
mod unit;

pub use ingredient::Ingredient;
pub use recipe::{Recipe, Repair, MAX_PORTIONS, MIN_PORTIONS};
pub use step::Step;
pub use unit::Unit;
