//! Recipe Book Core Library
//!
//! Recipe data model, portion scaling and list editing, shared by every
//! Recipe Book frontend.

pub mod codec;
pub mod list_edit;
pub mod models;
pub mod scaling;
pub mod session;

pub use codec::{format_amount, parse_amount, AmountField};
pub use models::{Ingredient, Recipe, Repair, Step, Unit, MAX_PORTIONS, MIN_PORTIONS};
pub use scaling::{clamp_offset, offset_range, PortionView, ScalingError};
pub use session::EditSession;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
