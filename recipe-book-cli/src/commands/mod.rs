mod config_cmd;
mod ingredient;
mod recipe_cmd;
mod step;

pub use config_cmd::ConfigCommand;
pub use ingredient::IngredientCommand;
pub use recipe_cmd::{NewCommand, PortionsCommand, ShowCommand};
pub use step::StepCommand;

use std::path::PathBuf;

use crate::config::Config;

/// The recipe file a command operates on: explicit flag first, then the
/// configured default.
pub(crate) fn resolve_file(file: &Option<PathBuf>, config: &Config) -> PathBuf {
    file.clone().unwrap_or_else(|| config.recipe_file.value.clone())
}

/// Validate user-supplied list positions before they reach the core list
/// operations, where out-of-bounds indices are a caller-contract violation.
pub(crate) fn check_indices(
    indices: &[usize],
    len: usize,
    what: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for &index in indices {
        if index >= len {
            return Err(format!(
                "No {} at position {} (list has {} entries)",
                what, index, len
            )
            .into());
        }
    }
    Ok(())
}
