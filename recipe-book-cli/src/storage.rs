//! Recipe file storage.
//!
//! The recipe lives in a single JSON file. Loading is where external data
//! enters the model, so every loaded recipe goes through
//! [`Recipe::repair`]; whatever had to be fixed is logged and the repaired
//! recipe is returned rather than failing, since the user cannot act on a
//! low-level inconsistency.

use std::path::{Path, PathBuf};

use recipe_book_core::Recipe;

/// Errors that can occur while reading or writing the recipe file.
#[derive(Debug)]
pub enum StorageError {
    ReadError(PathBuf, std::io::Error),
    WriteError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadError(path, e) => {
                write!(f, "Failed to read {}: {}", path.display(), e)
            }
            StorageError::WriteError(path, e) => {
                write!(f, "Failed to write {}: {}", path.display(), e)
            }
            StorageError::ParseError(path, e) => {
                write!(f, "Failed to parse {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Load a recipe, repairing any invariant violations in the file.
pub fn load(path: &Path) -> Result<Recipe, StorageError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| StorageError::ReadError(path.to_path_buf(), e))?;
    let mut recipe: Recipe = serde_json::from_str(&contents)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;

    for repair in recipe.repair() {
        tracing::warn!("Repaired {}: {}", path.display(), repair);
    }

    Ok(recipe)
}

/// Save a recipe as pretty-printed JSON, creating parent directories as
/// needed.
pub fn save(path: &Path, recipe: &Recipe) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::WriteError(path.to_path_buf(), e))?;
        }
    }
    let json = serde_json::to_string_pretty(recipe)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;
    std::fs::write(path, json).map_err(|e| StorageError::WriteError(path.to_path_buf(), e))
}
