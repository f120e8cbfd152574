use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use recipe_book_core::{codec, AmountField, EditSession, Unit};

use super::{check_indices, resolve_file};
use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct IngredientCommand {
    #[command(subcommand)]
    pub command: IngredientSubcommand,

    /// Recipe file (defaults to the configured file)
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum IngredientSubcommand {
    /// Add an ingredient row (blank unless fields are given)
    Add {
        /// Ingredient name
        name: Option<String>,

        /// Amount, as entered in the amount field
        #[arg(long)]
        amount: Option<String>,

        /// Unit of measurement
        #[arg(long)]
        unit: Option<String>,
    },

    /// List ingredient rows with their positions
    List,

    /// Edit fields of the ingredient at a position
    Set {
        /// Position in the ingredient list (0-based)
        index: usize,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New amount; an empty string means an explicit zero, unparsable
        /// text keeps the previous amount
        #[arg(long)]
        amount: Option<String>,

        /// New unit
        #[arg(long)]
        unit: Option<String>,
    },

    /// Remove the ingredients at the given positions (resolved before any
    /// removal)
    Remove {
        /// Positions in the ingredient list (0-based)
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Move the ingredients at the given positions to just before a
    /// destination position
    Move {
        /// Positions to move (0-based)
        #[arg(required = true)]
        indices: Vec<usize>,

        /// Destination position in the current list (may equal the list
        /// length to move to the end)
        #[arg(long)]
        to: usize,
    },
}

impl IngredientCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let path = resolve_file(&self.file, config);
        let recipe = storage::load(&path)?;
        let mut session = EditSession::new(recipe);

        match &self.command {
            IngredientSubcommand::List => {
                if session.recipe().ingredients.is_empty() {
                    println!("No ingredients");
                    return Ok(());
                }
                for (index, ingredient) in session.recipe().ingredients.iter().enumerate() {
                    println!("{:>3}  {}", index, ingredient);
                }
                return Ok(());
            }

            IngredientSubcommand::Add { name, amount, unit } => {
                let parsed_amount = match amount {
                    Some(text) => codec::parse_amount(text)
                        .ok_or_else(|| format!("Invalid amount '{}'", text))?,
                    None => 0.0,
                };
                let parsed_unit = match unit {
                    Some(text) => Unit::from_str(text)?,
                    None => Unit::None,
                };

                session.enter_edit();
                let row = session.recipe_mut().add_ingredient();
                if let Some(name) = name {
                    row.name = name.clone();
                }
                row.amount = parsed_amount;
                row.unit = parsed_unit;
                let swept = session.exit_edit();
                if swept > 0 {
                    println!("Nothing to add: blank rows are dropped");
                } else {
                    println!("Added ingredient");
                }
            }

            IngredientSubcommand::Set {
                index,
                name,
                amount,
                unit,
            } => {
                if name.is_none() && amount.is_none() && unit.is_none() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }
                check_indices(&[*index], session.recipe().ingredients.len(), "ingredient")?;

                let parsed_unit = match unit {
                    Some(text) => Some(Unit::from_str(text)?),
                    None => None,
                };

                session.enter_edit();
                let id = session.recipe().ingredients[*index].id;
                let row = session
                    .recipe_mut()
                    .ingredient_mut(id)
                    .ok_or("Ingredient not found")?;

                if let Some(name) = name {
                    row.name = name.clone();
                }
                if let Some(text) = amount {
                    // Field commit policy: empty is an explicit zero,
                    // junk keeps the last good value.
                    let mut field = AmountField::begin(row.amount);
                    field.set_text(text.clone());
                    match field.commit() {
                        Some(value) => row.amount = value,
                        None => println!(
                            "Kept previous amount ('{}' is not a number)",
                            text
                        ),
                    }
                }
                if let Some(unit) = parsed_unit {
                    row.unit = unit;
                }
                session.exit_edit();
                println!("Updated ingredient {}", index);
            }

            IngredientSubcommand::Remove { indices } => {
                check_indices(indices, session.recipe().ingredients.len(), "ingredient")?;
                session.enter_edit();
                session.recipe_mut().remove_ingredients(indices);
                session.exit_edit();
                println!("Removed {} ingredient(s)", indices.len());
            }

            IngredientSubcommand::Move { indices, to } => {
                let len = session.recipe().ingredients.len();
                check_indices(indices, len, "ingredient")?;
                if *to > len {
                    return Err(format!(
                        "Destination {} out of range (list has {} entries)",
                        to, len
                    )
                    .into());
                }
                session.enter_edit();
                session.recipe_mut().move_ingredients(indices, *to);
                session.exit_edit();
                println!("Moved {} ingredient(s)", indices.len());
            }
        }

        storage::save(&path, session.recipe())?;
        Ok(())
    }
}
