use clap::{Args, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

use recipe_book_core::{clamp_offset, format_amount, offset_range, EditSession, Recipe, Unit};

use super::resolve_file;
use crate::config::Config;
use crate::storage;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Create a new recipe file
#[derive(Args)]
pub struct NewCommand {
    /// Name of the recipe
    pub name: String,

    /// Recipe file to create (defaults to the configured file)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Canonical portion count the recipe is written for (1-100)
    #[arg(long, default_value_t = 4)]
    pub portions: u32,

    /// Portion unit (e.g. piece, cup; defaults to the configured unit)
    #[arg(long)]
    pub portion_unit: Option<String>,
}

impl NewCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        if self.name.trim().is_empty() {
            return Err("Recipe name cannot be empty".into());
        }
        if !(1..=100).contains(&self.portions) {
            return Err(format!("Portions must be between 1 and 100, got {}", self.portions).into());
        }

        let path = resolve_file(&self.file, config);
        if path.exists() {
            return Err(format!("{} already exists", path.display()).into());
        }

        let unit = match &self.portion_unit {
            Some(text) => Unit::from_str(text)?,
            None => config.portion_unit.value,
        };

        let recipe = Recipe::new(self.name.trim()).with_portions(self.portions, unit);
        storage::save(&path, &recipe)?;
        println!("Created {}", path.display());
        Ok(())
    }
}

/// Show a recipe, optionally scaled to a temporary serving count
#[derive(Args)]
pub struct ShowCommand {
    /// Recipe file (defaults to the configured file)
    pub file: Option<PathBuf>,

    /// Serving count to scale the displayed amounts to; the stored recipe
    /// is not modified
    #[arg(long, short)]
    pub portions: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let path = resolve_file(&self.file, config);
        let recipe = storage::load(&path)?;

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
                Ok(())
            }
            OutputFormat::Text => {
                let mut session = EditSession::new(recipe);
                if let Some(portions) = self.portions {
                    // A requested serving count is a temporary viewing
                    // offset; out-of-range requests clamp to the nearest
                    // valid count.
                    let recipe = session.recipe();
                    let wanted = (portions as i64 - recipe.portion_amount() as i64)
                        .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
                    let range = offset_range(recipe.portion_amount());
                    let offset = clamp_offset(wanted, &range)?;
                    session.set_offset(offset)?;
                }
                print_scaled(&session);
                Ok(())
            }
        }
    }
}

fn print_scaled(session: &EditSession) {
    let recipe = session.recipe();
    let view = session.view();

    println!("{}", recipe.name);
    println!("{}", "=".repeat(recipe.name.len()));

    let effective = view.effective_portions(recipe);
    let portion_label = recipe.portion_unit.label(effective as f64);
    if portion_label.is_empty() {
        println!("For {}", effective);
    } else {
        println!("For {} {}", effective, portion_label);
    }

    if !recipe.ingredients.is_empty() {
        println!("\nIngredients:");
        for ingredient in &recipe.ingredients {
            let (amount, label) = view.display(recipe, ingredient);
            if label.is_empty() {
                println!("  - {} {}", format_amount(amount), ingredient.name);
            } else {
                println!("  - {} {} {}", format_amount(amount), label, ingredient.name);
            }
        }
    }

    if !recipe.steps.is_empty() {
        println!("\nSteps:");
        for (index, step) in recipe.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step.description);
        }
    }
}

/// Edit the canonical portion count
#[derive(Args)]
pub struct PortionsCommand {
    /// New canonical portion count (1-100)
    pub amount: u32,

    /// Recipe file (defaults to the configured file)
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

impl PortionsCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        if !(1..=100).contains(&self.amount) {
            return Err(format!("Portions must be between 1 and 100, got {}", self.amount).into());
        }

        let path = resolve_file(&self.file, config);
        let recipe = storage::load(&path)?;
        let mut session = EditSession::new(recipe);

        session.enter_edit();
        session.recipe_mut().set_portion_amount(self.amount);
        session.exit_edit();

        storage::save(&path, session.recipe())?;
        println!(
            "{} is now written for {} {}",
            session.recipe().name,
            session.recipe().portion_amount(),
            session
                .recipe()
                .portion_unit
                .label(session.recipe().portion_amount() as f64)
        );
        Ok(())
    }
}
