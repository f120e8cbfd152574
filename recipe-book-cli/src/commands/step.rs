use clap::{Args, Subcommand};
use std::path::PathBuf;

use recipe_book_core::EditSession;

use super::{check_indices, resolve_file};
use crate::config::Config;
use crate::storage;

#[derive(Args)]
pub struct StepCommand {
    #[command(subcommand)]
    pub command: StepSubcommand,

    /// Recipe file (defaults to the configured file)
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum StepSubcommand {
    /// Append a preparation step
    Add {
        /// Instruction text
        description: String,
    },

    /// List steps with their positions
    List,

    /// Replace the text of the step at a position
    Set {
        /// Position in the step list (0-based)
        index: usize,

        /// New instruction text
        description: String,
    },

    /// Remove the steps at the given positions (resolved before any
    /// removal)
    Remove {
        /// Positions in the step list (0-based)
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Move the steps at the given positions to just before a destination
    /// position
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

impl StepCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        let path = resolve_file(&self.file, config);
        let recipe = storage::load(&path)?;
        let mut session = EditSession::new(recipe);

        match &self.command {
            StepSubcommand::List => {
                if session.recipe().steps.is_empty() {
                    println!("No steps");
                    return Ok(());
                }
                for (index, step) in session.recipe().steps.iter().enumerate() {
                    println!("{:>3}  {}", index, step.description);
                }
                return Ok(());
            }

            StepSubcommand::Add { description } => {
                session.enter_edit();
                session.recipe_mut().add_step().description = description.clone();
                session.exit_edit();
                println!("Added step");
            }

            StepSubcommand::Set { index, description } => {
                check_indices(&[*index], session.recipe().steps.len(), "step")?;
                session.enter_edit();
                let id = session.recipe().steps[*index].id;
                let step = session
                    .recipe_mut()
                    .step_mut(id)
                    .ok_or("Step not found")?;
                step.description = description.clone();
                session.exit_edit();
                println!("Updated step {}", index);
            }

            StepSubcommand::Remove { indices } => {
                check_indices(indices, session.recipe().steps.len(), "step")?;
                session.enter_edit();
                session.recipe_mut().remove_steps(indices);
                session.exit_edit();
                println!("Removed {} step(s)", indices.len());
            }

            StepSubcommand::Move { indices, to } => {
                let len = session.recipe().steps.len();
                check_indices(indices, len, "step")?;
                if *to > len {
                    return Err(format!(
                        "Destination {} out of range (list has {} entries)",
                        to, len
                    )
                    .into());
                }
                session.enter_edit();
                session.recipe_mut().move_steps(indices, *to);
                session.exit_edit();
                println!("Moved {} step(s)", indices.len());
            }
        }

        storage::save(&path, session.recipe())?;
        Ok(())
    }
}
