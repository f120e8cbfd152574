use clap::{Args, Subcommand};
use std::fs;

use super::recipe_cmd::OutputFormat;
use crate::config::Config;

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init,
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!("recipe_file: {}", config.recipe_file.value.display());
                        println!("  source: {}", config.recipe_file.source);
                        println!();

                        println!("portion_unit: {}", config.portion_unit.value);
                        println!("  source: {}", config.portion_unit.source);
                    }
                }
                Ok(())
            }

            ConfigSubcommand::Init => {
                let config_path = Config::default_config_path();

                if config_path.exists() {
                    println!("Config file already exists: {}", config_path.display());
                    println!("Use 'recipes config show' to view current configuration.");
                    return Ok(());
                }

                if let Some(parent) = config_path.parent() {
                    fs::create_dir_all(parent)?;
                }

                let template = format!(
                    "# Recipe Book configuration\n\
                     # recipe_file: {}\n\
                     # portion_unit: piece\n",
                    Config::default_data_dir().join("recipe.json").display()
                );
                fs::write(&config_path, template)?;

                println!("Created config file: {}", config_path.display());
                Ok(())
            }
        }
    }
}
