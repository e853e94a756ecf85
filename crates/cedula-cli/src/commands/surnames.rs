//! Surnames command - inspect the dictionary behind the name tokenizer.

use clap::{Args, Subcommand};
use console::style;

use cedula_core::CedulaParser;

/// Arguments for the surnames command.
#[derive(Args)]
pub struct SurnamesArgs {
    #[command(subcommand)]
    command: SurnamesCommand,
}

#[derive(Subcommand)]
enum SurnamesCommand {
    /// List the active dictionary in priority order
    List,

    /// Split a glued name blob into surnames and given names
    Split {
        /// Name blob as captured from a digital payload
        blob: String,
    },

    /// Check whether a name is in the dictionary
    Check {
        /// Surname to look up
        name: String,
    },
}

pub fn run(args: SurnamesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let parser = CedulaParser::from_config(&config)?;
    let dictionary = parser.dictionary();

    match args.command {
        SurnamesCommand::List => {
            for (i, entry) in dictionary.entries().enumerate() {
                println!("{:>4}  {}", i + 1, entry);
            }
            println!();
            println!(
                "{} {} entries, scanned top to bottom, first prefix wins",
                style("ℹ").blue(),
                dictionary.len()
            );
        }
        SurnamesCommand::Split { blob } => {
            let blob = blob.to_uppercase();
            let (surnames, given_names) = dictionary.split(&blob);
            println!("Surnames:    {}", surnames);
            println!("Given names: {}", given_names);
        }
        SurnamesCommand::Check { name } => {
            if dictionary.contains(&name) {
                println!("{} {} is in the dictionary", style("✓").green(), name);
            } else {
                println!("{} {} is not in the dictionary", style("✗").red(), name);
            }
        }
    }

    Ok(())
}
