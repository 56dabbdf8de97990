//! Sudoers CLI
//!
//! Command-line interface for managing sudoers entries

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sudoers_core::logging_facility::{self, Profile};
use sudoers_store::DEFAULT_TARGET;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sudoers")]
#[command(about = "Manage entries in a sudoers file", long_about = None)]
struct Cli {
    /// Sudoers file to operate on
    #[arg(long, global = true, env = "SUDOERS_TARGET", default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Log output format: human or json
    #[arg(long, global = true, default_value = "human")]
    log_format: Profile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List resolved records
    List(commands::list::ListArgs),
    /// Parse the target and report the first error
    Check,
    /// Print the canonical serialization of the target
    Render(commands::render::RenderArgs),
    /// Ensure a record is present
    Set(commands::set::SetArgs),
    /// Remove records by name
    Remove(commands::remove::RemoveArgs),
    /// Remove user specs that carry no name marker
    Purge,
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_format);

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args, &cli.target),
        Commands::Check => commands::check::execute(&cli.target),
        Commands::Render(args) => commands::render::execute(args, &cli.target),
        Commands::Set(args) => commands::set::execute(args, &cli.target),
        Commands::Remove(args) => commands::remove::execute(args, &cli.target),
        Commands::Purge => commands::remove::execute_purge(&cli.target),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
