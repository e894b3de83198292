//! CLI argument definitions using clap's derive API.
//!
//! ## Commands
//!
//! - `generate`: compile a directory of CSV tables into one Elm module
//! - `check`: validate the tables without writing any output
//! - `init`: initialize a locgen configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Arguments shared by the generate and check commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the translation tables
    pub source: PathBuf,

    /// Extension of the tabular input files, without the dot (overrides config file)
    #[arg(long)]
    pub extension: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory where the generated module is written (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip generation when the output is newer than every input
    #[arg(long)]
    pub if_stale: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a statically-typed Elm translation module from CSV tables
    Generate(GenerateCommand),
    /// Parse and validate the tables without writing any output
    Check(CheckCommand),
    /// Initialize a new .locgenrc.json configuration file
    Init,
}
