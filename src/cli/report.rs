//! Console output for command results.
//!
//! Kept separate from the core library logic so locgen can be used as a
//! library without printing side effects.

use colored::Colorize;

use super::run::{RunSummary, TableStat};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_summary(summary: &RunSummary, verbose: bool) {
    match summary {
        RunSummary::Generated {
            module_path,
            languages,
            tables,
        } => {
            let entries: usize = tables.iter().map(|t| t.entries).sum();
            println!(
                "{} generated {} ({} tables, {} languages, {} entries)",
                SUCCESS_MARK.green(),
                module_path.display().to_string().bold(),
                tables.len(),
                languages,
                entries
            );
            if verbose {
                print_tables(tables);
            }
        }
        RunSummary::UpToDate { outputs } => {
            for output in outputs {
                println!(
                    "{} {} is up to date",
                    SUCCESS_MARK.green(),
                    output.display()
                );
            }
        }
        RunSummary::Checked { languages, tables } => {
            let entries: usize = tables.iter().map(|t| t.entries).sum();
            println!(
                "{} {} tables OK ({} languages, {} entries)",
                SUCCESS_MARK.green(),
                tables.len(),
                languages,
                entries
            );
            if verbose {
                print_tables(tables);
            }
        }
        RunSummary::Init { path } => {
            println!("{} created {}", SUCCESS_MARK.green(), path.display());
        }
    }
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}{} {}", FAILURE_MARK.red(), "error".bold().red(), ":".bold(), err);
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

fn print_tables(tables: &[TableStat]) {
    for table in tables {
        println!("  {}: {} entries", table.name.dimmed(), table.entries);
    }
}
