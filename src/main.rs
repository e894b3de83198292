use std::process::ExitCode;

use clap::Parser;
use locgen::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();
    locgen::cli::run_cli(args).into()
}
