//! filecon - concatenate files of one extension into a single output file
//!
//! filecon provides:
//! - Recursive directory walk with a case-sensitive suffix filter
//! - Optional whitespace normalization
//! - Flag-driven batch mode and an interactive wizard

use clap::Parser;
use std::process::ExitCode;

mod backends;
mod cli;
mod core;
mod flows;

use backends::concat::RunFailed;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Run failures have already been rendered in the selected format
            if !err.is::<RunFailed>() {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}
