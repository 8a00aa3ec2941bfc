mod commands;
mod domain;
mod services;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::commands::analyze_cmd::run_analysis;
use crate::commands::base_commands::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    if let Some(shell) = args.completions {
        let mut command = CliArgs::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    // clap enforces --repo whenever --completions is absent.
    let Some(reference) = args.repo else {
        return ExitCode::FAILURE;
    };

    match run_analysis(&reference, args.days, &args.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
