//! apidelta CLI entry point.

use std::process::ExitCode;

use apidelta_runtime::{Cli, init, run};
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init(cli.profile());

    match run(&cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
