use std::process::ExitCode;

// Module declarations
mod structured_data;
mod config;
mod page;
mod cli;
mod utils;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
