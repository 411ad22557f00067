pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;
use clap::Parser;

use types::Commands;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        Some(Commands::Page { files, layout }) => {
            commands::handle_page_command(&cli, files, layout.as_deref())
        },
        Some(Commands::Inline { title, url, layout, date, excerpt, content }) => {
            commands::handle_inline_command(&cli, commands::InlinePage {
                title,
                url,
                layout,
                date: date.as_deref(),
                excerpt: excerpt.as_deref(),
                content: content.as_deref(),
            })
        },
        // Default to the sample pages if no command is given
        Some(Commands::Sample {}) | None => commands::handle_sample_command(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
