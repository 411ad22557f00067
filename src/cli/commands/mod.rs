mod page;
mod inline;
mod sample;

pub use page::handle_page_command;
pub use inline::{handle_inline_command, InlinePage};
pub use sample::handle_sample_command;

use std::path::PathBuf;
use chrono::Local;

use crate::cli::types::Cli;
use crate::config::{self, Config};
use crate::structured_data::{JsonLdDocument, SiteContext};
use crate::utils::error::{BoxResult, JsonLdError};

/// Load the site configuration named by the global flags, without overrides
fn load_file_config(cli: &Cli) -> BoxResult<Config> {
    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    config::load_config(&source, cli.config.clone())
}

/// Apply `--site-url` and `--baseurl`
fn apply_overrides(cli: &Cli, config: Config) -> Config {
    config.with_overrides(cli.site_url.as_deref(), cli.baseurl.as_deref())
}

/// Load the site configuration named by the global flags
fn load_site_config(cli: &Cli) -> BoxResult<Config> {
    Ok(apply_overrides(cli, load_file_config(cli)?))
}

/// Turn a loaded configuration into a site context stamped with the current time
fn site_context(config: &Config) -> Result<SiteContext, JsonLdError> {
    config.to_site_context(Local::now().fixed_offset())
}

/// Serialize a document the way the user asked for
fn render(document: &JsonLdDocument, compact: bool) -> Result<String, JsonLdError> {
    if compact {
        document.to_json()
    } else {
        document.to_json_pretty()
    }
}
