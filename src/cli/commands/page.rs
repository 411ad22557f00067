use std::path::{Path, PathBuf};
use log::{error, info};

use crate::cli::types::Cli;
use crate::page::load_page;
use crate::structured_data::{self, SiteContext};
use crate::utils::error::{BoxResult, JsonLdError};
use super::{load_site_config, render, site_context};

/// Print structured data for each file; keeps going past failures
pub fn handle_page_command(cli: &Cli, files: &[PathBuf], layout: Option<&str>) -> BoxResult<()> {
    let config = load_site_config(cli)?;
    let site = site_context(&config)?;

    let mut failed = 0;
    for path in files {
        match render_file(&site, path, layout, cli.compact) {
            Ok(json) => {
                info!("Generated structured data for {}", path.display());
                println!("{}", json);
            }
            Err(e) => {
                error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(JsonLdError::Generic(format!(
            "{} of {} pages failed", failed, files.len()
        )).into());
    }

    Ok(())
}

fn render_file(
    site: &SiteContext,
    path: &Path,
    layout: Option<&str>,
    compact: bool
) -> BoxResult<String> {
    let page = load_page(path, layout)?;
    let document = structured_data::build(&page, site)?;
    Ok(render(&document, compact)?)
}
