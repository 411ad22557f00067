use std::fmt::Write;
use log::info;

use crate::cli::types::Cli;
use crate::config::{Author, Config};
use crate::page::parse_date;
use crate::structured_data::{self, PageContext, SiteContext};
use crate::utils::error::{BoxResult, JsonLdError};
use super::{apply_overrides, load_file_config, render, site_context};

const RULE: &str = "==================================================";

/// Print the sample post, static page and home page
pub fn handle_sample_command(cli: &Cli) -> BoxResult<()> {
    let config = apply_overrides(cli, choose_config(load_file_config(cli)?));
    let site = site_context(&config)?;
    print!("{}", render_samples(&site, cli.compact)?);
    Ok(())
}

/// The loaded config, or the built-in sample site when nothing was configured
fn choose_config(loaded: Config) -> Config {
    if is_empty(&loaded) {
        info!("No site configuration found, using the built-in sample site");
        sample_config()
    } else {
        loaded
    }
}

fn is_empty(config: &Config) -> bool {
    config.url.is_none() && config.title.is_none() && config.description.is_none()
}

fn sample_config() -> Config {
    Config {
        url: Some("https://example.com".to_string()),
        baseurl: Some(String::new()),
        title: Some("Example Blog".to_string()),
        description: Some("Notes on building developer tools".to_string()),
        author: Some(Author {
            name: Some("Example Author".to_string()),
            email: None,
        }),
    }
}

/// The three fixture pages: a blog post, a static page and the home page
fn sample_pages() -> Result<Vec<(&'static str, PageContext)>, JsonLdError> {
    let post = PageContext::new(
        "post",
        "Conductor - Comprehensive Analysis & Review",
        "/ai-conductor-analysis/",
    )
    .with_date(parse_date("2025-11-06")?)
    .with_excerpt("Analysis of Conductor orchestration platform for multi-agent AI development")
    .with_content("This is a test blog post content with multiple words to test word count functionality.");

    Ok(vec![
        ("BLOG POST", post),
        ("STATIC PAGE", PageContext::new("page", "About", "/about/")),
        ("HOMEPAGE", PageContext::new("default", "Home", "/")),
    ])
}

fn render_samples(site: &SiteContext, compact: bool) -> Result<String, JsonLdError> {
    let mut out = String::new();
    let fmt_err = |e: std::fmt::Error| JsonLdError::Generic(e.to_string());

    writeln!(out, "JSON-LD structured data samples").map_err(fmt_err)?;
    writeln!(out, "{}", RULE).map_err(fmt_err)?;

    for (index, (label, page)) in sample_pages()?.iter().enumerate() {
        let document = structured_data::build(page, site)?;
        writeln!(out).map_err(fmt_err)?;
        writeln!(out, "{}. {} STRUCTURED DATA:", index + 1, label).map_err(fmt_err)?;
        writeln!(out, "Page: {}", page.title).map_err(fmt_err)?;
        writeln!(out, "{}", render(&document, compact)?).map_err(fmt_err)?;
    }

    writeln!(out).map_err(fmt_err)?;
    writeln!(out, "{}", RULE).map_err(fmt_err)?;
    writeln!(out, "Schema.org types included:").map_err(fmt_err)?;
    for kind in ["WebSite (site-wide)", "Organization (site-wide)", "BlogPosting (posts)",
                 "WebPage (static pages and homepage)", "BreadcrumbList (navigation)"] {
        writeln!(out, "- {}", kind).map_err(fmt_err)?;
    }

    Ok(out)
}
