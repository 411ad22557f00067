use crate::cli::types::Cli;
use crate::page::parse_date;
use crate::structured_data::{self, Layout, PageContext};
use crate::utils::error::{BoxResult, JsonLdError};
use super::{load_site_config, render, site_context};

/// Page fields given on the command line
pub struct InlinePage<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub layout: &'a str,
    pub date: Option<&'a str>,
    pub excerpt: Option<&'a str>,
    pub content: Option<&'a str>,
}

pub fn handle_inline_command(cli: &Cli, inline: InlinePage<'_>) -> BoxResult<()> {
    let config = load_site_config(cli)?;
    let site = site_context(&config)?;

    let page = page_context(&inline)?;
    let document = structured_data::build(&page, &site)?;
    println!("{}", render(&document, cli.compact)?);

    Ok(())
}

fn page_context(inline: &InlinePage<'_>) -> Result<PageContext, JsonLdError> {
    Ok(PageContext {
        layout: Layout::from(inline.layout),
        title: inline.title.to_string(),
        url: inline.url.to_string(),
        date: inline.date.map(parse_date).transpose()?,
        excerpt: inline.excerpt.map(str::to_string),
        content: inline.content.map(str::to_string),
    })
}
