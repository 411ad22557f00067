use std::fs;
use std::path::Path;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::front_matter::{extract_front_matter, FrontMatter};
use crate::structured_data::{Layout, PageContext};
use crate::utils::error::{BoxResult, JsonLdError};

static POST_FILENAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)$").expect("valid post filename regex")
});

static MARKDOWN_H1: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#\s+(.+)$").expect("valid heading regex")
});

static HTML_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("valid tag regex")
});

/// Read a page or post file and turn it into a `PageContext`
pub fn load_page(path: &Path, layout_override: Option<&str>) -> BoxResult<PageContext> {
    debug!("Loading page: {}", path.display());

    let source = fs::read_to_string(path)
        .map_err(|e| JsonLdError::Generic(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(page_from_source(path, &source, layout_override)?)
}

/// Build a `PageContext` from file text; `path` supplies slug, date and layout hints
pub fn page_from_source(
    path: &Path,
    source: &str,
    layout_override: Option<&str>
) -> Result<PageContext, JsonLdError> {
    let normalized = source.replace("\r\n", "\n");
    let (front_matter, content) = extract_front_matter(&normalized)?;

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let post_name = parse_post_filename(&stem);

    let layout = match (layout_override, &front_matter.layout) {
        (Some(layout), _) => Layout::from(layout),
        (None, Some(layout)) => Layout::from(layout.as_str()),
        (None, None) if post_name.is_some() || is_in_posts_dir(path) => Layout::Post,
        (None, None) => Layout::Page,
    };

    let date = match &front_matter.date {
        Some(raw) => Some(parse_date(raw)?),
        None => match &post_name {
            Some((date, _)) => Some(local_midnight(*date)?),
            None => None,
        },
    };

    let slug = post_name.as_ref().map_or(stem.as_str(), |(_, slug)| slug.as_str());
    let url = page_url(&front_matter, slug);

    let title = front_matter
        .title
        .clone()
        .or_else(|| extract_title_from_content(&content))
        .unwrap_or_else(|| slug.to_string());

    let excerpt = match &front_matter.excerpt {
        Some(excerpt) => Some(excerpt.clone()),
        None if layout.is_post() => extract_excerpt(&content, excerpt_separator(&front_matter)),
        None => None,
    };

    debug!("Loaded {} as {} at {}", path.display(), layout, url);

    Ok(PageContext {
        layout,
        title,
        url,
        date,
        excerpt,
        content: Some(content),
    })
}

/// Parse a front matter date.
///
/// Values without an offset are read in the local timezone.
pub fn parse_date(raw: &str) -> Result<DateTime<FixedOffset>, JsonLdError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt);
    }
    for format in ["%Y-%m-%d %H:%M:%S %z", "%Y-%m-%d %H:%M %z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_datetime(naive, raw);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return local_midnight(date);
    }

    Err(JsonLdError::InvalidDate(format!("unrecognised date '{}'", raw)))
}

fn local_midnight(date: NaiveDate) -> Result<DateTime<FixedOffset>, JsonLdError> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| JsonLdError::InvalidDate(date.to_string()))?;
    local_datetime(midnight, &date.to_string())
}

fn local_datetime(naive: NaiveDateTime, raw: &str) -> Result<DateTime<FixedOffset>, JsonLdError> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| JsonLdError::InvalidDate(format!("'{}' does not exist in the local timezone", raw)))
}

/// Split a `YYYY-MM-DD-slug` file stem into its date and slug
fn parse_post_filename(stem: &str) -> Option<(NaiveDate, String)> {
    let caps = POST_FILENAME.captures(stem)?;
    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let month: u32 = caps.get(2)?.as_str().parse().ok()?;
    let day: u32 = caps.get(3)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some((date, caps.get(4)?.as_str().to_string()))
}

fn is_in_posts_dir(path: &Path) -> bool {
    path.ancestors()
        .skip(1)
        .any(|dir| dir.file_name().is_some_and(|name| name == "_posts"))
}

/// Permalink wins over an explicit url; otherwise a pretty `/slug/` URL
fn page_url(front_matter: &FrontMatter, slug: &str) -> String {
    if let Some(permalink) = front_matter.permalink.as_ref().or(front_matter.url.as_ref()) {
        return permalink.clone();
    }

    match slug {
        "" | "index" => "/".to_string(),
        slug => format!("/{}/", slug),
    }
}

fn excerpt_separator(front_matter: &FrontMatter) -> &str {
    front_matter.excerpt_separator.as_deref().unwrap_or("\n\n")
}

/// Extract title from first heading in content
fn extract_title_from_content(content: &str) -> Option<String> {
    content
        .lines()
        .find_map(|line| MARKDOWN_H1.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|title| title.as_str().trim().to_string())
}

/// Text before the excerpt separator, with HTML tags removed
fn extract_excerpt(content: &str, separator: &str) -> Option<String> {
    let head = match content.find(separator) {
        Some(pos) => &content[..pos],
        None => content,
    };

    let clean = HTML_TAG.replace_all(head.trim(), "");
    let clean = clean.trim();
    if clean.is_empty() {
        None
    } else {
        Some(clean.to_string())
    }
}
