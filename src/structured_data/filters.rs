//! Plain-function counterparts of the Jekyll filters used by the
//! structured data include: `absolute_url`, `date_to_xmlschema`, and the
//! `number_of_words` count.

use std::fmt::Display;
use chrono::{DateTime, TimeZone};

use super::types::SiteContext;

/// Prepend the site url and baseurl to `path`.
///
/// This is plain concatenation. Duplicate slashes are kept as-is, so a
/// baseurl ending in `/` followed by a path starting with `/` yields `//`.
pub fn absolute_url(site: &SiteContext, path: &str) -> String {
    let mut url = String::with_capacity(site.url.len() + site.baseurl.len() + path.len());
    url.push_str(&site.url);
    url.push_str(&site.baseurl);
    url.push_str(path);
    url
}

/// Format a timestamp as `%Y-%m-%dT%H:%M:%S%z`, e.g. `2025-11-06T09:30:00+0100`
pub fn date_to_xmlschema<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}

/// Count tokens separated by ASCII whitespace, vertical tab included.
/// Non-ASCII spaces such as U+00A0 do not split words. Absent content counts
/// as zero.
pub fn word_count(content: Option<&str>) -> usize {
    content.map_or(0, |text| {
        text.split(is_word_separator)
            .filter(|token| !token.is_empty())
            .count()
    })
}

fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
