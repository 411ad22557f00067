use serde::Deserialize;

use crate::page::deserializers::deserialize_scalar_string;
use crate::utils::error::JsonLdError;

/// Front matter keys that feed the structured data
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub layout: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub permalink: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub excerpt: Option<String>,

    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub excerpt_separator: Option<String>,
}

/// Check if content has front matter
pub fn has_front_matter(content: &str) -> bool {
    content.starts_with("---\n")
}

/// Split a document into its front matter and body.
///
/// Expects `\n` line endings. A document without a leading `---` line has
/// empty front matter and the whole text as body.
pub fn extract_front_matter(content: &str) -> Result<(FrontMatter, String), JsonLdError> {
    if !has_front_matter(content) {
        return Ok((FrontMatter::default(), content.to_string()));
    }

    let rest = &content[4..];
    let (yaml_end, body_start) = find_closing_delimiter(rest).ok_or_else(|| {
        JsonLdError::FrontMatter("Malformed front matter: missing closing delimiter".to_string())
    })?;
    let yaml = &rest[..yaml_end];

    let front_matter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml::from_str::<FrontMatter>(yaml)
            .map_err(|e| JsonLdError::FrontMatter(format!("Error parsing front matter: {}", e)))?
    };

    Ok((front_matter, rest[body_start..].trim_start().to_string()))
}

/// Byte range of the first line that is exactly `---`, trailing whitespace allowed
fn find_closing_delimiter(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((offset, offset + line.len()));
        }
        offset += line.len();
    }
    None
}
