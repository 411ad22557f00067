use chrono::{DateTime, FixedOffset};
use serde::{Serialize, Deserialize};

use crate::config::deserializers::deserialize_author;
use crate::structured_data::SiteContext;
use crate::utils::error::JsonLdError;

/// Site author, written in config either as a bare name or as a mapping
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}

/// Site configuration structure
///
/// Only the keys the structured data needs are read; everything else in
/// `_config.yml` is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site origin, e.g. `https://example.com`
    #[serde(default)]
    pub url: Option<String>,

    /// Base path the site is served from
    #[serde(default, alias = "base_url")]
    pub baseurl: Option<String>,

    /// Site title
    #[serde(default)]
    pub title: Option<String>,

    /// Site description
    #[serde(default)]
    pub description: Option<String>,

    /// Site author
    #[serde(default, deserialize_with = "deserialize_author")]
    pub author: Option<Author>,
}

impl Config {
    /// Apply command-line overrides for url and baseurl
    pub fn with_overrides(mut self, url: Option<&str>, baseurl: Option<&str>) -> Self {
        if let Some(url) = url {
            self.url = Some(url.to_string());
        }
        if let Some(baseurl) = baseurl {
            self.baseurl = Some(baseurl.to_string());
        }
        self
    }

    /// Author name, if one was configured
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.name.as_deref())
    }

    /// Convert into the site context consumed by the builder
    pub fn to_site_context(&self, time: DateTime<FixedOffset>) -> Result<SiteContext, JsonLdError> {
        let url = self.url.clone()
            .ok_or_else(|| JsonLdError::missing("url", "site configuration"))?;
        let title = self.title.clone()
            .ok_or_else(|| JsonLdError::missing("title", "site configuration"))?;
        let description = self.description.clone()
            .ok_or_else(|| JsonLdError::missing("description", "site configuration"))?;

        Ok(SiteContext {
            url,
            baseurl: self.baseurl.clone().unwrap_or_default(),
            title,
            description,
            author: self.author_name().map(str::to_string),
            time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn config() -> Config {
        Config {
            url: Some("https://ex.com".to_string()),
            baseurl: None,
            title: Some("T".to_string()),
            description: Some("D".to_string()),
            author: Some(Author { name: Some("A".to_string()), email: None }),
        }
    }

    #[test]
    fn test_to_site_context() {
        let site = config().to_site_context(Utc::now().fixed_offset()).unwrap();
        assert_eq!(site.url, "https://ex.com");
        assert_eq!(site.baseurl, "");
        assert_eq!(site.title, "T");
        assert_eq!(site.description, "D");
        assert_eq!(site.author.as_deref(), Some("A"));
    }

    #[test]
    fn test_missing_title_is_reported() {
        let mut config = config();
        config.title = None;
        match config.to_site_context(Utc::now().fixed_offset()) {
            Err(JsonLdError::MissingField { field, .. }) => assert_eq!(field, "title"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_author_without_name_is_none() {
        let mut config = config();
        config.author = Some(Author { name: None, email: Some("a@ex.com".to_string()) });
        let site = config.to_site_context(Utc::now().fixed_offset()).unwrap();
        assert_eq!(site.author, None);
    }

    #[test]
    fn test_overrides() {
        let config = config().with_overrides(Some("http://localhost:4000"), Some("/docs"));
        assert_eq!(config.url.as_deref(), Some("http://localhost:4000"));
        assert_eq!(config.baseurl.as_deref(), Some("/docs"));

        let untouched = self::config().with_overrides(None, None);
        assert_eq!(untouched.url.as_deref(), Some("https://ex.com"));
    }
}
