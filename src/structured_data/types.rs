use std::fmt;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::utils::error::JsonLdError;

/// Value of the `@context` key on every document
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Language tag stamped on WebSite, BlogPosting and WebPage nodes
pub const LANGUAGE: &str = "en-US";

/// Site icon, also used as the logo and the default post image
pub const ICON_PATH: &str = "/apple-touch-icon-precomposed.png";

/// Pixel size of the site icon
pub const ICON_SIZE: u32 = 144;

/// Page layout as named in front matter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    Post,
    Page,
    #[default]
    Default,
    Other(String),
}

impl Layout {
    pub fn as_str(&self) -> &str {
        match self {
            Layout::Post => "post",
            Layout::Page => "page",
            Layout::Default => "default",
            Layout::Other(name) => name,
        }
    }

    /// Only the exact `post` layout produces a BlogPosting
    pub fn is_post(&self) -> bool {
        matches!(self, Layout::Post)
    }
}

impl From<&str> for Layout {
    fn from(name: &str) -> Self {
        match name {
            "post" => Layout::Post,
            "page" => Layout::Page,
            "default" => Layout::Default,
            other => Layout::Other(other.to_string()),
        }
    }
}

impl From<String> for Layout {
    fn from(name: String) -> Self {
        Layout::from(name.as_str())
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Site-wide values, built once per invocation
#[derive(Debug, Clone)]
pub struct SiteContext {
    /// Site origin, e.g. `https://example.com`
    pub url: String,
    /// Path prefix the site is served from, usually empty
    pub baseurl: String,
    pub title: String,
    pub description: String,
    /// Author name; required only when a post is rendered
    pub author: Option<String>,
    /// Wall-clock time of the invocation. Never written into the graph.
    #[allow(dead_code)]
    pub time: DateTime<FixedOffset>,
}

/// A single page or post to describe
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub layout: Layout,
    pub title: String,
    /// Site-relative URL, e.g. `/about/`
    pub url: String,
    pub date: Option<DateTime<FixedOffset>>,
    pub excerpt: Option<String>,
    /// Raw body text used for the word count
    pub content: Option<String>,
}

impl PageContext {
    pub fn new(layout: impl Into<Layout>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            title: title.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: DateTime<FixedOffset>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Top-level JSON-LD document
#[derive(Debug, Clone, Serialize)]
pub struct JsonLdDocument {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<JsonLdNode>,
}

impl JsonLdDocument {
    pub fn new(graph: Vec<JsonLdNode>) -> Self {
        Self {
            context: SCHEMA_CONTEXT.to_string(),
            graph,
        }
    }

    /// Serialize with two-space indentation
    pub fn to_json_pretty(&self) -> Result<String, JsonLdError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize on a single line
    pub fn to_json(&self) -> Result<String, JsonLdError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Top-level graph entry, discriminated by `@type`
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub enum JsonLdNode {
    WebSite(WebSite),
    Organization(Organization),
    BlogPosting(BlogPosting),
    WebPage(WebPage),
    BreadcrumbList(BreadcrumbList),
}

impl JsonLdNode {
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonLdNode::WebSite(_) => "WebSite",
            JsonLdNode::Organization(_) => "Organization",
            JsonLdNode::BlogPosting(_) => "BlogPosting",
            JsonLdNode::WebPage(_) => "WebPage",
            JsonLdNode::BreadcrumbList(_) => "BreadcrumbList",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    pub in_language: String,
    /// Emitted as the string `"true"`, not a JSON boolean
    pub is_family_friendly: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
    pub url: String,
    pub logo: ImageObject,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPosting {
    #[serde(rename = "@id")]
    pub id: String,
    pub main_entity_of_page: WebPageRef,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image: Vec<String>,
    pub date_published: String,
    pub date_modified: String,
    pub author: Person,
    pub publisher: OrganizationRef,
    pub word_count: usize,
    pub in_language: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub name: String,
    pub description: String,
    pub is_part_of: WebSiteRef,
    pub in_language: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@id")]
    pub id: String,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct ListItem {
    pub position: u32,
    pub name: String,
    pub item: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct ImageObject {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type")]
pub struct Person {
    pub name: String,
}

/// `{"@type": "WebPage", "@id": ...}` reference
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "WebPage")]
pub struct WebPageRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// `{"@type": "WebSite", "@id": ...}` reference
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "WebSite")]
pub struct WebSiteRef {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Publisher reference carrying the organization name alongside its id
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "@type", rename = "Organization")]
pub struct OrganizationRef {
    #[serde(rename = "@id")]
    pub id: String,
    pub name: String,
}
