pub mod types;
pub mod filters;

use log::debug;

use crate::utils::error::JsonLdError;
use filters::{absolute_url, date_to_xmlschema, word_count};

pub use types::*;

/// Build the JSON-LD graph for `page`.
///
/// The graph always holds four nodes: WebSite, Organization, then a
/// BlogPosting (layout `post`) or WebPage (any other layout), then a
/// BreadcrumbList.
pub fn build(page: &PageContext, site: &SiteContext) -> Result<JsonLdDocument, JsonLdError> {
    debug!("Building structured data for {} (layout: {})", page.url, page.layout);

    let mut graph = Vec::with_capacity(4);
    graph.push(JsonLdNode::WebSite(website(site)));
    graph.push(JsonLdNode::Organization(organization(site)));

    if page.layout.is_post() {
        graph.push(JsonLdNode::BlogPosting(blog_posting(page, site)?));
        graph.push(JsonLdNode::BreadcrumbList(post_breadcrumbs(page, site)));
    } else {
        graph.push(JsonLdNode::WebPage(web_page(page, site)));
        graph.push(JsonLdNode::BreadcrumbList(page_breadcrumbs(page, site)));
    }

    debug!("Graph nodes: {:?}", graph.iter().map(JsonLdNode::type_name).collect::<Vec<_>>());
    Ok(JsonLdDocument::new(graph))
}

fn website_id(site: &SiteContext) -> String {
    format!("{}#website", absolute_url(site, "/"))
}

fn organization_id(site: &SiteContext) -> String {
    format!("{}#organization", absolute_url(site, "/"))
}

fn website(site: &SiteContext) -> WebSite {
    WebSite {
        id: website_id(site),
        url: absolute_url(site, "/"),
        name: site.title.clone(),
        description: site.description.clone(),
        in_language: LANGUAGE.to_string(),
        is_family_friendly: "true".to_string(),
    }
}

fn organization(site: &SiteContext) -> Organization {
    Organization {
        id: organization_id(site),
        name: site.title.clone(),
        url: absolute_url(site, "/"),
        logo: ImageObject {
            url: absolute_url(site, ICON_PATH),
            width: ICON_SIZE,
            height: ICON_SIZE,
        },
        description: site.description.clone(),
    }
}

fn blog_posting(page: &PageContext, site: &SiteContext) -> Result<BlogPosting, JsonLdError> {
    let date = page
        .date
        .as_ref()
        .ok_or_else(|| JsonLdError::missing("page.date", format!("post {}", page.url)))?;
    let author = site
        .author
        .as_ref()
        .ok_or_else(|| JsonLdError::missing("site.author.name", format!("post {}", page.url)))?;

    let page_url = absolute_url(site, &page.url);
    let published = date_to_xmlschema(date);

    Ok(BlogPosting {
        id: format!("{}#blogposting", page_url),
        main_entity_of_page: WebPageRef { id: page_url },
        headline: page.title.clone(),
        description: page.excerpt.clone(),
        image: vec![absolute_url(site, ICON_PATH)],
        date_modified: published.clone(),
        date_published: published,
        author: Person { name: author.clone() },
        publisher: OrganizationRef {
            id: organization_id(site),
            name: site.title.clone(),
        },
        word_count: word_count(page.content.as_deref()),
        in_language: LANGUAGE.to_string(),
    })
}

fn web_page(page: &PageContext, site: &SiteContext) -> WebPage {
    let page_url = absolute_url(site, &page.url);
    let description = if page.title == "Home" {
        site.description.clone()
    } else {
        format!("{} - {}", page.title, site.title)
    };

    WebPage {
        id: format!("{}#webpage", page_url),
        url: page_url,
        name: page.title.clone(),
        description,
        is_part_of: WebSiteRef { id: website_id(site) },
        in_language: LANGUAGE.to_string(),
    }
}

fn list_item(position: u32, name: &str, item: String) -> ListItem {
    ListItem {
        position,
        name: name.to_string(),
        item,
    }
}

/// Home → Blog → post. "Blog" points at the site root; there is no blog index URL.
fn post_breadcrumbs(page: &PageContext, site: &SiteContext) -> BreadcrumbList {
    BreadcrumbList {
        id: format!("{}#breadcrumb", absolute_url(site, &page.url)),
        item_list_element: vec![
            list_item(1, "Home", absolute_url(site, "/")),
            list_item(2, "Blog", absolute_url(site, "/")),
            list_item(3, &page.title, absolute_url(site, &page.url)),
        ],
    }
}

fn page_breadcrumbs(page: &PageContext, site: &SiteContext) -> BreadcrumbList {
    BreadcrumbList {
        id: format!("{}#breadcrumb", absolute_url(site, &page.url)),
        item_list_element: vec![
            list_item(1, "Home", absolute_url(site, "/")),
            list_item(2, &page.title, absolute_url(site, &page.url)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use serde_json::{json, Value};

    fn site() -> SiteContext {
        SiteContext {
            url: "https://ex.com".to_string(),
            baseurl: String::new(),
            title: "T".to_string(),
            description: "D".to_string(),
            author: Some("A".to_string()),
            time: FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2025, 11, 7, 12, 0, 0).unwrap(),
        }
    }

    fn post() -> PageContext {
        let date = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2025, 11, 6, 0, 0, 0).unwrap();
        PageContext::new("post", "Conductor - Comprehensive Analysis & Review", "/ai-conductor-analysis/")
            .with_date(date)
            .with_excerpt("Analysis of Conductor orchestration platform")
            .with_content("a b c d")
    }

    fn to_value(doc: &JsonLdDocument) -> Value {
        serde_json::to_value(doc).unwrap()
    }

    fn types(doc: &JsonLdDocument) -> Vec<&'static str> {
        doc.graph.iter().map(JsonLdNode::type_name).collect()
    }

    #[test]
    fn test_post_graph_order() {
        let doc = build(&post(), &site()).unwrap();
        assert_eq!(types(&doc), vec!["WebSite", "Organization", "BlogPosting", "BreadcrumbList"]);

        let value = to_value(&doc);
        assert_eq!(value["@context"], "https://schema.org");
        let items = value["@graph"][3]["itemListElement"].as_array().unwrap();
        let positions: Vec<u64> = items.iter().map(|i| i["position"].as_u64().unwrap()).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_type_name_matches_serialized_type() {
        for page in [post(), PageContext::new("page", "About", "/about/")] {
            let doc = build(&page, &site()).unwrap();
            for node in &doc.graph {
                assert_eq!(serde_json::to_value(node).unwrap()["@type"], node.type_name());
            }
        }
    }

    #[test]
    fn test_post_fields() {
        let value = to_value(&build(&post(), &site()).unwrap());
        let posting = &value["@graph"][2];

        assert_eq!(posting["@type"], "BlogPosting");
        assert_eq!(posting["@id"], "https://ex.com/ai-conductor-analysis/#blogposting");
        assert_eq!(
            posting["mainEntityOfPage"],
            json!({"@type": "WebPage", "@id": "https://ex.com/ai-conductor-analysis/"})
        );
        assert_eq!(posting["headline"], "Conductor - Comprehensive Analysis & Review");
        assert_eq!(posting["description"], "Analysis of Conductor orchestration platform");
        assert_eq!(posting["image"], json!(["https://ex.com/apple-touch-icon-precomposed.png"]));
        assert_eq!(posting["datePublished"], "2025-11-06T00:00:00+0000");
        assert_eq!(posting["dateModified"], "2025-11-06T00:00:00+0000");
        assert_eq!(posting["author"], json!({"@type": "Person", "name": "A"}));
        assert_eq!(
            posting["publisher"],
            json!({"@type": "Organization", "@id": "https://ex.com/#organization", "name": "T"})
        );
        assert_eq!(posting["wordCount"], 4);
        assert_eq!(posting["inLanguage"], "en-US");
    }

    #[test]
    fn test_post_breadcrumbs_point_blog_at_root() {
        let value = to_value(&build(&post(), &site()).unwrap());
        let crumbs = &value["@graph"][3];

        assert_eq!(crumbs["@id"], "https://ex.com/ai-conductor-analysis/#breadcrumb");
        assert_eq!(
            crumbs["itemListElement"],
            json!([
                {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://ex.com/"},
                {"@type": "ListItem", "position": 2, "name": "Blog", "item": "https://ex.com/"},
                {"@type": "ListItem", "position": 3, "name": "Conductor - Comprehensive Analysis & Review",
                 "item": "https://ex.com/ai-conductor-analysis/"}
            ])
        );
    }

    #[test]
    fn test_site_nodes() {
        let value = to_value(&build(&PageContext::new("page", "About", "/about/"), &site()).unwrap());

        assert_eq!(
            value["@graph"][0],
            json!({
                "@type": "WebSite",
                "@id": "https://ex.com/#website",
                "url": "https://ex.com/",
                "name": "T",
                "description": "D",
                "inLanguage": "en-US",
                "isFamilyFriendly": "true"
            })
        );
        assert_eq!(
            value["@graph"][1],
            json!({
                "@type": "Organization",
                "@id": "https://ex.com/#organization",
                "name": "T",
                "url": "https://ex.com/",
                "logo": {
                    "@type": "ImageObject",
                    "url": "https://ex.com/apple-touch-icon-precomposed.png",
                    "width": 144,
                    "height": 144
                },
                "description": "D"
            })
        );
    }

    #[test]
    fn test_about_page() {
        let doc = build(&PageContext::new("page", "About", "/about/"), &site()).unwrap();
        assert_eq!(types(&doc), vec!["WebSite", "Organization", "WebPage", "BreadcrumbList"]);

        let value = to_value(&doc);
        let page = &value["@graph"][2];
        assert_eq!(page["@id"], "https://ex.com/about/#webpage");
        assert_eq!(page["url"], "https://ex.com/about/");
        assert_eq!(page["name"], "About");
        assert_eq!(page["description"], "About - T");
        assert_eq!(page["isPartOf"], json!({"@type": "WebSite", "@id": "https://ex.com/#website"}));
        assert_eq!(page["inLanguage"], "en-US");

        assert_eq!(
            value["@graph"][3]["itemListElement"],
            json!([
                {"@type": "ListItem", "position": 1, "name": "Home", "item": "https://ex.com/"},
                {"@type": "ListItem", "position": 2, "name": "About", "item": "https://ex.com/about/"}
            ])
        );
    }

    #[test]
    fn test_home_page_uses_site_description() {
        let value = to_value(&build(&PageContext::new("default", "Home", "/"), &site()).unwrap());
        assert_eq!(value["@graph"][2]["description"], "D");
        assert_eq!(value["@graph"][2]["@id"], "https://ex.com/#webpage");
    }

    #[test]
    fn test_unknown_layout_falls_back_to_web_page() {
        let doc = build(&PageContext::new("landing", "Pricing", "/pricing/"), &site()).unwrap();
        assert_eq!(types(&doc)[2], "WebPage");
        assert_eq!(to_value(&doc)["@graph"][3]["itemListElement"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_non_post_ignores_date_and_author() {
        let mut site = site();
        site.author = None;
        assert!(build(&PageContext::new("page", "About", "/about/"), &site).is_ok());
    }

    #[test]
    fn test_post_without_date_is_missing_field() {
        let mut page = post();
        page.date = None;
        match build(&page, &site()) {
            Err(JsonLdError::MissingField { field, .. }) => assert_eq!(field, "page.date"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_post_without_author_is_missing_field() {
        let mut site = site();
        site.author = None;
        match build(&post(), &site) {
            Err(JsonLdError::MissingField { field, .. }) => assert_eq!(field, "site.author.name"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_post_without_content_has_zero_words() {
        let mut page = post();
        page.content = None;
        let value = to_value(&build(&page, &site()).unwrap());
        assert_eq!(value["@graph"][2]["wordCount"], 0);
    }

    #[test]
    fn test_post_without_excerpt_omits_description() {
        let mut page = post();
        page.excerpt = None;
        let value = to_value(&build(&page, &site()).unwrap());
        assert!(value["@graph"][2].get("description").is_none());
    }

    #[test]
    fn test_baseurl_is_included() {
        let mut site = site();
        site.baseurl = "/blog".to_string();
        let value = to_value(&build(&PageContext::new("page", "About", "/about/"), &site).unwrap());
        assert_eq!(value["@graph"][0]["@id"], "https://ex.com/blog/#website");
        assert_eq!(value["@graph"][2]["url"], "https://ex.com/blog/about/");
    }

    #[test]
    fn test_build_is_idempotent() {
        let first = build(&post(), &site()).unwrap().to_json_pretty().unwrap();
        let second = build(&post(), &site()).unwrap().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_site_time_not_in_output() {
        let mut later = site();
        later.time = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let a = build(&post(), &site()).unwrap().to_json().unwrap();
        let b = build(&post(), &later).unwrap().to_json().unwrap();
        assert_eq!(a, b);
    }
}
